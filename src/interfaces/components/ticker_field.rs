//! Ticker input with an inline suggestion dropdown.
//!
//! Typing filters the hardcoded ticker list by substring; focusing
//! the field reopens the list, and picking a suggestion closes it.

use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::form::PredictionForm;
use eframe::egui;

pub fn render_ticker_field(ui: &mut egui::Ui, form: &mut PredictionForm) {
    ui.label(
        egui::RichText::new("Stock Ticker Symbol")
            .size(13.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(4.0);

    let response = ui.add(
        egui::TextEdit::singleline(&mut form.ticker)
            .hint_text("e.g. AAPL")
            .desired_width(f32::INFINITY)
            .font(egui::FontId::proportional(15.0)),
    );

    if response.changed() {
        form.on_ticker_edited();
    }
    if response.gained_focus() {
        form.show_dropdown = true;
    }

    if form.show_dropdown {
        render_suggestions(ui, form);
    }
}

fn render_suggestions(ui: &mut egui::Ui, form: &mut PredictionForm) {
    let options = form.filtered_options();

    egui::Frame::NONE
        .fill(DesignSystem::BG_INPUT)
        .corner_radius(DesignSystem::ROUNDING_SMALL)
        .stroke(egui::Stroke::new(1.0, DesignSystem::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            if options.is_empty() {
                ui.label(
                    egui::RichText::new("No matching tickers")
                        .size(12.0)
                        .color(DesignSystem::TEXT_MUTED)
                        .italics(),
                );
                return;
            }

            for option in options {
                let btn = egui::Button::new(
                    egui::RichText::new(option)
                        .size(13.0)
                        .color(DesignSystem::TEXT_PRIMARY),
                )
                .fill(egui::Color32::TRANSPARENT)
                .min_size(egui::vec2(ui.available_width(), 24.0));

                if ui.add(btn).clicked() {
                    form.select_ticker(option);
                }
            }
        });
}
