use crate::application::predictor::PredictorApp;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::price_field::render_price_field;
use crate::interfaces::components::ticker_field::render_ticker_field;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::form::PredictionForm;
use crate::interfaces::view_models::prediction_view_model::PredictionViewModel;
use eframe::egui;
use std::time::Duration;

impl eframe::App for PredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- 1. Drain completed predictions before rendering ---
        self.process_events();

        // --- 2. Single-screen layout ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("predictor_screen")
                    .show(ui, |ui| {
                        render_header(ui);
                        ui.add_space(DesignSystem::SPACING_LARGE);

                        let submit_clicked = render_form_card(ui, &mut self.form, self.loading);
                        if submit_clicked {
                            self.submit();
                        }

                        if let Some(view_model) = self
                            .last_response
                            .as_ref()
                            .and_then(PredictionViewModel::from_response)
                        {
                            ui.add_space(DesignSystem::SPACING_LARGE);
                            render_result_card(ui, &view_model);
                        }
                    });
            });

        // Keep polling while a request is in flight
        if self.loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

fn render_header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("📈").size(40.0));
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(
            egui::RichText::new("Stock Price Predictor")
                .size(26.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            egui::RichText::new(
                "Leverage machine learning to predict stock closing prices with precision. \
                 Enter your stock details below to get started.",
            )
            .size(13.0)
            .color(DesignSystem::TEXT_SECONDARY),
        );
    });
}

fn render_form_card(ui: &mut egui::Ui, form: &mut PredictionForm, loading: bool) -> bool {
    let mut submit_clicked = false;

    Card::new().show(ui, |ui| {
        render_ticker_field(ui, form);
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.columns(3, |columns| {
            render_price_field(&mut columns[0], "Open Price", &mut form.open_price);
            render_price_field(&mut columns[1], "High Price", &mut form.high_price);
            render_price_field(&mut columns[2], "Low Price", &mut form.low_price);
        });

        ui.add_space(DesignSystem::SPACING_LARGE);

        let label = if loading {
            "Calculating..."
        } else {
            "Predict Price →"
        };
        let button = egui::Button::new(
            egui::RichText::new(label)
                .size(15.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        )
        .fill(DesignSystem::ACCENT_PRIMARY)
        .corner_radius(DesignSystem::ROUNDING_MEDIUM)
        .min_size(egui::vec2(ui.available_width(), 40.0));

        if ui.add_enabled(!loading, button).clicked() {
            submit_clicked = true;
        }

        if loading {
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(18.0).color(DesignSystem::ACCENT_SECONDARY));
            });
        }
    });

    submit_clicked
}

fn render_result_card(ui: &mut egui::Ui, view_model: &PredictionViewModel) {
    Card::new()
        .title("Predicted Closing Price")
        .accent(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&view_model.display_price)
                        .size(32.0)
                        .strong()
                        .color(DesignSystem::SUCCESS),
                );
                ui.label(
                    egui::RichText::new("USD")
                        .size(14.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new(
                    "This prediction is based on the provided open, high, and low prices.",
                )
                .size(12.0)
                .color(DesignSystem::TEXT_MUTED),
            );
        });
}
