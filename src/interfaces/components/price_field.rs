use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A labeled price input. The text is free-form here; clamping to a
/// non-negative number happens when the form is submitted.
pub fn render_price_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(13.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text("0.00")
                .desired_width(ui.available_width())
                .font(egui::FontId::proportional(15.0)),
        );
    });
}
