use eframe::egui;

/// Dark Mode Design System
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    // Backgrounds
    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(17, 24, 39); // #111827
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(17, 24, 39); // #111827
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(31, 41, 55); // #1F2937
    pub const BG_CARD_HOVER: egui::Color32 = egui::Color32::from_rgb(42, 52, 68);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(55, 65, 81); // #374151

    // Accents
    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(5, 150, 105); // #059669 (Emerald)
    pub const ACCENT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(52, 211, 153); // Lighter Emerald

    // Status
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(52, 211, 153); // #34D399
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(239, 68, 68); // #EF4444

    // Text
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);

    // Borders
    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
    pub const BORDER_FOCUS: egui::Color32 = egui::Color32::from_rgb(16, 185, 129);

    // --- Metrics ---

    pub const ROUNDING_SMALL: f32 = 4.0;
    pub const ROUNDING_MEDIUM: f32 = 8.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    // --- Styles ---

    /// Returns the standard visual style for the application
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        // TextEdit backgrounds
        visuals.extreme_bg_color = Self::BG_INPUT;

        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);

        visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_fill = Self::BG_INPUT;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_INPUT;
        visuals.widgets.inactive.corner_radius =
            egui::CornerRadius::same(Self::ROUNDING_SMALL as u8);

        visuals.widgets.hovered.bg_fill = Self::BG_CARD_HOVER;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_FOCUS);
        visuals.widgets.active.bg_fill = Self::ACCENT_PRIMARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::BORDER_FOCUS);

        visuals
    }

    /// Standard Card Styling
    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING_MEDIUM)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Application Main Layout Frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }
}
