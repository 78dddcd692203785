use eframe::egui;

/// Small square button showing a single glyph, greyed out when disabled.
pub struct IconButton {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub enabled: bool,
    pub selected: bool,
}

impl IconButton {
    pub fn new(icon: &'static str, tooltip: &'static str) -> Self {
        Self {
            icon,
            tooltip,
            enabled: true,
            selected: false,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Returns true when clicked while enabled.
    pub fn show(&self, ui: &mut egui::Ui) -> bool {
        let button_size = egui::vec2(24.0, 24.0);
        let sense = if self.enabled { egui::Sense::click() } else { egui::Sense::hover() };
        let (rect, response) = ui.allocate_exact_size(button_size, sense);

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(202, 138, 4) // Amber while toggled on
            } else if self.enabled && response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            let text_color = if self.enabled {
                egui::Color32::WHITE
            } else {
                egui::Color32::from_gray(110)
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.icon,
                egui::FontId::proportional(15.0),
                text_color,
            );
        }

        let response = response.on_hover_text(self.tooltip);
        self.enabled && response.clicked()
    }
}
