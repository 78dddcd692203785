use serde::{Deserialize, Serialize};

use crate::line::ColorHue;

/// Display configuration of the canvas, shared by every image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    pub grid_bg: [u8; 3],
    pub grid_fg: [u8; 3],
    /// Pixels between grid intersections.
    pub grid_size: u32,
    /// Radius in pixels of the circle under the pointer.
    pub hover_circle_size: f32,
    pub hover_circle_color: ColorHue,
    /// Radius in pixels of the pending start point and endpoint highlight.
    pub selected_circle_size: f32,
    pub selected_circle_color: ColorHue,
}

impl CanvasOptions {
    pub const MIN_GRID_SIZE: u32 = 4;
    pub const MAX_GRID_SIZE: u32 = 71;

    /// Pull loaded values back into the ranges `merge` enforces.
    pub fn clamp_to_limits(&mut self) {
        self.grid_size = self.grid_size.clamp(Self::MIN_GRID_SIZE, Self::MAX_GRID_SIZE);
        self.hover_circle_size = self.hover_circle_size.max(0.0);
        self.selected_circle_size = self.selected_circle_size.max(0.0);
    }

    pub fn merge(&mut self, patch: CanvasOptionsPatch) {
        if let Some(grid_bg) = patch.grid_bg {
            self.grid_bg = grid_bg;
        }
        if let Some(grid_fg) = patch.grid_fg {
            self.grid_fg = grid_fg;
        }
        if let Some(grid_size) = patch.grid_size {
            self.grid_size = grid_size.clamp(Self::MIN_GRID_SIZE, Self::MAX_GRID_SIZE);
        }
        if let Some(size) = patch.hover_circle_size {
            self.hover_circle_size = size.max(0.0);
        }
        if let Some(color) = patch.hover_circle_color {
            self.hover_circle_color = color;
        }
        if let Some(size) = patch.selected_circle_size {
            self.selected_circle_size = size.max(0.0);
        }
        if let Some(color) = patch.selected_circle_color {
            self.selected_circle_color = color;
        }
    }
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            grid_bg: [241, 245, 249],
            grid_fg: [226, 232, 240],
            grid_size: 12,
            hover_circle_size: 8.0,
            hover_circle_color: ColorHue::Blue,
            selected_circle_size: 8.0,
            selected_circle_color: ColorHue::Green,
        }
    }
}

/// Partial update of [`CanvasOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOptionsPatch {
    pub grid_bg: Option<[u8; 3]>,
    pub grid_fg: Option<[u8; 3]>,
    pub grid_size: Option<u32>,
    pub hover_circle_size: Option<f32>,
    pub hover_circle_color: Option<ColorHue>,
    pub selected_circle_size: Option<f32>,
    pub selected_circle_color: Option<ColorHue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_is_clamped() {
        let mut options = CanvasOptions::default();
        options.merge(CanvasOptionsPatch { grid_size: Some(0), ..Default::default() });
        assert_eq!(options.grid_size, CanvasOptions::MIN_GRID_SIZE);
        options.merge(CanvasOptionsPatch { grid_size: Some(500), ..Default::default() });
        assert_eq!(options.grid_size, CanvasOptions::MAX_GRID_SIZE);
        options.merge(CanvasOptionsPatch { grid_size: Some(20), ..Default::default() });
        assert_eq!(options.grid_size, 20);
    }

    #[test]
    fn test_merge_leaves_other_fields() {
        let mut options = CanvasOptions::default();
        options.merge(CanvasOptionsPatch {
            hover_circle_color: Some(ColorHue::Red),
            ..Default::default()
        });
        assert_eq!(options.hover_circle_color, ColorHue::Red);
        assert_eq!(options.grid_size, 12);
        assert_eq!(options.selected_circle_color, ColorHue::Green);
    }
}
