// src/renderer.rs
use eframe::egui::epaint::CircleShape;
use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::geometry::{Position, grid_to_pixel};
use crate::line::{ColorHue, Endpoint, Line, Opacity};
use crate::state::{CanvasOptions, ClickState, EditorContext};

/// Highlight for the endpoint being re-picked from the line list.
const EDIT_HIGHLIGHT: Color32 = Color32::from_rgb(202, 138, 4);

/// Everything the canvas shows for one frame, borrowed from the session.
#[derive(Debug, Clone, Copy)]
pub struct CanvasView<'a> {
    pub options: &'a CanvasOptions,
    pub lines: &'a [Line],
    pub click_state: ClickState,
    /// Row highlighted in the line list
    pub highlighted_line: Option<usize>,
    pub hover_endpoint: Endpoint,
    pub preview: Option<Line>,
    pub hover: Option<Position>,
}

impl<'a> CanvasView<'a> {
    pub fn new(ctx: &'a EditorContext, hover: Option<Position>) -> Self {
        let click_state = ctx.click_state();
        let preview = match (click_state.pending_start(), hover) {
            (Some(start), Some(end)) if start != end => Some(Line::new(start, end, *ctx.line_options())),
            _ => None,
        };
        let editor = ctx.line_editor();
        Self {
            options: ctx.canvas_options(),
            lines: ctx.lines(),
            click_state,
            highlighted_line: editor.is_open.then_some(editor.active_index).flatten(),
            hover_endpoint: editor.hover_endpoint,
            preview,
            hover,
        }
    }
}

/// Draws the grid, the lines and the pointer feedback circles.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn hue_color(hue: ColorHue, opacity: Opacity) -> Color32 {
        let [r, g, b] = hue.rgb();
        Color32::from_rgb(r, g, b).gamma_multiply(opacity.as_f32())
    }

    fn to_screen(rect: Rect, position: Position, grid_size: u32) -> Pos2 {
        rect.min + grid_to_pixel(position, grid_size).to_vec2()
    }

    /// Renders the canvas
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle, its top-left is grid (0, 0)
    ///     view (CanvasView): What to draw
    pub fn render(&self, painter: &Painter, rect: Rect, view: &CanvasView<'_>) {
        let options = view.options;
        self.render_grid(painter, rect, options);

        for (index, line) in view.lines.iter().enumerate() {
            self.render_line(painter, rect, options.grid_size, line);
            if view.highlighted_line == Some(index) {
                let endpoint = match view.click_state {
                    ClickState::EditingEndpoint { endpoint, .. } => endpoint,
                    _ => view.hover_endpoint,
                };
                let center = Self::to_screen(rect, line.endpoint(endpoint), options.grid_size);
                painter.circle_stroke(center, options.selected_circle_size, Stroke::new(2.0, EDIT_HIGHLIGHT));
            }
        }

        if let Some(preview) = &view.preview {
            self.render_line(painter, rect, options.grid_size, preview);
        }

        if let Some(active) = view.click_state.pending_start() {
            self.render_circle(painter, rect, options, active, options.selected_circle_size, options.selected_circle_color);
        }
        if let Some(hover) = view.hover {
            self.render_circle(painter, rect, options, hover, options.hover_circle_size, options.hover_circle_color);
        }
    }

    fn render_grid(&self, painter: &Painter, rect: Rect, options: &CanvasOptions) {
        let [r, g, b] = options.grid_bg;
        painter.rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));

        let [r, g, b] = options.grid_fg;
        let stroke = Stroke::new(1.0, Color32::from_rgb(r, g, b));
        let step = options.grid_size.max(1) as f32;

        let mut x = rect.min.x;
        while x <= rect.max.x {
            painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
            x += step;
        }
        let mut y = rect.min.y;
        while y <= rect.max.y {
            painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
            y += step;
        }
    }

    fn render_line(&self, painter: &Painter, rect: Rect, grid_size: u32, line: &Line) {
        let start = Self::to_screen(rect, line.start, grid_size);
        let end = Self::to_screen(rect, line.end, grid_size);
        let color = Self::hue_color(line.color, line.opacity);
        painter.line_segment([start, end], Stroke::new(f32::from(line.width.get()), color));
    }

    fn render_circle(
        &self,
        painter: &Painter,
        rect: Rect,
        options: &CanvasOptions,
        position: Position,
        radius: f32,
        hue: ColorHue,
    ) {
        painter.add(Self::circle_shape(rect, options, position, radius, hue));
    }

    /// Filled circle centred on a grid intersection; `radius` is in pixels.
    fn circle_shape(rect: Rect, options: &CanvasOptions, position: Position, radius: f32, hue: ColorHue) -> CircleShape {
        let center = Self::to_screen(rect, position, options.grid_size);
        CircleShape::filled(center, radius, Self::hue_color(hue, Opacity::OPAQUE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use eframe::egui;

    #[test]
    fn test_render_basics() {
        let mut editor = EditorContext::new();
        editor.dispatch(Command::ClickPosition(Position::new(1, 1))).unwrap();
        editor.dispatch(Command::ClickPosition(Position::new(4, 2))).unwrap();

        let renderer = Renderer::new();
        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx.clone(), layer_id, rect);

        let view = CanvasView::new(&editor, Some(Position::new(6, 6)));
        assert!(view.preview.is_some());
        renderer.render(&painter, rect, &view);
    }

    #[test]
    fn test_preview_needs_distinct_hover() {
        let mut editor = EditorContext::new();
        editor.dispatch(Command::ClickPosition(Position::new(1, 1))).unwrap();
        assert!(CanvasView::new(&editor, Some(Position::new(1, 1))).preview.is_none());
        assert!(CanvasView::new(&editor, None).preview.is_none());
    }

    #[test]
    fn test_to_screen_offsets_by_canvas_origin() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 100.0));
        assert_eq!(Renderer::to_screen(rect, Position::new(2, 3), 12), egui::pos2(34.0, 56.0));
    }

    #[test]
    fn test_circle_size_is_a_radius() {
        let options = CanvasOptions::default();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let circle = Renderer::circle_shape(rect, &options, Position::new(2, 1), options.hover_circle_size, options.hover_circle_color);
        assert_eq!(circle.radius, options.hover_circle_size);
        assert_eq!(circle.center, egui::pos2(24.0, 12.0));
    }
}
