use egui::Pos2;
use serde::{Deserialize, Serialize};

/// An intersection on the snapping grid, in grid units (not pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset from `origin` to `self`, shown while a line is being drawn.
    pub fn delta_from(self, origin: Position) -> (i32, i32) {
        (self.x - origin.x, self.y - origin.y)
    }
}

/// Snap a pixel coordinate (relative to the canvas origin) to the nearest grid
/// intersection: `ceil((pixel - grid_size / 2) / grid_size)` on each axis.
///
/// With a grid size of 10, `(11, 17)` maps to `(1, 2)`.
pub fn pixel_to_grid(pixel: Pos2, grid_size: u32) -> Position {
    let size = f64::from(grid_size.max(1));
    let snap = |n: f32| ((f64::from(n) - size / 2.0) / size).ceil() as i32;
    Position::new(snap(pixel.x), snap(pixel.y))
}

/// Pixel coordinate of a grid intersection: `position * grid_size` on each axis.
///
/// This is the rendering direction only. It is not the inverse of
/// [`pixel_to_grid`]: snapping is lossy, so pixels between intersections never
/// come back out of this function.
pub fn grid_to_pixel(position: Position, grid_size: u32) -> Pos2 {
    let size = grid_size as f32;
    Pos2::new(position.x as f32 * size, position.y as f32 * size)
}
