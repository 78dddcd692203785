mod grid;

pub use grid::{Position, grid_to_pixel, pixel_to_grid};
