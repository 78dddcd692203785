#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod geometry;
pub mod id_generator;
pub mod image;
pub mod input;
pub mod line;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod util;

pub use app::GridLinesApp;
pub use command::{Command, CommandError, CommandResult, ImageHistory};
pub use geometry::{Position, grid_to_pixel, pixel_to_grid};
pub use image::{Image, ImageId, ImageState};
pub use input::{InputEvent, InputHandler};
pub use line::{ColorHue, Endpoint, Line, LineOptions, LinePatch, LineWidth, Opacity};
pub use renderer::Renderer;
pub use state::{AppState, ClickState, EditorContext};
