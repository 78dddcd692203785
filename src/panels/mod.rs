mod central_panel;
mod line_editor_panel;
mod options_panel;

pub use central_panel::central_panel;
pub use line_editor_panel::line_editor_panel;
pub use options_panel::options_panel;
