//! The single owner of the editing session.
//!
//! `EditorContext` holds the [`AppState`] and is the only place that mutates
//! it: every change arrives as a [`Command`] through [`EditorContext::dispatch`],
//! one at a time. The UI reads the session back through the accessors below.
//!
//! ```rust,no_run
//! use eframe_gridlines::{Command, EditorContext, Position};
//!
//! let mut context = EditorContext::new();
//! context.dispatch(Command::ClickPosition(Position::new(6, 6))).ok();
//! context.dispatch(Command::ClickPosition(Position::new(11, 1))).ok();
//! assert_eq!(context.lines().len(), 1);
//! ```
use log::debug;

use super::{AppState, CanvasOptions, ClickState, LineEditor};
use crate::command::{Command, CommandResult};
use crate::geometry::Position;
use crate::image::{Image, ImageId};
use crate::line::{Line, LineOptions};

#[derive(Debug, Clone, Default)]
pub struct EditorContext {
    state: AppState,
}

impl EditorContext {
    /// A session with one empty "New Image".
    pub fn new() -> Self {
        Self::default()
    }

    /// Take over a loaded state. The line editor starts closed and canvas
    /// options are clamped, since saved data bypasses `merge`.
    pub fn from_state(mut state: AppState) -> Self {
        state.line_editor = LineEditor::default();
        state.canvas_options.clamp_to_limits();
        Self { state }
    }

    /// Apply one command. `Err` means it was a no-op; the state is unchanged.
    pub fn dispatch(&mut self, command: Command) -> CommandResult {
        let result = command.execute(&mut self.state);
        match &result {
            Ok(()) => debug!("Applied {:?}", command),
            Err(err) => debug!("Ignored {:?}: {}", command, err),
        }
        result
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn replace_state(&mut self, state: AppState) {
        *self = Self::from_state(state);
    }

    pub fn current_image(&self) -> Option<&Image> {
        self.state.current_image()
    }

    pub fn current_image_id(&self) -> Option<&ImageId> {
        self.current_image().map(|image| &image.id)
    }

    /// Lines of the current image, empty when there is none.
    pub fn lines(&self) -> &[Line] {
        self.current_image().map(|image| image.lines()).unwrap_or(&[])
    }

    pub fn active_position(&self) -> Option<Position> {
        self.current_image().and_then(|image| image.active_position())
    }

    pub fn click_state(&self) -> ClickState {
        ClickState::of(&self.state)
    }

    pub fn can_undo(&self) -> bool {
        self.current_image().is_some_and(|image| image.history.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.current_image().is_some_and(|image| image.history.can_redo())
    }

    /// Id and name of every image, in collection order.
    pub fn images(&self) -> impl Iterator<Item = (&ImageId, &str)> {
        self.state.images.iter().map(|image| (&image.id, image.name.as_str()))
    }

    pub fn canvas_options(&self) -> &CanvasOptions {
        &self.state.canvas_options
    }

    pub fn line_options(&self) -> &LineOptions {
        &self.state.line_options
    }

    pub fn line_editor(&self) -> &LineEditor {
        &self.state.line_editor
    }
}
