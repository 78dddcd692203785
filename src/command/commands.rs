use log::info;

use super::{CommandError, CommandResult};
use crate::geometry::Position;
use crate::image::{Image, ImageId};
use crate::line::{Endpoint, Line, LineOptionsPatch, LinePatch};
use crate::state::{AppState, CanvasOptionsPatch, ClickState, LineEditorPatch};

/// Every way the editing session can change.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A click on a grid intersection
    ClickPosition(Position),
    /// Drop the pending first endpoint (Escape, right click)
    ClearActivePosition,
    Undo,
    Redo,
    SetLineOption(LineOptionsPatch),
    SetCanvasOption(CanvasOptionsPatch),
    SelectImage(ImageId),
    AddImage,
    DuplicateImage,
    DeleteImage,
    RenameImage(String),
    MoveLine { old_index: usize, new_index: usize },
    DeleteLine(usize),
    EditLine { index: usize, patch: LinePatch },
    /// Redirect the next grid click to an endpoint of an existing line
    OpenLineEditorAttr { index: usize, endpoint: Endpoint },
    /// Abandon a pending endpoint edit
    CancelEndpointEdit,
    SetLineEditor(LineEditorPatch),
}

impl Command {
    /// Apply the command to the session.
    ///
    /// Commands that change an image snapshot its present state first. On
    /// `Err` nothing was changed, not even the history.
    pub fn execute(&self, state: &mut AppState) -> CommandResult {
        match self {
            Command::ClickPosition(position) => click_position(state, *position),
            Command::ClearActivePosition => {
                let image = current_image(state)?;
                if image.active_position().is_none() {
                    return Err(CommandError::NoActivePosition);
                }
                image.history.snapshot();
                image.history.present_mut().active_position = None;
                Ok(())
            }
            Command::Undo => current_image(state)?.history.undo(),
            Command::Redo => current_image(state)?.history.redo(),
            Command::SetLineOption(patch) => {
                state.line_options.merge(*patch);
                Ok(())
            }
            Command::SetCanvasOption(patch) => {
                state.canvas_options.merge(*patch);
                Ok(())
            }
            Command::SelectImage(id) => {
                state.current_image = Some(id.clone());
                Ok(())
            }
            Command::AddImage => {
                let image = Image::new();
                info!("Adding image {}", image.id);
                push_current(state, image);
                Ok(())
            }
            Command::DuplicateImage => {
                let copy = current_image(state)?.duplicate();
                info!("Duplicated image as {} ({})", copy.id, copy.name);
                push_current(state, copy);
                Ok(())
            }
            Command::DeleteImage => {
                let index = state.current_index().ok_or(CommandError::NoCurrentImage)?;
                let removed = state.images.remove(index);
                info!("Deleted image {} ({})", removed.id, removed.name);
                state.current_image = state.images.first().map(|image| image.id.clone());
                Ok(())
            }
            Command::RenameImage(name) => {
                current_image(state)?.rename(name);
                Ok(())
            }
            Command::MoveLine { old_index, new_index } => {
                let image = current_image(state)?;
                check_index(image, *old_index)?;
                image.history.snapshot();
                let lines = &mut image.history.present_mut().lines;
                let line = lines.remove(*old_index);
                let new_index = (*new_index).min(lines.len());
                lines.insert(new_index, line);
                Ok(())
            }
            Command::DeleteLine(index) => {
                let image = current_image(state)?;
                check_index(image, *index)?;
                image.history.snapshot();
                image.history.present_mut().lines.remove(*index);
                Ok(())
            }
            Command::EditLine { index, patch } => {
                let image = current_image(state)?;
                check_index(image, *index)?;
                image.history.snapshot();
                image.history.present_mut().lines[*index].apply(*patch);
                Ok(())
            }
            Command::OpenLineEditorAttr { index, endpoint } => {
                let image = current_image(state)?;
                check_index(image, *index)?;
                image.history.snapshot();
                image.history.present_mut().active_position = None;
                state.line_editor.begin_endpoint_edit(*index, *endpoint);
                Ok(())
            }
            Command::CancelEndpointEdit => {
                state.line_editor.cancel_endpoint_edit();
                Ok(())
            }
            Command::SetLineEditor(patch) => {
                state.line_editor.merge(*patch);
                Ok(())
            }
        }
    }
}

fn click_position(state: &mut AppState, position: Position) -> CommandResult {
    let click_state = ClickState::of(state);
    let line_options = state.line_options;
    let index = state.current_index().ok_or(CommandError::NoCurrentImage)?;
    let image = &mut state.images[index];

    image.history.snapshot();
    let present = image.history.present_mut();

    match click_state {
        ClickState::EditingEndpoint { index: line, endpoint } => {
            present.lines[line].set_endpoint(endpoint, position);
            state.line_editor.finish_endpoint_edit();
            return Ok(());
        }
        ClickState::PendingStart(active) if active == position => {
            present.active_position = None;
        }
        ClickState::PendingStart(active) => {
            present.lines.push(Line::new(active, position, line_options));
            present.active_position = Some(position);
        }
        ClickState::Idle => {
            present.active_position = Some(position);
        }
    }

    // An edit pointing at a line that no longer exists is dropped
    if state.line_editor.is_editing_endpoint() {
        state.line_editor.finish_endpoint_edit();
    }
    Ok(())
}

fn current_image(state: &mut AppState) -> Result<&mut Image, CommandError> {
    state.current_image_mut().ok_or(CommandError::NoCurrentImage)
}

fn check_index(image: &Image, index: usize) -> CommandResult {
    let len = image.lines().len();
    if index < len {
        Ok(())
    } else {
        Err(CommandError::LineIndexOutOfRange { index, len })
    }
}

fn push_current(state: &mut AppState, image: Image) {
    state.current_image = Some(image.id.clone());
    state.images.push(image);
}
