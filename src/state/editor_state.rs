//! How the next grid click will be interpreted.
//!
//! The state is derived from the current image's active position and the
//! line editor; it is never stored on its own.
//!
//! ```text
//!   ┌──────────┐  click p   ┌──────────────────┐  click q != p
//!   │          ├───────────►│                  ├──────────────┐
//!   │   Idle   │            │ PendingStart(p)  │  adds p→q,    │
//!   │          │◄───────────┤                  │◄─────────────┘
//!   └────▲─────┘ click p,   └────────┬─────────┘  now PendingStart(q)
//!        │       Escape              │
//!        │                           │ open endpoint edit
//!        │       click p             ▼
//!        │  (endpoint := p) ┌──────────────────┐
//!        └──────────────────┤ EditingEndpoint  │
//!                           └──────────────────┘
//! ```

use crate::geometry::Position;
use crate::line::Endpoint;

use super::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    /// No line in progress
    #[default]
    Idle,
    /// First endpoint placed, waiting for the second
    PendingStart(Position),
    /// The next click moves an endpoint of an existing line
    EditingEndpoint { index: usize, endpoint: Endpoint },
}

impl ClickState {
    pub fn of(state: &AppState) -> Self {
        let Some(image) = state.current_image() else {
            return Self::Idle;
        };
        let editor = &state.line_editor;
        if let (Some(endpoint), Some(index)) = (editor.active_attribute_edit, editor.active_index) {
            if index < image.lines().len() {
                return Self::EditingEndpoint { index, endpoint };
            }
        }
        match image.active_position() {
            Some(position) => Self::PendingStart(position),
            None => Self::Idle,
        }
    }

    pub fn pending_start(&self) -> Option<Position> {
        match self {
            Self::PendingStart(position) => Some(*position),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_editing_endpoint(&self) -> bool {
        matches!(self, Self::EditingEndpoint { .. })
    }
}
