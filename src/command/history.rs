use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{CommandError, CommandResult};
use crate::image::ImageState;

/// Number of snapshots kept in the undo stack; the oldest is evicted first.
pub const UNDO_LIMIT: usize = 200;

/// Snapshot based undo/redo history for one image.
///
/// `past` is ordered oldest to newest, `future` nearest to furthest. Every
/// entry owns its own line buffer, so no two snapshots alias each other.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageHistory {
    past: VecDeque<ImageState>,
    present: ImageState,
    future: VecDeque<ImageState>,
}

impl ImageHistory {
    pub fn new(present: ImageState) -> Self {
        Self {
            past: VecDeque::new(),
            present,
            future: VecDeque::new(),
        }
    }

    pub fn present(&self) -> &ImageState {
        &self.present
    }

    /// Mutable access to the present state. Callers take a [`snapshot`](Self::snapshot)
    /// first so the change can be undone.
    pub fn present_mut(&mut self) -> &mut ImageState {
        &mut self.present
    }

    pub fn past(&self) -> &VecDeque<ImageState> {
        &self.past
    }

    pub fn future(&self) -> &VecDeque<ImageState> {
        &self.future
    }

    /// Push a copy of `present` onto the undo stack and invalidate redo.
    pub fn snapshot(&mut self) {
        self.past.push_back(self.present.clone());
        while self.past.len() > UNDO_LIMIT {
            self.past.pop_front();
        }
        self.future.clear();
    }

    pub fn undo(&mut self) -> CommandResult {
        let previous = self.past.pop_back().ok_or(CommandError::NothingToUndo)?;
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        Ok(())
    }

    pub fn redo(&mut self) -> CommandResult {
        let next = self.future.pop_front().ok_or(CommandError::NothingToRedo)?;
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Drop both stacks, keeping only `present`.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
