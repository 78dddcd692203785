use crate::line::Endpoint;

/// Session-only state of the line list. Never part of an undo snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineEditor {
    pub is_open: bool,
    /// Row under the pointer, or the line whose endpoint is being re-picked.
    pub active_index: Option<usize>,
    /// When set, the next grid click overwrites this endpoint of `active_index`.
    pub active_attribute_edit: Option<Endpoint>,
    pub hover_endpoint: Endpoint,
}

impl Default for LineEditor {
    fn default() -> Self {
        Self {
            is_open: false,
            active_index: None,
            active_attribute_edit: None,
            hover_endpoint: Endpoint::Start,
        }
    }
}

impl LineEditor {
    pub fn merge(&mut self, patch: LineEditorPatch) {
        if let Some(is_open) = patch.is_open {
            self.is_open = is_open;
        }
        if let Some(active_index) = patch.active_index {
            self.active_index = active_index;
        }
        if let Some(hover_endpoint) = patch.hover_endpoint {
            self.hover_endpoint = hover_endpoint;
        }
    }

    pub fn is_editing_endpoint(&self) -> bool {
        self.active_attribute_edit.is_some()
    }

    pub(crate) fn begin_endpoint_edit(&mut self, index: usize, endpoint: Endpoint) {
        self.active_index = Some(index);
        self.active_attribute_edit = Some(endpoint);
    }

    /// Leave endpoint editing after the edit landed.
    pub(crate) fn finish_endpoint_edit(&mut self) {
        self.active_index = None;
        self.active_attribute_edit = None;
    }

    /// Abandon a pending endpoint edit, keeping the highlighted row.
    pub(crate) fn cancel_endpoint_edit(&mut self) {
        self.active_attribute_edit = None;
    }
}

/// Partial update of the [`LineEditor`] that does not start or end an endpoint edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineEditorPatch {
    pub is_open: Option<bool>,
    pub active_index: Option<Option<usize>>,
    pub hover_endpoint: Option<Endpoint>,
}
