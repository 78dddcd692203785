mod editor_state;
pub mod context;
mod line_editor;
mod options;
mod persistence;

pub use editor_state::ClickState;
pub use context::EditorContext;
pub use line_editor::{LineEditor, LineEditorPatch};
pub use options::{CanvasOptions, CanvasOptionsPatch};
pub use persistence::{
    StatePersistence,
    EditorSnapshot,
    PersistenceError,
    PersistencePolicy,
    PersistenceResult,
};

use serde::{Deserialize, Serialize};

use crate::image::{Image, ImageId};
use crate::line::LineOptions;

/// The whole editing session: every image with its history plus the global options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// `None` once the last image is deleted. May name a missing image after
    /// selecting an unknown id, which reads as "no current image".
    pub current_image: Option<ImageId>,
    pub images: Vec<Image>,
    pub canvas_options: CanvasOptions,
    pub line_options: LineOptions,
    #[serde(skip)]
    pub line_editor: LineEditor,
}

impl Default for AppState {
    fn default() -> Self {
        let image = Image::new();
        Self {
            current_image: Some(image.id.clone()),
            images: vec![image],
            canvas_options: CanvasOptions::default(),
            line_options: LineOptions::default(),
            line_editor: LineEditor::default(),
        }
    }
}

impl AppState {
    /// Index of the current image in `images`.
    pub fn current_index(&self) -> Option<usize> {
        let id = self.current_image.as_ref()?;
        self.images.iter().position(|image| &image.id == id)
    }

    pub fn current_image(&self) -> Option<&Image> {
        self.current_index().map(|index| &self.images[index])
    }

    pub fn current_image_mut(&mut self) -> Option<&mut Image> {
        let index = self.current_index()?;
        self.images.get_mut(index)
    }

    pub fn image(&self, id: &ImageId) -> Option<&Image> {
        self.images.iter().find(|image| &image.id == id)
    }
}
