use serde::{Deserialize, Serialize};
use std::fmt;

use crate::command::ImageHistory;
use crate::geometry::Position;
use crate::id_generator::generate_image_id;
use crate::line::Line;

/// Maximum image name length, in characters.
pub const NAME_LIMIT: usize = 30;
pub const COPY_SUFFIX: &str = " (Copy)";
pub const DEFAULT_IMAGE_NAME: &str = "New Image";

/// Identifies an image within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One undoable snapshot of an image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageState {
    /// Back to front draw order, which is also the order of the line list.
    pub lines: Vec<Line>,
    /// First endpoint of the line being drawn.
    pub active_position: Option<Position>,
}

/// A named collection of lines with its own undo history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: ImageId,
    pub name: String,
    pub history: ImageHistory,
}

impl Image {
    pub fn new() -> Self {
        Self::with_id(generate_image_id())
    }

    pub fn with_id(id: ImageId) -> Self {
        Self {
            id,
            name: DEFAULT_IMAGE_NAME.to_string(),
            history: ImageHistory::default(),
        }
    }

    pub fn present(&self) -> &ImageState {
        self.history.present()
    }

    pub fn lines(&self) -> &[Line] {
        &self.history.present().lines
    }

    pub fn active_position(&self) -> Option<Position> {
        self.history.present().active_position
    }

    pub fn rename(&mut self, name: &str) {
        self.name = truncate_name(name, NAME_LIMIT);
    }

    /// Deep copy with a fresh id, a " (Copy)" name and the whole history.
    pub fn duplicate(&self) -> Self {
        let base = truncate_name(&self.name, NAME_LIMIT - COPY_SUFFIX.chars().count());
        Self {
            id: generate_image_id(),
            name: format!("{base}{COPY_SUFFIX}"),
            history: self.history.clone(),
        }
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_name(name: &str, limit: usize) -> String {
    name.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_defaults() {
        let image = Image::new();
        assert_eq!(image.name, "New Image");
        assert!(image.lines().is_empty());
        assert!(image.active_position().is_none());
        assert!(!image.id.is_empty());
    }

    #[test]
    fn test_rename_truncates_to_limit() {
        let mut image = Image::new();
        image.rename("a name that is definitely longer than thirty characters");
        assert_eq!(image.name.chars().count(), NAME_LIMIT);
        assert_eq!(image.name, "a name that is definitely long");
    }

    #[test]
    fn test_duplicate_name_keeps_suffix_within_limit() {
        let mut image = Image::new();
        image.rename("abcdefghijklmnopqrstuvwxyz0123");
        let copy = image.duplicate();
        assert_eq!(copy.name, "abcdefghijklmnopqrstuvw (Copy)");
        assert_eq!(copy.name.chars().count(), NAME_LIMIT);
        assert_ne!(copy.id, image.id);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let mut image = Image::new();
        image.rename(&"é".repeat(40));
        assert_eq!(image.name.chars().count(), NAME_LIMIT);
    }
}
