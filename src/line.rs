use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Position;

/// The closed set of hues a line can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorHue {
    #[default]
    Gray,
    Red,
    Orange,
    Yellow,
    Green,
    Teal,
    Cyan,
    Blue,
    Purple,
    Pink,
}

impl ColorHue {
    pub const ALL: [ColorHue; 10] = [
        ColorHue::Gray,
        ColorHue::Red,
        ColorHue::Orange,
        ColorHue::Yellow,
        ColorHue::Green,
        ColorHue::Teal,
        ColorHue::Cyan,
        ColorHue::Blue,
        ColorHue::Purple,
        ColorHue::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorHue::Gray => "gray",
            ColorHue::Red => "red",
            ColorHue::Orange => "orange",
            ColorHue::Yellow => "yellow",
            ColorHue::Green => "green",
            ColorHue::Teal => "teal",
            ColorHue::Cyan => "cyan",
            ColorHue::Blue => "blue",
            ColorHue::Purple => "purple",
            ColorHue::Pink => "pink",
        }
    }

    /// sRGB of the hue's mid (500) shade.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ColorHue::Gray => [107, 114, 128],
            ColorHue::Red => [239, 68, 68],
            ColorHue::Orange => [249, 115, 22],
            ColorHue::Yellow => [234, 179, 8],
            ColorHue::Green => [34, 197, 94],
            ColorHue::Teal => [20, 184, 166],
            ColorHue::Cyan => [6, 182, 212],
            ColorHue::Blue => [59, 130, 246],
            ColorHue::Purple => [168, 85, 247],
            ColorHue::Pink => [236, 72, 153],
        }
    }
}

impl fmt::Display for ColorHue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stroke width in pixels, always within `1..=8`.
///
/// Stored as a bare number; saved values outside the range are clamped on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct LineWidth(u8);

impl LineWidth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Clamps into the supported range.
    pub fn new(width: u8) -> Self {
        Self(width.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = LineWidth> {
        (Self::MIN..=Self::MAX).map(LineWidth)
    }
}

impl From<u8> for LineWidth {
    fn from(width: u8) -> Self {
        Self::new(width)
    }
}

impl From<LineWidth> for u8 {
    fn from(width: LineWidth) -> Self {
        width.0
    }
}

impl Default for LineWidth {
    fn default() -> Self {
        Self(1)
    }
}

/// Opacity stored in tenths, so only `0.1, 0.2, ..., 1.0` are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Opacity(u8);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(10);

    /// `tenths` is clamped to `1..=10`.
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.clamp(1, 10))
    }

    pub fn tenths(self) -> u8 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 10.0
    }

    pub fn percent(self) -> u32 {
        u32::from(self.0) * 10
    }

    pub fn all() -> impl Iterator<Item = Opacity> {
        (1..=10).map(Opacity)
    }
}

impl From<u8> for Opacity {
    fn from(tenths: u8) -> Self {
        Self::from_tenths(tenths)
    }
}

impl From<Opacity> for u8 {
    fn from(opacity: Opacity) -> Self {
        opacity.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(3)
    }
}

/// Drawing defaults applied to every newly created line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineOptions {
    pub color: ColorHue,
    pub width: LineWidth,
    pub opacity: Opacity,
}

impl LineOptions {
    pub fn merge(&mut self, patch: LineOptionsPatch) {
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
    }
}

/// Partial update of [`LineOptions`]; `None` fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineOptionsPatch {
    pub color: Option<ColorHue>,
    pub width: Option<LineWidth>,
    pub opacity: Option<Opacity>,
}

/// A straight segment between two grid intersections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub start: Position,
    pub end: Position,
    pub color: ColorHue,
    pub width: LineWidth,
    pub opacity: Opacity,
}

impl Line {
    pub fn new(start: Position, end: Position, options: LineOptions) -> Self {
        Self {
            start,
            end,
            color: options.color,
            width: options.width,
            opacity: options.opacity,
        }
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Position {
        match endpoint {
            Endpoint::Start => self.start,
            Endpoint::End => self.end,
        }
    }

    pub fn set_endpoint(&mut self, endpoint: Endpoint, position: Position) {
        match endpoint {
            Endpoint::Start => self.start = position,
            Endpoint::End => self.end = position,
        }
    }

    pub fn apply(&mut self, patch: LinePatch) {
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = opacity;
        }
    }
}

/// Partial update of a [`Line`]'s attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinePatch {
    pub start: Option<Position>,
    pub end: Option<Position>,
    pub color: Option<ColorHue>,
    pub width: Option<LineWidth>,
    pub opacity: Option<Opacity>,
}

/// Which end of a line an endpoint edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Start,
    End,
}
