//! Styling state attached to text and path elements.

use serde::{Deserialize, Serialize};

use crate::codec::WideString;

/// An RGB color with 8-bit channels. Alpha travels separately as opacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0-255)
    pub red: u8,
    /// Green channel (0-255)
    pub green: u8,
    /// Blue channel (0-255)
    pub blue: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Fill and stroke color plus opacity, shared by text and graphic states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorState {
    /// Fill opacity (0.0-1.0)
    pub fill_opacity: f64,
    /// Fill color
    pub fill_color: Rgb,
    /// Stroke opacity (0.0-1.0)
    pub stroke_opacity: f64,
    /// Stroke color
    pub stroke_color: Rgb,
}

impl Default for ColorState {
    fn default() -> Self {
        Self {
            fill_opacity: 1.0,
            fill_color: Rgb::default(),
            stroke_opacity: 1.0,
            stroke_color: Rgb::default(),
        }
    }
}

/// Font identification as reported by the engine.
///
/// The three names arrive as engine-native wide text; the system-font
/// fields describe the substitution the engine settled on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Face name, e.g. "Arial"
    #[serde(default)]
    pub face_name: WideString,

    /// Full font name, e.g. "ArialMT"
    #[serde(default)]
    pub font_name: WideString,

    /// Name of the substituted system font
    #[serde(default)]
    pub system_font_name: WideString,

    /// Whether the system font substitution is bold
    #[serde(default)]
    pub bold: bool,

    /// Whether the system font substitution is italic
    #[serde(default)]
    pub italic: bool,

    /// Charset identifier of the system font
    #[serde(default)]
    pub charset: i32,
}

/// Styling context for a run of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextState {
    /// Extra spacing between characters
    #[serde(default)]
    pub char_spacing: f64,

    /// Engine rendering flags
    #[serde(default)]
    pub flags: u32,

    /// Font reference
    #[serde(default)]
    pub font: Font,

    /// Font size in points
    #[serde(default)]
    pub font_size: f64,

    /// Color and opacity
    #[serde(default)]
    pub color: ColorState,

    /// Extra spacing between words
    #[serde(default)]
    pub word_spacing: f64,
}

/// Styling context for a vector shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphicState {
    /// Color and opacity
    #[serde(default)]
    pub color: ColorState,
}
