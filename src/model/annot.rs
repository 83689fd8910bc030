//! Page annotation types.

use serde::{Deserialize, Serialize};

use super::Rgb;

/// A page annotation: its subtype plus visual appearance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Annotation subtype
    #[serde(default)]
    pub subtype: AnnotationSubtype,

    /// Visual appearance
    #[serde(default)]
    pub appearance: Appearance,
}

/// Closed set of annotation subtypes.
///
/// Values the engine reports that are not in this set map to `Unknown`;
/// classification never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationSubtype {
    Text,
    Link,
    FreeText,
    Line,
    Square,
    Circle,
    Polygon,
    Polyline,
    Highlight,
    Underline,
    Squiggly,
    StrikeOut,
    Stamp,
    Caret,
    Ink,
    Popup,
    FileAttachment,
    Sound,
    Movie,
    Widget,
    Screen,
    PrinterMark,
    TrapNet,
    Watermark,
    ThreeD,
    Redact,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AnnotationSubtype {
    /// The subtype name written to output.
    pub fn name(self) -> &'static str {
        match self {
            AnnotationSubtype::Text => "Text",
            AnnotationSubtype::Link => "Link",
            AnnotationSubtype::FreeText => "FreeText",
            AnnotationSubtype::Line => "Line",
            AnnotationSubtype::Square => "Square",
            AnnotationSubtype::Circle => "Circle",
            AnnotationSubtype::Polygon => "Polygon",
            AnnotationSubtype::Polyline => "Polyline",
            AnnotationSubtype::Highlight => "Highlight",
            AnnotationSubtype::Underline => "Underline",
            AnnotationSubtype::Squiggly => "Squiggly",
            AnnotationSubtype::StrikeOut => "StrikeOut",
            AnnotationSubtype::Stamp => "Stamp",
            AnnotationSubtype::Caret => "Caret",
            AnnotationSubtype::Ink => "Ink",
            AnnotationSubtype::Popup => "Popup",
            AnnotationSubtype::FileAttachment => "FileAttachment",
            AnnotationSubtype::Sound => "Sound",
            AnnotationSubtype::Movie => "Movie",
            AnnotationSubtype::Widget => "Widget",
            AnnotationSubtype::Screen => "Screen",
            AnnotationSubtype::PrinterMark => "PrinterMark",
            AnnotationSubtype::TrapNet => "TrapNet",
            AnnotationSubtype::Watermark => "WaterMark",
            AnnotationSubtype::ThreeD => "3D",
            AnnotationSubtype::Redact => "Redact",
            AnnotationSubtype::Unknown => "Unknown",
        }
    }
}

/// How an annotation's interior is filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillType {
    /// No fill
    #[default]
    None,
    /// Solid fill
    Solid,
}

impl FillType {
    /// The fill-type name written to output.
    pub fn name(self) -> &'static str {
        match self {
            FillType::None => "none",
            FillType::Solid => "solid",
        }
    }
}

/// Border rendering style of an annotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// Solid border
    #[default]
    Solid,
    /// Dashed border
    Dashed,
    /// Beveled border
    Beveled,
    /// Underline only
    Underline,
    /// Inset border
    Inset,
}

impl BorderStyle {
    /// The border-style name written to output.
    pub fn name(self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Beveled => "beveled",
            BorderStyle::Underline => "underline",
            BorderStyle::Inset => "inset",
        }
    }
}

/// Visual appearance of an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    /// Interior fill type
    #[serde(default)]
    pub fill_type: FillType,

    /// Interior fill color
    #[serde(default)]
    pub fill_color: Rgb,

    /// Border style
    #[serde(default)]
    pub border: BorderStyle,

    /// Border width in points
    #[serde(default)]
    pub border_width: f64,

    /// Border color
    #[serde(default)]
    pub border_color: Rgb,

    /// Overall opacity (0.0-1.0)
    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Font size for text-bearing annotations, in points
    #[serde(default)]
    pub font_size: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            fill_type: FillType::default(),
            fill_color: Rgb::default(),
            border: BorderStyle::default(),
            border_width: 0.0,
            border_color: Rgb::default(),
            opacity: 1.0,
            font_size: 0.0,
        }
    }
}
