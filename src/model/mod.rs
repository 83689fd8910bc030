//! Read views over the document engine's layout model.
//!
//! These types mirror what the engine reports for a page: a forest of
//! typed elements with geometry, text, styling, and annotation metadata.
//! The exporter only reads them; construction is the engine adapter's job
//! (see [`crate::engine`]).

mod annot;
mod element;
mod style;

pub use annot::{Annotation, AnnotationSubtype, Appearance, BorderStyle, FillType};
pub use element::{Element, ElementKind, PathShape, Rect, TextRole};
pub use style::{ColorState, Font, GraphicState, Rgb, TextState};

use serde::{Deserialize, Serialize};

/// Page rotation in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    /// No rotation
    #[default]
    None,
    /// 90 degrees clockwise
    Quarter,
    /// 180 degrees
    Half,
    /// 270 degrees clockwise
    ThreeQuarter,
}

impl Rotation {
    /// The rotation in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 90,
            Rotation::Half => 180,
            Rotation::ThreeQuarter => 270,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Quarter),
            180 => Ok(Rotation::Half),
            270 => Ok(Rotation::ThreeQuarter),
            other => Err(format!("invalid page rotation: {other}")),
        }
    }
}
