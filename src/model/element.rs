//! Layout element tree types.

use serde::{Deserialize, Serialize};

use crate::codec::WideString;
use super::{GraphicState, TextState};

/// Bounding rectangle in page coordinates.
///
/// A box is independent of its element's children; a parent's bounds are
/// whatever the engine reported, not a union of child boxes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f64,
    /// Bottom edge
    pub bottom: f64,
    /// Right edge
    pub right: f64,
    /// Top edge
    pub top: f64,
}

impl Rect {
    /// Create a rectangle from its four edges.
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }
}

/// One node of a page's layout forest.
///
/// Child order is significant and preserved end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Stable identity assigned by the engine
    pub id: i64,

    /// Bounding box in page coordinates
    #[serde(default)]
    pub bounds: Rect,

    /// Variant payload
    #[serde(flatten)]
    pub kind: ElementKind,

    /// Ordered child elements
    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no children.
    pub fn new(id: i64, bounds: Rect, kind: ElementKind) -> Self {
        Self {
            id,
            bounds,
            kind,
            children: Vec::new(),
        }
    }

    /// Append a child, keeping insertion order.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Total node count of this subtree, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::subtree_len)
            .sum::<usize>()
    }
}

/// Closed set of element variants.
///
/// Unrecognized input degrades to [`ElementKind::Unknown`] rather than
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    /// A text container: paragraph, line, or word
    Text {
        /// Which text container this is
        role: TextRole,
        /// The element's own text; empty when content lives in children
        #[serde(default)]
        text: WideString,
        /// Styling context for the text run
        #[serde(default)]
        state: TextState,
    },

    /// A raster image placement
    Image,

    /// A vector path, rectangle, or line
    Path {
        /// Which shape this is
        shape: PathShape,
        /// Styling context for the shape
        #[serde(default)]
        state: GraphicState,
    },

    /// A table region
    Table,

    /// Anything the engine reported that this model does not classify
    #[serde(other)]
    Unknown,
}

/// Role of a text container element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextRole {
    /// A paragraph; children are lines
    Paragraph,
    /// A line; children are words
    Line,
    /// A word; a leaf
    Word,
}

impl TextRole {
    /// The `type` discriminator written to output.
    pub fn type_name(self) -> &'static str {
        match self {
            TextRole::Paragraph => "text_paragraph",
            TextRole::Line => "text_line",
            TextRole::Word => "text_word",
        }
    }
}

/// Shape of a path element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathShape {
    /// Free-form path
    Path,
    /// Axis-aligned rectangle
    Rect,
    /// Straight line segment
    Line,
}

impl PathShape {
    /// The `type` discriminator written to output.
    pub fn type_name(self) -> &'static str {
        match self {
            PathShape::Path => "path",
            PathShape::Rect => "rect",
            PathShape::Line => "line",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(TextRole::Paragraph.type_name(), "text_paragraph");
        assert_eq!(TextRole::Line.type_name(), "text_line");
        assert_eq!(TextRole::Word.type_name(), "text_word");
        assert_eq!(PathShape::Path.type_name(), "path");
        assert_eq!(PathShape::Rect.type_name(), "rect");
        assert_eq!(PathShape::Line.type_name(), "line");
    }

    #[test]
    fn test_subtree_len() {
        let mut root = Element::new(1, Rect::default(), ElementKind::Table);
        root.add_child(Element::new(2, Rect::default(), ElementKind::Image));
        root.add_child(Element::new(3, Rect::default(), ElementKind::Image));
        assert_eq!(root.subtree_len(), 3);
    }

    #[test]
    fn test_kind_tag_round_trip() {
        let el = Element::new(
            7,
            Rect::new(1.0, 2.0, 3.0, 4.0),
            ElementKind::Path {
                shape: PathShape::Rect,
                state: GraphicState::default(),
            },
        );
        let json = serde_json::to_string(&el).unwrap();
        assert!(json.contains("\"kind\":\"path\""));
        let back: Element = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back.kind,
            ElementKind::Path {
                shape: PathShape::Rect,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_kind_degrades() {
        let json = r#"{"id": 9, "kind": "hologram"}"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert!(matches!(el.kind, ElementKind::Unknown));
        assert!(el.children.is_empty());
    }
}
