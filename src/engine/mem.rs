//! In-memory engine implementation.
//!
//! [`MemDocument`] owns its pages and elements outright, which makes it
//! the reference [`DocumentSource`] for tests and the CLI: a document
//! model serialized by any engine frontend deserializes straight into it.

use serde::{Deserialize, Serialize};

use super::{DocumentSource, LayoutMap, PageRef, PageSource};
use crate::error::{Error, Result};
use crate::model::{Annotation, Element, Rotation};

/// An owned document model implementing [`DocumentSource`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemDocument {
    /// Source identifier, threaded into the output `name` field
    #[serde(default)]
    pub name: Option<String>,

    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<MemPage>,
}

impl MemDocument {
    /// Create an empty document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            pages: Vec::new(),
        }
    }

    /// Append a page.
    pub fn add_page(&mut self, page: MemPage) {
        self.pages.push(page);
    }

    /// Deserialize a document model from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Model(e.to_string()))
    }

    /// Load a document model from a JSON file.
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl DocumentSource for MemDocument {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn acquire_page(&self, index: u32) -> Option<PageRef<'_>> {
        let page = self.pages.get(index as usize)?;
        Some(Box::new(page))
    }
}

/// An owned page implementing [`PageSource`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemPage {
    /// 1-based page number
    pub number: u32,

    /// Page rotation in degrees
    #[serde(default)]
    pub rotation: Rotation,

    /// Root elements of the layout forest, in engine order
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Page annotations
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl MemPage {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            rotation: Rotation::None,
            elements: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Append a root element.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }
}

impl PageSource for MemPage {
    fn number(&self) -> u32 {
        self.number
    }

    fn rotation(&self) -> Rotation {
        self.rotation
    }

    fn acquire_layout_map(&self) -> Option<LayoutMap<'_>> {
        Some(LayoutMap::new(&self.elements))
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}
