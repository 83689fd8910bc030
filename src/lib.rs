//! # layjson
//!
//! Serialize page-layout element trees from document engines to JSON.
//!
//! A document engine — the component that parses a PDF and reconstructs
//! its layout — exposes pages as forests of typed elements: text
//! paragraphs, lines and words, images, vector paths, tables. This
//! library walks that hierarchy through a read-only engine interface and
//! produces one JSON document, preserving element identity, geometry,
//! styling, and child order.
//!
//! ## Quick Start
//!
//! ```
//! use layjson::{to_json, JsonFormat, MemDocument, MemPage};
//!
//! let mut doc = MemDocument::new("report.pdf");
//! doc.add_page(MemPage::new(1));
//!
//! let json = to_json(&doc, JsonFormat::Pretty);
//! assert!(json.contains("\"num_pages\": 1"));
//! ```
//!
//! ## Features
//!
//! - **Engine-agnostic**: any [`DocumentSource`] implementation can be
//!   exported; [`MemDocument`] ships as the owned reference engine
//! - **Degrades, never fails**: unavailable pages and layout maps shrink
//!   the output instead of aborting it
//! - **Order preservation**: sibling keys and child elements keep engine
//!   order end to end
//! - **Two output shapes**: the engine schema's repeated-key form, or
//!   strict array-normalized JSON
//! - **Extended text range**: wide-character text round-trips through a
//!   codec covering the legacy 6-byte encoding forms

pub mod codec;
pub mod engine;
pub mod error;
pub mod export;
pub mod json;
pub mod model;

// Re-export commonly used types
pub use codec::WideString;
pub use engine::{DocumentSource, LayoutMap, MemDocument, MemPage, PageRef, PageSource};
pub use error::{Error, Result};
pub use export::{to_json, to_json_with_options, to_tree, ExportOptions};
pub use json::{JsonFormat, Node, Value};
pub use model::{
    Annotation, AnnotationSubtype, Appearance, BorderStyle, ColorState, Element, ElementKind,
    FillType, Font, GraphicState, PathShape, Rect, Rgb, Rotation, TextRole, TextState,
};

use std::path::Path;

/// Export a document straight to a file.
///
/// # Example
///
/// ```no_run
/// use layjson::{export_file, ExportOptions, MemDocument};
///
/// let doc = MemDocument::from_json_file("report.model.json")?;
/// export_file(&doc, "report.json", &ExportOptions::default())?;
/// # Ok::<(), layjson::Error>(())
/// ```
pub fn export_file<P: AsRef<Path>>(
    source: &dyn DocumentSource,
    path: P,
    options: &ExportOptions,
) -> Result<()> {
    let text = to_json_with_options(source, options)?;
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_minimal_document() {
        let doc = MemDocument::new("a.pdf");
        let json = to_json(&doc, JsonFormat::Compact);
        assert_eq!(json, r#"{"document":{"name":"a.pdf","num_pages":0}}"#);
    }

    #[test]
    fn test_export_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mut doc = MemDocument::new("a.pdf");
        doc.add_page(MemPage::new(1));
        export_file(&doc, &path, &ExportOptions::default()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"number\": 1"));
    }

    #[test]
    fn test_unnamed_document_gets_empty_name() {
        let doc = MemDocument::default();
        let json = to_json(&doc, JsonFormat::Compact);
        assert!(json.contains(r#""name":"""#));
    }
}
