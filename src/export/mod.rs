//! Export module: element trees to JSON.

mod document;
mod element;
mod options;
mod project;

pub use document::{serialize_document, serialize_page};
pub use element::serialize_element;
pub use options::ExportOptions;
pub use project::{annotation, color_state, font, rgb, text_state};

use crate::engine::DocumentSource;
use crate::error::{Error, Result};
use crate::json::{self, JsonFormat, Node};

/// Assemble the JSON tree for a document.
pub fn to_tree(source: &dyn DocumentSource) -> Node {
    serialize_document(source, &ExportOptions::default())
}

/// Export a document to JSON text with default options.
pub fn to_json(source: &dyn DocumentSource, format: JsonFormat) -> String {
    json::write(&to_tree(source), format)
}

/// Export a document to JSON text.
///
/// Strict mode normalizes repeated keys into arrays; encoding through
/// `serde_json` is the only fallible step.
pub fn to_json_with_options(source: &dyn DocumentSource, options: &ExportOptions) -> Result<String> {
    let tree = serialize_document(source, options);
    if options.strict {
        let value = tree.to_strict();
        let text = match options.format {
            JsonFormat::Pretty => serde_json::to_string_pretty(&value),
            JsonFormat::Compact => serde_json::to_string(&value),
        };
        text.map_err(|e| Error::Json(e.to_string()))
    } else {
        Ok(json::write(&tree, options.format))
    }
}
