//! Export options and configuration.

use crate::json::JsonFormat;

/// Options for exporting a document.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Output format
    pub format: JsonFormat,

    /// Normalize repeated keys into arrays (standard JSON objects)
    pub strict: bool,

    /// Emit page annotations
    pub annotations: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable strict (array-normalized) output.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable annotation output.
    pub fn with_annotations(mut self, annotations: bool) -> Self {
        self.annotations = annotations;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: JsonFormat::Pretty,
            strict: false,
            annotations: true,
        }
    }
}
