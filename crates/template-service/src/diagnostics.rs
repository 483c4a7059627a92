use serde::{Deserialize, Serialize};

/// Diagnostic severity categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

/// A diagnostic message (error, warning, etc.)
///
/// `start` is absent for diagnostics that apply to a whole file; embedded
/// diagnostics without a start are placed at the start of their template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(default)]
    pub start: Option<usize>,

    #[serde(default)]
    pub length: Option<usize>,

    pub message_text: String,

    pub category: DiagnosticCategory,

    pub code: u32,

    /// Source of the diagnostic (e.g., "sql-validator")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, code: u32) -> Self {
        Self::new(DiagnosticCategory::Error, message, code)
    }

    pub fn warning(message: impl Into<String>, code: u32) -> Self {
        Self::new(DiagnosticCategory::Warning, message, code)
    }

    pub fn new(category: DiagnosticCategory, message: impl Into<String>, code: u32) -> Self {
        Self {
            file_name: None,
            start: None,
            length: None,
            message_text: message.into(),
            category,
            code,
            source: None,
        }
    }

    #[must_use]
    pub const fn with_span(mut self, start: usize, length: usize) -> Self {
        self.start = Some(start);
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}
