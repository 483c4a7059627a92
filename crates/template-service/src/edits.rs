use serde::{Deserialize, Serialize};
use template_source::TextSpan;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

impl TextChange {
    pub fn new(span: TextSpan, new_text: impl Into<String>) -> Self {
        Self {
            span,
            new_text: new_text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextChanges {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

/// A fix offered for one or more diagnostic codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixAction {
    /// Short name identifying the kind of fix; may be omitted by the producer
    #[serde(default)]
    pub fix_name: Option<String>,
    pub description: String,
    pub changes: Vec<FileTextChanges>,
    /// Opaque commands the client sends back to apply the fix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_all_description: Option<String>,
}

impl CodeFixAction {
    pub fn new(description: impl Into<String>, changes: Vec<FileTextChanges>) -> Self {
        Self {
            fix_name: None,
            description: description.into(),
            changes,
            commands: None,
            fix_id: None,
            fix_all_description: None,
        }
    }

    #[must_use]
    pub fn with_fix_name(mut self, fix_name: impl Into<String>) -> Self {
        self.fix_name = Some(fix_name.into());
        self
    }
}

/// Editor formatting options, passed through to whoever formats
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatCodeSettings {
    pub indent_size: Option<usize>,
    pub tab_size: Option<usize>,
    pub new_line_character: Option<String>,
    pub convert_tabs_to_spaces: Option<bool>,
    pub trim_trailing_whitespace: Option<bool>,
}
