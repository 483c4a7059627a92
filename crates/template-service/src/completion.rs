use crate::{ScriptElementKind, SymbolDisplayPart};
use serde::{Deserialize, Serialize};
use template_source::TextSpan;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionInfo {
    #[serde(default)]
    pub is_global_completion: bool,
    #[serde(default)]
    pub is_member_completion: bool,
    #[serde(default)]
    pub is_new_identifier_location: bool,
    pub entries: Vec<CompletionEntry>,
}

impl CompletionInfo {
    #[must_use]
    pub fn new(entries: Vec<CompletionEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub name: String,
    pub kind: ScriptElementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_modifiers: Option<String>,
    pub sort_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Span of text the completion replaces, when not the word at the cursor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_span: Option<TextSpan>,
}

impl CompletionEntry {
    pub fn new(name: impl Into<String>, kind: ScriptElementKind) -> Self {
        Self {
            name: name.into(),
            kind,
            sort_text: "0".to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_replacement_span(mut self, span: TextSpan) -> Self {
        self.replacement_span = Some(span);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntryDetails {
    pub name: String,
    pub kind: ScriptElementKind,
    #[serde(default)]
    pub kind_modifiers: String,
    #[serde(default)]
    pub display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub documentation: Vec<SymbolDisplayPart>,
}

/// Hover information for a position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickInfo {
    pub kind: ScriptElementKind,
    #[serde(default)]
    pub kind_modifiers: String,
    pub text_span: TextSpan,
    #[serde(default)]
    pub display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub documentation: Vec<SymbolDisplayPart>,
}
