use crate::{ScriptElementKind, SymbolDisplayPart};
use serde::{Deserialize, Serialize};
use template_source::TextSpan;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionInfo {
    pub file_name: String,
    pub text_span: TextSpan,
    pub kind: ScriptElementKind,
    pub name: String,
    #[serde(default)]
    pub container_kind: ScriptElementKind,
    #[serde(default)]
    pub container_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub file_name: String,
    pub text_span: TextSpan,
    #[serde(default)]
    pub is_write_access: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_definition: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedSymbolDefinitionInfo {
    #[serde(flatten)]
    pub info: DefinitionInfo,
    #[serde(default)]
    pub display_parts: Vec<SymbolDisplayPart>,
}

/// One symbol and every place it is referenced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencedSymbol {
    pub definition: ReferencedSymbolDefinitionInfo,
    pub references: Vec<ReferenceEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpParameter {
    pub name: String,
    #[serde(default)]
    pub documentation: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub is_optional: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpItem {
    #[serde(default)]
    pub is_variadic: bool,
    #[serde(default)]
    pub prefix_display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub suffix_display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub separator_display_parts: Vec<SymbolDisplayPart>,
    #[serde(default)]
    pub parameters: Vec<SignatureHelpParameter>,
    #[serde(default)]
    pub documentation: Vec<SymbolDisplayPart>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureHelpItems {
    pub items: Vec<SignatureHelpItem>,
    /// Span of the argument list the help applies to
    pub applicable_span: TextSpan,
    pub selected_item_index: usize,
    pub argument_index: usize,
    pub argument_count: usize,
}

/// Text to insert to close the JSX-like element at a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsxClosingTagInfo {
    pub new_text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutliningSpanKind {
    Comment,
    Region,
    #[default]
    Code,
    Imports,
}

/// A foldable region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutliningSpan {
    /// The region that collapses
    pub text_span: TextSpan,
    /// The region shown when hovering the collapsed text
    pub hint_span: TextSpan,
    #[serde(default)]
    pub banner_text: String,
    #[serde(default)]
    pub auto_collapse: bool,
    #[serde(default)]
    pub kind: OutliningSpanKind,
}
