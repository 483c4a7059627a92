use serde::{Deserialize, Serialize};

/// Kind of a symbol, as reported in completions, hovers and navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptElementKind {
    #[default]
    #[serde(rename = "")]
    Unknown,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "keyword")]
    Keyword,
    #[serde(rename = "script")]
    Script,
    #[serde(rename = "module")]
    Module,
    #[serde(rename = "class")]
    Class,
    #[serde(rename = "interface")]
    Interface,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "enum")]
    Enum,
    #[serde(rename = "var")]
    Variable,
    #[serde(rename = "local var")]
    LocalVariable,
    #[serde(rename = "function")]
    Function,
    #[serde(rename = "method")]
    Method,
    #[serde(rename = "property")]
    Property,
    #[serde(rename = "parameter")]
    Parameter,
    #[serde(rename = "label")]
    Label,
    #[serde(rename = "string")]
    String,
}

impl ScriptElementKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Warning => "warning",
            Self::Keyword => "keyword",
            Self::Script => "script",
            Self::Module => "module",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Type => "type",
            Self::Enum => "enum",
            Self::Variable => "var",
            Self::LocalVariable => "local var",
            Self::Function => "function",
            Self::Method => "method",
            Self::Property => "property",
            Self::Parameter => "parameter",
            Self::Label => "label",
            Self::String => "string",
        }
    }
}

/// A run of display text tagged with what it represents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDisplayPart {
    pub text: String,
    pub kind: String,
}

impl SymbolDisplayPart {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: kind.into(),
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, "text")
    }
}
