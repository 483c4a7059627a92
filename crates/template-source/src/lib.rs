//! Template literal discovery and coordinate mapping for embedded languages.
//!
//! A [`TemplateSourceHelper`] finds the tagged template literals of a file
//! that an embedded language service is responsible for, and wraps each one in
//! a [`TemplateContext`] translating between document coordinates and
//! coordinates relative to the template body.

mod context;
mod helper;
mod host;
mod line_index;
mod locator;
mod parser;
mod position;
mod substitution;
mod syntax;

pub use context::TemplateContext;
pub use helper::TemplateSourceHelper;
pub use host::{MemorySourceHost, ScriptSourceHelper};
pub use line_index::LineIndex;
pub use locator::{is_tagged, locate_template, valid_template_node};
pub use position::{Position, TextSpan};
pub use substitution::{
    placeholder_spans, replace_placeholders, substitute, template_body, PlaceholderSpan,
    SubstitutedText, Substitution, SubstitutionFn, SubstitutionHooks, SubstitutionsFn,
};
pub use syntax::{Node, NodeId, SourceFile, SyntaxKind};

// Re-export common types from dependencies
pub use template_config::TemplateSettings;
