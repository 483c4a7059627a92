//! Language-service decorator for embedded languages in tagged templates.
//!
//! [`TemplateLanguageServiceProxy`] wraps a host [`LanguageService`]. Requests
//! that land inside a template literal whose tag is configured are answered by
//! a [`TemplateLanguageService`] working in template-relative coordinates;
//! the answers are mapped back to document coordinates. Everything else goes
//! to the host.

mod completion;
mod diagnostics;
mod edits;
mod error;
mod host;
mod navigation;
mod operation;
mod proxy;
mod symbol;
mod template_service;
mod translate;

pub use completion::{CompletionEntry, CompletionEntryDetails, CompletionInfo, QuickInfo};
pub use diagnostics::{Diagnostic, DiagnosticCategory};
pub use edits::{CodeFixAction, FileTextChanges, FormatCodeSettings, TextChange};
pub use error::{Result, ServiceError};
pub use host::LanguageService;
pub use navigation::{
    DefinitionInfo, JsxClosingTagInfo, OutliningSpan, OutliningSpanKind, ReferenceEntry,
    ReferencedSymbol, ReferencedSymbolDefinitionInfo, SignatureHelpItem, SignatureHelpItems,
    SignatureHelpParameter,
};
pub use operation::Operation;
pub use proxy::TemplateLanguageServiceProxy;
pub use symbol::{ScriptElementKind, SymbolDisplayPart};
pub use template_service::{
    CodeFixHandler, CompletionEntryDetailsHandler, FormattingHandler, PositionHandler,
    SupportedCodeFixesHandler, TemplateHandler, TemplateLanguageService,
};

// Re-export common types from dependencies
pub use template_config::TemplateSettings;
pub use template_source::{
    MemorySourceHost, Position, ScriptSourceHelper, SubstitutionHooks, TemplateContext,
    TemplateSourceHelper, TextSpan,
};
