use crate::{
    CodeFixAction, CompletionEntryDetails, CompletionInfo, DefinitionInfo, Diagnostic,
    FormatCodeSettings, JsxClosingTagInfo, Operation, OutliningSpan, QuickInfo, ReferenceEntry,
    SignatureHelpItems, TextChange,
};
use std::fmt;
use template_source::{Position, TemplateContext};

/// Handler answering for one position inside a template body
pub type PositionHandler<T> =
    dyn Fn(&TemplateContext, Position) -> anyhow::Result<T> + Send + Sync;

/// Handler answering for a whole template body
pub type TemplateHandler<T> = dyn Fn(&TemplateContext) -> anyhow::Result<T> + Send + Sync;

pub type CompletionEntryDetailsHandler = dyn Fn(&TemplateContext, Position, &str) -> anyhow::Result<CompletionEntryDetails>
    + Send
    + Sync;

/// `(context, start, end, options)` with `start..=end` as virtual text offsets
pub type FormattingHandler = dyn Fn(&TemplateContext, usize, usize, &FormatCodeSettings) -> anyhow::Result<Vec<TextChange>>
    + Send
    + Sync;

/// `(context, start, end, error_codes, options)` with `start..=end` as virtual text offsets
pub type CodeFixHandler = dyn Fn(
        &TemplateContext,
        usize,
        usize,
        &[u32],
        &FormatCodeSettings,
    ) -> anyhow::Result<Vec<CodeFixAction>>
    + Send
    + Sync;

pub type SupportedCodeFixesHandler = dyn Fn() -> anyhow::Result<Vec<u32>> + Send + Sync;

/// Capabilities of an embedded language service.
///
/// Each capability is optional. Positions, ranges and spans on both sides of
/// a handler are relative to the template body (virtual coordinates).
#[derive(Default)]
pub struct TemplateLanguageService {
    pub(crate) completions: Option<Box<PositionHandler<CompletionInfo>>>,
    pub(crate) completion_entry_details: Option<Box<CompletionEntryDetailsHandler>>,
    pub(crate) quick_info: Option<Box<PositionHandler<Option<QuickInfo>>>>,
    pub(crate) semantic_diagnostics: Option<Box<TemplateHandler<Vec<Diagnostic>>>>,
    pub(crate) syntactic_diagnostics: Option<Box<TemplateHandler<Vec<Diagnostic>>>>,
    pub(crate) formatting_edits: Option<Box<FormattingHandler>>,
    pub(crate) code_fixes: Option<Box<CodeFixHandler>>,
    pub(crate) supported_code_fixes: Option<Box<SupportedCodeFixesHandler>>,
    pub(crate) definition: Option<Box<PositionHandler<Option<Vec<DefinitionInfo>>>>>,
    pub(crate) signature_help: Option<Box<PositionHandler<Option<SignatureHelpItems>>>>,
    pub(crate) outlining_spans: Option<Box<TemplateHandler<Vec<OutliningSpan>>>>,
    pub(crate) references: Option<Box<PositionHandler<Option<Vec<ReferenceEntry>>>>>,
    pub(crate) jsx_closing_tag: Option<Box<PositionHandler<Option<JsxClosingTagInfo>>>>,
}

impl TemplateLanguageService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_completions<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position) -> anyhow::Result<CompletionInfo> + Send + Sync + 'static,
    {
        self.completions = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_completion_entry_details<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position, &str) -> anyhow::Result<CompletionEntryDetails>
            + Send
            + Sync
            + 'static,
    {
        self.completion_entry_details = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_quick_info<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position) -> anyhow::Result<Option<QuickInfo>>
            + Send
            + Sync
            + 'static,
    {
        self.quick_info = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_semantic_diagnostics<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext) -> anyhow::Result<Vec<Diagnostic>> + Send + Sync + 'static,
    {
        self.semantic_diagnostics = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_syntactic_diagnostics<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext) -> anyhow::Result<Vec<Diagnostic>> + Send + Sync + 'static,
    {
        self.syntactic_diagnostics = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_formatting_edits<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, usize, usize, &FormatCodeSettings) -> anyhow::Result<Vec<TextChange>>
            + Send
            + Sync
            + 'static,
    {
        self.formatting_edits = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_code_fixes<F>(mut self, f: F) -> Self
    where
        F: Fn(
                &TemplateContext,
                usize,
                usize,
                &[u32],
                &FormatCodeSettings,
            ) -> anyhow::Result<Vec<CodeFixAction>>
            + Send
            + Sync
            + 'static,
    {
        self.code_fixes = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_supported_code_fixes<F>(mut self, f: F) -> Self
    where
        F: Fn() -> anyhow::Result<Vec<u32>> + Send + Sync + 'static,
    {
        self.supported_code_fixes = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_definition<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position) -> anyhow::Result<Option<Vec<DefinitionInfo>>>
            + Send
            + Sync
            + 'static,
    {
        self.definition = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_signature_help<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position) -> anyhow::Result<Option<SignatureHelpItems>>
            + Send
            + Sync
            + 'static,
    {
        self.signature_help = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_outlining_spans<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext) -> anyhow::Result<Vec<OutliningSpan>> + Send + Sync + 'static,
    {
        self.outlining_spans = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_references<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position) -> anyhow::Result<Option<Vec<ReferenceEntry>>>
            + Send
            + Sync
            + 'static,
    {
        self.references = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn with_jsx_closing_tag<F>(mut self, f: F) -> Self
    where
        F: Fn(&TemplateContext, Position) -> anyhow::Result<Option<JsxClosingTagInfo>>
            + Send
            + Sync
            + 'static,
    {
        self.jsx_closing_tag = Some(Box::new(f));
        self
    }

    /// Whether a handler was supplied for `operation`
    #[must_use]
    pub const fn provides(&self, operation: Operation) -> bool {
        match operation {
            Operation::Completions => self.completions.is_some(),
            Operation::CompletionEntryDetails => self.completion_entry_details.is_some(),
            Operation::QuickInfo => self.quick_info.is_some(),
            Operation::SemanticDiagnostics => self.semantic_diagnostics.is_some(),
            Operation::SyntacticDiagnostics => self.syntactic_diagnostics.is_some(),
            Operation::FormattingEdits => self.formatting_edits.is_some(),
            Operation::CodeFixes => self.code_fixes.is_some(),
            Operation::SupportedCodeFixes => self.supported_code_fixes.is_some(),
            Operation::Definition => self.definition.is_some(),
            Operation::SignatureHelp => self.signature_help.is_some(),
            Operation::OutliningSpans => self.outlining_spans.is_some(),
            Operation::References => self.references.is_some(),
            Operation::JsxClosingTag => self.jsx_closing_tag.is_some(),
        }
    }

    /// The operations this service supplies, in a stable order
    #[must_use]
    pub fn operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|operation| self.provides(*operation))
            .collect()
    }
}

impl fmt::Debug for TemplateLanguageService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateLanguageService")
            .field("operations", &self.operations())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_service_provides_nothing() {
        let service = TemplateLanguageService::new();
        assert!(service.operations().is_empty());
        assert!(!service.provides(Operation::QuickInfo));
    }

    #[test]
    fn test_operations_in_stable_order() {
        let service = TemplateLanguageService::new()
            .with_references(|_, _| Ok(None))
            .with_quick_info(|_, _| Ok(None))
            .with_supported_code_fixes(|| Ok(vec![1]));

        assert_eq!(
            service.operations(),
            vec![
                Operation::QuickInfo,
                Operation::SupportedCodeFixes,
                Operation::References
            ]
        );
        assert_eq!(
            format!("{service:?}"),
            "TemplateLanguageService { operations: [QuickInfo, SupportedCodeFixes, References] }"
        );
    }
}
