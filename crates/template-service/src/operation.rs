use std::fmt;

/// Host operations that an embedded language service may take over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Completions,
    CompletionEntryDetails,
    QuickInfo,
    SemanticDiagnostics,
    SyntacticDiagnostics,
    FormattingEdits,
    CodeFixes,
    SupportedCodeFixes,
    Definition,
    SignatureHelp,
    OutliningSpans,
    References,
    JsxClosingTag,
}

impl Operation {
    pub const ALL: [Self; 13] = [
        Self::Completions,
        Self::CompletionEntryDetails,
        Self::QuickInfo,
        Self::SemanticDiagnostics,
        Self::SyntacticDiagnostics,
        Self::FormattingEdits,
        Self::CodeFixes,
        Self::SupportedCodeFixes,
        Self::Definition,
        Self::SignatureHelp,
        Self::OutliningSpans,
        Self::References,
        Self::JsxClosingTag,
    ];

    /// Name of the host method this operation intercepts
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completions => "getCompletionsAtPosition",
            Self::CompletionEntryDetails => "getCompletionEntryDetails",
            Self::QuickInfo => "getQuickInfoAtPosition",
            Self::SemanticDiagnostics => "getSemanticDiagnostics",
            Self::SyntacticDiagnostics => "getSyntacticDiagnostics",
            Self::FormattingEdits => "getFormattingEditsForRange",
            Self::CodeFixes => "getCodeFixesAtPosition",
            Self::SupportedCodeFixes => "getSupportedCodeFixes",
            Self::Definition => "getDefinitionAtPosition",
            Self::SignatureHelp => "getSignatureHelpItems",
            Self::OutliningSpans => "getOutliningSpans",
            Self::References => "findReferences",
            Self::JsxClosingTag => "getJsxClosingTagAtPosition",
        }
    }

}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
