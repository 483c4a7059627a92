//! Map embedded answers from template-body coordinates back to the document.

use crate::{
    CodeFixAction, CompletionEntry, CompletionInfo, DefinitionInfo, Diagnostic, FileTextChanges,
    OutliningSpan, QuickInfo, ReferenceEntry, SignatureHelpItems, TextChange,
};
use template_source::{TemplateContext, TextSpan};

pub(crate) fn text_span(context: &TemplateContext, span: TextSpan) -> TextSpan {
    context.to_document_span(span)
}

pub(crate) fn diagnostic(context: &TemplateContext, diagnostic: Diagnostic) -> Diagnostic {
    let start = diagnostic.start.unwrap_or(0);
    let span = text_span(context, TextSpan::new(start, diagnostic.length.unwrap_or(0)));

    Diagnostic {
        start: Some(span.start),
        length: diagnostic.length.map(|_| span.length),
        ..diagnostic
    }
}

pub(crate) fn quick_info(context: &TemplateContext, info: QuickInfo) -> QuickInfo {
    QuickInfo {
        text_span: text_span(context, info.text_span),
        ..info
    }
}

pub(crate) fn completion_info(context: &TemplateContext, info: CompletionInfo) -> CompletionInfo {
    CompletionInfo {
        entries: info
            .entries
            .into_iter()
            .map(|entry| completion_entry(context, entry))
            .collect(),
        ..info
    }
}

fn completion_entry(context: &TemplateContext, entry: CompletionEntry) -> CompletionEntry {
    CompletionEntry {
        replacement_span: entry.replacement_span.map(|span| text_span(context, span)),
        ..entry
    }
}

pub(crate) fn text_change(context: &TemplateContext, change: TextChange) -> TextChange {
    TextChange {
        span: text_span(context, change.span),
        ..change
    }
}

fn file_text_changes(context: &TemplateContext, changes: FileTextChanges) -> FileTextChanges {
    FileTextChanges {
        file_name: changes.file_name,
        text_changes: changes
            .text_changes
            .into_iter()
            .map(|change| text_change(context, change))
            .collect(),
    }
}

pub(crate) fn code_action(context: &TemplateContext, action: CodeFixAction) -> CodeFixAction {
    CodeFixAction {
        fix_name: Some(action.fix_name.unwrap_or_default()),
        changes: action
            .changes
            .into_iter()
            .map(|changes| file_text_changes(context, changes))
            .collect(),
        ..action
    }
}

pub(crate) fn signature_help(
    context: &TemplateContext,
    items: SignatureHelpItems,
) -> SignatureHelpItems {
    SignatureHelpItems {
        applicable_span: text_span(context, items.applicable_span),
        ..items
    }
}

pub(crate) fn outlining_span(context: &TemplateContext, span: OutliningSpan) -> OutliningSpan {
    OutliningSpan {
        text_span: text_span(context, span.text_span),
        hint_span: text_span(context, span.hint_span),
        ..span
    }
}

pub(crate) fn definition_info(context: &TemplateContext, info: DefinitionInfo) -> DefinitionInfo {
    DefinitionInfo {
        file_name: context.file_name().to_string(),
        text_span: text_span(context, info.text_span),
        ..info
    }
}

pub(crate) fn reference_entry(context: &TemplateContext, entry: ReferenceEntry) -> ReferenceEntry {
    ReferenceEntry {
        file_name: context.file_name().to_string(),
        text_span: text_span(context, entry.text_span),
        ..entry
    }
}

/// Clip a document range to the body of `context`, as virtual text offsets.
///
/// Returns `None` when the range does not touch the body at all. Both ends
/// are inclusive.
pub(crate) fn template_range(
    context: &TemplateContext,
    start: usize,
    end: usize,
) -> Option<(usize, usize)> {
    let node_start = context.body_offset();
    let node_end = context.body_end();

    if end < node_start || start > node_end {
        return None;
    }

    Some((
        context.to_virtual_offset(start.max(node_start)),
        context.to_virtual_offset(node_end.min(end)),
    ))
}
