use crate::template_service::TemplateHandler;
use crate::translate;
use crate::{
    CodeFixAction, CompletionEntryDetails, CompletionInfo, DefinitionInfo, Diagnostic,
    FormatCodeSettings, JsxClosingTagInfo, LanguageService, Operation, OutliningSpan, QuickInfo,
    ReferencedSymbol, ReferencedSymbolDefinitionInfo, Result, ScriptElementKind, ServiceError,
    SignatureHelpItems, TemplateLanguageService, TextChange,
};
use template_source::{
    Position, ScriptSourceHelper, TemplateContext, TemplateSourceHelper, TextSpan,
};

/// Decorates a host language service so that requests landing inside
/// qualifying template literals are answered by an embedded service.
///
/// Which operations are intercepted is decided once, in [`Self::new`], from
/// the capabilities the embedded service supplies. Every other operation is
/// forwarded to the host unchanged.
pub struct TemplateLanguageServiceProxy<L, H> {
    host: L,
    helper: TemplateSourceHelper<H>,
    service: TemplateLanguageService,
    bound: Vec<Operation>,
}

impl<L: LanguageService, H: ScriptSourceHelper> TemplateLanguageServiceProxy<L, H> {
    pub fn new(host: L, helper: TemplateSourceHelper<H>, service: TemplateLanguageService) -> Self {
        if helper.settings().is_empty() {
            tracing::warn!("No template tags configured; every request goes to the host");
        }

        let bound = service.operations();
        tracing::debug!(
            "Intercepting {} operations: {}",
            bound.len(),
            bound
                .iter()
                .map(|operation| operation.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self {
            host,
            helper,
            service,
            bound,
        }
    }

    #[must_use]
    pub const fn host(&self) -> &L {
        &self.host
    }

    #[must_use]
    pub const fn helper(&self) -> &TemplateSourceHelper<H> {
        &self.helper
    }

    /// Operations answered by the embedded service inside templates
    #[must_use]
    pub fn bound_operations(&self) -> &[Operation] {
        &self.bound
    }

    #[must_use]
    pub fn is_intercepted(&self, operation: Operation) -> bool {
        self.bound.contains(&operation)
    }

    /// Host fix codes followed by the embedded service's codes.
    ///
    /// Registering the merged list with the host is left to the caller.
    pub fn supported_code_fixes(&self) -> Result<Vec<String>> {
        let mut codes = self.host.get_supported_code_fixes()?;

        if let Some(handler) = &self.service.supported_code_fixes {
            let embedded = handler().map_err(|source| {
                ServiceError::template(Operation::SupportedCodeFixes, "", source)
            })?;
            codes.extend(embedded.iter().map(ToString::to_string));
        }

        Ok(codes)
    }

    fn template_at(&self, file_name: &str, position: usize) -> Option<(TemplateContext, Position)> {
        let context = self.helper.get_template(file_name, position)?;
        let relative = self.helper.get_relative_position(&context, position);
        tracing::trace!(
            "{}:{} maps to {}:{} in template",
            file_name,
            position,
            relative.line,
            relative.character
        );
        Some((context, relative))
    }

    fn adapt_diagnostics(
        &self,
        operation: Operation,
        file_name: &str,
        mut diagnostics: Vec<Diagnostic>,
        handler: &TemplateHandler<Vec<Diagnostic>>,
    ) -> Result<Vec<Diagnostic>> {
        for context in self.helper.get_all_templates(file_name) {
            let answer = embedded(operation, file_name, handler(&context))?;
            diagnostics.extend(
                answer
                    .into_iter()
                    .map(|diagnostic| translate::diagnostic(&context, diagnostic)),
            );
        }
        Ok(diagnostics)
    }
}

/// Attach the failing operation and file to an embedded service error
fn embedded<T>(operation: Operation, file_name: &str, result: anyhow::Result<T>) -> Result<T> {
    result.map_err(|source| {
        tracing::debug!("{} failed for {}: {}", operation, file_name, source);
        ServiceError::template(operation, file_name, source)
    })
}

impl<L: LanguageService, H: ScriptSourceHelper> LanguageService
    for TemplateLanguageServiceProxy<L, H>
{
    fn get_syntactic_diagnostics(&self, file_name: &str) -> Result<Vec<Diagnostic>> {
        let host = self.host.get_syntactic_diagnostics(file_name)?;
        match &self.service.syntactic_diagnostics {
            Some(handler) => {
                self.adapt_diagnostics(Operation::SyntacticDiagnostics, file_name, host, handler)
            }
            None => Ok(host),
        }
    }

    fn get_semantic_diagnostics(&self, file_name: &str) -> Result<Vec<Diagnostic>> {
        let host = self.host.get_semantic_diagnostics(file_name)?;
        match &self.service.semantic_diagnostics {
            Some(handler) => {
                self.adapt_diagnostics(Operation::SemanticDiagnostics, file_name, host, handler)
            }
            None => Ok(host),
        }
    }

    fn get_quick_info_at_position(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<QuickInfo>> {
        let Some(handler) = &self.service.quick_info else {
            return self.host.get_quick_info_at_position(file_name, position);
        };
        let Some((context, relative)) = self.template_at(file_name, position) else {
            return self.host.get_quick_info_at_position(file_name, position);
        };

        match embedded(Operation::QuickInfo, file_name, handler(&context, relative))? {
            Some(info) => Ok(Some(translate::quick_info(&context, info))),
            None => self.host.get_quick_info_at_position(file_name, position),
        }
    }

    fn get_completions_at_position(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<CompletionInfo>> {
        let Some(handler) = &self.service.completions else {
            return self.host.get_completions_at_position(file_name, position);
        };
        let Some((context, relative)) = self.template_at(file_name, position) else {
            return self.host.get_completions_at_position(file_name, position);
        };

        let info = embedded(Operation::Completions, file_name, handler(&context, relative))?;
        Ok(Some(translate::completion_info(&context, info)))
    }

    fn get_completion_entry_details(
        &self,
        file_name: &str,
        position: usize,
        entry_name: &str,
    ) -> Result<Option<CompletionEntryDetails>> {
        let Some(handler) = &self.service.completion_entry_details else {
            return self
                .host
                .get_completion_entry_details(file_name, position, entry_name);
        };
        let Some((context, relative)) = self.template_at(file_name, position) else {
            return self
                .host
                .get_completion_entry_details(file_name, position, entry_name);
        };

        // Details carry no coordinates
        embedded(
            Operation::CompletionEntryDetails,
            file_name,
            handler(&context, relative, entry_name),
        )
        .map(Some)
    }

    fn get_definition_at_position(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<Vec<DefinitionInfo>>> {
        let Some(handler) = &self.service.definition else {
            return self.host.get_definition_at_position(file_name, position);
        };
        let Some((context, relative)) = self.template_at(file_name, position) else {
            return self.host.get_definition_at_position(file_name, position);
        };

        let definitions = embedded(Operation::Definition, file_name, handler(&context, relative))?;
        Ok(definitions.map(|definitions| {
            definitions
                .into_iter()
                .map(|definition| translate::definition_info(&context, definition))
                .collect()
        }))
    }

    fn get_signature_help_items(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<SignatureHelpItems>> {
        let Some(handler) = &self.service.signature_help else {
            return self.host.get_signature_help_items(file_name, position);
        };
        let Some((context, relative)) = self.template_at(file_name, position) else {
            return self.host.get_signature_help_items(file_name, position);
        };

        let items = embedded(Operation::SignatureHelp, file_name, handler(&context, relative))?;
        Ok(items.map(|items| translate::signature_help(&context, items)))
    }

    fn find_references(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<Vec<ReferencedSymbol>>> {
        let Some(handler) = &self.service.references else {
            return self.host.find_references(file_name, position);
        };
        let Some((context, relative)) = self.template_at(file_name, position) else {
            return self.host.find_references(file_name, position);
        };

        let Some(references) =
            embedded(Operation::References, file_name, handler(&context, relative))?
        else {
            return Ok(None);
        };

        // The search starts inside a template, so there is no host symbol to
        // report as the definition.
        let definition = ReferencedSymbolDefinitionInfo {
            info: DefinitionInfo {
                file_name: file_name.to_string(),
                text_span: TextSpan::new(position, 0),
                kind: ScriptElementKind::String,
                name: String::new(),
                container_kind: ScriptElementKind::String,
                container_name: String::new(),
            },
            display_parts: Vec::new(),
        };

        Ok(Some(vec![ReferencedSymbol {
            definition,
            references: references
                .into_iter()
                .map(|entry| translate::reference_entry(&context, entry))
                .collect(),
        }]))
    }

    fn get_jsx_closing_tag_at_position(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<JsxClosingTagInfo>> {
        let Some(handler) = &self.service.jsx_closing_tag else {
            return self.host.get_jsx_closing_tag_at_position(file_name, position);
        };

        if let Some((context, relative)) = self.template_at(file_name, position) {
            let closing = embedded(Operation::JsxClosingTag, file_name, handler(&context, relative))?;
            if closing.is_some() {
                return Ok(closing);
            }
        }

        self.host.get_jsx_closing_tag_at_position(file_name, position)
    }

    fn get_outlining_spans(&self, file_name: &str) -> Result<Vec<OutliningSpan>> {
        let mut spans = self.host.get_outlining_spans(file_name)?;
        let Some(handler) = &self.service.outlining_spans else {
            return Ok(spans);
        };

        for context in self.helper.get_all_templates(file_name) {
            let answer = embedded(Operation::OutliningSpans, file_name, handler(&context))?;
            spans.extend(
                answer
                    .into_iter()
                    .map(|span| translate::outlining_span(&context, span)),
            );
        }

        Ok(spans)
    }

    fn get_formatting_edits_for_range(
        &self,
        file_name: &str,
        start: usize,
        end: usize,
        options: &FormatCodeSettings,
    ) -> Result<Vec<TextChange>> {
        let Some(handler) = &self.service.formatting_edits else {
            return self
                .host
                .get_formatting_edits_for_range(file_name, start, end, options);
        };

        let mut template_edits = Vec::new();
        for context in self.helper.get_all_templates(file_name) {
            let Some((template_start, template_end)) =
                translate::template_range(&context, start, end)
            else {
                continue;
            };

            let changes = embedded(
                Operation::FormattingEdits,
                file_name,
                handler(&context, template_start, template_end, options),
            )?;
            template_edits.extend(
                changes
                    .into_iter()
                    .map(|change| translate::text_change(&context, change)),
            );
        }

        let mut edits = self
            .host
            .get_formatting_edits_for_range(file_name, start, end, options)?;
        edits.extend(template_edits);
        Ok(edits)
    }

    fn get_code_fixes_at_position(
        &self,
        file_name: &str,
        start: usize,
        end: usize,
        error_codes: &[u32],
        options: &FormatCodeSettings,
    ) -> Result<Vec<CodeFixAction>> {
        let Some(handler) = &self.service.code_fixes else {
            return self
                .host
                .get_code_fixes_at_position(file_name, start, end, error_codes, options);
        };

        let mut template_actions = Vec::new();
        for context in self.helper.get_all_templates(file_name) {
            let Some((template_start, template_end)) =
                translate::template_range(&context, start, end)
            else {
                continue;
            };

            let actions = embedded(
                Operation::CodeFixes,
                file_name,
                handler(&context, template_start, template_end, error_codes, options),
            )?;
            template_actions.extend(
                actions
                    .into_iter()
                    .map(|action| translate::code_action(&context, action)),
            );
        }

        let mut actions = self
            .host
            .get_code_fixes_at_position(file_name, start, end, error_codes, options)?;
        actions.extend(template_actions);
        Ok(actions)
    }

    fn get_supported_code_fixes(&self) -> Result<Vec<String>> {
        self.supported_code_fixes()
    }
}
