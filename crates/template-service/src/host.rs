use crate::{
    CodeFixAction, CompletionEntryDetails, CompletionInfo, DefinitionInfo, Diagnostic,
    FormatCodeSettings, JsxClosingTagInfo, OutliningSpan, QuickInfo, ReferencedSymbol, Result,
    SignatureHelpItems, TextChange,
};

/// The host language service being decorated.
///
/// Every operation is optional: the default bodies answer "nothing here",
/// which is what a host without that capability reports. Positions and
/// ranges are byte offsets into the file.
pub trait LanguageService {
    fn get_syntactic_diagnostics(&self, _file_name: &str) -> Result<Vec<Diagnostic>> {
        Ok(Vec::new())
    }

    fn get_semantic_diagnostics(&self, _file_name: &str) -> Result<Vec<Diagnostic>> {
        Ok(Vec::new())
    }

    fn get_quick_info_at_position(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<QuickInfo>> {
        Ok(None)
    }

    fn get_completions_at_position(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<CompletionInfo>> {
        Ok(None)
    }

    fn get_completion_entry_details(
        &self,
        _file_name: &str,
        _position: usize,
        _entry_name: &str,
    ) -> Result<Option<CompletionEntryDetails>> {
        Ok(None)
    }

    fn get_definition_at_position(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<Vec<DefinitionInfo>>> {
        Ok(None)
    }

    fn get_signature_help_items(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<SignatureHelpItems>> {
        Ok(None)
    }

    fn find_references(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<Vec<ReferencedSymbol>>> {
        Ok(None)
    }

    fn get_jsx_closing_tag_at_position(
        &self,
        _file_name: &str,
        _position: usize,
    ) -> Result<Option<JsxClosingTagInfo>> {
        Ok(None)
    }

    fn get_outlining_spans(&self, _file_name: &str) -> Result<Vec<OutliningSpan>> {
        Ok(Vec::new())
    }

    fn get_formatting_edits_for_range(
        &self,
        _file_name: &str,
        _start: usize,
        _end: usize,
        _options: &FormatCodeSettings,
    ) -> Result<Vec<TextChange>> {
        Ok(Vec::new())
    }

    fn get_code_fixes_at_position(
        &self,
        _file_name: &str,
        _start: usize,
        _end: usize,
        _error_codes: &[u32],
        _options: &FormatCodeSettings,
    ) -> Result<Vec<CodeFixAction>> {
        Ok(Vec::new())
    }

    /// Diagnostic codes the host can offer fixes for
    fn get_supported_code_fixes(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}
