use insta::assert_snapshot;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};
use template_service::{
    CodeFixAction, CompletionEntry, CompletionEntryDetails, CompletionInfo, DefinitionInfo,
    Diagnostic, DiagnosticCategory, FileTextChanges, FormatCodeSettings, JsxClosingTagInfo,
    LanguageService, MemorySourceHost, Operation, OutliningSpan, Position, QuickInfo,
    ReferenceEntry, ReferencedSymbol, Result, ScriptElementKind, ServiceError,
    SignatureHelpItems, SubstitutionHooks, SymbolDisplayPart, TemplateLanguageService, TemplateLanguageServiceProxy,
    TemplateSettings, TemplateSourceHelper, TextChange, TextSpan,
};

const FILE: &str = "queries.ts";

// Body offsets of the two `sql` templates in the fixture
const FIRST_BODY: usize = 54;
const SECOND_BODY: usize = 132;

/// Load the fixture source
fn fixture() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(FILE);
    fs::read_to_string(path).expect("Failed to read fixture")
}

fn offset_of(source: &str, needle: &str) -> usize {
    source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not in fixture"))
}

/// Host service that answers everything and records what it was asked
#[derive(Default)]
struct RecordingHost {
    calls: Mutex<Vec<String>>,
}

impl RecordingHost {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl LanguageService for RecordingHost {
    fn get_syntactic_diagnostics(&self, file_name: &str) -> Result<Vec<Diagnostic>> {
        self.record(format!("syntactic {file_name}"));
        Ok(vec![Diagnostic::error("host syntactic", 1005).with_span(7, 1)])
    }

    fn get_semantic_diagnostics(&self, file_name: &str) -> Result<Vec<Diagnostic>> {
        self.record(format!("semantic {file_name}"));
        Ok(vec![Diagnostic::error("host semantic", 2304).with_span(0, 6)])
    }

    fn get_quick_info_at_position(
        &self,
        _file_name: &str,
        position: usize,
    ) -> Result<Option<QuickInfo>> {
        self.record(format!("quick info {position}"));
        Ok(Some(QuickInfo {
            kind: ScriptElementKind::Variable,
            text_span: TextSpan::new(position, 1),
            display_parts: vec![SymbolDisplayPart::text("host")],
            ..QuickInfo::default()
        }))
    }

    fn get_completions_at_position(
        &self,
        _file_name: &str,
        position: usize,
    ) -> Result<Option<CompletionInfo>> {
        self.record(format!("completions {position}"));
        Ok(Some(CompletionInfo::new(vec![CompletionEntry::new(
            "hostEntry",
            ScriptElementKind::Variable,
        )])))
    }

    fn get_completion_entry_details(
        &self,
        _file_name: &str,
        position: usize,
        entry_name: &str,
    ) -> Result<Option<CompletionEntryDetails>> {
        self.record(format!("details {position} {entry_name}"));
        Ok(Some(CompletionEntryDetails {
            name: format!("host:{entry_name}"),
            ..CompletionEntryDetails::default()
        }))
    }

    fn get_definition_at_position(
        &self,
        file_name: &str,
        position: usize,
    ) -> Result<Option<Vec<DefinitionInfo>>> {
        self.record(format!("definition {position}"));
        Ok(Some(vec![DefinitionInfo {
            file_name: file_name.to_string(),
            text_span: TextSpan::new(0, 3),
            name: "hostDefinition".to_string(),
            ..DefinitionInfo::default()
        }]))
    }

    fn get_signature_help_items(
        &self,
        _file_name: &str,
        position: usize,
    ) -> Result<Option<SignatureHelpItems>> {
        self.record(format!("signature help {position}"));
        Ok(Some(SignatureHelpItems {
            argument_count: 9,
            ..SignatureHelpItems::default()
        }))
    }

    fn find_references(
        &self,
        _file_name: &str,
        position: usize,
    ) -> Result<Option<Vec<ReferencedSymbol>>> {
        self.record(format!("references {position}"));
        Ok(Some(Vec::new()))
    }

    fn get_jsx_closing_tag_at_position(
        &self,
        _file_name: &str,
        position: usize,
    ) -> Result<Option<JsxClosingTagInfo>> {
        self.record(format!("closing tag {position}"));
        Ok(Some(JsxClosingTagInfo {
            new_text: "</host>".to_string(),
        }))
    }

    fn get_outlining_spans(&self, file_name: &str) -> Result<Vec<OutliningSpan>> {
        self.record(format!("outlining {file_name}"));
        Ok(vec![OutliningSpan {
            text_span: TextSpan::new(0, 27),
            hint_span: TextSpan::new(0, 27),
            ..OutliningSpan::default()
        }])
    }

    fn get_formatting_edits_for_range(
        &self,
        _file_name: &str,
        start: usize,
        end: usize,
        _options: &FormatCodeSettings,
    ) -> Result<Vec<TextChange>> {
        self.record(format!("format {start}..{end}"));
        Ok(vec![TextChange::new(TextSpan::new(start, 0), "host")])
    }

    fn get_code_fixes_at_position(
        &self,
        _file_name: &str,
        start: usize,
        end: usize,
        _error_codes: &[u32],
        _options: &FormatCodeSettings,
    ) -> Result<Vec<CodeFixAction>> {
        self.record(format!("code fixes {start}..{end}"));
        Ok(vec![
            CodeFixAction::new("Host fix", Vec::new()).with_fix_name("hostFix")
        ])
    }

    fn get_supported_code_fixes(&self) -> Result<Vec<String>> {
        Ok(vec!["2304".to_string(), "2552".to_string()])
    }
}

fn settings() -> TemplateSettings {
    TemplateSettings::new(["sql"]).with_substitutions(true)
}

fn proxy_with(
    settings: TemplateSettings,
    service: TemplateLanguageService,
) -> (
    String,
    TemplateLanguageServiceProxy<RecordingHost, MemorySourceHost>,
) {
    let source = fixture();
    let files = MemorySourceHost::new();
    files.open(FILE, source.clone());
    let helper = TemplateSourceHelper::new(files, settings);
    let proxy = TemplateLanguageServiceProxy::new(RecordingHost::default(), helper, service);
    (source, proxy)
}

fn proxy(
    service: TemplateLanguageService,
) -> (
    String,
    TemplateLanguageServiceProxy<RecordingHost, MemorySourceHost>,
) {
    proxy_with(settings(), service)
}

/// Embedded service answering every operation from the template body
fn echo_service() -> TemplateLanguageService {
    TemplateLanguageService::new()
        .with_quick_info(|_, position| {
            Ok(Some(QuickInfo {
                kind: ScriptElementKind::Keyword,
                text_span: TextSpan::new(position.character, 4),
                display_parts: vec![SymbolDisplayPart::text(format!(
                    "{}:{}",
                    position.line, position.character
                ))],
                ..QuickInfo::default()
            }))
        })
        .with_completions(|context, position| {
            let start = context.to_offset(position).unwrap_or_default();
            Ok(CompletionInfo::new(vec![CompletionEntry::new(
                format!("{}:{}", position.line, position.character),
                ScriptElementKind::Keyword,
            )
            .with_replacement_span(TextSpan::new(start, 5))]))
        })
        .with_semantic_diagnostics(|context| {
            Ok(vec![Diagnostic::warning(
                format!("template at {}", context.body_offset()),
                9001,
            )
            .with_span(0, 6)])
        })
        .with_definition(|context, position| {
            let start = context.to_offset(position).unwrap_or_default();
            Ok(Some(vec![DefinitionInfo {
                file_name: "schema.sql".to_string(),
                text_span: TextSpan::new(start, 5),
                kind: ScriptElementKind::Type,
                name: "users".to_string(),
                ..DefinitionInfo::default()
            }]))
        })
        .with_references(|context, _| {
            Ok(Some(vec![
                ReferenceEntry {
                    file_name: "schema.sql".to_string(),
                    text_span: TextSpan::new(0, 6),
                    ..ReferenceEntry::default()
                },
                ReferenceEntry {
                    file_name: "schema.sql".to_string(),
                    text_span: TextSpan::new(context.text().len(), 0),
                    is_write_access: true,
                    ..ReferenceEntry::default()
                },
            ]))
        })
}

#[test]
fn test_pass_through_without_capabilities() {
    let (source, proxy) = proxy(TemplateLanguageService::new());
    let inside = offset_of(&source, "name from");
    let options = FormatCodeSettings::default();

    assert!(proxy.bound_operations().is_empty());

    let host = RecordingHost::default();
    assert_eq!(
        proxy.get_quick_info_at_position(FILE, inside).unwrap(),
        host.get_quick_info_at_position(FILE, inside).unwrap()
    );
    assert_eq!(
        proxy.get_completions_at_position(FILE, inside).unwrap(),
        host.get_completions_at_position(FILE, inside).unwrap()
    );
    assert_eq!(
        proxy.get_semantic_diagnostics(FILE).unwrap(),
        host.get_semantic_diagnostics(FILE).unwrap()
    );
    assert_eq!(
        proxy
            .get_formatting_edits_for_range(FILE, 0, source.len(), &options)
            .unwrap(),
        host.get_formatting_edits_for_range(FILE, 0, source.len(), &options)
            .unwrap()
    );
    assert_eq!(
        proxy.get_supported_code_fixes().unwrap(),
        vec!["2304", "2552"]
    );
    assert_eq!(proxy.host().calls(), host.calls());
}

#[test]
fn test_quick_info_inside_template() {
    let (source, proxy) = proxy(echo_service());
    let position = offset_of(&source, "name from");

    let info = proxy
        .get_quick_info_at_position(FILE, position)
        .unwrap()
        .unwrap();

    assert_eq!(info.kind, ScriptElementKind::Keyword);
    assert_eq!(info.text_span, TextSpan::new(position, 4));
    assert_eq!(info.display_parts[0].text, format!("0:{}", position - FIRST_BODY));
    assert!(proxy.host().calls().is_empty());
}

#[test]
fn test_quick_info_outside_template_goes_to_host() {
    let (source, proxy) = proxy(echo_service());

    for position in [
        offset_of(&source, "import"),
        offset_of(&source, "${id}") + 2,
        offset_of(&source, "not a query"),
        FIRST_BODY - 1,
    ] {
        let info = proxy
            .get_quick_info_at_position(FILE, position)
            .unwrap()
            .unwrap();
        assert_eq!(info.display_parts[0].text, "host", "position {position}");
    }
    assert_eq!(proxy.host().calls().len(), 4);
}

#[test]
fn test_quick_info_falls_back_when_template_has_no_answer() {
    let (source, proxy) = proxy(TemplateLanguageService::new().with_quick_info(|_, _| Ok(None)));
    let position = offset_of(&source, "name from");

    let info = proxy
        .get_quick_info_at_position(FILE, position)
        .unwrap()
        .unwrap();
    assert_eq!(info.display_parts[0].text, "host");
    assert_eq!(proxy.host().calls(), vec![format!("quick info {position}")]);
}

#[test]
fn test_completions_on_later_template_line() {
    let (source, proxy) = proxy(echo_service());
    let position = offset_of(&source, "users\n     where");

    let info = proxy
        .get_completions_at_position(FILE, position)
        .unwrap()
        .unwrap();

    assert_eq!(info.entries.len(), 1);
    assert_eq!(info.entries[0].name, "2:11");
    assert_eq!(
        info.entries[0].replacement_span,
        Some(TextSpan::new(position, 5))
    );
    assert!(proxy.host().calls().is_empty());
}

#[test]
fn test_completion_details_returned_verbatim() {
    let details = CompletionEntryDetails {
        name: "select".to_string(),
        kind: ScriptElementKind::Keyword,
        kind_modifiers: "embedded".to_string(),
        display_parts: vec![SymbolDisplayPart::new("SELECT", "keyword")],
        documentation: vec![SymbolDisplayPart::text("Retrieve rows")],
    };
    let expected = details.clone();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in_service = Arc::clone(&seen);

    let (source, proxy) = proxy(TemplateLanguageService::new().with_completion_entry_details(
        move |_, position, name| {
            seen_in_service
                .lock()
                .unwrap()
                .push((position, name.to_string()));
            Ok(details.clone())
        },
    ));
    let position = offset_of(&source, "select *");

    let answer = proxy
        .get_completion_entry_details(FILE, position, "select")
        .unwrap();

    assert_eq!(answer, Some(expected));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Position::new(1, 4), "select".to_string())]
    );
    assert!(proxy.host().calls().is_empty());
}

#[test]
fn test_diagnostics_host_first_then_templates_in_order() {
    // Each template reports its diagnostics in reverse order
    let (_, proxy) = proxy(TemplateLanguageService::new().with_semantic_diagnostics(|_| {
        Ok(vec![
            Diagnostic::error("second", 2).with_span(3, 1),
            Diagnostic::error("first", 1).with_span(0, 1),
        ])
    }));

    let diagnostics = proxy.get_semantic_diagnostics(FILE).unwrap();
    let starts: Vec<_> = diagnostics.iter().map(|d| d.start).collect();

    assert_eq!(diagnostics[0].message_text, "host semantic");
    assert_eq!(
        starts,
        vec![
            Some(0),
            Some(FIRST_BODY + 3),
            Some(FIRST_BODY),
            Some(SECOND_BODY + 3),
            Some(SECOND_BODY),
        ]
    );
}

#[test]
fn test_diagnostics_without_start_land_on_template_body() {
    let (_, proxy) = proxy(
        TemplateLanguageService::new()
            .with_syntactic_diagnostics(|_| Ok(vec![Diagnostic::error("unterminated", 1)])),
    );

    let diagnostics = proxy.get_syntactic_diagnostics(FILE).unwrap();
    let starts: Vec<_> = diagnostics.iter().map(|d| d.start).collect();
    assert_eq!(starts, vec![Some(7), Some(FIRST_BODY), Some(SECOND_BODY)]);

    // Semantic diagnostics were not supplied
    assert!(!proxy.is_intercepted(Operation::SemanticDiagnostics));
    assert_eq!(proxy.get_semantic_diagnostics(FILE).unwrap().len(), 1);
}

#[test]
fn test_diagnostics_snapshot() {
    let (_, proxy) = proxy(echo_service());

    let rendered = proxy
        .get_semantic_diagnostics(FILE)
        .unwrap()
        .iter()
        .map(|d| {
            let start = d.start.unwrap_or_default();
            let category = match d.category {
                DiagnosticCategory::Error => "error",
                DiagnosticCategory::Warning => "warning",
                DiagnosticCategory::Suggestion => "suggestion",
                DiagnosticCategory::Message => "message",
            };
            format!(
                "{}..{} {} {}: {}",
                start,
                start + d.length.unwrap_or_default(),
                category,
                d.code,
                d.message_text
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r"
    0..6 error 2304: host semantic
    54..60 warning 9001: template at 54
    132..138 warning 9001: template at 132
    ");
}

#[test]
fn test_definition_translated_into_document() {
    let (source, proxy) = proxy(echo_service());
    let position = offset_of(&source, "users\n     where");

    let definitions = proxy
        .get_definition_at_position(FILE, position)
        .unwrap()
        .unwrap();

    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0].file_name, FILE);
    assert_eq!(definitions[0].text_span, TextSpan::new(position, 5));
    assert_eq!(definitions[0].name, "users");
}

#[test]
fn test_empty_definition_inside_template_is_none() {
    let (source, proxy) = proxy(TemplateLanguageService::new().with_definition(|_, _| Ok(None)));

    let inside = offset_of(&source, "name from");
    assert_eq!(proxy.get_definition_at_position(FILE, inside).unwrap(), None);
    assert!(proxy.host().calls().is_empty());

    let outside = offset_of(&source, "byId");
    let host_answer = proxy.get_definition_at_position(FILE, outside).unwrap();
    assert_eq!(host_answer.unwrap()[0].name, "hostDefinition");
}

#[test]
fn test_references_inside_template() {
    let (source, proxy) = proxy(echo_service());
    let position = offset_of(&source, "name from");

    let symbols = proxy.find_references(FILE, position).unwrap().unwrap();
    assert_eq!(symbols.len(), 1);

    let definition = &symbols[0].definition;
    assert_eq!(definition.info.file_name, FILE);
    assert_eq!(definition.info.kind, ScriptElementKind::String);
    assert_eq!(definition.info.container_kind, ScriptElementKind::String);
    assert_eq!(definition.info.name, "");
    assert_eq!(definition.info.container_name, "");
    assert!(definition.display_parts.is_empty());
    assert_eq!(definition.info.text_span, TextSpan::new(position, 0));

    let references = &symbols[0].references;
    assert_eq!(references.len(), 2);
    assert!(references.iter().all(|r| r.file_name == FILE));
    assert_eq!(references[0].text_span, TextSpan::new(FIRST_BODY, 6));
    assert_eq!(references[1].text_span, TextSpan::new(80, 0));
    assert!(references[1].is_write_access);
    assert!(proxy.host().calls().is_empty());
}

#[test]
fn test_references_without_answer_is_none() {
    let (source, proxy) = proxy(TemplateLanguageService::new().with_references(|_, _| Ok(None)));
    let position = offset_of(&source, "name from");

    assert_eq!(proxy.find_references(FILE, position).unwrap(), None);
    assert!(proxy.host().calls().is_empty());
}

#[test]
fn test_signature_help_inside_template() {
    let (source, proxy) = proxy(TemplateLanguageService::new().with_signature_help(
        |_, position| {
            if position.line == 0 {
                return Ok(None);
            }
            Ok(Some(SignatureHelpItems {
                applicable_span: TextSpan::new(5, 3),
                argument_count: 1,
                ..SignatureHelpItems::default()
            }))
        },
    ));

    let first = offset_of(&source, "name from");
    assert_eq!(proxy.get_signature_help_items(FILE, first).unwrap(), None);

    let second = offset_of(&source, "select *");
    let items = proxy.get_signature_help_items(FILE, second).unwrap().unwrap();
    assert_eq!(items.argument_count, 1);
    assert_eq!(items.applicable_span, TextSpan::new(SECOND_BODY + 5, 3));
    assert!(proxy.host().calls().is_empty());
}

#[test]
fn test_closing_tag_falls_back_to_host() {
    let (source, proxy) = proxy(TemplateLanguageService::new().with_jsx_closing_tag(
        |context, _| {
            Ok(context.text().contains("where").then(|| JsxClosingTagInfo {
                new_text: "</where>".to_string(),
            }))
        },
    ));

    let first = offset_of(&source, "name from");
    let answer = proxy.get_jsx_closing_tag_at_position(FILE, first).unwrap();
    assert_eq!(answer.unwrap().new_text, "</host>");

    let second = offset_of(&source, "select *");
    let answer = proxy.get_jsx_closing_tag_at_position(FILE, second).unwrap();
    assert_eq!(answer.unwrap().new_text, "</where>");

    assert_eq!(proxy.host().calls(), vec![format!("closing tag {first}")]);
}

#[test]
fn test_outlining_spans_concatenated() {
    let (_, proxy) = proxy(TemplateLanguageService::new().with_outlining_spans(|context| {
        let length = context.text().len();
        Ok(vec![OutliningSpan {
            text_span: TextSpan::new(0, length),
            hint_span: TextSpan::new(0, length.min(6)),
            banner_text: "...".to_string(),
            ..OutliningSpan::default()
        }])
    }));

    let spans = proxy.get_outlining_spans(FILE).unwrap();
    let text_spans: Vec<_> = spans.iter().map(|s| s.text_span).collect();
    assert_eq!(
        text_spans,
        vec![
            TextSpan::new(0, 27),
            TextSpan::new(FIRST_BODY, 26),
            TextSpan::new(SECOND_BODY, 55),
        ]
    );
    assert_eq!(spans[2].hint_span, TextSpan::new(SECOND_BODY, 6));
}

#[test]
fn test_formatting_only_touches_intersecting_templates() {
    let ranges = Arc::new(Mutex::new(Vec::new()));
    let ranges_in_service = Arc::clone(&ranges);
    let (source, proxy) = proxy(TemplateLanguageService::new().with_formatting_edits(
        move |context, start, end, _| {
            ranges_in_service
                .lock()
                .unwrap()
                .push((context.body_offset(), start, end));
            Ok(vec![TextChange::new(TextSpan::new(start, 0), "  ")])
        },
    ));
    let options = FormatCodeSettings {
        tab_size: Some(2),
        ..FormatCodeSettings::default()
    };

    // Only the first template
    let edits = proxy
        .get_formatting_edits_for_range(FILE, 60, 70, &options)
        .unwrap();
    assert_eq!(
        edits,
        vec![
            TextChange::new(TextSpan::new(60, 0), "host"),
            TextChange::new(TextSpan::new(60, 0), "  "),
        ]
    );
    assert_eq!(*ranges.lock().unwrap(), vec![(FIRST_BODY, 6, 16)]);

    // The whole file reaches both templates, clipped to their bodies
    ranges.lock().unwrap().clear();
    let edits = proxy
        .get_formatting_edits_for_range(FILE, 0, source.len(), &options)
        .unwrap();
    assert_eq!(edits.len(), 3);
    assert_eq!(edits[1].span.start, FIRST_BODY);
    assert_eq!(edits[2].span.start, SECOND_BODY);
    assert_eq!(
        *ranges.lock().unwrap(),
        vec![(FIRST_BODY, 0, 26), (SECOND_BODY, 0, 55)]
    );

    // Outside every template
    ranges.lock().unwrap().clear();
    let edits = proxy
        .get_formatting_edits_for_range(FILE, 0, 10, &options)
        .unwrap();
    assert_eq!(edits.len(), 1);
    assert!(ranges.lock().unwrap().is_empty());
}

#[test]
fn test_code_fixes_host_first() {
    let (source, proxy) = proxy(TemplateLanguageService::new().with_code_fixes(
        |context, start, end, error_codes, _| {
            assert_eq!(error_codes, &[9001]);
            Ok(vec![CodeFixAction::new(
                format!("Fix {start}..{end}"),
                vec![FileTextChanges {
                    file_name: context.file_name().to_string(),
                    text_changes: vec![TextChange::new(TextSpan::new(start, 5), "WHERE")],
                }],
            )])
        },
    ));
    let position = offset_of(&source, "where id");

    let actions = proxy
        .get_code_fixes_at_position(
            FILE,
            position,
            position + 5,
            &[9001],
            &FormatCodeSettings::default(),
        )
        .unwrap();

    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].fix_name.as_deref(), Some("hostFix"));
    assert_eq!(actions[1].fix_name.as_deref(), Some(""));

    let relative = position - SECOND_BODY;
    assert_eq!(
        actions[1].description,
        format!("Fix {}..{}", relative, relative + 5)
    );
    assert_eq!(
        actions[1].changes[0].text_changes[0].span,
        TextSpan::new(position, 5)
    );
}

#[test]
fn test_supported_code_fixes_host_then_embedded() {
    let (_, proxy) = proxy(
        TemplateLanguageService::new().with_supported_code_fixes(|| Ok(vec![9001, 9002])),
    );

    let expected = vec!["2304", "2552", "9001", "9002"];
    assert_eq!(proxy.supported_code_fixes().unwrap(), expected);
    assert_eq!(proxy.get_supported_code_fixes().unwrap(), expected);
}

#[test]
fn test_embedded_failure_fails_whole_operation() {
    let (_, proxy) = proxy(TemplateLanguageService::new().with_semantic_diagnostics(|context| {
        if context.text().contains("where") {
            anyhow::bail!("unknown table");
        }
        Ok(vec![Diagnostic::error("ok", 1)])
    }));

    let err = proxy.get_semantic_diagnostics(FILE).unwrap_err();
    match err {
        ServiceError::Template {
            operation,
            file_name,
            source,
        } => {
            assert_eq!(operation, Operation::SemanticDiagnostics);
            assert_eq!(file_name, FILE);
            assert_eq!(source.to_string(), "unknown table");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_tags_pass_everything_through() {
    let (source, proxy) = proxy_with(
        TemplateSettings::default().with_substitutions(true),
        echo_service(),
    );
    let inside = offset_of(&source, "name from");

    let info = proxy
        .get_quick_info_at_position(FILE, inside)
        .unwrap()
        .unwrap();
    assert_eq!(info.display_parts[0].text, "host");
    assert_eq!(proxy.get_semantic_diagnostics(FILE).unwrap().len(), 1);
}

#[test]
fn test_substitutions_disabled_skips_templates_with_holes() {
    let (source, proxy) = proxy_with(TemplateSettings::new(["sql"]), echo_service());

    let second = offset_of(&source, "select *");
    let info = proxy
        .get_quick_info_at_position(FILE, second)
        .unwrap()
        .unwrap();
    assert_eq!(info.display_parts[0].text, "host");

    let starts: Vec<_> = proxy
        .get_semantic_diagnostics(FILE)
        .unwrap()
        .iter()
        .map(|d| d.start)
        .collect();
    assert_eq!(starts, vec![Some(0), Some(FIRST_BODY)]);
}

// The embedded service sees "a ${value} b" as "a ? b"
const PLACEHOLDER_FILE: &str = "placeholder.ts";
const PLACEHOLDER_SOURCE: &str = "const q = sql`a ${value} b`;";

fn placeholder_proxy(
    service: TemplateLanguageService,
) -> TemplateLanguageServiceProxy<RecordingHost, MemorySourceHost> {
    let files = MemorySourceHost::new();
    files.open(PLACEHOLDER_FILE, PLACEHOLDER_SOURCE);
    let hooks = SubstitutionHooks::new().with_substitution(|_, _, _| "?".to_string());
    let helper = TemplateSourceHelper::new(files, settings()).with_substitution_hooks(hooks);
    TemplateLanguageServiceProxy::new(RecordingHost::default(), helper, service)
}

#[test]
fn test_shorter_placeholder_position_round_trip() {
    let proxy = placeholder_proxy(TemplateLanguageService::new().with_quick_info(
        |context, position| {
            let start = context.to_offset(position).unwrap_or_default();
            let word = context.text().get(start..=start).unwrap_or_default();
            Ok(Some(QuickInfo {
                kind: ScriptElementKind::Keyword,
                text_span: TextSpan::new(start, 1),
                display_parts: vec![SymbolDisplayPart::text(word)],
                ..QuickInfo::default()
            }))
        },
    ));

    let b = offset_of(PLACEHOLDER_SOURCE, "b`");
    assert_eq!(b, 25);

    let info = proxy
        .get_quick_info_at_position(PLACEHOLDER_FILE, b)
        .unwrap()
        .unwrap();
    assert_eq!(info.display_parts[0].text, "b");
    assert_eq!(info.text_span, TextSpan::new(b, 1));

    let a = offset_of(PLACEHOLDER_SOURCE, "a $");
    let info = proxy
        .get_quick_info_at_position(PLACEHOLDER_FILE, a)
        .unwrap()
        .unwrap();
    assert_eq!(info.display_parts[0].text, "a");
    assert_eq!(info.text_span, TextSpan::new(a, 1));
}

#[test]
fn test_shorter_placeholder_diagnostics_and_ranges() {
    let ranges = Arc::new(Mutex::new(Vec::new()));
    let ranges_in_service = Arc::clone(&ranges);
    let proxy = placeholder_proxy(
        TemplateLanguageService::new()
            .with_syntactic_diagnostics(|context| {
                let start = context.text().find('b').unwrap_or_default();
                Ok(vec![Diagnostic::error("unexpected b", 1).with_span(start, 1)])
            })
            .with_formatting_edits(move |context, start, end, _| {
                ranges_in_service.lock().unwrap().push((start, end));
                Ok(vec![TextChange::new(
                    TextSpan::new(end, 0),
                    format!("{}", context.text().len()),
                )])
            }),
    );
    let b = offset_of(PLACEHOLDER_SOURCE, "b`");

    let diagnostics = proxy.get_syntactic_diagnostics(PLACEHOLDER_FILE).unwrap();
    let spans: Vec<_> = diagnostics.iter().map(|d| (d.start, d.length)).collect();
    assert_eq!(spans, vec![(Some(7), Some(1)), (Some(b), Some(1))]);

    // A document range covering the whole body reaches the whole virtual text
    let edits = proxy
        .get_formatting_edits_for_range(
            PLACEHOLDER_FILE,
            0,
            PLACEHOLDER_SOURCE.len(),
            &FormatCodeSettings::default(),
        )
        .unwrap();
    assert_eq!(*ranges.lock().unwrap(), vec![(0, 5)]);
    assert_eq!(
        edits.last(),
        Some(&TextChange::new(TextSpan::new(b + 1, 0), "5"))
    );
}
