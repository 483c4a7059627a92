use crate::{Node, SyntaxKind};
use std::fmt;
use std::sync::Arc;

/// Character used to fill holes when no custom substitution is configured
const PLACEHOLDER_FILL: char = 'x';

/// One replaced `${...}` hole, in virtual-text offsets.
///
/// `old_stop - start` is the length of the original hole text and
/// `new_stop - start` the length of the text that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub start: usize,
    pub old_stop: usize,
    pub new_stop: usize,
}

impl Substitution {
    #[must_use]
    pub const fn old_len(&self) -> usize {
        self.old_stop - self.start
    }

    #[must_use]
    pub const fn new_len(&self) -> usize {
        self.new_stop - self.start
    }
}

/// Template body with holes replaced, plus the records needed to map back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutedText {
    pub text: String,
    pub substitutions: Vec<Substitution>,
}

/// A hole's extent within the template body, `${` through `}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan {
    pub start: usize,
    pub end: usize,
}

/// Filler for one hole: `(body, start, end) -> replacement`
pub type SubstitutionFn = dyn Fn(&str, usize, usize) -> String + Send + Sync;

/// Full replacement of the substitution algorithm for one template node
pub type SubstitutionsFn = dyn for<'a> Fn(Node<'a>) -> SubstitutedText + Send + Sync;

/// Optional hooks customizing how holes are filled
#[derive(Clone, Default)]
pub struct SubstitutionHooks {
    get_substitution: Option<Arc<SubstitutionFn>>,
    get_substitutions: Option<Arc<SubstitutionsFn>>,
}

impl SubstitutionHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `f` to produce the filler for each hole
    #[must_use]
    pub fn with_substitution<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, usize, usize) -> String + Send + Sync + 'static,
    {
        self.get_substitution = Some(Arc::new(f));
        self
    }

    /// Use `f` to compute the whole virtual text of a template
    #[must_use]
    pub fn with_substitutions<F>(mut self, f: F) -> Self
    where
        F: for<'a> Fn(Node<'a>) -> SubstitutedText + Send + Sync + 'static,
    {
        self.get_substitutions = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for SubstitutionHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubstitutionHooks")
            .field("get_substitution", &self.get_substitution.is_some())
            .field("get_substitutions", &self.get_substitutions.is_some())
            .finish()
    }
}

/// Compute the virtual text of a template literal node
#[must_use]
pub fn replace_placeholders(hooks: &SubstitutionHooks, node: Node<'_>) -> SubstitutedText {
    let contents = template_body(node);

    if node.kind() == SyntaxKind::NoSubstitutionTemplateLiteral {
        return SubstitutedText {
            text: contents.to_string(),
            substitutions: Vec::new(),
        };
    }

    if let Some(get_substitutions) = &hooks.get_substitutions {
        return get_substitutions(node);
    }

    substitute(contents, &placeholder_spans(node), hooks)
}

/// Template text with the delimiting backticks removed
#[must_use]
pub fn template_body<'a>(node: Node<'a>) -> &'a str {
    let text = node.text();
    let text = text.strip_prefix('`').unwrap_or(text);
    text.strip_suffix('`').unwrap_or(text)
}

/// Hole spans of a template expression, relative to the template body
#[must_use]
pub fn placeholder_spans(node: Node<'_>) -> Vec<PlaceholderSpan> {
    let Some(head) = node.head() else {
        return Vec::new();
    };

    let body_start = node.start() + 1;
    let body_end = body_start + template_body(node).len();

    // Each hole runs from its `$` through its closing `}`
    let mut hole_start = head.end() - body_start - 2;
    let mut spans = Vec::new();

    for span in node.template_spans() {
        let Some(literal) = span.literal() else {
            spans.push(PlaceholderSpan {
                start: hole_start,
                end: body_end - body_start,
            });
            break;
        };

        spans.push(PlaceholderSpan {
            start: hole_start,
            end: literal.start() - body_start + 1,
        });
        if literal.kind() == SyntaxKind::TemplateMiddle {
            hole_start = literal.end() - body_start - 2;
        }
    }

    spans
}

/// Replace each hole in `contents` with filler text.
///
/// Without a custom hook the filler repeats a single character for the exact
/// length of the hole, so the virtual text is as long as `contents`.
#[must_use]
pub fn substitute(
    contents: &str,
    spans: &[PlaceholderSpan],
    hooks: &SubstitutionHooks,
) -> SubstitutedText {
    let mut text = String::with_capacity(contents.len());
    let mut substitutions = Vec::with_capacity(spans.len());
    let mut last_index = 0;

    for span in spans {
        text.push_str(&contents[last_index..span.start]);

        let filler = hooks.get_substitution.as_ref().map_or_else(
            || PLACEHOLDER_FILL.to_string().repeat(span.end - span.start),
            |get_substitution| get_substitution(contents, span.start, span.end),
        );

        let start = text.len();
        text.push_str(&filler);
        substitutions.push(Substitution {
            start,
            old_stop: start + (span.end - span.start),
            new_stop: start + filler.len(),
        });

        last_index = span.end;
    }

    text.push_str(&contents[last_index..]);

    SubstitutedText {
        text,
        substitutions,
    }
}
