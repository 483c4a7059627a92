use crate::{Node, SourceFile, SyntaxKind};
use template_config::TemplateSettings;

/// Check a tag's source text against the configured tag names.
///
/// Matches `tag` exactly, or followed by a member access (`tag.x`), a call
/// (`tag(...)`) or type arguments (`tag<T>`).
#[must_use]
pub fn is_tagged(tag_text: &str, tags: &[String]) -> bool {
    tags.iter().filter(|tag| !tag.is_empty()).any(|tag| {
        let Some(rest) = tag_text.strip_prefix(tag.as_str()) else {
            return false;
        };
        if rest.is_empty() || rest.starts_with('.') {
            return true;
        }
        matches!(rest.trim_start().chars().next(), Some('(' | '<'))
    })
}

/// Resolve `node` to the canonical template literal it belongs to.
///
/// Returns the literal node (a no-substitution template, or the whole
/// template expression when the literal has holes), or `None` when the node
/// is not part of a qualifying template.
#[must_use]
pub fn valid_template_node<'a>(settings: &TemplateSettings, node: Node<'a>) -> Option<Node<'a>> {
    match node.kind() {
        SyntaxKind::TaggedTemplateExpression => {
            let tag = node.tag()?;
            if !is_tagged(tag.text(), &settings.tags) {
                return None;
            }
            let template = node.template()?;
            if template.kind() == SyntaxKind::TemplateExpression
                && !settings.enable_for_string_with_substitutions
            {
                return None;
            }
            Some(template)
        }
        SyntaxKind::NoSubstitutionTemplateLiteral => {
            let parent = node.parent()?;
            if parent.kind() != SyntaxKind::TaggedTemplateExpression {
                return None;
            }
            is_tagged(parent.tag()?.text(), &settings.tags).then_some(node)
        }
        SyntaxKind::TemplateHead if settings.enable_for_string_with_substitutions => {
            // head -> template expression -> tagged template
            valid_template_node(settings, node.parent()?.parent()?)
        }
        SyntaxKind::TemplateMiddle | SyntaxKind::TemplateTail
            if settings.enable_for_string_with_substitutions =>
        {
            // literal -> span -> template expression -> tagged template
            valid_template_node(settings, node.parent()?.parent()?.parent()?)
        }
        _ => None,
    }
}

/// Find the qualifying template literal containing `offset`.
///
/// Offsets on the opening delimiter or inside a `${...}` hole do not count
/// as being inside the template.
#[must_use]
pub fn locate_template<'a>(
    settings: &TemplateSettings,
    file: &'a SourceFile,
    offset: usize,
) -> Option<Node<'a>> {
    let node = valid_template_node(settings, file.node_at(offset)?)?;

    if offset <= node.start() {
        return None;
    }

    if node.kind() == SyntaxKind::TemplateExpression {
        let mut start = node.head()?.end();
        for span in node.template_spans() {
            let next_start = span.literal().map_or(node.end(), |literal| literal.start());
            if offset >= start && offset <= next_start {
                return None;
            }
            start = span.literal().map_or(node.end(), |literal| literal.end());
        }
    }

    Some(node)
}
