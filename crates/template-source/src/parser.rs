//! Builds the template node arena from a tree-sitter TypeScript parse.
//!
//! Only template structure is kept: tagged templates, their tags, template
//! literals split into head/middle/tail segments, and the expressions in
//! their holes. Everything else in the tree is walked but not recorded.

use crate::syntax::{NodeData, NodeId, SyntaxKind};
use std::path::Path;
use tree_sitter::{Language, Node as TsNode, Parser, Tree};

/// Length of the `${` opening a hole
const HOLE_OPEN: usize = 2;

pub(crate) fn parse(file_name: &str, text: &str) -> Vec<NodeData> {
    let mut builder = ArenaBuilder {
        nodes: vec![NodeData {
            kind: SyntaxKind::SourceFile,
            start: 0,
            end: text.len(),
            parent: None,
            children: Vec::new(),
        }],
    };

    match parse_tree(file_name, text) {
        Some(tree) => builder.visit(tree.root_node(), NodeId(0)),
        None => tracing::warn!("Failed to parse {}, no templates recorded", file_name),
    }

    builder.nodes
}

/// JSX is only legal in the TSX dialect, and `<T>expr` assertions only outside it
fn language_for(file_name: &str) -> Language {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "ts" | "mts" | "cts" => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        _ => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

fn parse_tree(file_name: &str, text: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    if let Err(err) = parser.set_language(&language_for(file_name)) {
        tracing::error!("Incompatible TypeScript grammar: {}", err);
        return None;
    }
    parser.parse(text, None)
}

fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}

/// A hole is closed when its last token is a real `}`
fn is_closed(hole: TsNode<'_>) -> bool {
    let mut cursor = hole.walk();
    let last = hole.children(&mut cursor).last();
    last.is_some_and(|token| token.kind() == "}" && !token.is_missing())
}

struct ArenaBuilder {
    nodes: Vec<NodeData>,
}

impl ArenaBuilder {
    fn push(&mut self, kind: SyntaxKind, start: usize, end: usize, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            start,
            end,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn visit(&mut self, node: TsNode<'_>, parent: NodeId) {
        match node.kind() {
            "call_expression" if tagged_template(node).is_some() => {
                self.tagged_template(node, parent);
            }
            "template_string" => self.template(node, parent),
            _ => {
                for child in named_children(node) {
                    self.visit(child, parent);
                }
            }
        }
    }

    /// `tag<T>`template``: the tag keeps any templates nested inside it
    fn tagged_template(&mut self, node: TsNode<'_>, parent: NodeId) {
        let Some((function, template)) = tagged_template(node) else {
            return;
        };
        let type_arguments = node.child_by_field_name("type_arguments");
        let tag_end = type_arguments.map_or(function.end_byte(), |args| args.end_byte());

        let tagged = self.push(
            SyntaxKind::TaggedTemplateExpression,
            node.start_byte(),
            node.end_byte(),
            parent,
        );
        let tag = self.push(SyntaxKind::TemplateTag, function.start_byte(), tag_end, tagged);
        self.visit(function, tag);
        if let Some(args) = type_arguments {
            self.visit(args, tag);
        }

        self.template(template, tagged);
    }

    fn template(&mut self, node: TsNode<'_>, parent: NodeId) {
        let (start, end) = (node.start_byte(), node.end_byte());
        let holes: Vec<_> = named_children(node)
            .into_iter()
            .filter(|child| child.kind() == "template_substitution")
            .collect();

        let Some(first) = holes.first() else {
            self.push(SyntaxKind::NoSubstitutionTemplateLiteral, start, end, parent);
            return;
        };

        let template = self.push(SyntaxKind::TemplateExpression, start, end, parent);
        self.push(
            SyntaxKind::TemplateHead,
            start,
            first.start_byte() + HOLE_OPEN,
            template,
        );

        for (index, hole) in holes.iter().enumerate() {
            let expression_start = hole.start_byte() + HOLE_OPEN;
            let closed = is_closed(*hole);
            // Middle and tail literals start at the `}`
            let literal_start = if closed {
                hole.end_byte() - 1
            } else {
                hole.end_byte()
            };
            let literal_end = holes
                .get(index + 1)
                .map_or(end, |next| next.start_byte() + HOLE_OPEN);

            let span_end = if closed { literal_end } else { literal_start };
            let span = self.push(SyntaxKind::TemplateSpan, expression_start, span_end, template);
            let expression =
                self.push(SyntaxKind::Expression, expression_start, literal_start, span);
            for child in named_children(*hole) {
                self.visit(child, expression);
            }

            if !closed {
                break;
            }
            let kind = if index + 1 == holes.len() {
                SyntaxKind::TemplateTail
            } else {
                SyntaxKind::TemplateMiddle
            };
            self.push(kind, literal_start, literal_end, span);
        }
    }
}

/// Function and template of a call whose argument list is a template
fn tagged_template(node: TsNode<'_>) -> Option<(TsNode<'_>, TsNode<'_>)> {
    let template = node
        .child_by_field_name("arguments")
        .filter(|args| args.kind() == "template_string")?;
    Some((node.child_by_field_name("function")?, template))
}
