use crate::{parser, LineIndex, Position, TextSpan};
use std::fmt;

/// Kinds of nodes in a template syntax snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    /// `tag`template``: children are the tag and the template
    TaggedTemplateExpression,
    /// The tag expression in front of a template (`sql`, `styled.div`, `tag<T>`)
    TemplateTag,
    /// A template without holes, delimiters included
    NoSubstitutionTemplateLiteral,
    /// A template with holes: a head followed by template spans
    TemplateExpression,
    /// From the opening backtick through the first `${`
    TemplateHead,
    /// One hole: an expression followed by a middle or tail literal
    TemplateSpan,
    /// From a `}` through the next `${`
    TemplateMiddle,
    /// From the last `}` through the closing backtick
    TemplateTail,
    /// Opaque expression inside a hole
    Expression,
}

impl SyntaxKind {
    #[must_use]
    pub const fn is_template_literal(self) -> bool {
        matches!(
            self,
            Self::NoSubstitutionTemplateLiteral | Self::TemplateExpression
        )
    }
}

/// Index of a node within its [`SourceFile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: SyntaxKind,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

/// Immutable syntax snapshot of one file.
///
/// A snapshot is never patched in place; an edit produces a new `SourceFile`.
pub struct SourceFile {
    file_name: String,
    text: String,
    line_index: LineIndex,
    nodes: Vec<NodeData>,
}

impl SourceFile {
    /// Parse `text` as TypeScript (TSX unless the name says `.ts`) and
    /// record its template literals
    #[must_use]
    pub fn parse(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let text = text.into();
        let nodes = parser::parse(&file_name, &text);
        tracing::trace!("Parsed {} into {} template nodes", file_name, nodes.len());

        Self {
            file_name,
            line_index: LineIndex::new(&text),
            text,
            nodes,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.node(NodeId(0))
    }

    /// Get a node handle by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this snapshot.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Node<'_> {
        assert!(id.0 < self.nodes.len(), "node {id:?} out of range");
        Node { file: self, id }
    }

    /// Deepest node with `start <= offset < end`
    #[must_use]
    pub fn node_at(&self, offset: usize) -> Option<Node<'_>> {
        let root = self.root();
        if !root.contains(offset) {
            return None;
        }

        let mut current = root;
        while let Some(child) = current.children().find(|child| child.contains(offset)) {
            current = child;
        }
        Some(current)
    }

    /// Collect matching nodes in document order.
    ///
    /// The walk does not descend into a node once it matches.
    pub fn find_all(&self, mut predicate: impl FnMut(Node<'_>) -> bool) -> Vec<Node<'_>> {
        let mut found = Vec::new();
        let mut stack = vec![self.root()];

        while let Some(node) = stack.pop() {
            if predicate(node) {
                found.push(node);
                continue;
            }
            let children: Vec<_> = node.children().collect();
            stack.extend(children.into_iter().rev());
        }

        found
    }

    #[must_use]
    pub fn line_and_character(&self, offset: usize) -> Position {
        self.line_index.offset_to_position(offset)
    }

    #[must_use]
    pub fn offset_of(&self, position: Position) -> Option<usize> {
        self.line_index.position_to_offset(position)
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("file_name", &self.file_name)
            .field("len", &self.text.len())
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

/// Borrowed handle to a node of a [`SourceFile`]
#[derive(Clone, Copy)]
pub struct Node<'a> {
    file: &'a SourceFile,
    id: NodeId,
}

impl<'a> Node<'a> {
    fn data(&self) -> &'a NodeData {
        &self.file.nodes[self.id.0]
    }

    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.data().start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.data().end
    }

    #[must_use]
    pub fn span(&self) -> TextSpan {
        TextSpan::from_bounds(self.start(), self.end())
    }

    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.start() <= offset && offset < self.end()
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        &self.file.text[self.start()..self.end()]
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.data().parent.map(|id| self.file.node(id))
    }

    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let file = self.file;
        self.data().children.iter().map(move |id| file.node(*id))
    }

    fn child(&self, index: usize) -> Option<Self> {
        self.data().children.get(index).map(|id| self.file.node(*id))
    }

    /// Tag of a tagged template expression
    #[must_use]
    pub fn tag(&self) -> Option<Self> {
        match self.kind() {
            SyntaxKind::TaggedTemplateExpression => self.child(0),
            _ => None,
        }
    }

    /// Template literal of a tagged template expression
    #[must_use]
    pub fn template(&self) -> Option<Self> {
        match self.kind() {
            SyntaxKind::TaggedTemplateExpression => self.child(1),
            _ => None,
        }
    }

    /// Head of a template expression
    #[must_use]
    pub fn head(&self) -> Option<Self> {
        match self.kind() {
            SyntaxKind::TemplateExpression => self.child(0),
            _ => None,
        }
    }

    /// Spans of a template expression, in order
    pub fn template_spans(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        let spans = match self.kind() {
            SyntaxKind::TemplateExpression => self.data().children.get(1..).unwrap_or_default(),
            _ => &[],
        };
        let file = self.file;
        spans.iter().map(move |id| file.node(*id))
    }

    /// Middle or tail literal closing a template span.
    ///
    /// `None` for a hole missing its closing `}`.
    #[must_use]
    pub fn literal(&self) -> Option<Self> {
        if self.kind() != SyntaxKind::TemplateSpan {
            return None;
        }
        self.children().last().filter(|node| {
            matches!(
                node.kind(),
                SyntaxKind::TemplateMiddle | SyntaxKind::TemplateTail
            )
        })
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.file, other.file) && self.id == other.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}..{}", self.kind(), self.start(), self.end())
    }
}
