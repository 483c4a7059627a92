use crate::substitution::{replace_placeholders, template_body, SubstitutedText};
use crate::{
    LineIndex, Node, NodeId, Position, SourceFile, Substitution, SubstitutionHooks, TextSpan,
};
use once_cell::unsync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// One template literal occurrence, as seen by an embedded language service.
///
/// Offsets and positions handed to and returned from the embedded service
/// address the virtual text: the template body, starting right after the
/// opening backtick, with every hole replaced by its placeholder.
///
/// A context belongs to the request that created it. Derived values are
/// computed on first use and cached for the context's lifetime only; a new
/// request builds new contexts from the current snapshot.
pub struct TemplateContext {
    file: Arc<SourceFile>,
    node: NodeId,
    hooks: SubstitutionHooks,
    body_position: OnceCell<Position>,
    substituted: OnceCell<SubstitutedText>,
    virtual_lines: OnceCell<LineIndex>,
}

impl TemplateContext {
    #[must_use]
    pub fn new(file: Arc<SourceFile>, node: NodeId, hooks: SubstitutionHooks) -> Self {
        Self {
            file,
            node,
            hooks,
            body_position: OnceCell::new(),
            substituted: OnceCell::new(),
            virtual_lines: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        self.file.file_name()
    }

    #[must_use]
    pub fn source_file(&self) -> &SourceFile {
        &self.file
    }

    /// The template literal node (no-substitution literal or template expression)
    #[must_use]
    pub fn node(&self) -> Node<'_> {
        self.file.node(self.node)
    }

    /// Document offset of the first body character
    #[must_use]
    pub fn body_offset(&self) -> usize {
        self.node().start() + 1
    }

    /// Document offset of the closing backtick
    #[must_use]
    pub fn body_end(&self) -> usize {
        self.node().end().saturating_sub(1).max(self.body_offset())
    }

    /// Document position of the first body character
    #[must_use]
    pub fn body_position(&self) -> Position {
        *self
            .body_position
            .get_or_init(|| self.file.line_and_character(self.body_offset()))
    }

    /// Body text exactly as written, holes included
    #[must_use]
    pub fn raw_text(&self) -> &str {
        template_body(self.node())
    }

    /// Body text with holes replaced by placeholder text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.substituted().text
    }

    #[must_use]
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substituted().substitutions
    }

    /// The substitution whose placeholder covers `offset` in the virtual text
    #[must_use]
    pub fn substitution_at(&self, offset: usize) -> Option<&Substitution> {
        self.substitutions()
            .iter()
            .take_while(|substitution| substitution.start <= offset)
            .find(|substitution| offset < substitution.new_stop.max(substitution.start + 1))
    }

    fn substituted(&self) -> &SubstitutedText {
        self.substituted
            .get_or_init(|| replace_placeholders(&self.hooks, self.node()))
    }

    fn virtual_lines(&self) -> &LineIndex {
        self.virtual_lines.get_or_init(|| LineIndex::new(self.text()))
    }

    /// Convert a position in the virtual text to a virtual offset.
    ///
    /// Line 0 continues the line the body starts on, so its character is
    /// measured from the body start.
    #[must_use]
    pub fn to_offset(&self, position: Position) -> Option<usize> {
        self.virtual_lines().position_to_offset(position)
    }

    /// Convert a virtual offset to a position in the virtual text
    #[must_use]
    pub fn to_position(&self, offset: usize) -> Position {
        self.virtual_lines().offset_to_position(offset)
    }

    /// Express a document offset as a position in the virtual text
    #[must_use]
    pub fn relative_position(&self, document_offset: usize) -> Position {
        self.to_position(self.to_virtual_offset(document_offset))
    }

    /// Map a document offset into the virtual text.
    ///
    /// Offsets before the body clamp to its start. An offset inside a hole
    /// maps into its placeholder, clamped to the placeholder end.
    #[must_use]
    pub fn to_virtual_offset(&self, document_offset: usize) -> usize {
        let raw = document_offset.saturating_sub(self.body_offset());
        let mut removed = 0;
        let mut restored = 0;

        for substitution in self.substitutions() {
            let hole_start = (substitution.start + restored).saturating_sub(removed);
            if raw < hole_start {
                break;
            }
            if raw < hole_start + substitution.old_len() {
                return substitution.start + (raw - hole_start).min(substitution.new_len());
            }
            removed += substitution.new_len();
            restored += substitution.old_len();
        }

        (raw + removed).saturating_sub(restored)
    }

    /// Map an offset in the virtual text back to a document offset.
    ///
    /// Placeholders whose length differs from the hole they replaced shift
    /// everything after them; an offset inside such a placeholder maps into
    /// the original hole, clamped to its end.
    #[must_use]
    pub fn to_document_offset(&self, virtual_offset: usize) -> usize {
        let mut removed = 0;
        let mut restored = 0;

        for substitution in self.substitutions() {
            if virtual_offset < substitution.start {
                break;
            }
            if virtual_offset < substitution.new_stop {
                let within = (virtual_offset - substitution.start).min(substitution.old_len());
                let raw = (substitution.start + restored).saturating_sub(removed) + within;
                return self.body_offset() + raw;
            }
            removed += substitution.new_len();
            restored += substitution.old_len();
        }

        self.body_offset() + (virtual_offset + restored).saturating_sub(removed)
    }

    /// Map a span in the virtual text back to document coordinates
    #[must_use]
    pub fn to_document_span(&self, span: TextSpan) -> TextSpan {
        TextSpan::from_bounds(
            self.to_document_offset(span.start),
            self.to_document_offset(span.end()),
        )
    }
}

impl fmt::Debug for TemplateContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateContext")
            .field("file_name", &self.file_name())
            .field("node", &self.node())
            .finish_non_exhaustive()
    }
}
