use crate::Position;

/// Line-to-offset and offset-to-line conversion for one document snapshot.
///
/// Keeps the byte offset of every line start so that `position_to_offset`
/// is a table lookup and `offset_to_position` a binary search.
///
/// # Example
///
/// ```
/// use template_source::{LineIndex, Position};
///
/// let source = "const q = sql`\n  select 1\n`;";
/// let index = LineIndex::new(source);
///
/// let offset = index.position_to_offset(Position::new(1, 2)).unwrap();
/// assert_eq!(offset, 17);
/// assert_eq!(index.offset_to_position(17), Position::new(1, 2));
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line; index 0 is always 0
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.char_indices()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(idx, _)| idx + 1),
        );

        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Convert a line/character position to a byte offset.
    ///
    /// Returns `None` if the line does not exist. The character is not checked
    /// against the line length.
    #[must_use]
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line)?;
        Some(line_start + position.character)
    }

    /// Convert a byte offset to a line/character position.
    ///
    /// Offsets past the end of the text resolve to the end of the text.
    #[must_use]
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        Position::new(line, offset - self.line_starts[line])
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset of the start of a line
    #[must_use]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Length of the indexed text in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
