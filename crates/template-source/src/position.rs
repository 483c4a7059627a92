use serde::{Deserialize, Serialize};

/// Position in a document or template body (0-indexed)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: usize,
    /// Column within the line (0-indexed, bytes)
    pub character: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Express `self` relative to `base`.
    ///
    /// On the base's own line the character is measured from the base
    /// character; on later lines it is kept as-is, because those lines start
    /// at column 0 in both coordinate systems.
    #[must_use]
    pub const fn relative_to(self, base: Self) -> Self {
        let line = self.line.saturating_sub(base.line);
        let character = if line == 0 {
            self.character.saturating_sub(base.character)
        } else {
            self.character
        };
        Self { line, character }
    }
}

/// Contiguous span of text, by start offset and length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub length: usize,
}

impl TextSpan {
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub const fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// Exclusive end offset
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Check whether the closed range `[start, end]` touches this span
    #[must_use]
    pub const fn intersects(&self, start: usize, end: usize) -> bool {
        !(end < self.start || start > self.end())
    }
}
