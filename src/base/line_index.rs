//! Byte offset to line/column conversion.

use text_size::{TextRange, TextSize};

/// A 0-indexed line/column position. Columns count UTF-8 bytes from the line start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

/// Precomputed line starts of a source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Line/column of `offset`; offsets past the end clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol::new(line as u32, u32::from(col))
    }

    /// Byte offset of a line/column, if it lies inside the text
    pub fn offset(&self, line_col: LineCol) -> Option<TextSize> {
        let start = *self.line_starts.get(line_col.line as usize)?;
        let offset = start + TextSize::new(line_col.col);
        (offset <= self.len).then_some(offset)
    }

    /// Line/column pair for both ends of a range
    pub fn range(&self, range: TextRange) -> (LineCol, LineCol) {
        (self.line_col(range.start()), self.line_col(range.end()))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        let index = LineIndex::new("class A {}");
        assert_eq!(index.line_col(TextSize::new(6)), LineCol::new(0, 6));
    }

    #[test]
    fn test_line_col_after_newlines() {
        let index = LineIndex::new("a\nbc\n\nd");
        assert_eq!(index.line_col(TextSize::new(2)), LineCol::new(1, 0));
        assert_eq!(index.line_col(TextSize::new(3)), LineCol::new(1, 1));
        assert_eq!(index.line_col(TextSize::new(6)), LineCol::new(3, 0));
        assert_eq!(index.line_count(), 4);
    }

    #[test]
    fn test_offset_round_trip() {
        let index = LineIndex::new("a\nbc\n");
        let lc = index.line_col(TextSize::new(3));
        assert_eq!(index.offset(lc), Some(TextSize::new(3)));
        assert_eq!(index.offset(LineCol::new(9, 0)), None);
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(TextSize::new(10)), LineCol::new(0, 2));
    }
}
