use std::ops::Range;

use line_index::{LineIndex, TextSize, WideEncoding};
use serde::{Deserialize, Serialize};

/// Unit in which columns are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    /// LSP default
    #[default]
    #[serde(rename = "utf-16")]
    Utf16,
    #[serde(rename = "utf-32")]
    Utf32,
}

/// Zero-based line/column pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Trait for mapping absolute byte offsets to line/column positions
pub trait PositionMapper {
    /// Convert a byte offset to a position, or `None` if it lies past the end of the text
    fn offset_to_position(&self, offset: u32) -> Option<Position>;

    /// Length of the text in bytes
    fn text_len(&self) -> u32;

    /// Number of lines, counting the (possibly empty) line after a trailing newline
    fn line_count(&self) -> u32;

    /// Byte range of `line` including its line terminator
    fn line_range(&self, line: u32) -> Option<Range<u32>>;
}

/// Source text paired with its line index.
///
/// The index is encoding-agnostic; [`IndexedText::view`] picks the unit in which
/// columns are reported.
#[derive(Debug)]
pub struct IndexedText {
    text: String,
    index: LineIndex,
    line_starts: Vec<u32>,
}

impl IndexedText {
    pub fn new(text: String) -> Self {
        let index = LineIndex::new(&text);
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            index,
            line_starts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Position mapper reporting columns in `encoding`
    pub fn view(&self, encoding: PositionEncoding) -> PositionView<'_> {
        PositionView {
            text: self,
            encoding,
        }
    }

    /// Text of `line` without its line terminator
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let start = *self.line_starts.get(line as usize)?;
        let end = self.line_end(line);
        let line_text = &self.text[start as usize..end as usize];
        let line_text = line_text.strip_suffix('\n').unwrap_or(line_text);
        Some(line_text.strip_suffix('\r').unwrap_or(line_text))
    }

    fn line_end(&self, line: u32) -> u32 {
        self.line_starts
            .get(line as usize + 1)
            .copied()
            .unwrap_or_else(|| self.len())
    }

    fn char_boundary_at_or_before(&self, offset: usize) -> usize {
        let mut offset = offset;
        while offset > 0 && !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

/// [`IndexedText`] seen through one position encoding.
///
/// Offsets that fall inside a multi-byte character snap back to the start of that
/// character.
#[derive(Debug, Clone, Copy)]
pub struct PositionView<'a> {
    text: &'a IndexedText,
    encoding: PositionEncoding,
}

impl PositionView<'_> {
    pub fn encoding(&self) -> PositionEncoding {
        self.encoding
    }
}

impl PositionMapper for PositionView<'_> {
    fn offset_to_position(&self, offset: u32) -> Option<Position> {
        if offset > self.text.len() {
            return None;
        }
        let offset = self.text.char_boundary_at_or_before(offset as usize) as u32;
        let index = &self.text.index;
        let line_col = index.line_col(TextSize::from(offset));

        let column = match self.encoding {
            PositionEncoding::Utf8 => line_col.col,
            PositionEncoding::Utf16 => index.to_wide(WideEncoding::Utf16, line_col)?.col,
            PositionEncoding::Utf32 => index.to_wide(WideEncoding::Utf32, line_col)?.col,
        };

        Some(Position::new(line_col.line, column))
    }

    fn text_len(&self) -> u32 {
        self.text.len()
    }

    fn line_count(&self) -> u32 {
        self.text.line_starts.len() as u32
    }

    fn line_range(&self, line: u32) -> Option<Range<u32>> {
        let start = *self.text.line_starts.get(line as usize)?;
        Some(start..self.text.line_end(line))
    }
}

/// Compute line start offsets for efficient position mapping
pub fn compute_line_starts(text: &str) -> Vec<u32> {
    let mut line_starts = vec![0];
    line_starts.extend(
        text.bytes()
            .enumerate()
            .filter(|(_, byte)| *byte == b'\n')
            .map(|(offset, _)| offset as u32 + 1),
    );
    line_starts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(text: &str) -> IndexedText {
        IndexedText::new(text.to_string())
    }

    #[test]
    fn test_offset_to_position_single_line() {
        let text = indexed("class C1 { }");
        let view = text.view(PositionEncoding::Utf16);
        assert_eq!(view.offset_to_position(0), Some(Position::new(0, 0)));
        assert_eq!(view.offset_to_position(6), Some(Position::new(0, 6)));
        assert_eq!(view.offset_to_position(12), Some(Position::new(0, 12)));
        assert_eq!(view.offset_to_position(13), None);
    }

    #[test]
    fn test_offset_to_position_across_lines() {
        let text = indexed("a\nbc\r\nd");
        let view = text.view(PositionEncoding::Utf16);
        assert_eq!(view.offset_to_position(2), Some(Position::new(1, 0)));
        assert_eq!(view.offset_to_position(4), Some(Position::new(1, 2)));
        assert_eq!(view.offset_to_position(6), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_columns_follow_encoding() {
        // 'é' is 2 bytes, '😀' is 4 bytes / 2 UTF-16 units / 1 scalar
        let text = indexed("é😀x");
        let x_offset = text.text().find('x').unwrap() as u32;

        let column = |encoding| text.view(encoding).offset_to_position(x_offset);
        assert_eq!(column(PositionEncoding::Utf8), Some(Position::new(0, 6)));
        assert_eq!(column(PositionEncoding::Utf16), Some(Position::new(0, 3)));
        assert_eq!(column(PositionEncoding::Utf32), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_offset_inside_character_snaps_back() {
        let text = indexed("aé");
        // Offset 2 is in the middle of 'é'
        assert_eq!(
            text.view(PositionEncoding::Utf16).offset_to_position(2),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn test_line_count_and_ranges() {
        let text = indexed("one\ntwo\n");
        let view = text.view(PositionEncoding::Utf16);
        assert_eq!(view.line_count(), 3);
        assert_eq!(view.line_range(0), Some(0..4));
        assert_eq!(view.line_range(1), Some(4..8));
        assert_eq!(view.line_range(2), Some(8..8));
        assert_eq!(view.line_range(3), None);
        assert_eq!(text.line_text(1), Some("two"));
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let text = indexed("");
        let view = text.view(PositionEncoding::Utf8);
        assert!(text.is_empty());
        assert_eq!(view.line_count(), 1);
        assert_eq!(view.offset_to_position(0), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_compute_line_starts() {
        assert_eq!(compute_line_starts("ab\ncd\n\nx"), vec![0, 3, 6, 7]);
    }
}
