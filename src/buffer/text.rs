use crate::api::TextContainer;

/// position in a buffer, as 0-indexed row-column pair
///
/// columns count chars from the start of the row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct RowCol {
	pub row: usize,
	pub col: usize,
}

impl RowCol {
	pub const fn new(row: usize, col: usize) -> Self {
		RowCol { row, col }
	}
}

impl From<(usize, usize)> for RowCol {
	fn from((row, col): (usize, usize)) -> Self {
		RowCol { row, col }
	}
}

/// a growable in-memory document implementing [`TextContainer`]
///
/// out of range positions are clamped: offsets past the end resolve to the end of the
/// document, columns past the end of a row resolve to the end of that row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
	content: String,
}

impl TextBuffer {
	pub fn new(content: impl Into<String>) -> Self {
		TextBuffer { content: content.into() }
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn into_content(self) -> String {
		self.content
	}

	/// xxh3 hash of current content, see [`crate::ext::hash`]
	pub fn hash(&self) -> i64 {
		crate::ext::hash(&self.content)
	}

	/// convert from char index to row and column
	pub fn index_to_rowcol(&self, index: usize) -> RowCol {
		let mut pos = RowCol::default();
		for c in self.content.chars().take(index) {
			if c == '\n' {
				pos.row += 1;
				pos.col = 0;
			} else {
				pos.col += 1;
			}
		}
		pos
	}

	/// convert from row and column to char index
	pub fn rowcol_to_index(&self, pos: RowCol) -> usize {
		self.content[..self.byte_offset(pos)].chars().count()
	}

	fn byte_offset(&self, pos: RowCol) -> usize {
		let mut offset = 0;
		for (row, line) in self.content.split('\n').enumerate() {
			if row == pos.row {
				let col = line.char_indices()
					.nth(pos.col)
					.map(|(i, _)| i)
					.unwrap_or(line.len());
				return offset + col;
			}
			offset += line.len() + 1;
		}
		self.content.len()
	}

	fn byte_span(&self, start: &RowCol, end: &RowCol) -> std::ops::Range<usize> {
		let start = self.byte_offset(*start);
		let end = self.byte_offset(*end);
		start..end.max(start)
	}
}

impl TextContainer for TextBuffer {
	type Position = RowCol;

	fn index_to_position(&self, index: usize) -> RowCol {
		self.index_to_rowcol(index)
	}

	fn read_range(&self, start: &RowCol, end: &RowCol) -> String {
		self.content[self.byte_span(start, end)].to_string()
	}

	fn insert(&mut self, at: &RowCol, text: &str) {
		let offset = self.byte_offset(*at);
		self.content.insert_str(offset, text);
	}

	fn remove_range(&mut self, start: &RowCol, end: &RowCol) {
		let span = self.byte_span(start, end);
		self.content.replace_range(span, "");
	}

	fn char_len(&self) -> Option<usize> {
		Some(self.content.chars().count())
	}
}

impl From<String> for TextBuffer {
	fn from(content: String) -> Self {
		TextBuffer { content }
	}
}

impl From<&str> for TextBuffer {
	fn from(content: &str) -> Self {
		TextBuffer { content: content.to_string() }
	}
}

impl std::fmt::Display for TextBuffer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.content)
	}
}
