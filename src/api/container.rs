//! # TextContainer
//!
//! capabilities required from a host document to be patched in place

/// a mutable, position-addressable text document, usually backed by an editor buffer
///
/// positions are owned by the host: the engine only obtains them through
/// [`TextContainer::index_to_position`] and hands them back to the other methods, so any
/// coordinate system works (row/column pairs, byte offsets, anchors...)
///
/// indexes are linear char offsets into the current content
pub trait TextContainer {
	/// host-native coordinate
	type Position: Clone + std::fmt::Debug;

	/// translate a linear char offset into a position, crossing line breaks as needed
	fn index_to_position(&self, index: usize) -> Self::Position;

	/// content between two positions
	fn read_range(&self, start: &Self::Position, end: &Self::Position) -> String;

	/// insert text at given position
	fn insert(&mut self, at: &Self::Position, text: &str);

	/// remove content between two positions
	fn remove_range(&mut self, start: &Self::Position, end: &Self::Position);

	/// current content length in chars, if cheaply known
	///
	/// when provided, appliers will refuse to retain or delete past the end of the document
	fn char_len(&self) -> Option<usize> {
		None
	}
}

impl<T: TextContainer + ?Sized> TextContainer for &mut T {
	type Position = T::Position;

	fn index_to_position(&self, index: usize) -> Self::Position {
		(**self).index_to_position(index)
	}

	fn read_range(&self, start: &Self::Position, end: &Self::Position) -> String {
		(**self).read_range(start, end)
	}

	fn insert(&mut self, at: &Self::Position, text: &str) {
		(**self).insert(at, text)
	}

	fn remove_range(&mut self, start: &Self::Position, end: &Self::Position) {
		(**self).remove_range(start, end)
	}

	fn char_len(&self) -> Option<usize> {
		(**self).char_len()
	}
}
