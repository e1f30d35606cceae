use crate::api::{Operation, TextContainer, Token};
use crate::errors::{ApplyError, ApplyResult};

use super::{advance, check_overrun, Applier};

impl Applier {
	/// Apply an operation to a container, mutating it token by token.
	///
	/// A cursor starts at offset 0: retains move it forward, inserts happen at the cursor and
	/// move it past the new text, deletes remove the text at the cursor (which must match
	/// exactly) and leave it where it is.
	///
	/// Unless [`crate::api::Config::atomic`] is set, a failing token leaves all mutations of
	/// the preceding tokens in place: the container must then be considered partially patched.
	/// With `atomic`, the whole operation is first validated against the untouched container
	/// and nothing is mutated if validation fails.
	pub fn apply_to_container<C>(&self, op: &Operation, container: &mut C) -> ApplyResult<()>
	where
		C: TextContainer + ?Sized,
	{
		if self.config.atomic() {
			self.validate(op, container)?;
		}

		let mut index = 0; // cursor in current content
		let mut offset = 0; // chars of the original document consumed
		for token in op {
			tracing::trace!("applying token {token} at index {index}");
			match token {
				Token::Retain(n) => {
					check_overrun(remaining(container, index), offset, *n)?;
					index = advance(index, *n, offset)?;
					offset += n;
				},
				Token::Insert(txt) => {
					let next = advance(index, txt.chars().count(), offset)?;
					let at = container.index_to_position(index);
					container.insert(&at, txt);
					index = next;
				},
				Token::Delete(txt) => {
					let len = txt.chars().count();
					check_overrun(remaining(container, index), offset, len)?;
					let start = container.index_to_position(index);
					let end = container.index_to_position(advance(index, len, offset)?);
					let found = container.read_range(&start, &end);
					if found != *txt {
						tracing::warn!("delete mismatch at index {index}: expected '{txt}', found '{found}'");
						return Err(ApplyError::DeleteMismatch { expected: txt.clone(), found });
					}
					container.remove_range(&start, &end);
					offset += len;
				},
			}
		}

		if self.config.exhaustive() {
			if let Some(left) = remaining(container, index) {
				if left > 0 {
					return Err(ApplyError::Unconsumed { remaining: left });
				}
			}
		}

		tracing::debug!("applied {} tokens to container", op.len());
		Ok(())
	}

	/// Dry run of an operation against an untouched container, reading but never mutating.
	///
	/// Inserts and deletes only ever affect content before the cursor, so every delete can be
	/// checked at its offset in the original content.
	pub fn validate<C>(&self, op: &Operation, container: &C) -> ApplyResult<()>
	where
		C: TextContainer + ?Sized,
	{
		let mut offset = 0;
		for token in op {
			match token {
				Token::Retain(n) => {
					check_overrun(remaining(container, offset), offset, *n)?;
					offset = advance(offset, *n, offset)?;
				},
				Token::Insert(_) => {},
				Token::Delete(txt) => {
					let count = txt.chars().count();
					check_overrun(remaining(container, offset), offset, count)?;
					let next = advance(offset, count, offset)?;
					let start = container.index_to_position(offset);
					let end = container.index_to_position(next);
					let found = container.read_range(&start, &end);
					if found != *txt {
						tracing::debug!("validation failed at offset {offset}: expected '{txt}', found '{found}'");
						return Err(ApplyError::DeleteMismatch { expected: txt.clone(), found });
					}
					offset = next;
				},
			}
		}

		if self.config.exhaustive() {
			if let Some(left) = remaining(container, offset) {
				if left > 0 {
					return Err(ApplyError::Unconsumed { remaining: left });
				}
			}
		}

		Ok(())
	}
}

/// Chars left after `index`, if the container knows its length.
fn remaining<C: TextContainer + ?Sized>(container: &C, index: usize) -> Option<usize> {
	container.char_len().map(|len| len.saturating_sub(index))
}

#[cfg(test)]
mod tests {
	use crate::api::{Config, Operation, TextContainer};
	use crate::buffer::{RowCol, TextBuffer};
	use crate::errors::ApplyError;
	use crate::operation::{apply_to_container, Applier};

	/// records every mutation forwarded to the wrapped container
	#[derive(Default)]
	struct Recorder {
		inner: TextBuffer,
		inserts: Vec<(RowCol, String)>,
		removals: Vec<(RowCol, RowCol)>,
	}

	impl TextContainer for Recorder {
		type Position = RowCol;

		fn index_to_position(&self, index: usize) -> RowCol {
			self.inner.index_to_position(index)
		}

		fn read_range(&self, start: &RowCol, end: &RowCol) -> String {
			self.inner.read_range(start, end)
		}

		fn insert(&mut self, at: &RowCol, text: &str) {
			self.inserts.push((*at, text.to_string()));
			self.inner.insert(at, text)
		}

		fn remove_range(&mut self, start: &RowCol, end: &RowCol) {
			self.removals.push((*start, *end));
			self.inner.remove_range(start, end)
		}
	}

	/// only the mandatory capabilities, like a host document which can't tell its length
	struct Bare(TextBuffer);

	impl TextContainer for Bare {
		type Position = RowCol;
		fn index_to_position(&self, index: usize) -> RowCol { self.0.index_to_position(index) }
		fn read_range(&self, start: &RowCol, end: &RowCol) -> String { self.0.read_range(start, end) }
		fn insert(&mut self, at: &RowCol, text: &str) { self.0.insert(at, text) }
		fn remove_range(&mut self, start: &RowCol, end: &RowCol) { self.0.remove_range(start, end) }
	}

	fn op(wire: &[&str]) -> Operation {
		Operation::decode(wire).unwrap()
	}

	#[test]
	fn replace_word_in_container() {
		let mut doc = Recorder { inner: TextBuffer::new("Hello World"), ..Default::default() };
		apply_to_container(&op(&["r6", "dWorld", "iThere"]), &mut doc).unwrap();
		assert_eq!(doc.inner.content(), "Hello There");
		assert_eq!(doc.removals, vec![(RowCol { row: 0, col: 6 }, RowCol { row: 0, col: 11 })]);
		assert_eq!(doc.inserts, vec![(RowCol { row: 0, col: 6 }, "There".to_string())]);
	}

	#[test]
	fn edits_across_lines() {
		let mut doc = TextBuffer::new("Hi\nWorld\n!");
		apply_to_container(&op(&["r2", "d\nW", "i, w", "r4", "d\n", "i "]), &mut doc).unwrap();
		assert_eq!(doc.content(), "Hi, world !");
	}

	#[test]
	fn insertions_advance_cursor() {
		let mut doc = TextBuffer::new("ac");
		apply_to_container(&op(&["r1", "ib", "r1", "id"]), &mut doc).unwrap();
		assert_eq!(doc.content(), "abcd");
	}

	#[test]
	fn failure_leaves_earlier_mutations_in_place() {
		let mut doc = TextBuffer::new("Hello");
		let res = apply_to_container(&op(&["iX", "dwrong"]), &mut doc);
		assert_eq!(res, Err(ApplyError::DeleteMismatch {
			expected: "wrong".into(),
			found: "Hello".into(),
		}));
		assert_eq!(doc.content(), "XHello");
	}

	#[test]
	fn atomic_failure_leaves_container_untouched() {
		let applier = Applier::new(Config { atomic: Some(true), ..Default::default() });
		let mut doc = Recorder { inner: TextBuffer::new("Hello"), ..Default::default() };
		let res = applier.apply_to_container(&op(&["iX", "dwrong"]), &mut doc);
		assert!(matches!(res, Err(ApplyError::DeleteMismatch { .. })));
		assert_eq!(doc.inner.content(), "Hello");
		assert!(doc.inserts.is_empty());
		assert!(doc.removals.is_empty());
	}

	#[test]
	fn atomic_validation_sees_original_offsets() {
		let applier = Applier::new(Config { atomic: Some(true), ..Default::default() });
		let mut doc = TextBuffer::new("one two three");
		applier.apply_to_container(&op(&["izero ", "r4", "dtwo ", "iTWO "]), &mut doc).unwrap();
		assert_eq!(doc.content(), "zero one TWO three");
	}

	#[test]
	fn retain_past_end_overruns() {
		let mut doc = TextBuffer::new("short");
		let res = apply_to_container(&op(&["r3", "iX", "r10"]), &mut doc);
		assert_eq!(res, Err(ApplyError::RangeOverrun { offset: 3, requested: 10, available: 2 }));
		assert_eq!(doc.content(), "shoXrt");
	}

	#[test]
	fn overruns_report_same_offset_as_string_applier() {
		let ops = op(&["iab", "r2", "dc", "r9"]);
		let from_string = crate::operation::apply_contents(&ops, "xyc!").unwrap_err();
		let mut doc = TextBuffer::new("xyc!");
		let from_container = apply_to_container(&ops, &mut doc).unwrap_err();
		assert_eq!(from_string, ApplyError::RangeOverrun { offset: 3, requested: 9, available: 1 });
		assert_eq!(from_container, from_string);
	}

	#[test]
	fn delete_past_end_overruns() {
		let mut doc = TextBuffer::new("short");
		let res = apply_to_container(&op(&["r3", "drt and long"]), &mut doc);
		assert!(matches!(res, Err(ApplyError::RangeOverrun { offset: 3, .. })));
		assert_eq!(doc.content(), "short");
	}

	#[test]
	fn exhaustive_config_rejects_unconsumed_tail() {
		let applier = Applier::new(Config { exhaustive: Some(true), ..Default::default() });
		let mut doc = TextBuffer::new("abc");
		let res = applier.apply_to_container(&op(&["r1", "ix"]), &mut doc);
		assert_eq!(res, Err(ApplyError::Unconsumed { remaining: 2 }));
		applier.apply_to_container(&op(&["r4"]), &mut doc).unwrap();
	}

	#[test]
	fn unknown_length_skips_overrun_checks() {
		let mut doc = Bare(TextBuffer::new("abc"));
		apply_to_container(&op(&["r10", "iz"]), &mut doc).unwrap();
		assert_eq!(doc.0.content(), "abcz");

		let res = apply_to_container(&op(&["dabcz!"]), &mut doc);
		assert_eq!(res, Err(ApplyError::DeleteMismatch { expected: "abcz!".into(), found: "abcz".into() }));
	}

	#[test]
	fn huge_retain_then_insert_fails_without_panicking() {
		let max = format!("r{}", usize::MAX);
		let mut doc = Bare(TextBuffer::new("abc"));
		let res = apply_to_container(&op(&[max.as_str(), "iX"]), &mut doc);
		assert_eq!(res, Err(ApplyError::RangeOverrun {
			offset: usize::MAX,
			requested: 1,
			available: 0,
		}));
		assert_eq!(doc.0.content(), "abc");
	}

	#[test]
	fn cursor_overflow_is_an_overrun() {
		let max = format!("r{}", usize::MAX);
		let mut doc = Bare(TextBuffer::new("abc"));
		let res = apply_to_container(&op(&["r1", max.as_str()]), &mut doc);
		assert_eq!(res, Err(ApplyError::RangeOverrun {
			offset: 1,
			requested: usize::MAX,
			available: usize::MAX - 1,
		}));

		let res = apply_to_container(&op(&[max.as_str(), "dx"]), &mut doc);
		assert!(matches!(res, Err(ApplyError::RangeOverrun { requested: 1, available: 0, .. })));
		assert_eq!(doc.0.content(), "abc");
	}

	#[test]
	fn atomic_validation_catches_cursor_overflow() {
		let applier = Applier::new(Config { atomic: Some(true), ..Default::default() });
		let max = format!("r{}", usize::MAX);
		let mut doc = Bare(TextBuffer::new("abc"));
		let res = applier.apply_to_container(&op(&["iX", max.as_str(), "r1"]), &mut doc);
		assert!(matches!(res, Err(ApplyError::RangeOverrun { offset: usize::MAX, requested: 1, .. })));
		assert_eq!(doc.0.content(), "abc");
	}
}
