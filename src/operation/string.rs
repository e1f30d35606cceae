use crate::api::{Operation, Token};
use crate::errors::{ApplyError, ApplyResult};

use super::{check_overrun, Applier};

impl Applier {
	/// Apply an operation to an immutable string, returning the new document.
	///
	/// Tokens consume `document` left to right: retained chars are copied verbatim, inserted
	/// text is appended, deleted text must match the document exactly and is skipped.
	/// Whatever the operation does not reach is kept as is, unless configured as exhaustive.
	///
	/// Fails without producing anything on the first token that can't be applied.
	pub fn apply_contents(&self, op: &Operation, document: &str) -> ApplyResult<String> {
		let mut remaining = document;
		let mut output = String::with_capacity(document.len());
		let mut offset = 0; // chars consumed so far

		for token in op {
			tracing::trace!("applying token {token} at offset {offset}");
			match token {
				Token::Retain(n) => {
					let Some((head, tail)) = split_at_char(remaining, *n) else {
						return Err(ApplyError::RangeOverrun {
							offset,
							requested: *n,
							available: remaining.chars().count(),
						});
					};
					output.push_str(head);
					remaining = tail;
					offset += n;
				},
				Token::Insert(txt) => output.push_str(txt),
				Token::Delete(txt) => {
					if let Some(tail) = remaining.strip_prefix(txt.as_str()) {
						remaining = tail;
						offset += txt.chars().count();
					} else if txt.starts_with(remaining) {
						// document ended before the deletion did
						check_overrun(Some(remaining.chars().count()), offset, txt.chars().count())?;
					} else {
						let found: String = remaining.chars().take(self.config.preview()).collect();
						tracing::warn!("delete mismatch at offset {offset}: expected '{txt}', found '{found}'");
						return Err(ApplyError::DeleteMismatch { expected: txt.clone(), found });
					}
				},
			}
		}

		if !remaining.is_empty() {
			if self.config.exhaustive() {
				return Err(ApplyError::Unconsumed { remaining: remaining.chars().count() });
			}
			output.push_str(remaining);
		}

		tracing::debug!("applied {} tokens: {} -> {} chars", op.len(), offset, output.chars().count());
		Ok(output)
	}

	/// Apply an operation and verify the result against the hash of the expected document.
	///
	/// See [`crate::ext::hash`].
	pub fn apply_contents_checked(&self, op: &Operation, document: &str, expected: i64) -> ApplyResult<String> {
		let output = self.apply_contents(op, document)?;
		let found = crate::ext::hash(&output);
		if found != expected {
			tracing::warn!("applied operation but content diverged");
			return Err(ApplyError::Diverged { expected, found });
		}
		Ok(output)
	}
}

/// Split after the first `n` chars, or None if there are fewer.
fn split_at_char(txt: &str, n: usize) -> Option<(&str, &str)> {
	match txt.char_indices().nth(n) {
		Some((i, _)) => Some(txt.split_at(i)),
		None if txt.chars().count() == n => Some((txt, "")),
		None => None,
	}
}
