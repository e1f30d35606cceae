//! ### Errors
//! Contains the crate's error types.
//!
//! Malformed operations surface as [`DecodeError`] before anything is touched, while
//! [`ApplyError`] reports a document which diverged from what the operation expected.

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// An error caused by a malformed token: should never happen with well-formed operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
	#[error("invalid token #{index} '{token}': unknown discriminator")]
	InvalidToken {
		/// Position of the offending token inside its operation.
		index: usize,
		token: String,
	},

	#[error("invalid token #{index} '{token}': retain count is not a non-negative integer")]
	InvalidCount {
		/// Position of the offending token inside its operation.
		index: usize,
		token: String,
	},
}

impl DecodeError {
	/// Move this error to the given token index, used when decoding whole operations.
	pub(crate) fn at(self, index: usize) -> Self {
		match self {
			Self::InvalidToken { token, .. } => Self::InvalidToken { index, token },
			Self::InvalidCount { token, .. } => Self::InvalidCount { index, token },
		}
	}
}



pub type ApplyResult<T> = std::result::Result<T, ApplyError>;

/// An error raised while patching a document.
///
/// Mismatches are expected under concurrent editing: the operation was built against a
/// document state which differs from the one it is being applied to. Overruns and unconsumed
/// tails mean the operation doesn't fit the document at all, see [`Error::is_malformed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
	#[error("expected '{expected}' to delete, found '{found}'")]
	DeleteMismatch {
		/// Text the delete token expected to remove.
		expected: String,
		/// Actual content at the cursor, possibly truncated.
		found: String,
	},

	#[error("operation overruns document: {requested} chars requested at offset {offset}, only {available} left")]
	RangeOverrun {
		/// Chars of the original document consumed before the failing token, in both appliers.
		offset: usize,
		/// Chars the failing token needed to walk over.
		requested: usize,
		/// Chars left in the document, or room left before the cursor would overflow.
		available: usize,
	},

	#[error("operation left {remaining} chars of the document unconsumed")]
	Unconsumed {
		remaining: usize,
	},

	#[error("resulting document diverged: expected hash {expected}, got {found}")]
	Diverged {
		expected: i64,
		found: i64,
	},
}



pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced while decoding and applying an operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("malformed operation: {0}")]
	Decode(#[from] DecodeError),

	#[error("could not apply operation: {0}")]
	Apply(#[from] ApplyError),
}

impl Error {
	/// Protocol or programming error: the operation itself is broken.
	///
	/// Besides undecodable tokens, this covers operations whose retains and deletes don't fit
	/// the document length.
	pub fn is_malformed(&self) -> bool {
		matches!(
			self,
			Self::Decode(_)
			| Self::Apply(ApplyError::RangeOverrun { .. })
			| Self::Apply(ApplyError::Unconsumed { .. })
		)
	}

	/// The document differs from what the operation expected; resync or drop the operation.
	///
	/// Includes checksum divergence, which is recovered from the same way.
	pub fn is_mismatch(&self) -> bool {
		matches!(
			self,
			Self::Apply(ApplyError::DeleteMismatch { .. })
			| Self::Apply(ApplyError::Diverged { .. })
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decode_errors_are_malformed() {
		let err: Error = DecodeError::InvalidToken { index: 0, token: "x".into() }.into();
		assert!(err.is_malformed());
		assert!(!err.is_mismatch());
	}

	#[test]
	fn delete_mismatch_is_not_malformed() {
		let err: Error = ApplyError::DeleteMismatch { expected: "a".into(), found: "b".into() }.into();
		assert!(err.is_mismatch());
		assert!(!err.is_malformed());
	}

	#[test]
	fn overruns_are_malformed() {
		let err: Error = ApplyError::RangeOverrun { offset: 3, requested: 5, available: 1 }.into();
		assert!(err.is_malformed());
		assert!(!err.is_mismatch());

		let err: Error = ApplyError::Unconsumed { remaining: 2 }.into();
		assert!(err.is_malformed());
		assert!(!err.is_mismatch());
	}

	#[test]
	fn retain_past_end_classifies_as_malformed() {
		let op = crate::api::Operation::decode(["r10"]).unwrap();
		let err = Error::from(crate::apply_contents(&op, "abc").unwrap_err());
		assert!(err.is_malformed());
		assert!(!err.is_mismatch());
	}

	#[test]
	fn divergence_is_a_mismatch() {
		let err: Error = ApplyError::Diverged { expected: 1, found: 2 }.into();
		assert!(err.is_mismatch());
		assert!(!err.is_malformed());
	}

	#[test]
	fn decode_error_can_be_relocated() {
		let err = DecodeError::InvalidCount { index: 0, token: "rx".into() }.at(4);
		assert_eq!(err, DecodeError::InvalidCount { index: 4, token: "rx".into() });
	}

	#[test]
	fn mismatch_message_shows_both_texts() {
		let err = ApplyError::DeleteMismatch { expected: "xyz".into(), found: "abcdef".into() };
		assert_eq!(err.to_string(), "expected 'xyz' to delete, found 'abcdef'");
	}
}
