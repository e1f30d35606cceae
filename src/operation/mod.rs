//! ### Operation
//! Decoding and application of [`Operation`]s.
//!
//! Tokens are decoded exactly once into typed [`Token`]s; both appliers then walk the same
//! typed sequence:
//! * [`Applier::apply_contents`] builds a new string out of an immutable one
//! * [`Applier::apply_to_container`] patches a [`crate::api::TextContainer`] in place

/// applier working on immutable strings
pub mod string;

/// applier working on mutable containers
pub mod container;

use crate::api::{Config, Operation, TextContainer, Token, TokenKind};
use crate::errors::{ApplyError, ApplyResult, DecodeError, DecodeResult};

/// Decode a single wire token such as `r12`, `iabc` or `dxyz`.
///
/// Only the first char is inspected to determine the kind, the rest is the payload and is
/// never escaped.
pub fn decode(token: &str) -> DecodeResult<Token> {
	let mut chars = token.chars();
	let kind = chars.next()
		.and_then(TokenKind::from_symbol)
		.ok_or_else(|| DecodeError::InvalidToken { index: 0, token: token.to_string() })?;
	let payload = chars.as_str();

	match kind {
		TokenKind::Insert => Ok(Token::Insert(payload.to_string())),
		TokenKind::Delete => Ok(Token::Delete(payload.to_string())),
		TokenKind::Retain => {
			// str::parse would also accept a leading '+'
			if payload.is_empty() || !payload.bytes().all(|b| b.is_ascii_digit()) {
				return Err(DecodeError::InvalidCount { index: 0, token: token.to_string() });
			}
			payload.parse::<usize>()
				.map(Token::Retain)
				.map_err(|_| DecodeError::InvalidCount { index: 0, token: token.to_string() })
		},
	}
}

impl std::str::FromStr for Token {
	type Err = DecodeError;

	fn from_str(s: &str) -> DecodeResult<Self> {
		decode(s)
	}
}

impl TryFrom<String> for Token {
	type Error = DecodeError;

	fn try_from(value: String) -> DecodeResult<Self> {
		decode(&value)
	}
}

impl TryFrom<&str> for Token {
	type Error = DecodeError;

	fn try_from(value: &str) -> DecodeResult<Self> {
		decode(value)
	}
}

impl Operation {
	/// Decode a whole sequence of wire tokens, failing on the first malformed one.
	///
	/// Nothing gets applied until every token decoded successfully.
	pub fn decode<I, S>(tokens: I) -> DecodeResult<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		tokens.into_iter()
			.enumerate()
			.map(|(i, t)| decode(t.as_ref()).map_err(|e| e.at(i)))
			.collect()
	}

	/// Shortcut for [`apply_contents`] with default configuration.
	pub fn apply(&self, document: &str) -> ApplyResult<String> {
		apply_contents(self, document)
	}
}

/// Applies operations to documents according to its [`Config`].
///
/// An applier holds no per-document state and can be shared freely; callers are still
/// responsible for never applying two operations to the same container at once.
#[derive(Debug, Clone, Default)]
pub struct Applier {
	config: Config,
}

impl Applier {
	pub fn new(config: Config) -> Self {
		Applier { config }
	}

	pub fn config(&self) -> &Config {
		&self.config
	}
}

/// Apply given operation to a string with default configuration.
pub fn apply_contents(op: &Operation, document: &str) -> ApplyResult<String> {
	Applier::default().apply_contents(op, document)
}

/// Apply given operation to a container with default configuration.
///
/// On failure, mutations performed by earlier tokens are left in place.
pub fn apply_to_container<C>(op: &Operation, container: &mut C) -> ApplyResult<()>
where
	C: TextContainer + ?Sized,
{
	Applier::default().apply_to_container(op, container)
}

/// Fail if fewer than `requested` chars are `available`, when that is known.
///
/// `offset` is always reported in chars of the original document.
pub(crate) fn check_overrun(available: Option<usize>, offset: usize, requested: usize) -> ApplyResult<()> {
	match available {
		Some(available) if requested > available => {
			Err(ApplyError::RangeOverrun { offset, requested, available })
		},
		_ => Ok(()),
	}
}

/// Move a cursor forward by `by` chars, failing rather than wrapping around.
pub(crate) fn advance(cursor: usize, by: usize, offset: usize) -> ApplyResult<usize> {
	cursor.checked_add(by).ok_or(ApplyError::RangeOverrun {
		offset,
		requested: by,
		available: usize::MAX - cursor,
	})
}
