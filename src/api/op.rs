//! ### Op
//! Typed representation of a single edit instruction and of whole operations.

/// Kind of a [`Token`], as identified by its leading discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	Retain,
	Insert,
	Delete,
}

impl TokenKind {
	/// One-letter wire discriminator.
	pub const fn symbol(self) -> char {
		match self {
			TokenKind::Retain => 'r',
			TokenKind::Insert => 'i',
			TokenKind::Delete => 'd',
		}
	}

	pub const fn from_symbol(c: char) -> Option<Self> {
		match c {
			'r' => Some(TokenKind::Retain),
			'i' => Some(TokenKind::Insert),
			'd' => Some(TokenKind::Delete),
			_ => None,
		}
	}
}

/// A single instruction of an [`Operation`].
///
/// Lengths are counted in chars, not bytes.
///
/// ### examples
/// skip the first 6 characters: `Token::Retain(6)`, wire form `r6`
///
/// remove "World" right after the cursor: `Token::Delete("World".into())`, wire form `dWorld`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "String", into = "String"))]
pub enum Token {
	/// Advance over this many characters of the document unchanged.
	Retain(usize),
	/// Introduce this text without consuming document content.
	Insert(String),
	/// Remove this exact text from the document.
	Delete(String),
}

impl Token {
	pub fn kind(&self) -> TokenKind {
		match self {
			Token::Retain(_) => TokenKind::Retain,
			Token::Insert(_) => TokenKind::Insert,
			Token::Delete(_) => TokenKind::Delete,
		}
	}

	/// Text payload, if this token carries one.
	pub fn text(&self) -> Option<&str> {
		match self {
			Token::Retain(_) => None,
			Token::Insert(txt) | Token::Delete(txt) => Some(txt),
		}
	}

	/// Characters consumed from the document this token is applied to.
	pub fn base_len(&self) -> usize {
		match self {
			Token::Retain(n) => *n,
			Token::Insert(_) => 0,
			Token::Delete(txt) => txt.chars().count(),
		}
	}

	/// Characters this token contributes to the resulting document.
	pub fn target_len(&self) -> usize {
		match self {
			Token::Retain(n) => *n,
			Token::Insert(txt) => txt.chars().count(),
			Token::Delete(_) => 0,
		}
	}

	/// Wire representation of this token, e.g. `r12` or `iabc`.
	pub fn encode(&self) -> String {
		self.to_string()
	}
}

impl std::fmt::Display for Token {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Token::Retain(n) => write!(f, "{}{n}", TokenKind::Retain.symbol()),
			Token::Insert(txt) => write!(f, "{}{txt}", TokenKind::Insert.symbol()),
			Token::Delete(txt) => write!(f, "{}{txt}", TokenKind::Delete.symbol()),
		}
	}
}

impl From<Token> for String {
	fn from(value: Token) -> Self {
		value.encode()
	}
}

/// An ordered sequence of [`Token`]s, applied strictly left to right.
///
/// Operations are built once, either from typed tokens or with [`Operation::decode`], and are
/// not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Operation {
	tokens: Vec<Token>,
}

impl Operation {
	pub fn new(tokens: Vec<Token>) -> Self {
		Operation { tokens }
	}

	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Token> {
		self.tokens.iter()
	}

	/// Characters of the original document this operation walks over.
	///
	/// Saturates at `usize::MAX`: such an operation can't fit any document anyway.
	pub fn base_len(&self) -> usize {
		self.tokens.iter().map(Token::base_len).fold(0, usize::saturating_add)
	}

	/// Characters this operation produces, excluding any implicitly kept tail.
	///
	/// Saturates at `usize::MAX` like [`Operation::base_len`].
	pub fn target_len(&self) -> usize {
		self.tokens.iter().map(Token::target_len).fold(0, usize::saturating_add)
	}

	/// Returns true if applying this operation can't change anything.
	pub fn is_noop(&self) -> bool {
		self.tokens.iter().all(|t| matches!(t, Token::Retain(_)))
	}

	/// Span of the base document effectively touched, skipping leading and trailing retains.
	pub fn effective_range(&self) -> std::ops::Range<usize> {
		let first = match self.tokens.first() {
			Some(Token::Retain(n)) => *n,
			_ => 0,
		};
		let last = match self.tokens.last() {
			Some(Token::Retain(n)) if self.tokens.len() > 1 => *n,
			_ => 0,
		};
		let end = self.base_len().saturating_sub(last).max(first);
		first..end
	}

	/// Wire representation of every token, in order.
	pub fn encode(&self) -> Vec<String> {
		self.tokens.iter().map(Token::encode).collect()
	}
}

impl From<Vec<Token>> for Operation {
	fn from(tokens: Vec<Token>) -> Self {
		Operation { tokens }
	}
}

impl FromIterator<Token> for Operation {
	fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
		Operation { tokens: iter.into_iter().collect() }
	}
}

impl IntoIterator for Operation {
	type Item = Token;
	type IntoIter = std::vec::IntoIter<Token>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.into_iter()
	}
}

impl<'a> IntoIterator for &'a Operation {
	type Item = &'a Token;
	type IntoIter = std::slice::Iter<'a, Token>;

	fn into_iter(self) -> Self::IntoIter {
		self.tokens.iter()
	}
}
