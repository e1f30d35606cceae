//! # Config
//! Data structure defining how operations get applied

/// Configuration struct for [`crate::Applier`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
	/// validate the whole operation before mutating containers, default false
	///
	/// when disabled, a failing token leaves earlier mutations of the same operation in place
	pub atomic: Option<bool>,
	/// require operations to consume the whole document, default false
	pub exhaustive: Option<bool>,
	/// max chars of actual content reported on delete mismatches, default 10
	pub preview: Option<usize>,
}

impl Config {
	#[inline]
	pub(crate) fn atomic(&self) -> bool {
		self.atomic.unwrap_or(false)
	}

	#[inline]
	pub(crate) fn exhaustive(&self) -> bool {
		self.exhaustive.unwrap_or(false)
	}

	#[inline]
	pub(crate) fn preview(&self) -> usize {
		self.preview.unwrap_or(10)
	}
}
