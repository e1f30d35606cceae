//! ### Prelude
//!
//! all-in-one renamed imports with `use textop::prelude::*`

pub use crate::{
	Error as TextopError,
	Result as TextopResult,
};

pub use crate::errors::{
	ApplyError as TextopApplyError,
	DecodeError as TextopDecodeError,
};

pub use crate::api::{
	Config as TextopConfig,
	Operation as TextopOperation,
	Token as TextopToken,
	TextContainer as TextopContainer,
};

pub use crate::{
	operation::Applier as TextopApplier,
	buffer::TextBuffer as TextopBuffer,
	ext::SharedContainer as TextopSharedContainer,
};
