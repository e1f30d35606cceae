//! ### Buffer
//! A buffer is a container of text which operations can patch in place.
//! Hosts usually bring their own editor-backed [`crate::api::TextContainer`]; [`TextBuffer`]
//! is a plain in-memory one, addressed by row and column like most editors.

/// in-memory text container
pub mod text;
pub use text::{RowCol, TextBuffer};
