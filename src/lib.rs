//! # textop
//! Apply compact retain/insert/delete operations to text documents.
//!
//! This crate is the materialization half of an operational transform pipeline: given an
//! operation already agreed upon, it patches the current document and verifies that the text
//! being deleted is really there. Computing, transforming and transporting operations is up
//! to other layers.
//!
//! ## Operations
//! An [`Operation`] is an ordered list of tokens, each encoded on the wire as a string whose
//! first char picks the kind and whose remainder is the payload:
//! * `r<count>` retains `count` chars unchanged
//! * `i<text>` inserts `text`
//! * `d<text>` deletes `text`, which must match the document exactly
//!
//! Wire tokens are decoded once, eagerly, so malformed operations are refused before any
//! document is touched.
//!
//! ## Applying
//! ```
//! use textop::{Operation, TextBuffer};
//!
//! let op = Operation::decode(["r6", "dWorld", "iThere"])?;
//!
//! // immutable strings produce a new document
//! assert_eq!(textop::apply_contents(&op, "Hello World")?, "Hello There");
//!
//! // containers are patched in place
//! let mut buffer = TextBuffer::new("Hello World");
//! textop::apply_to_container(&op, &mut buffer)?;
//! assert_eq!(buffer.content(), "Hello There");
//! # Ok::<(), textop::Error>(())
//! ```
//!
//! Editors can be patched directly by implementing [`api::TextContainer`] on top of their
//! document model.
//!
//! ## Failures
//! A failing token aborts the whole application. Containers are mutated token by token, so a
//! failed application may leave a container partially patched; configure an [`Applier`] with
//! [`api::Config::atomic`] to validate operations before any mutation.
//!
//! Appliers are synchronous and never lock anything: callers must serialize operations on a
//! given container, for example through [`ext::SharedContainer`].

/// core structs and traits
pub mod api;

/// crate error types
pub mod errors;

/// operation decoding and appliers
pub mod operation;

/// in-memory text container
pub mod buffer;

/// hashing, shared containers and logging helpers
pub mod ext;

/// all-in-one imports : `use textop::prelude::*;`
pub mod prelude;

pub use api::{Config, Operation, Token, TokenKind, TextContainer};
pub use buffer::{RowCol, TextBuffer};
pub use errors::{Error, Result};
pub use operation::{apply_contents, apply_to_container, decode, Applier};
