//! # API
//! These traits and structs represent the main `textop` library API.

/// typed tokens and operations
pub mod op;

/// capabilities a host document must expose to be patched in place
pub mod container;

/// applier configuration
pub mod config;

pub use op::{Operation, Token, TokenKind};
pub use container::TextContainer;
pub use config::Config;
