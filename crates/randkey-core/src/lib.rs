//! Core types for the randkey key generator.
//!
//! This crate provides the token alphabet used by every generation mode:
//! the [`Token`] value type, the built-in character classes and the
//! order-preserving [`TokenRegistry`]. It also defines [`ErrorKind`], the
//! symbolic error identifiers shared by the rest of the workspace.

pub mod charset;
pub mod error;
pub mod registry;
pub mod token;

pub use charset::BuiltinCharset;
pub use error::{ErrorKind, RegistryError};
pub use registry::TokenRegistry;
pub use token::Token;
