//! Lexer module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Lexer struct, scan loop and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - One-or-two character operators
//! - `comment` - Line comment skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Lexer, Scanned};
