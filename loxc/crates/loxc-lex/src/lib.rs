//! loxc-lex - Scanner for the Lox Programming Language
//!
//! This crate turns Lox source text into the flat token list the parser
//! consumes. It is a single left-to-right pass with at most two characters
//! of lookahead.
//!
//! # Example Usage
//!
//! ```
//! use loxc_lex::{scan, TokenKind};
//!
//! let scanned = scan("print \"hi\"; // greet").unwrap();
//! let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Print, TokenKind::String, TokenKind::Semicolon, TokenKind::Eof]
//! );
//! assert_eq!(scanned.tokens[1].as_string(), Some("hi"));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, literals, and the keyword table
//! - [`lexer`] - The scan loop and per-category lexing
//! - [`cursor`] - Character cursor with line counting
//! - [`error`] - Scan errors
//!
//! # Lexical Grammar
//!
//! - **Single characters**: `( ) { } , . - + ; * /`
//! - **One or two characters**: `! != = == < <= > >=`
//! - **Comments**: `//` to end of line; there are no block comments
//! - **Strings**: `"..."`, may span lines, no escapes
//! - **Numbers**: `123`, `123.45`; no sign, exponent, or leading dot
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*`, minus the sixteen keywords
//!
//! # Errors
//!
//! An unexpected character is recorded and skipped. An unterminated string
//! ends the scan and nothing else from that pass is reported.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

use loxc_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use lexer::{Lexer, Scanned};
pub use token::{keyword_from_ident, Literal, Token, TokenKind};

/// Scans `source` in one pass.
///
/// Shorthand for `Lexer::new(source).scan_tokens()`.
pub fn scan(source: &str) -> ScanResult<Scanned> {
    Lexer::new(source).scan_tokens()
}

/// Scans `source` and reports every error into `handler`.
///
/// Returns the tokens when the pass completed, even if unexpected
/// characters were reported; check [`Handler::has_errors`] before running
/// them. Returns `None` after an unterminated string, whose diagnostic is
/// the only one reported.
///
/// # Example
///
/// ```
/// use loxc_lex::scan_reporting;
/// use loxc_util::Handler;
///
/// let handler = Handler::new();
/// assert!(scan_reporting("\"open", &handler).is_none());
/// assert_eq!(handler.render(), "[line 1] Error: Unterminated string\n");
/// ```
pub fn scan_reporting(source: &str, handler: &Handler) -> Option<Vec<Token>> {
    match scan(source) {
        Ok(scanned) => {
            scanned.report(handler);
            Some(scanned.into_tokens())
        },
        Err(error) => {
            handler.emit_diagnostic(error.to_diagnostic());
            None
        },
    }
}
