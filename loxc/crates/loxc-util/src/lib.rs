//! loxc-util - Shared infrastructure for the Lox front end
//!
//! This crate holds the pieces every phase of the Lox toolchain needs but
//! none of them owns: the diagnostic types used to report line-tagged
//! errors, and the handler that collects them.
//!
//! The front end never prints and never exits. Phases emit diagnostics
//! into a [`Handler`]; the program driving them decides what to do with
//! the collected result (print `[line N] Error: ...`, refuse to run, pick
//! an exit code).
//!
//! # Example
//!
//! ```
//! use loxc_util::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character")
//!     .line(3)
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.render(), "[line 3] Error: Unexpected character\n");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
