//! Scan errors.

use loxc_util::{Diagnostic, DiagnosticCode};
use thiserror::Error;

/// An error found while scanning.
///
/// Both variants carry only the line they were detected on. An unexpected
/// character is recoverable: the scanner records it and keeps going. An
/// unterminated string ends the scan pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A character that starts no token.
    #[error("Unexpected character")]
    UnexpectedCharacter {
        /// Line the character is on.
        line: u32,
    },

    /// A string literal still open at end of input.
    #[error("Unterminated string")]
    UnterminatedString {
        /// Line reached when the input ran out.
        line: u32,
    },
}

impl ScanError {
    /// Line the error is reported on.
    pub fn line(&self) -> u32 {
        match self {
            ScanError::UnexpectedCharacter { line } | ScanError::UnterminatedString { line } => {
                *line
            },
        }
    }

    /// Fixed message text.
    pub fn message(&self) -> &'static str {
        match self {
            ScanError::UnexpectedCharacter { .. } => "Unexpected character",
            ScanError::UnterminatedString { .. } => "Unterminated string",
        }
    }

    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ScanError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }

    /// Whether this error ends the scan pass.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScanError::UnterminatedString { .. })
    }

    /// Converts the error into an error-level diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message(), self.line()).with_code(self.code())
    }
}

/// Result type alias for scan operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;
