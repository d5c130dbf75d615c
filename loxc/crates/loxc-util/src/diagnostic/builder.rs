//! Fluent construction of diagnostics.

use super::{Diagnostic, DiagnosticCode, Level};

/// Builder for creating diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("Expect ';' after value.")
///     .line(7)
///     .location("at end")
///     .emit(&handler);
///
/// assert_eq!(handler.render(), "[line 7] Error at end: Expect ';' after value.\n");
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    line: u32,
    location: Option<String>,
    code: Option<DiagnosticCode>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    ///
    /// The line defaults to 1 until [`DiagnosticBuilder::line`] is called.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: 1,
            location: None,
            code: None,
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the 1-based source line
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Set where on the line the problem is, e.g. `at end` or `at 'foo'`
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            line: self.line,
            location: self.location,
            code: self.code,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &super::Handler) {
        handler.emit_diagnostic(self.build());
    }
}
