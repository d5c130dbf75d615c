//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and rendering
//! line-tagged diagnostics.
//!
//! # Examples
//!
//! ```
//! use loxc_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.error(1, "Unexpected character");
//!
//! if handler.has_errors() {
//!     assert_eq!(handler.render(), "[line 1] Error: Unexpected character\n");
//! }
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use codes::{E_LEXER_UNEXPECTED_CHAR, E_LEXER_UNTERMINATED_STRING};

use crate::error::DiagnosticResult;
use std::cell::RefCell;
use std::fmt;
use std::io;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(Level::Error.title(), "Error");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents the program from running
    Error,
    /// A warning that doesn't prevent the program from running
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Capitalized form used when rendering a report line.
    pub fn title(&self) -> &'static str {
        match self {
            Level::Error => "Error",
            Level::Warning => "Warning",
            Level::Note => "Note",
            Level::Help => "Help",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and source line
///
/// Renders as `[line N] Error: message`, or `[line N] Error at end: message`
/// when a location is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// 1-based source line
    pub line: u32,
    /// Where on the line the problem is, without the leading space
    pub location: Option<String>,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, line: u32) -> Self {
        Self {
            level,
            message: message.into(),
            line,
            location: None,
            code: None,
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Error, message, line)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, line: u32) -> Self {
        Self::new(Level::Warning, message, line)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the location within the line
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line, self.level.title())?;
        if let Some(location) = &self.location {
            write!(f, " {}", location)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler is the "had error" flag of a front-end run: a driver emits
/// every diagnostic here and refuses to execute the program once
/// [`Handler::has_errors`] is true. A prompt loop calls [`Handler::clear`]
/// between lines so one bad line does not poison the next.
///
/// # Examples
///
/// ```
/// use loxc_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.error(2, "Unterminated string");
/// assert_eq!(handler.error_count(), 1);
///
/// handler.clear();
/// assert!(!handler.has_errors());
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Report an error on the given line
    pub fn error(&self, line: u32, message: impl Into<String>) {
        self.emit(Diagnostic::error(message, line));
    }

    /// Emit a diagnostic
    fn emit(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every diagnostic, one per line
    pub fn render(&self) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| format!("{}\n", d))
            .collect()
    }

    /// Write the rendered diagnostics to `out`
    ///
    /// # Examples
    ///
    /// ```
    /// use loxc_util::diagnostic::Handler;
    ///
    /// let handler = Handler::new();
    /// handler.error(4, "Unexpected character");
    ///
    /// let mut out = Vec::new();
    /// handler.write_to(&mut out).unwrap();
    /// assert_eq!(out, b"[line 4] Error: Unexpected character\n");
    /// ```
    pub fn write_to(&self, out: &mut impl io::Write) -> DiagnosticResult<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diagnostic)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
