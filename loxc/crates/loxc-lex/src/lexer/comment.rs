//! Comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips the rest of a line comment once `//` has been consumed.
    ///
    /// Stops before the newline so the main loop counts it.
    pub(crate) fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}
