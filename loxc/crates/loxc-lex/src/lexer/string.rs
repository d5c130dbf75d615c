//! String literal lexing.

use tracing::debug;

use crate::error::{ScanError, ScanResult};
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal once the opening `"` has been consumed.
    ///
    /// Strings may span lines and have no escape sequences; the literal is
    /// the text between the quotes, verbatim. The token's line is the line
    /// of the opening quote.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedString`] if the source ends first, tagged
    /// with the line the cursor reached.
    pub(crate) fn lex_string(&mut self) -> ScanResult<Token> {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let error = ScanError::UnterminatedString {
                line: self.cursor.line(),
            };
            debug!(line = error.line(), start_line = self.token_start_line, "{}", error);
            return Err(error);
        }

        // The closing quote.
        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let value = &lexeme[1..lexeme.len() - 1];
        Ok(self.make_literal_token(TokenKind::String, Literal::String(value.to_string())))
    }
}
