//! Number literal lexing.

use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal once its first digit has been consumed.
    ///
    /// # Number Formats
    ///
    /// - Integer: `42`, `007`
    /// - Decimal: `3.14`
    ///
    /// A `.` belongs to the number only when a digit follows it, so `1.`
    /// is `NUMBER DOT` and `1.foo` is `NUMBER DOT IDENTIFIER`. There is no
    /// sign, exponent, or leading-dot form.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.skip_digits();

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.skip_digits();
        }

        let text = self.cursor.slice_from(self.token_start);
        // Only `digits` or `digits.digits` reach here, and both always parse.
        let value = text.parse::<f64>().unwrap_or_default();
        self.make_literal_token(TokenKind::Number, Literal::Number(value))
    }

    fn skip_digits(&mut self) {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
    }
}
