//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Returns true if `c` can start an identifier: an ASCII letter or `_`.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword once its first character has been
    /// consumed.
    ///
    /// The whole run is read before the keyword lookup, so `forest` is one
    /// identifier rather than `for` followed by `est`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(keyword_from_ident(text).unwrap_or(TokenKind::Identifier))
    }
}
