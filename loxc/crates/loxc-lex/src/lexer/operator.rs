//! Operator lexing.
//!
//! Each function here runs after the first character of the operator has
//! been consumed, and takes at most one more character of lookahead.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes bang or bang-equals.
    ///
    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token {
        let kind = if self.cursor.match_char('=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        };
        self.make_token(kind)
    }

    /// Lexes equals or equals-equals.
    ///
    /// Handles: `=`, `==`
    pub(crate) fn lex_equal(&mut self) -> Token {
        let kind = if self.cursor.match_char('=') {
            TokenKind::EqualEqual
        } else {
            TokenKind::Equal
        };
        self.make_token(kind)
    }

    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token {
        let kind = if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        };
        self.make_token(kind)
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        let kind = if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        };
        self.make_token(kind)
    }

    /// Lexes slash or skips a line comment.
    ///
    /// Handles: `/`, `//`. Returns `None` for a comment.
    pub(crate) fn lex_slash(&mut self) -> Option<Token> {
        if self.cursor.match_char('/') {
            self.skip_line_comment();
            return None;
        }
        Some(self.make_token(TokenKind::Slash))
    }
}
