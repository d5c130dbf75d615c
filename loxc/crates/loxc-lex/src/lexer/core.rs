//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the scan loop, and the
//! per-character dispatch.

use loxc_util::Handler;
use tracing::{debug, debug_span, trace};

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::token::{Literal, Token, TokenKind};

/// Output of a completed scan pass.
///
/// `tokens` always ends with exactly one [`TokenKind::Eof`]. `errors`
/// holds the recoverable errors met along the way, in source order; when
/// it is non-empty the token stream must not be executed.
#[derive(Clone, Debug, PartialEq)]
pub struct Scanned {
    /// Tokens in source order, terminated by `EOF`.
    pub tokens: Vec<Token>,
    /// Unexpected-character errors recorded during the pass.
    pub errors: Vec<ScanError>,
}

impl Scanned {
    /// Returns true if the pass recorded no errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Emits every recorded error into `handler`.
    pub fn report(&self, handler: &Handler) {
        for error in &self.errors {
            handler.emit_diagnostic(error.to_diagnostic());
        }
    }

    /// Discards the errors and returns the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

/// Lexer for Lox source code.
///
/// A lexer is built fresh for one source string and consumed by
/// [`Lexer::scan_tokens`].
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Recoverable errors recorded so far.
    errors: Vec<ScanError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            errors: Vec::new(),
        }
    }

    /// Scans the whole source.
    ///
    /// Unexpected characters are collected into [`Scanned::errors`] and
    /// scanning carries on past them. An unterminated string stops the
    /// pass and is returned as the error; no tokens are returned with it.
    ///
    /// # Example
    ///
    /// ```
    /// use loxc_lex::{Lexer, TokenKind};
    ///
    /// let scanned = Lexer::new("var a = 1;").scan_tokens().unwrap();
    /// let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     [
    ///         TokenKind::Var,
    ///         TokenKind::Identifier,
    ///         TokenKind::Equal,
    ///         TokenKind::Number,
    ///         TokenKind::Semicolon,
    ///         TokenKind::Eof,
    ///     ]
    /// );
    /// assert!(scanned.is_clean());
    /// ```
    pub fn scan_tokens(mut self) -> ScanResult<Scanned> {
        let span = debug_span!("scan", len = self.cursor.source().len());
        let _enter = span.enter();

        let mut tokens = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(token) = self.scan_token()? {
                tokens.push(token);
            }
        }
        tokens.push(Token::eof(self.cursor.line()));

        debug!(tokens = tokens.len(), errors = self.errors.len(), "scan finished");
        Ok(Scanned {
            tokens,
            errors: self.errors,
        })
    }

    /// Consumes one character and whatever token it starts.
    ///
    /// Returns `Ok(None)` for whitespace, comments, and unexpected
    /// characters (which are recorded), and at end of input. Anything
    /// but end of input moves the cursor forward by at least one
    /// character.
    pub fn scan_token(&mut self) -> ScanResult<Option<Token>> {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let token = match self.cursor.advance() {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            '-' => self.make_token(TokenKind::Minus),
            '+' => self.make_token(TokenKind::Plus),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '!' => self.lex_bang(),
            '=' => self.lex_equal(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '/' => return Ok(self.lex_slash()),
            // The cursor counts the newline.
            ' ' | '\r' | '\t' | '\n' => return Ok(None),
            '"' => self.lex_string()?,
            c if c.is_ascii_digit() => self.lex_number(),
            c if crate::lexer::identifier::is_ident_start(c) => self.lex_identifier(),
            _ => {
                self.report_error(ScanError::UnexpectedCharacter {
                    line: self.cursor.line(),
                });
                return Ok(None);
            },
        };

        Ok(Some(token))
    }

    /// Records a recoverable error.
    pub(crate) fn report_error(&mut self, error: ScanError) {
        debug!(line = error.line(), "{}", error);
        self.errors.push(error);
    }

    /// Builds a token without a literal from the current lexeme.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        self.build_token(kind, None)
    }

    /// Builds a token carrying `literal` from the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token {
        self.build_token(kind, Some(literal))
    }

    fn build_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start);
        trace!(%kind, line = self.token_start_line, lexeme, "token");
        Token::new(kind, lexeme, literal, self.token_start_line)
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the errors recorded so far.
    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_ok(source: &str) -> Scanned {
        Lexer::new(source).scan_tokens().expect("scan should not be fatal")
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan_ok(source).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let scanned = scan_ok("");
        assert_eq!(scanned.tokens, vec![Token::eof(1)]);
        assert!(scanned.is_clean());
    }

    #[test]
    fn test_single_char_tokens() {
        assert_eq!(
            kinds("(){},.-+;*/"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Minus,
                TokenKind::Plus,
                TokenKind::Semicolon,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_emits_nothing() {
        let scanned = scan_ok(" \t\r\n \n");
        assert_eq!(scanned.tokens, vec![Token::eof(3)]);
    }

    #[test]
    fn test_negative_number_is_two_tokens() {
        assert_eq!(
            kinds("-5"),
            vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_leading_dot_is_not_a_number() {
        let tokens = scan_ok(".5").tokens;
        assert_eq!(tokens[0].kind, TokenKind::Dot);
        assert_eq!(tokens[1].as_number(), Some(5.0));
    }

    #[test]
    fn test_comment_stripping() {
        let tokens = scan_ok("1 + 2 // ignored\n3").tokens;
        let summary: Vec<_> = tokens.iter().map(|t| (t.kind, t.line)).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Number, 1),
                (TokenKind::Plus, 1),
                (TokenKind::Number, 1),
                (TokenKind::Number, 2),
                (TokenKind::Eof, 2),
            ]
        );
        assert_eq!(tokens[3].as_number(), Some(3.0));
    }

    #[test]
    fn test_unexpected_character_is_recoverable() {
        let scanned = scan_ok("@1");
        assert_eq!(scanned.errors, vec![ScanError::UnexpectedCharacter { line: 1 }]);
        assert_eq!(scanned.tokens.len(), 2);
        assert_eq!(scanned.tokens[0].as_number(), Some(1.0));
        assert_eq!(scanned.tokens[0].lexeme, "1");
    }

    #[test]
    fn test_unexpected_characters_are_all_collected() {
        let scanned = scan_ok("#\n$ x\n%");
        assert_eq!(
            scanned.errors,
            vec![
                ScanError::UnexpectedCharacter { line: 1 },
                ScanError::UnexpectedCharacter { line: 2 },
                ScanError::UnexpectedCharacter { line: 3 },
            ]
        );
        assert_eq!(
            scanned.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Identifier, TokenKind::Eof]
        );
    }

    #[test]
    fn test_non_ascii_character_is_consumed_whole() {
        let scanned = scan_ok("é+");
        assert_eq!(scanned.errors.len(), 1);
        assert_eq!(scanned.tokens[0].kind, TokenKind::Plus);
        assert_eq!(scanned.tokens[0].lexeme, "+");
    }

    #[test]
    fn test_unterminated_string_is_fatal() {
        let result = Lexer::new("@ \"open").scan_tokens();
        assert_eq!(result, Err(ScanError::UnterminatedString { line: 1 }));
    }

    #[test]
    fn test_scan_token_steps() {
        let mut lexer = Lexer::new("a //c\n");
        let first = lexer.scan_token().unwrap().unwrap();
        assert_eq!(first.kind, TokenKind::Identifier);
        assert_eq!(lexer.position(), 1);

        assert_eq!(lexer.scan_token().unwrap(), None); // space
        assert_eq!(lexer.scan_token().unwrap(), None); // comment
        assert_eq!(lexer.position(), 5);
        assert_eq!(lexer.line(), 1);

        assert_eq!(lexer.scan_token().unwrap(), None); // newline
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.scan_token().unwrap(), None); // end
        assert_eq!(lexer.position(), 6);
    }

    #[test]
    fn test_errors_accessor() {
        let mut lexer = Lexer::new("?");
        assert_eq!(lexer.scan_token().unwrap(), None);
        assert_eq!(lexer.errors(), &[ScanError::UnexpectedCharacter { line: 1 }]);
    }

    #[test]
    fn test_report_into_handler() {
        let handler = Handler::new();
        let scanned = scan_ok("^\n\n&");
        scanned.report(&handler);
        assert_eq!(handler.error_count(), 2);
        assert_eq!(
            handler.render(),
            "[line 1] Error: Unexpected character\n[line 3] Error: Unexpected character\n"
        );
    }

    #[test]
    fn test_eof_line_is_final_line() {
        let tokens = scan_ok("print 1;\n\n").tokens;
        assert_eq!(tokens.last().map(|t| t.line), Some(3));
    }

    #[test]
    fn test_idempotent() {
        let source = "fun add(a, b) { return a + b; }\nprint add(1, 2.5) >= 3;";
        assert_eq!(Lexer::new(source).scan_tokens(), Lexer::new(source).scan_tokens());
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_arbitrary_source_invariants() {
        use proptest::prelude::*;

        proptest!(|(source in any::<String>())| {
            let first = Lexer::new(&source).scan_tokens();
            // Scanning is deterministic, fatal or not
            assert_eq!(&first, &Lexer::new(&source).scan_tokens());

            if let Ok(scanned) = first {
                let (last, rest) = scanned.tokens.split_last().unwrap();
                assert_eq!(last.kind, TokenKind::Eof);
                assert!(last.lexeme.is_empty());
                for token in rest {
                    assert_ne!(token.kind, TokenKind::Eof);
                    assert!(!token.lexeme.is_empty());
                    assert!(source.contains(&token.lexeme));
                }
            }
        });
    }

    #[test]
    fn test_property_line_tracking() {
        use proptest::prelude::*;

        proptest!(|(parts in proptest::collection::vec(("[a-z_][a-z0-9_]{0,8}", 0usize..3), 1..20))| {
            let mut source = String::new();
            let mut expected = Vec::new();
            let mut line = 1;
            for (word, newlines) in &parts {
                expected.push(line);
                source.push_str(word);
                source.push(' ');
                source.push_str(&"\n".repeat(*newlines));
                line += *newlines as u32;
            }

            let tokens = scan_ok(&source).tokens;
            let lines: Vec<u32> = tokens[..tokens.len() - 1].iter().map(|t| t.line).collect();
            assert_eq!(lines, expected);
            assert_eq!(tokens[tokens.len() - 1].line, line);
        });
    }

    #[test]
    fn test_property_whitespace_ignored() {
        use proptest::prelude::*;

        proptest!(|(ws in "[ \t\r\n]{0,40}")| {
            let source = format!("{ws}var{ws}");
            assert_eq!(kinds(&source), vec![TokenKind::Var, TokenKind::Eof]);
        });
    }
}
