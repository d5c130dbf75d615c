//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, ScanError, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        scan(source).unwrap().tokens
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_only_comment() {
        assert_eq!(lex_all("// nothing here"), vec![Token::eof(1)]);
    }

    #[test]
    fn test_edge_comment_then_newline() {
        assert_eq!(lex_all("// a\n// b\n"), vec![Token::eof(3)]);
    }

    #[test]
    fn test_edge_slash_before_newline() {
        let tokens = lex_all("/\n/");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[1].kind, TokenKind::Slash);
    }

    #[test]
    fn test_edge_lone_operators_at_end() {
        for (source, kind) in [
            ("!", TokenKind::Bang),
            ("=", TokenKind::Equal),
            ("<", TokenKind::Less),
            (">", TokenKind::Greater),
            ("/", TokenKind::Slash),
        ] {
            assert_eq!(kinds(source), vec![kind, TokenKind::Eof], "{source}");
        }
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = lex_all(&format!("var {} = 1;", name));
        assert_eq!(tokens[1].lexeme, name);
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_adjacent_tokens_without_space() {
        assert_eq!(
            kinds("x=1;y"),
            vec![
                TokenKind::Identifier,
                TokenKind::Equal,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_number_then_identifier() {
        let tokens = lex_all("12abc");
        assert_eq!(tokens[0].as_number(), Some(12.0));
        assert_eq!(tokens[1].lexeme, "abc");
    }

    #[test]
    fn test_edge_string_right_after_string() {
        let tokens = lex_all("\"a\"\"b\"");
        assert_eq!(tokens[0].as_string(), Some("a"));
        assert_eq!(tokens[1].as_string(), Some("b"));
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let tokens = lex_all("a\r\nb\r\n");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
        assert_eq!(tokens[2], Token::eof(3));
    }

    #[test]
    fn test_edge_unexpected_inside_comment_is_ignored() {
        let scanned = scan("// @#$ é\n").unwrap();
        assert!(scanned.is_clean());
    }

    #[test]
    fn test_edge_every_unexpected_ascii() {
        for c in ['@', '#', '$', '%', '^', '&', '|', '~', '`', '?', ':', '[', ']', '\\', '\''] {
            let scanned = scan(&c.to_string()).unwrap();
            assert_eq!(
                scanned.errors,
                vec![ScanError::UnexpectedCharacter { line: 1 }],
                "{c:?}"
            );
            assert_eq!(scanned.tokens, vec![Token::eof(1)]);
        }
    }

    #[test]
    fn test_edge_nul_byte_is_unexpected() {
        let scanned = scan("\0").unwrap();
        assert_eq!(scanned.errors.len(), 1);
    }

    #[test]
    fn test_edge_unterminated_after_good_tokens() {
        assert_eq!(
            scan("var s = \"abc"),
            Err(ScanError::UnterminatedString { line: 1 })
        );
    }

    #[test]
    fn test_edge_unterminated_ending_in_newline() {
        assert_eq!(
            scan("\"abc\n"),
            Err(ScanError::UnterminatedString { line: 2 })
        );
    }

    #[test]
    fn test_edge_eof_has_empty_lexeme() {
        let tokens = lex_all("1");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
        assert_eq!(tokens[1].lexeme, "");
        assert_eq!(tokens[1].literal, None);
    }
}
