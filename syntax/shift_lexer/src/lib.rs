//! Lexer producing trivia-carrying tokens.
//!
//! Raw logos tokens are cooked into [`shift_ir::Token`]s: whitespace and
//! comments fold into the leading/trailing trivia of their significant
//! neighbors. The attachment rule matches the usual full-fidelity split:
//!
//! - a token's **trailing** trivia is the run of horizontal whitespace and
//!   same-line comments after it, up to but not including the first newline;
//! - everything from that newline on is the **leading** trivia of the next
//!   token;
//! - trivia before the first token leads it, trivia after the last token
//!   leads the EOF token.
//!
//! Lexing is total. Bytes logos cannot match become `Unknown` tokens, so
//! concatenating `leading + text + trailing` over the stream (EOF included)
//! reproduces the input exactly.

mod raw_token;

use logos::Logos;
use raw_token::RawToken;
use shift_ir::{Span, Token, TokenKind, Trivia};

/// Tokenize `source` into trivia-carrying tokens, ending with EOF.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut leading = Trivia::empty();
    // Index of the token currently collecting trailing trivia, if any.
    // `None` once a newline has been seen since the last significant token.
    let mut open: Option<usize> = None;

    for (result, range) in RawToken::lexer(source).spanned() {
        let text = &source[range.clone()];
        match result {
            Ok(raw) if raw.is_trivia() => {
                let same_line = !matches!(raw, RawToken::Newline) && !text.contains('\n');
                match open {
                    Some(index) if same_line => tokens[index].trailing.push_str(text),
                    _ => {
                        open = None;
                        leading.push_str(text);
                    }
                }
            }
            _ => {
                let kind = match result {
                    Ok(raw) => raw.token_kind(),
                    Err(()) => TokenKind::Unknown,
                };
                let token = Token::new(kind, text, Span::from_range(range))
                    .with_leading(std::mem::take(&mut leading));
                tokens.push(token);
                open = Some(tokens.len() - 1);
            }
        }
    }

    let end = Span::from_range(source.len()..source.len());
    tokens.push(Token::new(TokenKind::Eof, "", end).with_leading(leading));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn render(tokens: &[Token]) -> String {
        let mut out = String::new();
        for token in tokens {
            token.write_text(&mut out);
        }
        out
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_and_punctuation() {
        let tokens = lex("class Foo { func bar() }");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Class,
                TokenKind::Ident,
                TokenKind::LBrace,
                TokenKind::Func,
                TokenKind::Ident,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn trailing_trivia_stops_at_newline() {
        let tokens = lex("let x // note\n  let y");
        // `x` owns the space and the comment; the newline and indent lead `let`
        let x = &tokens[1];
        assert_eq!(x.text, "x");
        assert_eq!(x.trailing.text(), " // note");
        let second_let = &tokens[2];
        assert_eq!(second_let.kind, TokenKind::Let);
        assert_eq!(second_let.leading.text(), "\n  ");
    }

    #[test]
    fn comment_on_own_line_leads_next_token() {
        let tokens = lex("{\n  // leading\n  func f\n}");
        let func = &tokens[1];
        assert_eq!(func.kind, TokenKind::Func);
        assert_eq!(func.leading.text(), "\n  // leading\n  ");
    }

    #[test]
    fn file_edges_attach_to_first_token_and_eof() {
        let tokens = lex("  \nvar x\n// tail\n");
        assert_eq!(tokens[0].leading.text(), "  \n");
        let eof = tokens.last().map(|t| (t.kind, t.leading.text().to_owned()));
        assert_eq!(eof, Some((TokenKind::Eof, "\n// tail\n".to_owned())));
    }

    #[test]
    fn unknown_bytes_are_preserved() {
        let tokens = lex("let π = #1");
        assert_eq!(render(&tokens), "let π = #1");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Unknown));
    }

    #[test]
    fn operators_do_not_swallow_comments() {
        let tokens = lex("a / b // half");
        let slash = &tokens[1];
        assert_eq!(slash.kind, TokenKind::Operator);
        assert_eq!(slash.text, "/");
        assert_eq!(tokens[2].trailing.text(), " // half");
    }

    #[test]
    fn block_comment_with_newline_leads_next_token() {
        let tokens = lex("a /* one\ntwo */ b");
        assert_eq!(tokens[1].leading.text(), "/* one\ntwo */ ");
        assert_eq!(render(&tokens), "a /* one\ntwo */ b");
    }

    #[test]
    fn spans_cover_token_text_only() {
        let tokens = lex("  func foo");
        let func = &tokens[0];
        assert_eq!(func.span, Span::new(2, 6));
        assert_eq!(func.full_span(), Span::new(0, 7));
    }

    proptest! {
        #[test]
        fn lexing_round_trips_any_input(source in ".*") {
            let tokens = lex(&source);
            prop_assert_eq!(render(&tokens), source);
        }

        #[test]
        fn lexing_round_trips_source_like_input(
            source in r"(class|struct|func|var|//x|\{|\}|\n| |[a-z]+|=|[0-9]+){0,40}"
        ) {
            let tokens = lex(&source);
            prop_assert_eq!(render(&tokens), source);
        }
    }
}
