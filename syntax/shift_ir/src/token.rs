//! Trivia-carrying tokens.

use std::fmt;

use crate::{Span, Trivia};

/// Token kinds for the Swift-shaped surface grammar.
///
/// Only the distinctions the shape parser needs are made here. Modifier and
/// accessor keywords (`public`, `static`, `get`, ...) stay [`TokenKind::Ident`]
/// and are classified by text at the positions where they matter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Type declaration introducers
    Class,
    Struct,
    Enum,
    Actor,
    Protocol,
    Extension,

    // Member declaration introducers
    Func,
    Var,
    Let,
    Case,
    Init,
    Deinit,
    Subscript,
    Typealias,
    Import,

    Ident,
    Int,
    Float,
    Str,

    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Comma,
    Colon,
    Semicolon,
    Equals,
    Dot,
    At,
    /// A run of operator characters (`+`, `->`'s dash, `==`, ...).
    Operator,
    /// Anything the lexer does not model. Text is still preserved.
    Unknown,
    Eof,
}

impl TokenKind {
    /// True for keywords that introduce a declaration group.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Struct
                | TokenKind::Enum
                | TokenKind::Actor
                | TokenKind::Protocol
                | TokenKind::Extension
        )
    }

    /// Bracket-depth contribution: +1 for openers, -1 for closers.
    pub fn bracket_delta(self) -> i32 {
        match self {
            TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => 1,
            TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => -1,
            _ => 0,
        }
    }
}

/// A token with verbatim leading/trailing trivia.
///
/// `span` covers the token text only. The leading trivia occupies the bytes
/// immediately before `span.start`, the trailing trivia the bytes
/// immediately after `span.end`; together the three pieces reproduce the
/// source slice the token is responsible for.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub leading: Trivia,
    pub trailing: Trivia,
    pub span: Span,
}

impl Token {
    /// Create a token with empty trivia.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            leading: Trivia::empty(),
            trailing: Trivia::empty(),
            span,
        }
    }

    /// Create a token that has no source position (inserted by a rewrite).
    pub fn synthesized(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }

    #[must_use]
    pub fn with_leading(mut self, leading: Trivia) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub fn with_trailing(mut self, trailing: Trivia) -> Self {
        self.trailing = trailing;
        self
    }

    /// Span including both trivia edges.
    ///
    /// Saturating: synthesized tokens carry [`Span::DUMMY`] and report an
    /// empty full span rather than underflowing.
    pub fn full_span(&self) -> Span {
        Span::new(
            self.span.start.saturating_sub(self.leading.len() as u32),
            self.span.end.saturating_add(self.trailing.len() as u32),
        )
    }

    /// Write `leading + text + trailing` into `out`.
    pub fn write_text(&self, out: &mut String) {
        out.push_str(self.leading.text());
        out.push_str(&self.text);
        out.push_str(self.trailing.text());
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} {:?}", self.kind, self.span, self.text)
    }
}
