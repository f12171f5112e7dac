//! Token cursor for the shape parser.
//!
//! Low-level token access and lookahead. The cursor never runs past the
//! trailing EOF token, so `current()` is always valid.

use shift_ir::{Token, TokenKind};

pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Create a cursor over a token stream. The stream must end with EOF,
    /// which `shift_lexer::lex` guarantees.
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof)));
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn at(&self, kind: TokenKind) -> bool {
        self.kind() == kind
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    #[inline]
    pub fn current_text(&self) -> &str {
        &self.current().text
    }

    /// True when the current token starts on a fresh line (its leading
    /// trivia contains a line break).
    pub fn on_new_line(&self) -> bool {
        self.current().leading.contains_newline()
    }

    /// Current position, for speculative parsing.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a position previously obtained from [`Cursor::position`].
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos, "cursor may only rewind");
        self.pos = pos;
    }

    /// Take a copy of the current token and advance. Never advances past EOF.
    pub fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
