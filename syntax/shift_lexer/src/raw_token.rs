//! Raw token definition.
//!
//! The logos-derived tokenizer output before trivia attachment. Trivia
//! variants (whitespace, newlines, comments) are real tokens at this level;
//! the cooking pass in `lib.rs` folds them into the trivia of their
//! neighbors. Nothing is skipped: totality is what makes the tree lossless.

use logos::Logos;
use shift_ir::TokenKind;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t]+")]
    Whitespace,
    #[regex(r"\r?\n|\r")]
    Newline,
    #[regex(r"//[^\n]*", priority = 10, allow_greedy = true)]
    LineComment,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", priority = 10)]
    BlockComment,

    #[token("class")]
    Class,
    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("actor")]
    Actor,
    #[token("protocol")]
    Protocol,
    #[token("extension")]
    Extension,
    #[token("func")]
    Func,
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("case")]
    Case,
    #[token("init")]
    Init,
    #[token("deinit")]
    Deinit,
    #[token("subscript")]
    Subscript,
    #[token("typealias")]
    Typealias,
    #[token("import")]
    Import,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*")]
    Float,
    #[regex(r"[0-9][0-9_]*")]
    Int,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,
    #[token(".")]
    Dot,
    #[token("@")]
    At,
    #[regex(r"[+\-*/%!&|^~?]+")]
    Operator,
}

impl RawToken {
    /// Trivia tokens fold into their neighbors' leading/trailing blobs.
    pub(crate) fn is_trivia(self) -> bool {
        matches!(
            self,
            RawToken::Whitespace | RawToken::Newline | RawToken::LineComment | RawToken::BlockComment
        )
    }

    /// The final token kind for a significant raw token.
    pub(crate) fn token_kind(self) -> TokenKind {
        match self {
            // trivia is folded away before conversion
            RawToken::Whitespace
            | RawToken::Newline
            | RawToken::LineComment
            | RawToken::BlockComment => TokenKind::Unknown,
            RawToken::Class => TokenKind::Class,
            RawToken::Struct => TokenKind::Struct,
            RawToken::Enum => TokenKind::Enum,
            RawToken::Actor => TokenKind::Actor,
            RawToken::Protocol => TokenKind::Protocol,
            RawToken::Extension => TokenKind::Extension,
            RawToken::Func => TokenKind::Func,
            RawToken::Var => TokenKind::Var,
            RawToken::Let => TokenKind::Let,
            RawToken::Case => TokenKind::Case,
            RawToken::Init => TokenKind::Init,
            RawToken::Deinit => TokenKind::Deinit,
            RawToken::Subscript => TokenKind::Subscript,
            RawToken::Typealias => TokenKind::Typealias,
            RawToken::Import => TokenKind::Import,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Float => TokenKind::Float,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Equals => TokenKind::Equals,
            RawToken::Dot => TokenKind::Dot,
            RawToken::At => TokenKind::At,
            RawToken::Operator => TokenKind::Operator,
        }
    }
}
