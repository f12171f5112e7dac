//! Core syntax types for declshift.
//!
//! This crate contains the data structures shared by the lexer, the shape
//! parser, and the refactoring engine:
//!
//! - [`Span`] for half-open byte ranges into the source
//! - [`Trivia`] for verbatim whitespace/comment blobs on token edges
//! - [`Token`] and [`TokenKind`] for the lexer output
//! - [`SyntaxArena`], [`SyntaxTree`], and [`SyntaxKind`] for the lossless
//!   concrete syntax tree
//! - typed views ([`DeclGroup`], [`MemberItem`], [`VariableDecl`]) for the
//!   capability queries the refactoring engine performs
//!
//! # Design Philosophy
//!
//! - **Flatten everything**: no boxed child pointers, nodes live in an
//!   append-only arena and reference each other by [`NodeId`] index.
//! - **Identity is the index**: two structurally identical members at
//!   different tree positions have different ids, which is what the
//!   refactoring engine filters by.
//! - **Trivia is sacred**: every source byte lands in exactly one token's
//!   text or trivia, so rendering a tree reproduces its source exactly.

mod arena;
mod decl;
mod kind;
mod span;
mod token;
mod trivia;

pub use arena::{NodeData, NodeId, SyntaxArena, SyntaxTree};
pub use decl::{DeclGroup, MemberItem, PatternBinding, VariableDecl};
pub use kind::SyntaxKind;
pub use span::Span;
pub use token::{Token, TokenKind};
pub use trivia::Trivia;
