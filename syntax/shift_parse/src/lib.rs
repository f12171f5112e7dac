//! Lenient shape parser for the Swift-shaped surface.
//!
//! The parser recognizes only the syntactic shapes the refactoring engine
//! consumes: type declarations, their member lists, and the member kinds the
//! validity predicate distinguishes. Everything else is preserved as opaque,
//! balanced token runs.
//!
//! Parsing is total. There is no error type: malformed input degrades to
//! opaque runs instead of producing diagnostics, and rendering the resulting
//! tree reproduces the input byte-for-byte.

mod cursor;

use cursor::Cursor;
use shift_ir::{NodeId, SyntaxArena, SyntaxKind, SyntaxTree, TokenKind};

/// Declaration modifier keywords. The lexer keeps these as identifiers; they
/// only act as modifiers at declaration-head position.
const MODIFIERS: &[&str] = &[
    "public",
    "private",
    "internal",
    "fileprivate",
    "open",
    "package",
    "static",
    "final",
    "override",
    "required",
    "convenience",
    "lazy",
    "weak",
    "unowned",
    "mutating",
    "nonmutating",
    "dynamic",
    "indirect",
    "optional",
    "nonisolated",
];

/// Accessor introducers at member position.
const ACCESSORS: &[&str] = &["get", "set", "willSet", "didSet"];

/// Parse `source` into a lossless syntax tree.
pub fn parse(source: &str) -> SyntaxTree {
    Parser::new(shift_lexer::lex(source)).parse_source_file()
}

struct Parser {
    cursor: Cursor,
    arena: SyntaxArena,
}

impl Parser {
    fn new(tokens: Vec<shift_ir::Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: SyntaxArena::new(),
        }
    }

    /// Move the current token into the arena and return its id.
    #[inline]
    fn bump(&mut self) -> NodeId {
        let token = self.cursor.bump();
        self.arena.alloc_token(token)
    }

    fn parse_source_file(mut self) -> SyntaxTree {
        let mut children = Vec::new();
        while !self.cursor.at_end() {
            let item = self.parse_item();
            let statement = self.arena.alloc_node(SyntaxKind::Statement, vec![item]);
            children.push(statement);
        }
        // EOF carries the file's trailing trivia
        children.push(self.bump());
        let root = self.arena.alloc_node(SyntaxKind::SourceFile, children);
        SyntaxTree::new(self.arena, root)
    }

    fn parse_item(&mut self) -> NodeId {
        if let Some(decl) = self.parse_type_decl() {
            return decl;
        }
        self.parse_other_item()
    }

    /// Try to parse a type declaration: attributes/modifiers, an introducer
    /// keyword, a name, optional generic and inheritance clauses, and a
    /// member block on the same logical line. Rewinds and returns `None`
    /// when the shape does not commit.
    fn parse_type_decl(&mut self) -> Option<NodeId> {
        let checkpoint = self.cursor.position();
        let mut children = Vec::new();
        self.bump_attributes_and_modifiers(&mut children);

        if !self.cursor.kind().is_type_keyword() {
            self.cursor.set_position(checkpoint);
            return None;
        }
        children.push(self.bump());
        if !self.cursor.at(TokenKind::Ident) {
            self.cursor.set_position(checkpoint);
            return None;
        }
        children.push(self.bump());

        if self.cursor.at(TokenKind::Lt) {
            let clause = self.parse_generic_clause();
            children.push(clause);
        }

        // inheritance / where clause: everything up to the member block
        let mut header = Vec::new();
        while !self.cursor.at(TokenKind::LBrace) {
            if self.cursor.at_end()
                || self.cursor.at(TokenKind::RBrace)
                || self.cursor.at(TokenKind::Semicolon)
                || self.cursor.on_new_line()
            {
                // no member block; this is not a declaration group
                self.cursor.set_position(checkpoint);
                return None;
            }
            header.push(self.bump());
        }
        if !header.is_empty() {
            let clause = self.arena.alloc_node(SyntaxKind::InheritanceClause, header);
            children.push(clause);
        }

        let block = self.parse_member_block();
        children.push(block);
        Some(self.arena.alloc_node(SyntaxKind::TypeDecl, children))
    }

    /// Balanced `<...>`. Stops early at `{` or EOF so a malformed clause
    /// cannot swallow the member block.
    fn parse_generic_clause(&mut self) -> NodeId {
        let mut children = vec![self.bump()]; // `<`
        let mut depth = 1i32;
        while depth > 0 && !self.cursor.at_end() && !self.cursor.at(TokenKind::LBrace) {
            match self.cursor.kind() {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => depth -= 1,
                _ => {}
            }
            children.push(self.bump());
        }
        self.arena
            .alloc_node(SyntaxKind::GenericParamClause, children)
    }

    fn parse_member_block(&mut self) -> NodeId {
        let mut children = vec![self.bump()]; // `{`
        while !self.cursor.at(TokenKind::RBrace) && !self.cursor.at_end() {
            children.push(self.parse_member_item());
        }
        if self.cursor.at(TokenKind::RBrace) {
            children.push(self.bump());
        }
        self.arena.alloc_node(SyntaxKind::MemberBlock, children)
    }

    fn parse_member_item(&mut self) -> NodeId {
        let decl = self.parse_member_decl();
        self.arena.alloc_node(SyntaxKind::MemberItem, vec![decl])
    }

    fn parse_member_decl(&mut self) -> NodeId {
        // nested type declarations parse exactly like top-level ones
        if let Some(nested) = self.parse_type_decl() {
            return nested;
        }

        let mut children = Vec::new();
        self.bump_attributes_and_modifiers(&mut children);

        match self.cursor.kind() {
            TokenKind::Func => self.finish_simple_member(SyntaxKind::FunctionDecl, children),
            TokenKind::Var | TokenKind::Let => self.finish_variable_decl(children),
            TokenKind::Case => self.finish_simple_member(SyntaxKind::EnumCaseDecl, children),
            TokenKind::Deinit => self.finish_simple_member(SyntaxKind::DeinitDecl, children),
            TokenKind::Init => self.finish_simple_member(SyntaxKind::InitDecl, children),
            TokenKind::Subscript => self.finish_simple_member(SyntaxKind::SubscriptDecl, children),
            TokenKind::Typealias => self.finish_simple_member(SyntaxKind::TypealiasDecl, children),
            TokenKind::Ident if ACCESSORS.contains(&self.cursor.current_text()) => {
                self.finish_simple_member(SyntaxKind::AccessorDecl, children)
            }
            _ => self.finish_simple_member(SyntaxKind::OtherDecl, children),
        }
    }

    fn finish_simple_member(&mut self, kind: SyntaxKind, mut children: Vec<NodeId>) -> NodeId {
        let mut depth = 0i32;
        if !self.cursor.at(TokenKind::RBrace) && !self.cursor.at_end() {
            depth += self.cursor.kind().bracket_delta().max(0);
            children.push(self.bump());
        }
        self.bump_member_tail(&mut children, depth);
        self.arena.alloc_node(kind, children)
    }

    /// Consume the rest of a member. Stops before the block's closing brace,
    /// a `;` separator, or a token that starts a fresh line outside any
    /// bracket.
    fn bump_member_tail(&mut self, children: &mut Vec<NodeId>, mut depth: i32) {
        loop {
            let kind = self.cursor.kind();
            if kind == TokenKind::Eof {
                return;
            }
            if depth == 0
                && (kind == TokenKind::RBrace
                    || kind == TokenKind::Semicolon
                    || self.cursor.on_new_line())
            {
                return;
            }
            depth = (depth + kind.bracket_delta()).max(0);
            children.push(self.bump());
        }
    }

    fn finish_variable_decl(&mut self, mut children: Vec<NodeId>) -> NodeId {
        children.push(self.bump()); // var/let
        loop {
            if let Some(binding) = self.parse_pattern_binding() {
                children.push(binding);
            }
            if self.cursor.at(TokenKind::Comma) {
                children.push(self.bump());
                continue;
            }
            break;
        }
        self.bump_member_tail(&mut children, 0);
        self.arena.alloc_node(SyntaxKind::VariableDecl, children)
    }

    /// One binding: pattern and type annotation, then an optional
    /// initializer and an optional accessor block.
    fn parse_pattern_binding(&mut self) -> Option<NodeId> {
        let mut children = Vec::new();
        let mut depth = 0i32;
        loop {
            let kind = self.cursor.kind();
            if kind == TokenKind::Eof {
                break;
            }
            if depth == 0 {
                match kind {
                    TokenKind::Equals
                    | TokenKind::LBrace
                    | TokenKind::Comma
                    | TokenKind::RBrace
                    | TokenKind::Semicolon => break,
                    _ if !children.is_empty() && self.cursor.on_new_line() => break,
                    _ => {}
                }
            }
            depth = (depth + Self::annotation_depth_delta(kind)).max(0);
            children.push(self.bump());
        }

        if self.cursor.at(TokenKind::Equals) {
            let initializer = self.parse_initializer();
            children.push(initializer);
        }
        if self.cursor.at(TokenKind::LBrace) {
            let block = self.parse_accessor_block();
            children.push(block);
        }

        if children.is_empty() {
            None
        } else {
            Some(self.arena.alloc_node(SyntaxKind::PatternBinding, children))
        }
    }

    /// Type annotations nest angle brackets as well as the usual brackets,
    /// so `Dictionary<String, Int>`'s comma does not split the binding list.
    fn annotation_depth_delta(kind: TokenKind) -> i32 {
        match kind {
            TokenKind::Lt => 1,
            TokenKind::Gt => -1,
            _ => kind.bracket_delta(),
        }
    }

    /// `= expression`, up to the binding's end. A `{` at depth zero ends the
    /// initializer and starts an accessor block, mirroring the source
    /// language's own ambiguity rule for trailing closures in bindings.
    fn parse_initializer(&mut self) -> NodeId {
        let mut children = vec![self.bump()]; // `=`
        let mut depth = 0i32;
        loop {
            let kind = self.cursor.kind();
            if kind == TokenKind::Eof {
                break;
            }
            if depth == 0 {
                match kind {
                    TokenKind::Comma
                    | TokenKind::LBrace
                    | TokenKind::RBrace
                    | TokenKind::Semicolon => break,
                    _ if self.cursor.on_new_line() => break,
                    _ => {}
                }
            }
            depth = (depth + kind.bracket_delta()).max(0);
            children.push(self.bump());
        }
        self.arena.alloc_node(SyntaxKind::Initializer, children)
    }

    /// Balanced `{...}` after a binding; contents stay opaque.
    fn parse_accessor_block(&mut self) -> NodeId {
        let mut children = vec![self.bump()]; // `{`
        let mut depth = 1i32;
        while depth > 0 && !self.cursor.at_end() {
            match self.cursor.kind() {
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace => depth -= 1,
                _ => {}
            }
            children.push(self.bump());
        }
        self.arena.alloc_node(SyntaxKind::AccessorBlock, children)
    }

    fn bump_attributes_and_modifiers(&mut self, children: &mut Vec<NodeId>) {
        loop {
            match self.cursor.kind() {
                TokenKind::At => {
                    children.push(self.bump());
                    if self.cursor.at(TokenKind::Ident) {
                        children.push(self.bump());
                    }
                    self.bump_balanced_parens(children);
                }
                TokenKind::Ident if MODIFIERS.contains(&self.cursor.current_text()) => {
                    children.push(self.bump());
                    // argument of `private(set)` and friends
                    self.bump_balanced_parens(children);
                }
                _ => return,
            }
        }
    }

    fn bump_balanced_parens(&mut self, children: &mut Vec<NodeId>) {
        if !self.cursor.at(TokenKind::LParen) {
            return;
        }
        let mut depth = 0i32;
        loop {
            match self.cursor.kind() {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                TokenKind::Eof => return,
                _ => {}
            }
            children.push(self.bump());
            if depth == 0 {
                return;
            }
        }
    }

    /// A top-level item that is not a type declaration: a balanced, opaque
    /// token run ending at a token that starts a fresh line outside any
    /// bracket.
    fn parse_other_item(&mut self) -> NodeId {
        let mut depth = self.cursor.kind().bracket_delta().max(0);
        let mut children = vec![self.bump()];
        loop {
            let kind = self.cursor.kind();
            if kind == TokenKind::Eof {
                break;
            }
            if depth == 0 && self.cursor.on_new_line() {
                break;
            }
            depth = (depth + kind.bracket_delta()).max(0);
            children.push(self.bump());
        }
        self.arena.alloc_node(SyntaxKind::OtherItem, children)
    }
}
