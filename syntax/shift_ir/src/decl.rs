//! Typed views over the untyped arena.
//!
//! A view is a [`NodeId`] that has been checked for shape, rowan-style:
//! `cast` returns `Some` only when the node answers the view's capability
//! queries. The refactoring engine's target test is exactly "has a declared
//! name" plus "has a member list", both answered here.

use crate::{NodeId, SyntaxArena, SyntaxKind, TokenKind};

/// A declaration that owns a member block
/// (class/struct/enum/actor/protocol/extension).
#[derive(Copy, Clone, Debug)]
pub struct DeclGroup {
    id: NodeId,
    block: NodeId,
}

impl DeclGroup {
    pub fn cast(arena: &SyntaxArena, id: NodeId) -> Option<Self> {
        if arena.kind(id) != Some(SyntaxKind::TypeDecl) {
            return None;
        }
        let block = arena
            .children(id)
            .iter()
            .copied()
            .find(|&child| arena.kind(child) == Some(SyntaxKind::MemberBlock))?;
        Some(DeclGroup { id, block })
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn member_block(&self) -> NodeId {
        self.block
    }

    /// The declared simple name: the first identifier token after the
    /// introducer keyword. Extensions have no declared name of their own
    /// (their identifier names the extended type), so they return `None`.
    pub fn name_token(&self, arena: &SyntaxArena) -> Option<NodeId> {
        let children = arena.children(self.id);
        let (keyword_index, keyword) = children.iter().enumerate().find_map(|(i, &child)| {
            let token = arena.token(child)?;
            token.kind.is_type_keyword().then_some((i, token.kind))
        })?;
        if keyword == TokenKind::Extension {
            return None;
        }
        children[keyword_index + 1..]
            .iter()
            .copied()
            .find(|&child| arena.token(child).is_some_and(|t| t.kind == TokenKind::Ident))
    }

    /// The member items of the block, in document order.
    pub fn members(&self, arena: &SyntaxArena) -> Vec<NodeId> {
        arena
            .children(self.block)
            .iter()
            .copied()
            .filter(|&child| arena.kind(child) == Some(SyntaxKind::MemberItem))
            .collect()
    }
}

/// One entry of a member block.
#[derive(Copy, Clone, Debug)]
pub struct MemberItem {
    id: NodeId,
}

impl MemberItem {
    pub fn cast(arena: &SyntaxArena, id: NodeId) -> Option<Self> {
        (arena.kind(id) == Some(SyntaxKind::MemberItem)).then_some(MemberItem { id })
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The declaration the item wraps: its first interior-node child.
    pub fn decl(&self, arena: &SyntaxArena) -> Option<NodeId> {
        arena
            .children(self.id)
            .iter()
            .copied()
            .find(|&child| arena.kind(child).is_some())
    }
}

/// A `var`/`let` declaration.
#[derive(Copy, Clone, Debug)]
pub struct VariableDecl {
    id: NodeId,
}

impl VariableDecl {
    pub fn cast(arena: &SyntaxArena, id: NodeId) -> Option<Self> {
        (arena.kind(id) == Some(SyntaxKind::VariableDecl)).then_some(VariableDecl { id })
    }

    /// The bindings of the declaration, in source order.
    pub fn bindings(&self, arena: &SyntaxArena) -> Vec<PatternBinding> {
        arena
            .children(self.id)
            .iter()
            .copied()
            .filter(|&child| arena.kind(child) == Some(SyntaxKind::PatternBinding))
            .map(|id| PatternBinding { id })
            .collect()
    }
}

/// One binding of a variable declaration.
#[derive(Copy, Clone, Debug)]
pub struct PatternBinding {
    id: NodeId,
}

impl PatternBinding {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn has_initializer(&self, arena: &SyntaxArena) -> bool {
        self.has_child(arena, SyntaxKind::Initializer)
    }

    pub fn has_accessor_block(&self, arena: &SyntaxArena) -> bool {
        self.has_child(arena, SyntaxKind::AccessorBlock)
    }

    fn has_child(&self, arena: &SyntaxArena, kind: SyntaxKind) -> bool {
        arena
            .children(self.id)
            .iter()
            .any(|&child| arena.kind(child) == Some(kind))
    }
}
