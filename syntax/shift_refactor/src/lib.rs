//! Move selected members of a type declaration into a new extension.
//!
//! The transform takes a lossless syntax tree and a selection span, finds the
//! type declaration the selection lies in, and splits its member list in two:
//! members the selection touches move into a fresh `extension` block inserted
//! right after the declaration, the rest stay behind. Every surviving token
//! keeps its trivia, so moved members carry their comments and blank lines
//! with them and untouched text is reproduced byte-for-byte.
//!
//! The input tree is never modified; the result is a new tree sharing every
//! untouched subtree with the input.

mod validity;
#[cfg(test)]
mod tests;

use rustc_hash::FxHashSet;
use shift_ir::{DeclGroup, NodeId, Span, SyntaxArena, SyntaxKind, SyntaxTree, Token, TokenKind, Trivia};
use thiserror::Error;
use tracing::debug;

/// Why a refactoring request produced no edit.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RefactorError {
    /// The selection does not lie inside a named type declaration.
    #[error("Type declaration not found")]
    TargetNotFound,
    /// The selection touches no member that may move to an extension.
    #[error("No members to move")]
    NoMovableMembers,
}

/// A source-to-source transform driven by a selection.
pub trait RefactoringProvider {
    fn refactor(tree: &SyntaxTree, selection: Span) -> Result<SyntaxTree, RefactorError>;
}

/// The move-members-to-extension transform.
pub struct MoveMembersToExtension;

impl RefactoringProvider for MoveMembersToExtension {
    fn refactor(tree: &SyntaxTree, selection: Span) -> Result<SyntaxTree, RefactorError> {
        move_members_to_extension(tree, selection)
    }
}

/// Move the members of a type declaration touched by `selection` into a new
/// extension inserted directly after the declaration.
///
/// The target is the first top-level statement whose item fully contains the
/// selection, and it must be a declaration group with a declared name;
/// extensions have none and are never targets. A member is selected when the
/// selection overlaps its trimmed extent, so grabbing a member's leading
/// comment grabs the member, while a selection in pure whitespace between
/// members selects neither.
pub fn move_members_to_extension(
    tree: &SyntaxTree,
    selection: Span,
) -> Result<SyntaxTree, RefactorError> {
    let arena = tree.arena();

    let containing = arena
        .children(tree.root())
        .iter()
        .enumerate()
        .find_map(|(index, &statement)| {
            let &item = arena.children(statement).first()?;
            arena
                .full_span(item)
                .contains_span(selection)
                .then_some((index, item))
        });
    let target = containing.and_then(|(index, item)| {
        let group = DeclGroup::cast(arena, item)?;
        let name = group.name_token(arena)?;
        Some((index, group, name))
    });
    let Some((statement_index, group, name_id)) = target else {
        return Err(RefactorError::TargetNotFound);
    };

    let members = group.members(arena);
    let mut movable = Vec::new();
    let mut movable_ids = FxHashSet::default();
    for &member in &members {
        if selection.overlaps(arena.trimmed_span(member)) && validity::is_movable(arena, member) {
            movable.push(member);
            movable_ids.insert(member);
        }
    }
    if movable.is_empty() {
        return Err(RefactorError::NoMovableMembers);
    }
    debug!(
        statement = statement_index,
        moved = movable.len(),
        kept = members.len() - movable.len(),
        "partitioned member list"
    );

    let mut edit = tree.fork_arena();

    // declaration with the moved members filtered out, by identity
    let block = group.member_block();
    let block_children = arena.children(block);
    let kept: Vec<NodeId> = block_children
        .iter()
        .copied()
        .filter(|id| !movable_ids.contains(id))
        .collect();
    let new_block = edit.alloc_node(SyntaxKind::MemberBlock, kept);
    let decl_children: Vec<NodeId> = arena
        .children(group.id())
        .iter()
        .copied()
        .map(|child| if child == block { new_block } else { child })
        .collect();
    let new_decl = edit.alloc_node(SyntaxKind::TypeDecl, decl_children);
    let new_statement = edit.alloc_node(SyntaxKind::Statement, vec![new_decl]);

    let extension = build_extension(arena, &mut edit, name_id, block_children, &movable)?;

    let mut root_children = arena.children(tree.root()).to_vec();
    root_children[statement_index] = new_statement;
    root_children.insert(statement_index + 1, extension);
    let new_root = edit.alloc_node(SyntaxKind::SourceFile, root_children);

    Ok(SyntaxTree::new(edit, new_root))
}

/// Build the `extension Name { ... }` statement holding the moved members.
///
/// The keyword and name tokens are synthesized; the braces are reused from
/// the original member block so their trivia (the newline before the closing
/// brace, any trailing comment on the opening one) travels along, and the
/// moved members keep their own leading trivia verbatim.
fn build_extension(
    arena: &SyntaxArena,
    edit: &mut SyntaxArena,
    name_id: NodeId,
    block_children: &[NodeId],
    movable: &[NodeId],
) -> Result<NodeId, RefactorError> {
    let Some(name) = arena.token(name_id) else {
        return Err(RefactorError::TargetNotFound);
    };

    let keyword = edit.alloc_token(
        Token::synthesized(TokenKind::Extension, "extension").with_leading(Trivia::newlines(2)),
    );
    // generic parameters and inheritance stay behind; only the simple name
    // crosses over, keeping whatever followed it in the original header as a
    // single space
    let extended_type = edit.alloc_token(
        Token::synthesized(TokenKind::Ident, name.text.as_str())
            .with_leading(Trivia::space())
            .with_trailing(name.trailing.merging_space()),
    );

    let open_brace = block_children
        .first()
        .copied()
        .filter(|&id| arena.token(id).is_some_and(|t| t.kind == TokenKind::LBrace));
    let close_brace = block_children
        .last()
        .copied()
        .filter(|&id| arena.token(id).is_some_and(|t| t.kind == TokenKind::RBrace));

    let mut block_nodes = Vec::with_capacity(movable.len() + 2);
    block_nodes.extend(open_brace);
    block_nodes.extend(movable.iter().copied());
    block_nodes.extend(close_brace);
    let block = edit.alloc_node(SyntaxKind::MemberBlock, block_nodes);

    let decl = edit.alloc_node(SyntaxKind::TypeDecl, vec![keyword, extended_type, block]);
    Ok(edit.alloc_node(SyntaxKind::Statement, vec![decl]))
}
