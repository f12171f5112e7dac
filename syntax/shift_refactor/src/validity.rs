//! Which members may leave their declaration and live in an extension.

use shift_ir::{NodeId, SyntaxArena, SyntaxKind, VariableDecl};

/// True when the member item may be moved into an extension.
///
/// Members that are structurally tied to the primary declaration stay put:
/// accessors, deinitializers, and enum cases. Variable declarations move only
/// when every binding is computed, meaning it carries an accessor block and no
/// initializer; stored properties belong to the type's layout.
///
/// Anything the parser could not classify stays movable. Moving an opaque
/// member is a text-level rearrangement the user asked for, not a judgement
/// call this predicate should veto.
pub(crate) fn is_movable(arena: &SyntaxArena, member: NodeId) -> bool {
    let Some(decl) = shift_ir::MemberItem::cast(arena, member).and_then(|item| item.decl(arena))
    else {
        return true;
    };
    match arena.kind(decl) {
        Some(SyntaxKind::AccessorDecl | SyntaxKind::DeinitDecl | SyntaxKind::EnumCaseDecl) => false,
        Some(SyntaxKind::VariableDecl) => {
            let Some(var) = VariableDecl::cast(arena, decl) else {
                return false;
            };
            let bindings = var.bindings(arena);
            !bindings.is_empty()
                && bindings
                    .iter()
                    .all(|b| b.has_accessor_block(arena) && !b.has_initializer(arena))
        }
        _ => true,
    }
}
