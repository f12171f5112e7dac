//! Syntax node kinds.

/// Kind tag for interior nodes of the syntax arena.
///
/// This is the tagged union behind the capability queries: a node "is a
/// declaration group" when its kind is [`SyntaxKind::TypeDecl`] and it owns a
/// [`SyntaxKind::MemberBlock`] child.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxKind {
    /// Whole file: statements followed by the EOF token.
    SourceFile,
    /// One top-level statement wrapping exactly one item.
    Statement,
    /// class/struct/enum/actor/protocol/extension declaration.
    TypeDecl,
    /// Balanced `<...>` after a declared name.
    GenericParamClause,
    /// Everything between the name/generics and the member block.
    InheritanceClause,
    /// `{ members }` of a type declaration.
    MemberBlock,
    /// One entry of a member block, wrapping a single declaration.
    MemberItem,

    FunctionDecl,
    VariableDecl,
    /// One binding of a variable declaration (pattern, type, initializer,
    /// accessor block).
    PatternBinding,
    /// `= expression` of a binding.
    Initializer,
    /// Trailing `{ ... }` of a computed property or observer set.
    AccessorBlock,
    /// `get`/`set`/`willSet`/`didSet` appearing directly at member position.
    AccessorDecl,
    EnumCaseDecl,
    DeinitDecl,
    InitDecl,
    SubscriptDecl,
    TypealiasDecl,
    /// A member shape the parser does not model; opaque token run.
    OtherDecl,
    /// A top-level item that is not a type declaration; opaque token run.
    OtherItem,
}
