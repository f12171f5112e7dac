//! Append-only syntax arena with structural sharing.
//!
//! A tree is an arena plus a root id. An edit forks the arena, pushes new
//! entries for the path from the edited node up to the root, and reuses every
//! untouched subtree by id, so an edit costs O(depth) new nodes. The input
//! tree is never mutated; ids stay valid across forks.
//!
//! [`NodeId`] doubles as stable node identity: two structurally identical
//! members at different tree positions have different ids. Rewrites filter
//! member lists by id, never by deep equality.

use std::fmt;
use std::sync::Arc;

use crate::{Span, SyntaxKind, Token};

/// Index of a node in a [`SyntaxArena`].
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// One arena entry: a trivia-carrying token leaf or an interior node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeData {
    Token(Token),
    Node {
        kind: SyntaxKind,
        children: Vec<NodeId>,
    },
}

/// Append-only node table.
#[derive(Clone, Default, Debug)]
pub struct SyntaxArena {
    nodes: Vec<NodeData>,
}

impl SyntaxArena {
    pub fn new() -> Self {
        SyntaxArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a token leaf.
    pub fn alloc_token(&mut self, token: Token) -> NodeId {
        self.push(NodeData::Token(token))
    }

    /// Allocate an interior node over existing children.
    pub fn alloc_node(&mut self, kind: SyntaxKind, children: Vec<NodeId>) -> NodeId {
        self.push(NodeData::Node { kind, children })
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(data);
        id
    }

    /// Look up a node. Ids are only ever produced by this arena or a tree it
    /// was forked from, so the index is always valid.
    #[inline]
    pub fn get(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    /// The token behind `id`, when it is a leaf.
    pub fn token(&self, id: NodeId) -> Option<&Token> {
        match self.get(id) {
            NodeData::Token(token) => Some(token),
            NodeData::Node { .. } => None,
        }
    }

    /// The kind of an interior node; `None` for tokens.
    pub fn kind(&self, id: NodeId) -> Option<SyntaxKind> {
        match self.get(id) {
            NodeData::Token(_) => None,
            NodeData::Node { kind, .. } => Some(*kind),
        }
    }

    /// Children of an interior node; empty for tokens.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.get(id) {
            NodeData::Token(_) => &[],
            NodeData::Node { children, .. } => children,
        }
    }

    /// First token leaf under `id`, in document order.
    pub fn first_token(&self, id: NodeId) -> Option<&Token> {
        match self.get(id) {
            NodeData::Token(token) => Some(token),
            NodeData::Node { children, .. } => {
                children.iter().find_map(|&child| self.first_token(child))
            }
        }
    }

    /// Last token leaf under `id`, in document order.
    pub fn last_token(&self, id: NodeId) -> Option<&Token> {
        match self.get(id) {
            NodeData::Token(token) => Some(token),
            NodeData::Node { children, .. } => children
                .iter()
                .rev()
                .find_map(|&child| self.last_token(child)),
        }
    }

    /// Extent of the node's own text, trivia excluded.
    pub fn span(&self, id: NodeId) -> Span {
        match (self.first_token(id), self.last_token(id)) {
            (Some(first), Some(last)) => Span::new(first.span.start, last.span.end),
            _ => Span::DUMMY,
        }
    }

    /// Extent including both edge trivia blobs.
    pub fn full_span(&self, id: NodeId) -> Span {
        match (self.first_token(id), self.last_token(id)) {
            (Some(first), Some(last)) => {
                Span::new(first.full_span().start, last.full_span().end)
            }
            _ => Span::DUMMY,
        }
    }

    /// Full span shrunk past pure-whitespace trivia at the extremities.
    ///
    /// Comment text inside edge trivia stays in range, so a selection that
    /// touches a member's leading comment still selects the member.
    pub fn trimmed_span(&self, id: NodeId) -> Span {
        let full = self.full_span(id);
        let (Some(first), Some(last)) = (self.first_token(id), self.last_token(id)) else {
            return full;
        };
        let lead_ws = first.leading.whitespace_prefix_len() as u32;
        let trail_ws = last.trailing.whitespace_suffix_len() as u32;
        Span::new(full.start + lead_ws, full.end - trail_ws)
    }

    /// Render the subtree under `id` verbatim into `out`.
    pub fn write_text(&self, id: NodeId, out: &mut String) {
        match self.get(id) {
            NodeData::Token(token) => token.write_text(out),
            NodeData::Node { children, .. } => {
                for &child in children {
                    self.write_text(child, out);
                }
            }
        }
    }

    /// Render the subtree under `id` to a fresh string.
    pub fn text(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_text(id, &mut out);
        out
    }
}

/// An immutable syntax tree: shared arena plus root id.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    arena: Arc<SyntaxArena>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn new(arena: SyntaxArena, root: NodeId) -> Self {
        SyntaxTree {
            arena: Arc::new(arena),
            root,
        }
    }

    #[inline]
    pub fn arena(&self) -> &SyntaxArena {
        &self.arena
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Render the whole tree back to source text.
    pub fn text(&self) -> String {
        self.arena.text(self.root)
    }

    /// Fork the arena for an edit. The fork shares no mutable state with
    /// `self`; every existing id stays valid in it.
    pub fn fork_arena(&self) -> SyntaxArena {
        (*self.arena).clone()
    }
}
