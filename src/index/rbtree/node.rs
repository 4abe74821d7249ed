//! Node representation for the red-black index.

use std::fmt;

/// Identifies a node slot in the tree's arena.
///
/// Using `usize` because:
/// 1. Nodes are stored in `Vec<Node>`
/// 2. Direct indexing without casting: `nodes[node_id.0]`
/// 3. Matches Rust idioms for array/vector indexing
///
/// Forward links (`left`/`right`) are the owning relationships; `parent` is
/// a non-owning back-reference used during fixup. All three are `NodeId`s
/// into the same arena, so a rotation is O(1) link reassignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    /// The shared nil leaf. Every arena has it at slot 0.
    pub(crate) const SENTINEL: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::SENTINEL {
            write!(f, "Node(nil)")
        } else {
            write!(f, "Node({})", self.0)
        }
    }
}

/// Node color. The two-color scheme plus the black-height rule is what
/// bounds the tree height at O(log n).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

/// The key/payload pair carried by a live node.
///
/// Present on every reachable node, absent (`None`) on the sentinel and on
/// free-listed slots. Keeping it separate from the structural fields lets
/// fixup code read the sentinel's color and links unconditionally without a
/// fabricated key ever existing.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A slot in the tree arena.
#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) parent: NodeId,
    pub(crate) color: Color,
    pub(crate) entry: Option<Entry<K, V>>,
}

impl<K, V> Node<K, V> {
    /// A freshly inserted node: Red, both children the sentinel.
    ///
    /// Red is the only color a new leaf may take without disturbing the
    /// black-height of paths through its parent.
    pub(crate) fn red(key: K, value: V) -> Self {
        Self {
            left: NodeId::SENTINEL,
            right: NodeId::SENTINEL,
            parent: NodeId::SENTINEL,
            color: Color::Red,
            entry: Some(Entry { key, value }),
        }
    }

    /// The sentinel slot: always Black, links pointing at itself, no entry.
    pub(crate) fn sentinel() -> Self {
        Self {
            left: NodeId::SENTINEL,
            right: NodeId::SENTINEL,
            parent: NodeId::SENTINEL,
            color: Color::Black,
            entry: None,
        }
    }
}
