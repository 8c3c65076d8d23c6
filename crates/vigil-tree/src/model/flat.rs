// ── Flattened tree node ──

use super::{NodeId, NodeKind};

/// One row of the flattened tree.
///
/// Ephemeral and derived: produced by [`flatten`](crate::flatten::flatten)
/// on every render, reordered during a drag, and consumed by
/// [`rebuild`](crate::rebuild::rebuild). A node's index in the flat `Vec`
/// is its global render/drag order across the whole forest.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub monitor_id: Option<NodeId>,
    /// Id of the enclosing group, `None` at the root level.
    pub parent_id: Option<NodeId>,
    /// Number of ancestors; root rows sit at depth 0.
    pub depth: usize,
    /// Collapsed flag carried along so brand-new rows (never seen in the
    /// previous tree) keep their state through rebuild.
    pub collapsed: bool,
}

impl FlatNode {
    pub fn is_group(&self) -> bool {
        self.kind.is_group()
    }
}
