// ── Persisted tree node ──

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Discriminates folders from leaves.
///
/// Services are always leaves; only groups may carry `children`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Group,
    Service,
}

impl NodeKind {
    pub fn is_group(self) -> bool {
        matches!(self, Self::Group)
    }
}

/// A node of the persisted service-group tree.
///
/// This is the shape the dashboard stores and hands back to the caller after
/// every committed edit. `children` order is display order; `collapsed` is
/// UI-only state that must survive flatten → edit → rebuild untouched unless
/// explicitly toggled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    pub id: NodeId,
    /// Display label, mutable via [`rename`](crate::mutate::rename).
    pub name: String,
    pub kind: NodeKind,
    /// Back-reference to the external monitor entity. `Some` only when
    /// `kind == Service`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<NodeId>,
    /// Ordered children. `None` for services and for groups without
    /// children — an empty `Vec` is normalized away on rebuild.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Whether the group is drawn collapsed. Meaningless for services.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
}

impl TreeNode {
    /// Create an empty group.
    pub fn group(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Group,
            monitor_id: None,
            children: None,
            collapsed: false,
        }
    }

    /// Create a service leaf referencing a monitor.
    pub fn service(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        monitor_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Service,
            monitor_id: Some(monitor_id.into()),
            children: None,
            collapsed: false,
        }
    }

    /// Append a child, creating the `children` vec on first use.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn is_group(&self) -> bool {
        self.kind.is_group()
    }

    /// Children as a slice, regardless of `None`/`Some` materialization.
    pub fn children_slice(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or_default()
    }
}
