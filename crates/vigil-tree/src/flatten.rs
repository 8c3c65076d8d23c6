// ── Flattener ──
//
// Pre-order depth-first conversion of the nested forest into the linear
// list the drag engine reasons about. A group's row precedes all of its
// descendants, which precede the group's next sibling.

use crate::model::{FlatNode, NodeId, TreeNode};

/// Flatten the forest into global render/drag order.
///
/// Collapsed groups still contribute their full subtree: collapse affects
/// what the view draws, not what the drag engine can target. Renderers that
/// hide collapsed rows should use [`flatten_visible`] instead. O(n), pure.
pub fn flatten(tree: &[TreeNode]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    for node in tree {
        push_subtree(node, None, 0, false, &mut out);
    }
    out
}

/// Flatten only the rows a renderer would draw, pruning the descendants of
/// collapsed groups. Never consumed by the drag engine itself.
pub fn flatten_visible(tree: &[TreeNode]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    for node in tree {
        push_subtree(node, None, 0, true, &mut out);
    }
    out
}

fn push_subtree(
    node: &TreeNode,
    parent_id: Option<&NodeId>,
    depth: usize,
    prune_collapsed: bool,
    out: &mut Vec<FlatNode>,
) {
    out.push(FlatNode {
        id: node.id.clone(),
        name: node.name.clone(),
        kind: node.kind,
        monitor_id: node.monitor_id.clone(),
        parent_id: parent_id.cloned(),
        depth,
        collapsed: node.collapsed,
    });

    if prune_collapsed && node.collapsed {
        return;
    }
    for child in node.children_slice() {
        push_subtree(child, Some(&node.id), depth + 1, prune_collapsed, out);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture() -> Vec<TreeNode> {
        vec![
            TreeNode::group("edge", "Edge")
                .child(TreeNode::service("lb", "loadbalancer", "mon-lb"))
                .child(
                    TreeNode::group("cdn", "CDN")
                        .collapsed(true)
                        .child(TreeNode::service("cdn-eu", "cdn-eu", "mon-cdn-eu")),
                ),
            TreeNode::service("db", "postgres", "mon-db"),
        ]
    }

    #[test]
    fn emits_preorder_with_parent_and_depth() {
        let flat = flatten(&fixture());
        let rows: Vec<_> = flat
            .iter()
            .map(|n| (n.id.as_str(), n.parent_id.as_ref().map(NodeId::as_str), n.depth))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("edge", None, 0),
                ("lb", Some("edge"), 1),
                ("cdn", Some("edge"), 1),
                ("cdn-eu", Some("cdn"), 2),
                ("db", None, 0),
            ]
        );
    }

    #[test]
    fn collapsed_groups_keep_their_subtree() {
        let flat = flatten(&fixture());
        assert!(flat.iter().any(|n| n.id.as_str() == "cdn-eu"));
    }

    #[test]
    fn visible_mode_prunes_collapsed_descendants() {
        let flat = flatten_visible(&fixture());
        let ids: Vec<_> = flat.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["edge", "lb", "cdn", "db"]);
    }

    #[test]
    fn depth_always_matches_parent_chain() {
        let flat = flatten(&fixture());
        for node in &flat {
            match &node.parent_id {
                None => assert_eq!(node.depth, 0),
                Some(pid) => {
                    let parent = flat.iter().find(|n| n.id == *pid).unwrap();
                    assert_eq!(node.depth, parent.depth + 1);
                }
            }
        }
    }
}
