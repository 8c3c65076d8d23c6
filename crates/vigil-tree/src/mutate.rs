// ── Tree mutators ──
//
// Non-drag edits over the nested forest. Every operation is pure: the input
// tree is never touched, a fresh tree value comes back, and the caller
// replaces its state wholesale — the same replace-on-change cycle drag
// commits use.

use crate::model::{NodeId, TreeNode};

/// Flip `collapsed` on the matching group. Unknown ids and service nodes
/// leave the tree unchanged in value.
pub fn toggle_collapse(tree: &[TreeNode], id: &NodeId) -> Vec<TreeNode> {
    let mut next = tree.to_vec();
    if let Some(node) = find_deep_mut(&mut next, id) {
        if node.is_group() {
            node.collapsed = !node.collapsed;
        }
    }
    next
}

/// Replace the display name of the matching node.
pub fn rename(tree: &[TreeNode], id: &NodeId, new_name: impl Into<String>) -> Vec<TreeNode> {
    let mut next = tree.to_vec();
    if let Some(node) = find_deep_mut(&mut next, id) {
        node.name = new_name.into();
    }
    next
}

/// Remove the matching node and, for groups, its entire subtree.
pub fn delete_subtree(tree: &[TreeNode], id: &NodeId) -> Vec<TreeNode> {
    let mut next = tree.to_vec();
    remove_node(&mut next, id);
    next
}

/// Append `new_group` to the parent's children, creating the vec on first
/// use, and force the parent open so the new child is visible. Unknown
/// parents leave the tree unchanged in value.
pub fn insert_subgroup(tree: &[TreeNode], parent_id: &NodeId, new_group: TreeNode) -> Vec<TreeNode> {
    let mut next = tree.to_vec();
    if let Some(parent) = find_deep_mut(&mut next, parent_id) {
        parent.children.get_or_insert_with(Vec::new).push(new_group);
        parent.collapsed = false;
    }
    next
}

/// Count every nested descendant (groups and services) under `node`.
pub fn count_descendants(node: &TreeNode) -> usize {
    node.children_slice()
        .iter()
        .map(|child| 1 + count_descendants(child))
        .sum()
}

/// Depth-first search for the first node with the given id.
pub fn find_deep<'a>(tree: &'a [TreeNode], id: &NodeId) -> Option<&'a TreeNode> {
    for node in tree {
        if node.id == *id {
            return Some(node);
        }
        if let Some(found) = find_deep(node.children_slice(), id) {
            return Some(found);
        }
    }
    None
}

pub(crate) fn find_deep_mut<'a>(
    tree: &'a mut [TreeNode],
    id: &NodeId,
) -> Option<&'a mut TreeNode> {
    for node in tree {
        if node.id == *id {
            return Some(node);
        }
        if let Some(children) = node.children.as_deref_mut() {
            if let Some(found) = find_deep_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

fn remove_node(nodes: &mut Vec<TreeNode>, id: &NodeId) -> bool {
    if let Some(ix) = nodes.iter().position(|n| n.id == *id) {
        nodes.remove(ix);
        return true;
    }
    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if remove_node(children, id) {
                return true;
            }
        }
    }
    false
}
