// ── Linear reorder + Rebuilder ──
//
// At drag end the flat list is reordered with a plain array move and the
// moved row's parent/depth are overwritten with the projection. Everything
// else keeps its pre-drag annotations; deriving a consistent hierarchy from
// that locally-edited list is the rebuilder's job.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::model::{FlatNode, NodeId, TreeNode};
use crate::mutate::find_deep;
use crate::project::DropProjection;

/// Commit a drop: move the active row to the hovered row's index and stamp
/// the projected parent/depth onto it. Pure — returns the edited list.
///
/// If either id is missing the list is returned unchanged.
pub fn apply_drop(
    items: &[FlatNode],
    active_id: &NodeId,
    over_id: &NodeId,
    projection: &DropProjection,
) -> Vec<FlatNode> {
    let mut out = items.to_vec();
    let (Some(from), Some(to)) = (
        out.iter().position(|n| n.id == *active_id),
        out.iter().position(|n| n.id == *over_id),
    ) else {
        return out;
    };

    let mut moved = out.remove(from);
    moved.parent_id = projection.parent_id.clone();
    moved.depth = projection.depth;
    out.insert(to, moved);
    out
}

/// Reconstruct a nested forest from the edited flat list.
///
/// Collapsed flags are restored from the matching node in `previous` when
/// one exists (so UI state survives the edit), falling back to the flat
/// row's own flag for brand-new nodes. Rows whose `parent_id` cannot be
/// resolved are attached at the root rather than dropped. Groups left with
/// no children come back with `children: None`.
///
/// `rebuild(&flatten(t), &t)` reproduces `t` up to that empty-children
/// normalization.
pub fn rebuild(flat: &[FlatNode], previous: &[TreeNode]) -> Vec<TreeNode> {
    // Pass 1: a fresh shell per row, childless for now.
    let mut shells: HashMap<NodeId, TreeNode> = flat
        .iter()
        .map(|row| {
            let collapsed = find_deep(previous, &row.id)
                .map_or(row.collapsed, |prev| prev.collapsed);
            let shell = TreeNode {
                id: row.id.clone(),
                name: row.name.clone(),
                kind: row.kind,
                monitor_id: row.monitor_id.clone(),
                children: None,
                collapsed,
            };
            (row.id.clone(), shell)
        })
        .collect();

    // Pass 2: attachment order follows the flat list, so child order within
    // each group equals the relative flat order of its members.
    let known: HashSet<&NodeId> = flat.iter().map(|row| &row.id).collect();
    let mut roots: Vec<&NodeId> = Vec::new();
    let mut child_ids: HashMap<&NodeId, Vec<&NodeId>> = HashMap::new();
    for row in flat {
        match &row.parent_id {
            Some(pid) if known.contains(pid) && *pid != row.id => {
                child_ids.entry(pid).or_default().push(&row.id);
            }
            Some(pid) => {
                debug!(node = %row.id, parent = %pid, "dangling parent — attaching at root");
                roots.push(&row.id);
            }
            None => roots.push(&row.id),
        }
    }

    roots
        .into_iter()
        .filter_map(|id| assemble(id, &mut shells, &child_ids))
        .collect()
}

/// Pop a shell and recursively attach its children.
fn assemble(
    id: &NodeId,
    shells: &mut HashMap<NodeId, TreeNode>,
    child_ids: &HashMap<&NodeId, Vec<&NodeId>>,
) -> Option<TreeNode> {
    let mut node = shells.remove(id)?;
    if let Some(kids) = child_ids.get(id) {
        let children: Vec<TreeNode> = kids
            .iter()
            .filter_map(|kid| assemble(kid, shells, child_ids))
            .collect();
        if !children.is_empty() {
            node.children = Some(children);
        }
    }
    Some(node)
}
