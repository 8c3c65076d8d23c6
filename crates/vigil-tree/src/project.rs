// ── Projector ──
//
// Computes, on every pointer movement, where the dragged row would land:
// which parent and at which depth. Advisory only — nothing here mutates the
// flat list; the result is applied at drag end via `apply_drop`.

use crate::model::{FlatNode, NodeId};

/// The candidate landing spot for an in-flight drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropProjection {
    /// Id of the would-be enclosing group, `None` for a root-level drop.
    pub parent_id: Option<NodeId>,
    pub depth: usize,
}

/// Project the drop position for the active row hovering over `over_id`.
///
/// `horizontal_offset` is the cumulative pointer travel from the drag's
/// start column; dragging right increases nesting intent by one level per
/// `indent_width` pixels, dragging left decreases it. The projected depth is
/// clamped to what the rows around the simulated position structurally
/// allow, and a drop that would nest the active row under itself or one of
/// its own descendants is clamped back to its pre-drag parent.
///
/// Returns `None` when either id is not in `items`; the caller skips the
/// frame and keeps its previous preview.
#[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
pub fn project(
    items: &[FlatNode],
    active_id: &NodeId,
    over_id: &NodeId,
    horizontal_offset: f32,
    indent_width: f32,
) -> Option<DropProjection> {
    let active_index = items.iter().position(|n| n.id == *active_id)?;
    let over_index = items.iter().position(|n| n.id == *over_id)?;
    let active = &items[active_index];

    // Simulate the linear move without touching the shared list.
    let mut order: Vec<&FlatNode> = items.iter().collect();
    let moved = order.remove(active_index);
    order.insert(over_index, moved);

    let previous = over_index.checked_sub(1).and_then(|ix| order.get(ix).copied());
    let next = order.get(over_index + 1).copied();

    let drag_depth = if indent_width > 0.0 {
        (horizontal_offset / indent_width).round() as i64
    } else {
        0
    };

    // A row can nest at most one level under its new predecessor — and not
    // into it at all when the predecessor is a service leaf — and no
    // shallower than its new successor requires to stay attached.
    let max_depth = previous.map_or(0, |p| if p.is_group() { p.depth + 1 } else { p.depth }) as i64;
    let min_depth = next.map_or(0, |n| n.depth) as i64;

    let projected = active.depth as i64 + drag_depth;
    let depth = if projected > max_depth {
        max_depth
    } else if projected < min_depth {
        min_depth
    } else {
        projected
    };
    let depth = usize::try_from(depth).unwrap_or(0);

    let parent_id = resolve_parent(&order, over_index, depth);

    // A row may never become its own ancestor, and services never become
    // parents. Either way the drop is clamped back to the pre-drag slot.
    if let Some(pid) = &parent_id {
        let cycle = is_within_subtree(items, pid, active_id);
        let leaf_parent = items.iter().find(|n| n.id == *pid).is_some_and(|n| !n.is_group());
        if cycle || leaf_parent {
            return Some(DropProjection {
                parent_id: active.parent_id.clone(),
                depth: active.depth,
            });
        }
    }

    Some(DropProjection { parent_id, depth })
}

/// Nearest node preceding the simulated position whose depth is one less
/// than the final depth; `None` means a root-level drop.
fn resolve_parent(order: &[&FlatNode], position: usize, depth: usize) -> Option<NodeId> {
    if depth == 0 {
        return None;
    }
    order[..position]
        .iter()
        .rev()
        .find(|n| n.depth == depth - 1)
        .map(|n| n.id.clone())
}

/// Whether `candidate` is `root` itself or sits anywhere inside `root`'s
/// subtree, following `parent_id` chains in the pre-drag flat list.
fn is_within_subtree(items: &[FlatNode], candidate: &NodeId, root: &NodeId) -> bool {
    let mut current = Some(candidate);
    while let Some(id) = current {
        if id == root {
            return true;
        }
        current = items
            .iter()
            .find(|n| n.id == *id)
            .and_then(|n| n.parent_id.as_ref());
    }
    false
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::flatten::flatten;
    use crate::model::TreeNode;
    use pretty_assertions::assert_eq;

    const INDENT: f32 = 16.0;

    fn fixture() -> Vec<FlatNode> {
        flatten(&[
            TreeNode::group("A", "A").child(TreeNode::service("B", "B", "mon-b")),
            TreeNode::group("C", "C"),
        ])
    }

    #[test]
    fn drags_service_into_sibling_group() {
        // B hovering over C with enough rightward travel nests under C.
        let proj = project(&fixture(), &"B".into(), &"C".into(), INDENT, INDENT).unwrap();
        assert_eq!(proj, DropProjection { parent_id: Some("C".into()), depth: 1 });
    }

    #[test]
    fn leftward_travel_pulls_to_root() {
        let proj = project(&fixture(), &"B".into(), &"C".into(), -INDENT, INDENT).unwrap();
        assert_eq!(proj, DropProjection { parent_id: None, depth: 0 });
    }

    #[test]
    fn depth_is_capped_by_the_new_predecessor() {
        // Three indents of intent still land at depth 1: the predecessor in
        // the simulated order sits at depth 0.
        let proj = project(&fixture(), &"B".into(), &"C".into(), 3.0 * INDENT, INDENT).unwrap();
        assert_eq!(proj.depth, 1);
        assert_eq!(proj.parent_id, Some("C".into()));
    }

    #[test]
    fn missing_ids_skip_the_frame() {
        let items = fixture();
        assert_eq!(project(&items, &"nope".into(), &"C".into(), 0.0, INDENT), None);
        assert_eq!(project(&items, &"B".into(), &"nope".into(), 0.0, INDENT), None);
    }

    #[test]
    fn never_nests_under_own_descendant() {
        let items = flatten(&[
            TreeNode::group("A", "A").child(
                TreeNode::group("B", "B").child(TreeNode::service("C", "C", "mon-c")),
            ),
            TreeNode::group("D", "D"),
        ]);

        // Dragging A down over its own subtree with nesting intent would
        // make A a child of itself; the drop clamps to A's pre-drag slot.
        let proj = project(&items, &"A".into(), &"C".into(), 2.0 * INDENT, INDENT).unwrap();
        assert_eq!(proj, DropProjection { parent_id: None, depth: 0 });
        let proj = project(&items, &"A".into(), &"B".into(), 0.0, INDENT).unwrap();
        assert_eq!(proj, DropProjection { parent_id: None, depth: 0 });
    }

    #[test]
    fn guard_holds_for_every_hover_and_offset() {
        let items = flatten(&[
            TreeNode::group("A", "A")
                .child(TreeNode::service("B", "B", "mon-b"))
                .child(TreeNode::group("C", "C").child(TreeNode::service("D", "D", "mon-d"))),
            TreeNode::group("E", "E"),
        ]);
        let descendants_of = |root: &NodeId| -> Vec<NodeId> {
            items
                .iter()
                .filter(|n| is_within_subtree(&items, &n.id, root))
                .map(|n| n.id.clone())
                .collect()
        };

        for active in &items {
            let forbidden = descendants_of(&active.id);
            for over in &items {
                for steps in -4_i32..=4 {
                    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
                    let offset = steps as f32 * INDENT;
                    let proj = project(&items, &active.id, &over.id, offset, INDENT).unwrap();
                    if let Some(pid) = &proj.parent_id {
                        assert!(
                            !forbidden.contains(pid),
                            "{} projected under {} (offset {offset})",
                            active.id,
                            pid
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn services_never_become_parents() {
        let items = flatten(&[
            TreeNode::group("g1", "g1")
                .child(TreeNode::service("a", "a", "mon-a"))
                .child(TreeNode::service("b", "b", "mon-b")),
            TreeNode::service("c", "c", "mon-c"),
        ]);

        // However far right c travels, it becomes a sibling of b under g1
        // rather than a child of the service a.
        let proj = project(&items, &"c".into(), &"b".into(), 3.0 * INDENT, INDENT).unwrap();
        assert_eq!(proj, DropProjection { parent_id: Some("g1".into()), depth: 1 });
    }

    #[test]
    fn depth_never_undercuts_the_next_row() {
        // Hovering over a group's first child cannot escape to root: the
        // following sibling still needs its parent directly above it.
        let items = flatten(&[
            TreeNode::group("A", "A")
                .child(TreeNode::service("B", "B", "mon-b"))
                .child(TreeNode::service("C", "C", "mon-c")),
            TreeNode::service("D", "D", "mon-d"),
        ]);
        let proj = project(&items, &"B".into(), &"B".into(), -3.0 * INDENT, INDENT).unwrap();
        assert_eq!(proj.depth, 1);
        assert_eq!(proj.parent_id, Some("A".into()));
    }
}
