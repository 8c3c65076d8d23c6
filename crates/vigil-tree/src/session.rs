// ── Drag session ──
//
// Thin state machine sequencing pointer events into projector/rebuilder
// calls. Holds the caller's tree, the flat render list derived from it, and
// the in-flight gesture; the preview is recomputed from scratch on every
// query so no drift accumulates across frames.

use tracing::{debug, trace};

use crate::flatten::flatten;
use crate::model::{FlatNode, NodeId, TreeNode};
use crate::project::{DropProjection, project};
use crate::rebuild::{apply_drop, rebuild};
use crate::{mutate, DEFAULT_INDENT_WIDTH};

/// A pointer event, reduced to what the engine needs.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEvent {
    /// Pointer went down on a row; starts a gesture and resets the
    /// accumulated horizontal offset.
    Start { active_id: NodeId },
    /// Horizontal pointer travel since the last move, in pixels.
    Move { delta_x: f32 },
    /// The row currently hovered, or `None` when the pointer left every
    /// valid target.
    Over { over_id: Option<NodeId> },
    /// Commit: linear reorder + rebuild, replacing the tree atomically.
    End,
    /// Discard the gesture; the tree is left untouched.
    Cancel,
}

#[derive(Debug)]
struct Gesture {
    active_id: NodeId,
    over_id: Option<NodeId>,
    offset_x: f32,
}

/// Editing session over one service-group forest.
///
/// Single-threaded and synchronous: the host UI feeds it [`DragEvent`]s and
/// reads back [`flat`](Self::flat) for rendering, [`projection`](Self::projection)
/// for the live drop preview, and [`tree`](Self::tree) for persistence
/// after each committed change.
#[derive(Debug)]
pub struct DragSession {
    tree: Vec<TreeNode>,
    flat: Vec<FlatNode>,
    indent_width: f32,
    gesture: Option<Gesture>,
}

impl DragSession {
    pub fn new(tree: Vec<TreeNode>) -> Self {
        let flat = flatten(&tree);
        Self {
            tree,
            flat,
            indent_width: DEFAULT_INDENT_WIDTH,
            gesture: None,
        }
    }

    /// Pixels of horizontal travel per nesting level. Should match the
    /// indentation the row renderer draws.
    pub fn indent_width(mut self, indent_width: f32) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// The current nested forest. After a committed change this is a brand
    /// new value, ready to be persisted by the caller.
    pub fn tree(&self) -> &[TreeNode] {
        &self.tree
    }

    /// Consume the session, yielding the forest.
    pub fn into_tree(self) -> Vec<TreeNode> {
        self.tree
    }

    /// The flat render list, kept in sync with [`tree`](Self::tree).
    pub fn flat(&self) -> &[FlatNode] {
        &self.flat
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Id of the row being dragged, while a gesture is active.
    pub fn active_id(&self) -> Option<&NodeId> {
        self.gesture.as_ref().map(|g| &g.active_id)
    }

    /// Live preview of where the drop would land, recomputed per call.
    /// `None` while idle, or when no row is hovered, or when the hovered
    /// frame must be skipped (ids missing from the flat list).
    pub fn projection(&self) -> Option<DropProjection> {
        let gesture = self.gesture.as_ref()?;
        let over_id = gesture.over_id.as_ref()?;
        project(
            &self.flat,
            &gesture.active_id,
            over_id,
            gesture.offset_x,
            self.indent_width,
        )
    }

    /// Advance the state machine. Only `End` mutates the tree.
    pub fn apply(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start { active_id } => {
                if self.gesture.is_some() {
                    debug!(active = %active_id, "new drag started mid-gesture — cancelling previous");
                }
                debug!(active = %active_id, "drag start");
                self.gesture = Some(Gesture {
                    active_id,
                    over_id: None,
                    offset_x: 0.0,
                });
            }
            DragEvent::Move { delta_x } => {
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.offset_x += delta_x;
                }
            }
            DragEvent::Over { over_id } => {
                if let Some(gesture) = self.gesture.as_mut() {
                    trace!(over = ?over_id, "drag over");
                    gesture.over_id = over_id;
                }
            }
            DragEvent::End => self.commit(),
            DragEvent::Cancel => {
                if self.gesture.take().is_some() {
                    debug!("drag cancelled");
                }
            }
        }
    }

    /// Committed (non-drag) edits route through the session so the flat
    /// list stays in sync with the tree.
    pub fn toggle_collapse(&mut self, id: &NodeId) {
        let next = mutate::toggle_collapse(&self.tree, id);
        self.replace(next);
    }

    pub fn rename(&mut self, id: &NodeId, new_name: impl Into<String>) {
        let next = mutate::rename(&self.tree, id, new_name);
        self.replace(next);
    }

    pub fn delete_subtree(&mut self, id: &NodeId) {
        let next = mutate::delete_subtree(&self.tree, id);
        self.replace(next);
    }

    pub fn insert_subgroup(&mut self, parent_id: &NodeId, new_group: TreeNode) {
        let next = mutate::insert_subgroup(&self.tree, parent_id, new_group);
        self.replace(next);
    }

    fn commit(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        let Some(over_id) = gesture.over_id else {
            debug!(active = %gesture.active_id, "drag ended without a hover target");
            return;
        };
        let Some(projection) = project(
            &self.flat,
            &gesture.active_id,
            &over_id,
            gesture.offset_x,
            self.indent_width,
        ) else {
            debug!(active = %gesture.active_id, "drag ended on an unknown row — discarded");
            return;
        };

        debug!(
            active = %gesture.active_id,
            over = %over_id,
            depth = projection.depth,
            parent = ?projection.parent_id,
            "drag committed"
        );
        let edited = apply_drop(&self.flat, &gesture.active_id, &over_id, &projection);
        let next = rebuild(&edited, &self.tree);
        self.replace(next);
    }

    fn replace(&mut self, tree: Vec<TreeNode>) {
        self.flat = flatten(&tree);
        self.tree = tree;
    }
}
