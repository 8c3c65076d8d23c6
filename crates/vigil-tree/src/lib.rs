//! Hierarchical drag-and-drop tree engine for vigil service groups.
//!
//! This crate owns the one algorithmically-interesting piece of the vigil
//! dashboard: reordering the nested service-group tree (and the status-page
//! group editor) by dragging rows in a flat list. It is pure computation —
//! no rendering, no I/O, no async — driven by the host UI's pointer events:
//!
//! - **[`flatten`]** — pre-order conversion of the nested forest into the
//!   linear list rows are rendered and dragged in, annotated with parent id
//!   and depth.
//!
//! - **[`project`]** — per pointer-move, the live preview of where the
//!   dragged row would land (which parent, which depth), clamped to what
//!   the surrounding rows structurally allow and never letting a row become
//!   its own ancestor.
//!
//! - **[`apply_drop`] / [`rebuild`]** — at drag end, a pure array move plus
//!   two-pass reconstruction of the nested tree, restoring each node's
//!   collapsed state and child order.
//!
//! - **[`mutate`]** — pure non-drag edits: collapse toggles, renames,
//!   subtree deletion, subgroup insertion, descendant counts, deep lookup.
//!
//! - **[`DragSession`]** — the small state machine sequencing
//!   Start/Move/Over/End/Cancel events into the calls above and exposing
//!   the live preview to the view layer.
//!
//! Callers hand in a `Vec<TreeNode>` forest, feed pointer events reduced to
//! `{active_id, over_id, horizontal_offset}`, and get back a replacement
//! forest on every committed change. Persistence is theirs.

pub mod flatten;
pub mod model;
pub mod mutate;
pub mod project;
pub mod rebuild;
pub mod session;

/// Default pixels of horizontal pointer travel per nesting level.
pub const DEFAULT_INDENT_WIDTH: f32 = 16.0;

// ── Primary re-exports ──────────────────────────────────────────────
pub use flatten::{flatten, flatten_visible};
pub use model::{FlatNode, NodeId, NodeKind, TreeNode};
pub use mutate::{
    count_descendants, delete_subtree, find_deep, insert_subgroup, rename, toggle_collapse,
};
pub use project::{DropProjection, project};
pub use rebuild::{apply_drop, rebuild};
pub use session::{DragEvent, DragSession};
