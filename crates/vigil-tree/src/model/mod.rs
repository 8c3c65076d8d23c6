//! Domain model: persisted tree nodes and their flattened projection.

mod flat;
mod id;
mod node;

pub use flat::FlatNode;
pub use id::NodeId;
pub use node::{NodeKind, TreeNode};
