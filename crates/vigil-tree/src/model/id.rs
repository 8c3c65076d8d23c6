// ── Node identity ──
//
// Every node in a service-group tree carries an opaque string id that is
// stable across flatten/rebuild round trips. Ids come from whatever store
// owns the groups; this crate never generates or interprets them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque, unique identifier of a tree node.
///
/// Also used for [`monitor_id`](super::TreeNode::monitor_id) back-references,
/// which point into an external monitor table rather than at tree nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
