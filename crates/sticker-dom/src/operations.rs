//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found in the arena
    #[error("node {0:?} not found")]
    NotFound(NodeId),
    /// Hierarchy error (e.g., inserting an ancestor into its descendant)
    #[error("hierarchy request error: {0:?} cannot contain {1:?}")]
    HierarchyRequest(NodeId, NodeId),
    /// Reference node is not a child of the given parent
    #[error("node {0:?} is not a child of {1:?}")]
    NotAChild(NodeId, NodeId),
    /// Node has no parent, so it cannot be wrapped or unwrapped
    #[error("node {0:?} is detached")]
    Detached(NodeId),
}
