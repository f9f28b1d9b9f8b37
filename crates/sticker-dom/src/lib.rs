//! Sticker DOM - Headless document
//!
//! Arena-based DOM tree with just enough of a browser surface to drive
//! sticky behaviors without a browser: wrap/unwrap, class lists, inline
//! styles, explicit layout boxes, and a window that owns the scroll offset,
//! viewport size, signal listeners and interval timers.

mod classlist;
mod document;
mod geometry;
mod node;
mod operations;
mod style;
mod tree;
mod window;

pub use classlist::DOMTokenList;
pub use document::Document;
pub use geometry::LayoutBox;
pub use node::{ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use style::InlineStyle;
pub use tree::DomTree;
pub use window::{TimerHandle, Window, WindowEvent};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check that this id points at a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
