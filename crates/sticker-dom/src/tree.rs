//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: a removed node stays in the arena, detached, so
//! ids handed out to callers stay valid for the life of the tree.

use crate::{DomError, DomResult, ElementData, Node, NodeId};

/// Arena-based DOM tree
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// Tree holding `document > html > body`. Returns the html and body ids.
    pub fn with_html_body() -> (Self, NodeId, NodeId) {
        let root = NodeId(0);
        let html = NodeId(1);
        let body = NodeId(2);

        let mut document = Node::document();
        document.first_child = html;
        document.last_child = html;
        let mut html_node = Node::element("html");
        html_node.parent = root;
        html_node.first_child = body;
        html_node.last_child = body;
        let mut body_node = Node::element("body");
        body_node.parent = html;

        let tree = Self {
            nodes: vec![document, html_node, body_node],
        };
        (tree, html, body)
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound(id))
    }

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id)?.parent;
        parent.is_valid().then_some(parent)
    }

    /// Iterate direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Position of a node among its siblings
    pub fn child_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).position(|c| c == id)
    }

    /// Inclusive ancestry check
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = node;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = self.get(current).map_or(NodeId::NONE, |n| n.parent);
        }
        false
    }

    /// All descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        while let Some(next) = stack.pop() {
            out.push(next);
            let mut kids: Vec<NodeId> = self.children(next).collect();
            kids.reverse();
            stack.extend(kids);
        }
        out
    }

    /// Remove a node from its parent. Detached nodes are left as-is.
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let n = self.node(id)?;
            (n.parent, n.prev_sibling, n.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.node_mut(prev)?.next_sibling = next;
        } else {
            self.node_mut(parent)?.first_child = next;
        }
        if next.is_valid() {
            self.node_mut(next)?.prev_sibling = prev;
        } else {
            self.node_mut(parent)?.last_child = prev;
        }

        let n = self.node_mut(id)?;
        n.parent = NodeId::NONE;
        n.prev_sibling = NodeId::NONE;
        n.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end), moving it if attached
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.contains(child, parent) {
            return Err(DomError::HierarchyRequest(parent, child));
        }
        if let Some(r) = reference {
            if self.node(r)?.parent != parent {
                return Err(DomError::NotAChild(r, parent));
            }
            if r == child {
                return Ok(());
            }
        }

        self.detach(child)?;

        match reference {
            None => {
                let prev = self.node(parent)?.last_child;
                {
                    let c = self.node_mut(child)?;
                    c.prev_sibling = prev;
                    c.next_sibling = NodeId::NONE;
                }
                if prev.is_valid() {
                    self.node_mut(prev)?.next_sibling = child;
                } else {
                    self.node_mut(parent)?.first_child = child;
                }
                self.node_mut(parent)?.last_child = child;
            }
            Some(r) => {
                let prev = self.node(r)?.prev_sibling;
                {
                    let c = self.node_mut(child)?;
                    c.prev_sibling = prev;
                    c.next_sibling = r;
                }
                self.node_mut(r)?.prev_sibling = child;
                if prev.is_valid() {
                    self.node_mut(prev)?.next_sibling = child;
                } else {
                    self.node_mut(parent)?.first_child = child;
                }
            }
        }

        self.node_mut(child)?.parent = parent;
        Ok(())
    }

    /// Put `wrapper` in the slot `node` occupies and make `node` its only child
    pub fn wrap(&mut self, node: NodeId, wrapper: NodeId) -> DomResult<()> {
        let parent = self.parent(node).ok_or(DomError::Detached(node))?;
        if self.node(wrapper)?.first_child.is_valid() {
            return Err(DomError::HierarchyRequest(wrapper, node));
        }
        self.insert_before(parent, wrapper, Some(node))?;
        self.append_child(wrapper, node)
    }

    /// Replace the parent of `node` with the parent's children.
    ///
    /// Returns the removed parent, which is left detached.
    pub fn unwrap(&mut self, node: NodeId) -> DomResult<NodeId> {
        let wrapper = self.parent(node).ok_or(DomError::Detached(node))?;
        let grand = self.parent(wrapper).ok_or(DomError::Detached(wrapper))?;

        let children: Vec<NodeId> = self.children(wrapper).collect();
        for child in children {
            self.insert_before(grand, child, Some(wrapper))?;
        }
        self.detach(wrapper)?;
        Ok(wrapper)
    }

    /// Number of nodes in the arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node is never removed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}
