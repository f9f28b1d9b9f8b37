//! DOM Node
//!
//! Sibling/child links are `NodeId`s into the arena rather than pointers.

use crate::{DOMTokenList, InlineStyle, LayoutBox, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// Element
    Element(ElementData),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    /// Attributes other than `class` and `style`
    pub attrs: Vec<(String, String)>,
    pub classes: DOMTokenList,
    pub style: InlineStyle,
    /// Geometry assigned by the embedder
    pub layout: LayoutBox,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            classes: DOMTokenList::new(),
            style: InlineStyle::new(),
            layout: LayoutBox::default(),
        }
    }

    /// Get an attribute value. `class` and `style` are served from
    /// their structured representations.
    pub fn get_attr(&self, name: &str) -> Option<String> {
        match name {
            "class" if self.classes.length() > 0 => Some(self.classes.value()),
            "class" => None,
            "style" if !self.style.is_empty() => Some(self.style.css_text()),
            "style" => None,
            _ => self
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
        }
    }

    /// Set an attribute
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match name {
            "class" => {
                self.classes = DOMTokenList::from_string(value);
                return;
            }
            "style" => {
                self.style = InlineStyle::parse(value);
                return;
            }
            _ => {}
        }
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == "id")
            .map(|(_, v)| v.as_str())
    }
}
