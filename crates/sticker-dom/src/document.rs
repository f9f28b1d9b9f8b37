//! Document - High-level document API

use crate::{DomError, DomResult, DomTree, LayoutBox, NodeId, Window};

/// HTML Document with its window
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    window: Window,
}

impl Document {
    /// Create a document with `<html><body>` and a viewport of the given size
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let (tree, html, body) = DomTree::with_html_body();

        Self {
            tree,
            html_element: html,
            body_element: body,
            window: Window::new(viewport_width, viewport_height),
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Create an element and append it to `parent`
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        self.tree.append_child(parent, id)?;
        Ok(id)
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.tree.element(id)?.get_attr(name)
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.tree
            .element(id)
            .is_some_and(|e| e.classes.contains(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element_mut(id)?.classes.add(class))
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> DomResult<bool> {
        Ok(self.element_mut(id)?.classes.remove(class))
    }

    /// Inline style value for a property
    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.tree
            .element(id)?
            .style
            .get(property)
            .map(str::to_string)
    }

    /// Set an inline style; an empty value removes the declaration
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.style.set(property, value);
        Ok(())
    }

    /// Layout box assigned to an element
    pub fn layout(&self, id: NodeId) -> LayoutBox {
        self.tree.element(id).map(|e| e.layout).unwrap_or_default()
    }

    pub fn set_layout(&mut self, id: NodeId, layout: LayoutBox) -> DomResult<()> {
        self.element_mut(id)?.layout = layout;
        Ok(())
    }

    /// Document-relative top offset, like jQuery's `offset().top`
    pub fn offset_top(&self, id: NodeId) -> f64 {
        self.layout(id).top
    }

    /// Content + padding height
    pub fn outer_height(&self, id: NodeId) -> f64 {
        self.layout(id).outer_height()
    }

    /// Content height
    pub fn height(&self, id: NodeId) -> f64 {
        self.layout(id).height
    }

    /// Content height of `<body>`
    pub fn document_height(&self) -> f64 {
        self.height(self.body_element)
    }

    /// Wrap `id` in a new element of `tag` occupying its slot.
    ///
    /// The wrapper takes over the element's box so offset queries on it
    /// answer where the element sits in flow.
    pub fn wrap_with(&mut self, id: NodeId, tag: &str) -> DomResult<NodeId> {
        let inner = self.layout(id);
        let wrapper = self.tree.create_element(tag);
        self.tree.wrap(id, wrapper)?;
        self.set_layout(wrapper, LayoutBox::new(inner.top, inner.outer_height()))?;
        Ok(wrapper)
    }

    /// Remove the parent of `id`, keeping `id` in its place
    pub fn unwrap(&mut self, id: NodeId) -> DomResult<NodeId> {
        self.tree.unwrap(id)
    }

    /// Find an element by its `id` attribute
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|n| self.tree.element(*n).and_then(|e| e.id()) == Some(id))
    }

    /// Elements matching a simple selector: `tag`, `#id` or `.class`
    pub fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let selector = selector.trim();
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .filter(|n| {
                let Some(el) = self.tree.element(*n) else {
                    return false;
                };
                if let Some(id) = selector.strip_prefix('#') {
                    el.id() == Some(id)
                } else if let Some(class) = selector.strip_prefix('.') {
                    el.classes.contains(class)
                } else {
                    el.tag.eq_ignore_ascii_case(selector)
                }
            })
            .collect()
    }

    /// Scroll the viewport, clamped to the scrollable range
    pub fn scroll_to(&mut self, y: f64) {
        let max = (self.document_height() - self.window.inner_height()).max(0.0);
        self.window.scroll_to(y.min(max));
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut crate::ElementData> {
        self.tree.element_mut(id).ok_or(DomError::NotFound(id))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}
