//! Host capabilities the engine drives
//!
//! The engine never owns a document. Everything it reads (geometry, scroll
//! offset) or writes (wrappers, classes, inline styles, subscriptions,
//! timers) goes through these traits.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use sticker_dom::DomResult;

/// Window signals the scheduler subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    Scroll,
    Resize,
}

/// Interval timer handle issued by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// Inline style properties behaviors touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Css {
    Position,
    Top,
    Bottom,
    Height,
    PaddingTop,
}

impl Css {
    /// CSS property name
    pub fn name(self) -> &'static str {
        match self {
            Css::Position => "position",
            Css::Top => "top",
            Css::Bottom => "bottom",
            Css::Height => "height",
            Css::PaddingTop => "padding-top",
        }
    }
}

/// Values behaviors assign
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssValue {
    Fixed,
    Px(f64),
}

impl std::fmt::Display for CssValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CssValue::Fixed => write!(f, "fixed"),
            CssValue::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Document tree, styling and geometry
pub trait Dom {
    /// Element handle
    type Node: Copy + Eq + Hash + Debug + 'static;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    fn attribute(&self, node: Self::Node, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: Self::Node, name: &str, value: &str);

    /// Insert a new `<div>` in the slot `node` occupies, with `node` as its
    /// only child
    fn wrap(&mut self, node: Self::Node) -> DomResult<Self::Node>;

    /// Replace the parent of `node` with `node`
    fn unwrap(&mut self, node: Self::Node) -> DomResult<()>;

    fn add_class(&mut self, node: Self::Node, class: &str);

    fn remove_class(&mut self, node: Self::Node, class: &str);

    fn set_style(&mut self, node: Self::Node, property: Css, value: CssValue);

    fn clear_style(&mut self, node: Self::Node, property: Css);

    /// Document-relative top offset
    fn offset_top(&self, node: Self::Node) -> f64;

    /// Height including padding
    fn outer_height(&self, node: Self::Node) -> f64;

    /// Content height
    fn height(&self, node: Self::Node) -> f64;
}

/// Viewport, event subscription and timers
pub trait Window {
    fn scroll_top(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Height of the document content
    fn document_height(&self) -> f64;

    fn listen(&mut self, signal: Signal);

    fn unlisten(&mut self, signal: Signal);

    fn set_interval(&mut self, period: Duration) -> TimerId;

    fn clear_interval(&mut self, timer: TimerId);
}

/// Everything the engine needs from its environment
pub trait Host: Dom + Window {}

impl<T: Dom + Window> Host for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_value_display() {
        assert_eq!(CssValue::Fixed.to_string(), "fixed");
        assert_eq!(CssValue::Px(20.0).to_string(), "20px");
        assert_eq!(CssValue::Px(12.5).to_string(), "12.5px");
        assert_eq!(Css::PaddingTop.name(), "padding-top");
    }
}
