//! Host implementation for the headless `sticker_dom::Document`

use std::time::Duration;

use sticker_dom::{Document, DomResult, NodeId, TimerHandle, WindowEvent};

use crate::host::{Css, CssValue, Dom, Signal, TimerId, Window};
use crate::sticker::Sticker;

fn warn_on_err(op: &str, node: NodeId, result: DomResult<impl Sized>) {
    if let Err(err) = result {
        tracing::warn!(%err, ?node, "{} failed", op);
    }
}

fn window_event(signal: Signal) -> WindowEvent {
    match signal {
        Signal::Scroll => WindowEvent::Scroll,
        Signal::Resize => WindowEvent::Resize,
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree().parent(node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        Document::attribute(self, node, name)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        warn_on_err("set_attribute", node, Document::set_attribute(self, node, name, value));
    }

    fn wrap(&mut self, node: NodeId) -> DomResult<NodeId> {
        self.wrap_with(node, "div")
    }

    fn unwrap(&mut self, node: NodeId) -> DomResult<()> {
        Document::unwrap(self, node).map(|_| ())
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        warn_on_err("add_class", node, Document::add_class(self, node, class));
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        warn_on_err("remove_class", node, Document::remove_class(self, node, class));
    }

    fn set_style(&mut self, node: NodeId, property: Css, value: CssValue) {
        let value = value.to_string();
        warn_on_err("set_style", node, Document::set_style(self, node, property.name(), &value));
    }

    fn clear_style(&mut self, node: NodeId, property: Css) {
        warn_on_err("clear_style", node, Document::set_style(self, node, property.name(), ""));
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        Document::offset_top(self, node)
    }

    fn outer_height(&self, node: NodeId) -> f64 {
        Document::outer_height(self, node)
    }

    fn height(&self, node: NodeId) -> f64 {
        Document::height(self, node)
    }
}

impl Window for Document {
    fn scroll_top(&self) -> f64 {
        self.window().scroll_top()
    }

    fn viewport_height(&self) -> f64 {
        self.window().inner_height()
    }

    fn document_height(&self) -> f64 {
        Document::document_height(self)
    }

    fn listen(&mut self, signal: Signal) {
        self.window_mut().add_listener(window_event(signal));
    }

    fn unlisten(&mut self, signal: Signal) {
        self.window_mut().remove_listener(window_event(signal));
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        TimerId(self.window_mut().set_interval(period).0)
    }

    fn clear_interval(&mut self, timer: TimerId) {
        self.window_mut().clear_interval(TimerHandle(timer.0));
    }
}

/// Drive a headless document the way a browser would
impl Sticker<Document> {
    /// Scroll the viewport and deliver the scroll signal
    pub fn scroll_to(&mut self, y: f64) {
        self.host_mut().scroll_to(y);
        self.dispatch(Signal::Scroll);
    }

    /// Resize the viewport and deliver the resize signal
    pub fn resize_to(&mut self, width: f64, height: f64) {
        self.host_mut().window_mut().resize_to(width, height);
        self.dispatch(Signal::Resize);
    }

    /// Advance the window clock and deliver every timer expiry
    pub fn advance(&mut self, dt: Duration) {
        let fired = self.host_mut().window_mut().advance(dt);
        for handle in fired {
            self.fire_timer(TimerId(handle.0));
        }
    }
}
