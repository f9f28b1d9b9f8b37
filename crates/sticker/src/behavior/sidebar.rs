//! `sidebar`: pushes the element down inside its container with wrapper
//! `padding-top`, so it never leaves normal flow

use super::{Behavior, Frame};
use crate::host::{Css, CssValue, Dom, Host};
use crate::instance::{Core, Target};

/// Container-bounded behavior
#[derive(Debug)]
pub struct Sidebar<N> {
    container: Option<N>,
    container_height: f64,
    container_top: f64,
}

impl<N> Default for Sidebar<N> {
    fn default() -> Self {
        Self {
            container: None,
            container_height: 0.0,
            container_top: 0.0,
        }
    }
}

/// How far the element may be pushed down before its bottom edge would
/// leave the container. Never negative.
pub fn constraint(container_height: f64, container_top: f64, element_top: f64, element_height: f64) -> f64 {
    (container_height - element_height + container_top - element_top).max(0.0)
}

/// Padding for a given overshoot, or `None` when the element rests in flow
pub fn padding(extra: f64, constraint: f64) -> Option<f64> {
    (extra > 0.0).then(|| extra.min(constraint))
}

impl<N: Copy> Sidebar<N> {
    /// Resolve the container and cache its geometry
    fn measure<D: Dom<Node = N> + ?Sized>(&mut self, dom: &D, core: &Core<N>) {
        self.container = core.settings().container.or_else(|| dom.parent(core.wrapper()));
        (self.container_height, self.container_top) = match self.container {
            Some(container) => (dom.height(container), dom.offset_top(container)),
            None => (0.0, 0.0),
        };
    }
}

impl<H: Host> Behavior<H> for Sidebar<H::Node> {
    fn init(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        self.measure(&*frame.host, core);
    }

    fn scroll(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        let host = &mut *frame.host;
        let scroll_top = host.scroll_top();
        let element_top = host.offset_top(core.wrapper());
        let element_height = host.outer_height(core.element());
        let extra = scroll_top - element_top + core.settings().top_space;

        tracing::trace!(id = %core.id(), element_top, extra, scroll_top, "sidebar");
        let limit = constraint(self.container_height, self.container_top, element_top, element_height);
        match padding(extra, limit) {
            Some(px) => {
                let styles = [(Css::PaddingTop, CssValue::Px(px))];
                if !core.stick(host, Target::Wrapper, &styles) {
                    host.set_style(core.wrapper(), Css::PaddingTop, CssValue::Px(px));
                }
            }
            None => {
                core.unstick(host, Target::Wrapper, &[Css::PaddingTop]);
            }
        }
    }

    fn resize(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        self.measure(&*frame.host, core);
    }

    fn enable(&mut self, _frame: &mut Frame<'_, H>, _core: &mut Core<H::Node>) {}

    fn disable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        frame.host.clear_style(core.wrapper(), Css::PaddingTop);
    }
}
