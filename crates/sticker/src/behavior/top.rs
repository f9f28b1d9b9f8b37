//! `top`: fixed to the top of the viewport once the wrapper scrolls past
//! `topSpace`

use super::{Behavior, Frame};
use crate::host::{Css, CssValue, Host};
use crate::instance::{Core, Target};

const POSITIONING: [Css; 2] = [Css::Position, Css::Top];

/// Top-pinned behavior
#[derive(Debug, Default, Clone, Copy)]
pub struct Top;

/// `topSpace` never exceeds the element's own natural offset, so a large
/// space cannot pin an element before it reaches the top. Negative offsets
/// are left unclamped.
pub fn effective_top_space(top_space: f64, element_top: f64) -> f64 {
    if top_space > element_top && element_top >= 0.0 {
        element_top
    } else {
        top_space
    }
}

/// Stuck iff `element_top - top_space - scroll_top < 0`, with `top_space`
/// already clamped
pub fn is_stuck(element_top: f64, top_space: f64, scroll_top: f64) -> bool {
    element_top - top_space - scroll_top < 0.0
}

impl<H: Host> Behavior<H> for Top {
    fn scroll(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        let host = &mut *frame.host;
        let scroll_top = host.scroll_top();
        let element_top = host.offset_top(core.wrapper());
        let top_space = effective_top_space(core.settings().top_space, element_top);

        tracing::trace!(id = %core.id(), element_top, top_space, scroll_top, "top");
        if is_stuck(element_top, top_space, scroll_top) {
            core.stick(
                host,
                Target::Element,
                &[(Css::Position, CssValue::Fixed), (Css::Top, CssValue::Px(top_space))],
            );
        } else {
            core.unstick(host, Target::Element, &POSITIONING);
        }
    }

    fn resize(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        core.reserve_height(frame.host);
    }

    fn enable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        core.reserve_height(frame.host);
    }

    fn disable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        core.release(frame.host, &POSITIONING);
    }
}
