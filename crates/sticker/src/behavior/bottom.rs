//! `bottom`: fixed to the bottom of the viewport until the element's
//! natural bottom edge scrolls into view

use super::{Behavior, Frame};
use crate::host::{Css, CssValue, Host};
use crate::instance::{Core, Target};

const POSITIONING: [Css; 2] = [Css::Position, Css::Bottom];

/// Bottom-pinned behavior
#[derive(Debug, Default, Clone, Copy)]
pub struct Bottom;

/// Stuck while the natural bottom edge sits below
/// `viewport_height - bottom_space`
pub fn is_stuck(
    scroll_top: f64,
    element_top: f64,
    element_height: f64,
    viewport_height: f64,
    bottom_space: f64,
) -> bool {
    scroll_top - (element_top - viewport_height + element_height + bottom_space) < 0.0
}

impl<H: Host> Behavior<H> for Bottom {
    fn scroll(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        let viewport_height = frame.viewport_height;
        let host = &mut *frame.host;
        let scroll_top = host.scroll_top();
        let element_top = host.offset_top(core.wrapper());
        let element_height = host.outer_height(core.element());
        let bottom_space = core.settings().bottom_space;

        tracing::trace!(id = %core.id(), element_top, element_height, viewport_height, scroll_top, "bottom");
        if is_stuck(scroll_top, element_top, element_height, viewport_height, bottom_space) {
            core.stick(
                host,
                Target::Element,
                &[(Css::Position, CssValue::Fixed), (Css::Bottom, CssValue::Px(bottom_space))],
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
