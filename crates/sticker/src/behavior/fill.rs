//! `fill`: keeps a footer at the bottom of the viewport while the page is
//! shorter than the viewport
//!
//! Content can grow without any scroll or resize (late images, injected
//! markup), so with `check` enabled the document height is polled on an
//! interval and a change forces a re-evaluation.

use std::time::Duration;

use super::{Behavior, Frame};
use crate::hooks::FillTick;
use crate::host::{Css, CssValue, Host, TimerId};
use crate::instance::{Core, Target};

/// Document height polling period
pub const CHECK_INTERVAL: Duration = Duration::from_millis(500);

const POSITIONING: [Css; 2] = [Css::Position, Css::Bottom];

/// Footer-fill behavior
#[derive(Debug, Default)]
pub struct Fill {
    timer: Option<TimerId>,
    polled_height: f64,
}

/// Stuck only at the very top of a page that fits in the viewport
pub fn is_stuck(scroll_top: f64, document_height: f64, viewport_height: f64) -> bool {
    scroll_top == 0.0 && document_height <= viewport_height
}

impl Fill {
    fn evaluate<H: Host>(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        let viewport_height = frame.viewport_height;
        let host = &mut *frame.host;
        let scroll_top = host.scroll_top();
        let mut document_height = host.document_height();
        if let Some(adjust) = &core.settings().adjust_height {
            document_height = adjust(document_height, viewport_height);
        }

        tracing::trace!(id = %core.id(), document_height, viewport_height, scroll_top, "fill");
        if is_stuck(scroll_top, document_height, viewport_height) {
            core.stick(
                host,
                Target::Element,
                &[(Css::Position, CssValue::Fixed), (Css::Bottom, CssValue::Px(0.0))],
            );
        } else {
            core.unstick(host, Target::Element, &POSITIONING);
        }

        if let Some(callback) = &core.settings().callback {
            callback(&FillTick {
                id: core.id(),
                scroll_top,
                document_height,
                viewport_height,
            });
        }
    }

    fn stop<H: Host>(&mut self, host: &mut H) {
        if let Some(timer) = self.timer.take() {
            host.clear_interval(timer);
        }
    }
}

impl<H: Host> Behavior<H> for Fill {
    fn scroll(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        self.evaluate(frame, core);
    }

    fn resize(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        core.reserve_height(frame.host);
    }

    fn enable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        core.reserve_height(frame.host);
        // A second enable must not leak the first timer
        self.stop(frame.host);
        if core.settings().check {
            self.polled_height = frame.host.document_height();
            self.timer = Some(frame.host.set_interval(CHECK_INTERVAL));
        }
    }

    fn disable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>) {
        self.stop(frame.host);
        core.release(frame.host, &POSITIONING);
    }

    fn timer(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>, timer: TimerId) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        let height = frame.host.document_height();
        if height != self.polled_height {
            tracing::debug!(id = %core.id(), from = self.polled_height, to = height, "document height changed");
            self.evaluate(frame, core);
            self.polled_height = frame.host.document_height();
        }
        true
    }
}
