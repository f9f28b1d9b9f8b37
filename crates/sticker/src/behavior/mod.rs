//! Sticky behaviors
//!
//! A behavior decides, on each tick, whether its instance is stuck and
//! applies the matching styles. All four built-ins follow the same rule:
//! class changes and `sticky`/`unsticky` hooks happen only on an edge,
//! never on a tick where the outcome is unchanged.

mod bottom;
mod fill;
mod sidebar;
mod top;

pub use bottom::Bottom;
pub use fill::{CHECK_INTERVAL, Fill};
pub use sidebar::Sidebar;
pub use top::Top;

use crate::host::{Host, TimerId};
use crate::instance::Core;
use crate::options::BehaviorKind;

/// What a behavior callback gets to work with during one tick
pub struct Frame<'a, H> {
    pub host: &'a mut H,
    /// Viewport height cached by the scheduler at the last resize
    pub viewport_height: f64,
}

impl<'a, H> Frame<'a, H> {
    pub fn new(host: &'a mut H, viewport_height: f64) -> Self {
        Self {
            host,
            viewport_height,
        }
    }
}

/// Positioning strategy
pub trait Behavior<H: Host> {
    /// Called once after the wrapper exists
    fn init(&mut self, _frame: &mut Frame<'_, H>, _core: &mut Core<H::Node>) {}

    /// Decide stickiness for the current scroll offset
    fn scroll(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>);

    /// Refresh cached geometry after the viewport changed size
    fn resize(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>);

    /// Apply the side effects that must hold while enabled
    fn enable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>);

    /// Revert every side effect this behavior applied
    fn disable(&mut self, frame: &mut Frame<'_, H>, core: &mut Core<H::Node>);

    /// Handle an interval timer expiry. Returns false if the timer is not
    /// owned by this behavior.
    fn timer(&mut self, _frame: &mut Frame<'_, H>, _core: &mut Core<H::Node>, _timer: TimerId) -> bool {
        false
    }
}

/// Build the strategy for a behavior name
pub fn for_kind<H: Host>(kind: BehaviorKind) -> Box<dyn Behavior<H>> {
    match kind {
        BehaviorKind::Top => Box::new(Top),
        BehaviorKind::Bottom => Box::new(Bottom),
        BehaviorKind::Fill => Box::new(Fill::default()),
        BehaviorKind::Sidebar => Box::new(Sidebar::<H::Node>::default()),
    }
}
