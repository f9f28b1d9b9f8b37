//! User callbacks
//!
//! Every hook is optional. Firing a hook with no handler does nothing.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::instance::InstanceId;

/// Lifecycle points a user can observe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    Init,
    Destroy,
    Scroll,
    Resize,
    Enable,
    Disable,
    Sticky,
    Unsticky,
}

impl Hook {
    pub fn name(self) -> &'static str {
        match self {
            Hook::Init => "init",
            Hook::Destroy => "destroy",
            Hook::Scroll => "scroll",
            Hook::Resize => "resize",
            Hook::Enable => "enable",
            Hook::Disable => "disable",
            Hook::Sticky => "sticky",
            Hook::Unsticky => "unsticky",
        }
    }
}

/// What a hook handler sees of the instance that fired it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HookEvent {
    pub hook: Hook,
    pub id: InstanceId,
    pub enabled: bool,
    pub sticky: bool,
}

/// Hook handler
pub type Callback = Rc<dyn Fn(&HookEvent)>;

/// Arguments of the `fill` per-tick callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillTick {
    pub id: InstanceId,
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// `fill` callback, invoked on every evaluation
pub type FillCallback = Rc<dyn Fn(&FillTick)>;

/// `fill` document height override: `(document_height, viewport_height) -> height`
pub type AdjustHeight = Rc<dyn Fn(f64, f64) -> f64>;

/// Registered hook handlers
#[derive(Clone, Default)]
pub struct Hooks {
    handlers: HashMap<Hook, Callback>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, replacing any previous one
    pub fn on(&mut self, hook: Hook, callback: impl Fn(&HookEvent) + 'static) {
        self.insert(hook, Rc::new(callback));
    }

    /// Register an already shared handler
    pub fn insert(&mut self, hook: Hook, callback: Callback) {
        self.handlers.insert(hook, callback);
    }

    /// Remove a handler
    pub fn off(&mut self, hook: Hook) {
        self.handlers.remove(&hook);
    }

    /// Invoke the handler for `event.hook`, if any
    pub fn fire(&self, event: &HookEvent) {
        if let Some(handler) = self.handlers.get(&event.hook) {
            handler(event);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.handlers.keys().map(|h| h.name()).collect();
        names.sort_unstable();
        f.debug_struct("Hooks").field("registered", &names).finish()
    }
}
