//! Sticky instance: one bound element, its wrapper and its state
//!
//! An instance is split in two. `Core` holds everything a behavior is
//! allowed to touch (settings, classes, the `sticky` flag). The behavior
//! itself is a boxed strategy that keeps its private geometry cache.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use sticker_dom::DomResult;

use crate::behavior::{self, Behavior, Frame};
use crate::hooks::{Callback, Hook, HookEvent};
use crate::host::{Css, CssValue, Dom, Host, TimerId};
use crate::options::{BehaviorKind, Options, Setting, Settings};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique instance id; never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub(crate) u64);

impl InstanceId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generated class names for one namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub wrapper: String,
    pub enabled: String,
    pub sticky: String,
}

impl ClassNames {
    pub fn new(namespace: &str) -> Self {
        Self {
            wrapper: format!("{namespace}-wrapper"),
            enabled: format!("{namespace}-enabled"),
            sticky: format!("{namespace}-sticky"),
        }
    }
}

/// Which node a style change lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Element,
    Wrapper,
}

/// Instance state shared with its behavior
#[derive(Debug)]
pub struct Core<N> {
    id: InstanceId,
    element: N,
    wrapper: N,
    settings: Settings<N>,
    classes: ClassNames,
    enabled: bool,
    sticky: bool,
}

impl<N: Copy> Core<N> {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn element(&self) -> N {
        self.element
    }

    pub fn wrapper(&self) -> N {
        self.wrapper
    }

    pub fn settings(&self) -> &Settings<N> {
        &self.settings
    }

    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    fn node(&self, target: Target) -> N {
        match target {
            Target::Element => self.element,
            Target::Wrapper => self.wrapper,
        }
    }

    pub(crate) fn fire(&self, hook: Hook) {
        self.settings.hooks.fire(&HookEvent {
            hook,
            id: self.id,
            enabled: self.enabled,
            sticky: self.sticky,
        });
    }

    /// Enter the stuck state: sticky class, `styles` on `target`, then the
    /// `sticky` hook. Returns false (and does nothing) if already stuck.
    pub fn stick<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        target: Target,
        styles: &[(Css, CssValue)],
    ) -> bool {
        if self.sticky {
            return false;
        }
        self.sticky = true;
        dom.add_class(self.wrapper, &self.classes.sticky);
        let node = self.node(target);
        for (property, value) in styles {
            dom.set_style(node, *property, *value);
        }
        tracing::debug!(id = %self.id, kind = %self.settings.kind, "stick");
        self.fire(Hook::Sticky);
        true
    }

    /// Leave the stuck state: drop the class, clear `properties` on
    /// `target`, then the `unsticky` hook. Returns false if not stuck.
    pub fn unstick<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        target: Target,
        properties: &[Css],
    ) -> bool {
        if !self.sticky {
            return false;
        }
        self.sticky = false;
        dom.remove_class(self.wrapper, &self.classes.sticky);
        let node = self.node(target);
        for property in properties {
            dom.clear_style(node, *property);
        }
        tracing::debug!(id = %self.id, kind = %self.settings.kind, "unstick");
        self.fire(Hook::Unsticky);
        true
    }

    /// Give the wrapper the element's height so the page does not jump when
    /// the element leaves normal flow
    pub fn reserve_height<D: Dom<Node = N> + ?Sized>(&self, dom: &mut D) {
        let height = dom.outer_height(self.element).max(0.0);
        dom.set_style(self.wrapper, Css::Height, CssValue::Px(height));
    }

    /// Clear element positioning and the wrapper height reservation
    pub fn release<D: Dom<Node = N> + ?Sized>(&self, dom: &mut D, properties: &[Css]) {
        for property in properties {
            dom.clear_style(self.element, *property);
        }
        dom.clear_style(self.wrapper, Css::Height);
    }
}

/// A bound element
pub struct Instance<H: Host> {
    core: Core<H::Node>,
    behavior: Box<dyn Behavior<H>>,
}

impl<H: Host> Instance<H> {
    /// Wrap `element`, initialize the behavior and enable it
    pub(crate) fn create(
        frame: &mut Frame<'_, H>,
        element: H::Node,
        options: &Options<H::Node>,
    ) -> DomResult<Self> {
        let settings = Settings::resolve(options);
        let classes = ClassNames::new(&settings.namespace);

        let wrapper = frame.host.wrap(element)?;
        frame.host.add_class(wrapper, &classes.wrapper);
        if let Some(id) = frame.host.attribute(element, "id") {
            let wrapper_id = format!("{id}-{}", classes.wrapper);
            frame.host.set_attribute(wrapper, "id", &wrapper_id);
        }

        let mut instance = Self {
            behavior: behavior::for_kind(settings.kind),
            core: Core {
                id: InstanceId::next(),
                element,
                wrapper,
                settings,
                classes,
                enabled: false,
                sticky: false,
            },
        };
        tracing::debug!(id = %instance.core.id, kind = %instance.core.settings.kind, ?element, "instance created");

        instance.behavior.init(frame, &mut instance.core);
        instance.core.fire(Hook::Init);
        instance.enable(frame);
        Ok(instance)
    }

    pub fn id(&self) -> InstanceId {
        self.core.id
    }

    pub fn element(&self) -> H::Node {
        self.core.element
    }

    pub fn wrapper(&self) -> H::Node {
        self.core.wrapper
    }

    pub fn kind(&self) -> BehaviorKind {
        self.core.settings.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.core.enabled
    }

    pub fn is_sticky(&self) -> bool {
        self.core.sticky
    }

    pub fn settings(&self) -> &Settings<H::Node> {
        &self.core.settings
    }

    pub fn classes(&self) -> &ClassNames {
        &self.core.classes
    }

    pub(crate) fn enable(&mut self, frame: &mut Frame<'_, H>) {
        self.core.enabled = true;
        self.behavior.enable(frame, &mut self.core);
        self.behavior.scroll(frame, &mut self.core);
        frame.host.add_class(self.core.wrapper, &self.core.classes.enabled);
        self.core.fire(Hook::Enable);
    }

    pub(crate) fn disable(&mut self, frame: &mut Frame<'_, H>) {
        self.core.enabled = false;
        self.core.sticky = false;
        self.behavior.disable(frame, &mut self.core);
        frame.host.remove_class(self.core.wrapper, &self.core.classes.sticky);
        frame.host.remove_class(self.core.wrapper, &self.core.classes.enabled);
        self.core.fire(Hook::Disable);
    }

    /// Re-evaluate after a layout change the scheduler cannot see
    pub(crate) fn update(&mut self, frame: &mut Frame<'_, H>) {
        if self.core.enabled {
            self.behavior.scroll(frame, &mut self.core);
        }
    }

    pub(crate) fn on_scroll(&mut self, frame: &mut Frame<'_, H>) {
        self.behavior.scroll(frame, &mut self.core);
        self.core.fire(Hook::Scroll);
    }

    pub(crate) fn on_resize(&mut self, frame: &mut Frame<'_, H>) {
        self.behavior.resize(frame, &mut self.core);
        self.behavior.scroll(frame, &mut self.core);
        self.core.fire(Hook::Resize);
    }

    /// Route a timer expiry to the behavior; false if it is not ours
    pub(crate) fn on_timer(&mut self, frame: &mut Frame<'_, H>, timer: TimerId) -> bool {
        self.core.enabled && self.behavior.timer(frame, &mut self.core, timer)
    }

    /// Revert side effects and remove the wrapper. The `disable` hook is
    /// not fired here.
    pub(crate) fn teardown(&mut self, frame: &mut Frame<'_, H>) {
        if self.core.enabled {
            self.core.enabled = false;
            self.core.sticky = false;
            self.behavior.disable(frame, &mut self.core);
        }
        if let Err(err) = frame.host.unwrap(self.core.element) {
            tracing::warn!(%err, id = %self.core.id, "failed to remove wrapper");
        }
    }

    /// Fire `destroy` on an instance already out of the scheduler
    pub(crate) fn finish(self) {
        tracing::debug!(id = %self.core.id, "instance destroyed");
        self.core.fire(Hook::Destroy);
    }

    pub(crate) fn set(&mut self, setting: Setting<H::Node>) {
        self.core.settings.apply(setting);
    }

    pub(crate) fn on(&mut self, hook: Hook, callback: Callback) {
        self.core.settings.hooks.insert(hook, callback);
    }

    pub(crate) fn off(&mut self, hook: Hook) {
        self.core.settings.hooks.off(hook);
    }
}

impl<H: Host> fmt::Debug for Instance<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("core", &self.core).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert!(b > a);
        assert_eq!(b.to_string(), format!("#{}", b.get()));
    }

    #[test]
    fn test_class_names() {
        let classes = ClassNames::new("pin");
        assert_eq!(classes.wrapper, "pin-wrapper");
        assert_eq!(classes.enabled, "pin-enabled");
        assert_eq!(classes.sticky, "pin-sticky");
    }
}
