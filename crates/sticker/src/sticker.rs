//! Binding surface
//!
//! `Sticker` owns the host and the scheduler. Elements are bound with
//! options and afterwards driven either through typed per-instance methods
//! or in bulk with `invoke`.

use crate::behavior::Frame;
use crate::hooks::{Callback, Hook, HookEvent};
use crate::host::{Host, Signal, TimerId};
use crate::instance::{Instance, InstanceId};
use crate::options::{Options, Setting};
use crate::scheduler::Scheduler;

/// Operation applied to bound elements by `invoke`
#[derive(Clone)]
pub enum Method<N> {
    Enable,
    Disable,
    Destroy,
    Update,
    Set(Setting<N>),
    On(Hook, Callback),
    Off(Hook),
}

/// Sticky behaviors for one host document
pub struct Sticker<H: Host> {
    host: H,
    scheduler: Scheduler<H>,
}

impl<H: Host> Sticker<H> {
    pub fn new(host: H) -> Self {
        let viewport_height = host.viewport_height().max(0.0);
        Self {
            host,
            scheduler: Scheduler::new(viewport_height),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for moving the viewport or changing content.
    /// Changes take effect on the next `dispatch` or `update`.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn scheduler(&self) -> &Scheduler<H> {
        &self.scheduler
    }

    /// Whether the scroll/resize subscription is active
    pub fn is_listening(&self) -> bool {
        self.scheduler.is_listening()
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.scheduler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduler.is_empty()
    }

    pub fn instance(&self, id: InstanceId) -> Option<&Instance<H>> {
        self.scheduler.get(id)
    }

    pub fn instance_for(&self, element: H::Node) -> Option<&Instance<H>> {
        self.scheduler.get(self.scheduler.id_for(element)?)
    }

    /// Bind every element not already bound. Returns the new instance ids.
    pub fn bind(
        &mut self,
        elements: impl IntoIterator<Item = H::Node>,
        options: &Options<H::Node>,
    ) -> Vec<InstanceId> {
        elements
            .into_iter()
            .filter_map(|element| self.bind_one(element, options))
            .collect()
    }

    /// Bind one element. `None` if it is already bound or cannot be wrapped.
    pub fn bind_one(&mut self, element: H::Node, options: &Options<H::Node>) -> Option<InstanceId> {
        if self.scheduler.id_for(element).is_some() {
            tracing::trace!(?element, "already bound");
            return None;
        }

        let mut frame = Frame::new(&mut self.host, self.scheduler.viewport_height());
        let instance = match Instance::create(&mut frame, element, options) {
            Ok(instance) => instance,
            Err(err) => {
                tracing::warn!(%err, ?element, "cannot bind element");
                return None;
            }
        };
        let id = instance.id();
        self.scheduler.register(&mut self.host, instance);
        Some(id)
    }

    /// Apply `method` to each bound element; unbound elements are skipped
    pub fn invoke(&mut self, elements: impl IntoIterator<Item = H::Node>, method: Method<H::Node>) {
        for element in elements {
            let Some(id) = self.scheduler.id_for(element) else {
                continue;
            };
            match method.clone() {
                Method::Enable => self.enable(id),
                Method::Disable => self.disable(id),
                Method::Destroy => self.destroy(id),
                Method::Update => self.update(id),
                Method::Set(setting) => self.set(id, setting),
                Method::On(hook, callback) => self.with_instance(id, |i, _| i.on(hook, callback)),
                Method::Off(hook) => self.off(id, hook),
            }
        }
    }

    fn with_instance(&mut self, id: InstanceId, f: impl FnOnce(&mut Instance<H>, &mut Frame<'_, H>)) {
        let mut frame = Frame::new(&mut self.host, self.scheduler.viewport_height());
        if let Some(instance) = self.scheduler.get_mut(id) {
            f(instance, &mut frame);
        }
    }

    pub fn enable(&mut self, id: InstanceId) {
        self.with_instance(id, |i, frame| i.enable(frame));
    }

    pub fn disable(&mut self, id: InstanceId) {
        self.with_instance(id, |i, frame| i.disable(frame));
    }

    /// Re-evaluate an enabled instance without a scroll event
    pub fn update(&mut self, id: InstanceId) {
        self.with_instance(id, |i, frame| i.update(frame));
    }

    pub fn set(&mut self, id: InstanceId, setting: Setting<H::Node>) {
        self.with_instance(id, |i, _| i.set(setting));
    }

    pub fn on(&mut self, id: InstanceId, hook: Hook, callback: impl Fn(&HookEvent) + 'static) {
        let callback: Callback = std::rc::Rc::new(callback);
        self.with_instance(id, |i, _| i.on(hook, callback));
    }

    pub fn off(&mut self, id: InstanceId, hook: Hook) {
        self.with_instance(id, |i, _| i.off(hook));
    }

    /// Unbind: revert and unwrap, unregister (dropping the subscription if
    /// it was the last), then fire `destroy`
    pub fn destroy(&mut self, id: InstanceId) {
        if self.scheduler.get(id).is_none() {
            return;
        }
        self.with_instance(id, |i, frame| i.teardown(frame));
        if let Some(instance) = self.scheduler.unregister(&mut self.host, id) {
            instance.finish();
        }
    }

    /// Deliver a host signal. Ignored while nothing is subscribed.
    pub fn dispatch(&mut self, signal: Signal) {
        if !self.scheduler.is_listening() {
            return;
        }
        match signal {
            Signal::Scroll => self.scheduler.on_scroll(&mut self.host),
            Signal::Resize => self.scheduler.on_resize(&mut self.host),
        }
    }

    /// Deliver an interval timer expiry
    pub fn fire_timer(&mut self, timer: TimerId) -> bool {
        self.scheduler.on_timer(&mut self.host, timer)
    }
}
