//! Scheduler - shared scroll/resize subscription and fan-out
//!
//! However many instances exist, the host sees one scroll listener and one
//! resize listener. The subscription is taken with the first registration
//! and dropped with the last unregistration.

use std::collections::HashMap;

use crate::behavior::Frame;
use crate::host::{Host, Signal, TimerId};
use crate::instance::{Instance, InstanceId};

/// Registry of live instances, in registration order
pub struct Scheduler<H: Host> {
    instances: Vec<Instance<H>>,
    bound: HashMap<H::Node, InstanceId>,
    listening: bool,
    viewport_height: f64,
}

impl<H: Host> Scheduler<H> {
    /// Create an empty scheduler with an initial viewport height
    pub fn new(viewport_height: f64) -> Self {
        Self {
            instances: Vec::new(),
            bound: HashMap::new(),
            listening: false,
            viewport_height,
        }
    }

    /// Viewport height as of the last resize
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Whether the host subscription is active
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Instance bound to an element
    pub fn id_for(&self, element: H::Node) -> Option<InstanceId> {
        self.bound.get(&element).copied()
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance<H>> {
        self.instances.iter().find(|i| i.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: InstanceId) -> Option<&mut Instance<H>> {
        self.instances.iter_mut().find(|i| i.id() == id)
    }

    /// Live instances in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Instance<H>> {
        self.instances.iter()
    }

    /// Add an instance; subscribes on the first one
    pub fn register(&mut self, host: &mut H, instance: Instance<H>) {
        self.bound.insert(instance.element(), instance.id());
        self.instances.push(instance);
        self.start(host);
    }

    /// Remove an instance by id; unsubscribes when none remain
    pub fn unregister(&mut self, host: &mut H, id: InstanceId) -> Option<Instance<H>> {
        let pos = self.instances.iter().position(|i| i.id() == id)?;
        let instance = self.instances.remove(pos);
        self.bound.remove(&instance.element());
        if self.instances.is_empty() {
            self.stop(host);
        }
        Some(instance)
    }

    fn start(&mut self, host: &mut H) {
        if self.listening {
            return;
        }
        host.listen(Signal::Scroll);
        host.listen(Signal::Resize);
        self.listening = true;
        tracing::debug!("scheduler started");
    }

    fn stop(&mut self, host: &mut H) {
        host.unlisten(Signal::Scroll);
        host.unlisten(Signal::Resize);
        self.listening = false;
        tracing::debug!("scheduler stopped");
    }

    /// Run every enabled instance's scroll evaluation, then its scroll hook
    pub fn on_scroll(&mut self, host: &mut H) {
        let mut frame = Frame::new(host, self.viewport_height);
        for instance in self.instances.iter_mut().filter(|i| i.is_enabled()) {
            instance.on_scroll(&mut frame);
        }
    }

    /// Refresh the viewport height once, then resize and re-evaluate every
    /// enabled instance
    pub fn on_resize(&mut self, host: &mut H) {
        self.viewport_height = host.viewport_height().max(0.0);
        tracing::trace!(viewport_height = self.viewport_height, "resize");

        let mut frame = Frame::new(host, self.viewport_height);
        for instance in self.instances.iter_mut().filter(|i| i.is_enabled()) {
            instance.on_resize(&mut frame);
        }
    }

    /// Deliver a timer expiry to the instance that owns it
    pub fn on_timer(&mut self, host: &mut H, timer: TimerId) -> bool {
        let mut frame = Frame::new(host, self.viewport_height);
        self.instances
            .iter_mut()
            .any(|instance| instance.on_timer(&mut frame, timer))
    }
}
