//! Window - viewport state, event listeners and interval timers
//!
//! Nothing here fires on its own. The embedder moves the viewport
//! (`scroll_to`, `resize_to`) and advances the clock, then delivers the
//! resulting events to whoever is listening.

use std::time::Duration;

/// Window-level events a listener can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowEvent {
    Scroll,
    Resize,
}

/// Handle returned by `set_interval`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

#[derive(Debug, Clone)]
struct Interval {
    handle: TimerHandle,
    period: Duration,
    elapsed: Duration,
}

/// Browser window state
#[derive(Debug, Clone)]
pub struct Window {
    scroll_top: f64,
    inner_width: f64,
    inner_height: f64,
    listeners: Vec<WindowEvent>,
    intervals: Vec<Interval>,
    next_timer: u64,
}

impl Window {
    /// Create a window with the given viewport size
    pub fn new(inner_width: f64, inner_height: f64) -> Self {
        Self {
            scroll_top: 0.0,
            inner_width,
            inner_height,
            listeners: Vec::new(),
            intervals: Vec::new(),
            next_timer: 1,
        }
    }

    /// Vertical scroll offset
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    pub fn inner_height(&self) -> f64 {
        self.inner_height
    }

    /// Move the viewport. Negative offsets clamp to the document origin.
    pub fn scroll_to(&mut self, y: f64) {
        self.scroll_top = y.max(0.0);
    }

    /// Change the viewport size
    pub fn resize_to(&mut self, width: f64, height: f64) {
        self.inner_width = width.max(0.0);
        self.inner_height = height.max(0.0);
    }

    /// Subscribe to an event. Subscribing twice is a no-op.
    pub fn add_listener(&mut self, event: WindowEvent) {
        if !self.listeners.contains(&event) {
            tracing::trace!(?event, "window listener added");
            self.listeners.push(event);
        }
    }

    pub fn remove_listener(&mut self, event: WindowEvent) {
        self.listeners.retain(|e| *e != event);
    }

    pub fn has_listener(&self, event: WindowEvent) -> bool {
        self.listeners.contains(&event)
    }

    /// Start a repeating timer
    pub fn set_interval(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_timer);
        self.next_timer += 1;
        self.intervals.push(Interval {
            handle,
            period,
            elapsed: Duration::ZERO,
        });
        handle
    }

    /// Stop a timer. Unknown handles are ignored.
    pub fn clear_interval(&mut self, handle: TimerHandle) {
        self.intervals.retain(|i| i.handle != handle);
    }

    /// Number of live timers
    pub fn active_intervals(&self) -> usize {
        self.intervals.len()
    }

    /// Advance the clock and collect every timer expiry, in order of
    /// timer creation. A timer may expire several times in one step.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerHandle> {
        let mut fired = Vec::new();
        for interval in &mut self.intervals {
            if interval.period.is_zero() {
                continue;
            }
            interval.elapsed += dt;
            while interval.elapsed >= interval.period {
                interval.elapsed -= interval.period;
                fired.push(interval.handle);
            }
        }
        fired
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(1024.0, 768.0)
    }
}
