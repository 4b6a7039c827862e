//! Browser interval ticker.
//!
//! Wraps `gloo_timers::callback::Interval`; dropping the interval clears
//! the underlying `setInterval`, so `stop()` is just a drop. A callback that
//! asks to stop clears the interval right away, but its closure is freed on
//! a later task since it is still executing at that point.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use mindplus_core::ports::TickerPort;

#[derive(Default)]
pub struct IntervalTicker {
    interval: Rc<RefCell<Option<Interval>>>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickerPort for IntervalTicker {
    fn start(&mut self, period_ms: u32, mut on_tick: Box<dyn FnMut() -> bool>) {
        // never two intervals for one ticker
        self.stop();
        let slot = Rc::downgrade(&self.interval);
        let interval = Interval::new(period_ms, move || {
            if !on_tick() {
                release(&slot);
            }
        });
        *self.interval.borrow_mut() = Some(interval);
    }

    fn stop(&mut self) {
        self.interval.borrow_mut().take();
    }

    fn is_active(&self) -> bool {
        self.interval.borrow().is_some()
    }
}

fn release(slot: &Weak<RefCell<Option<Interval>>>) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let interval = slot.borrow_mut().take();
    if let Some(interval) = interval {
        let callback = interval.cancel();
        wasm_bindgen_futures::spawn_local(async move {
            drop(callback);
        });
    }
}
