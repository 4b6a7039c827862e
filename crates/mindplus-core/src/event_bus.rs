//! Event bus between the core state machines and whatever view renders them.
//!
//! Single-threaded (WASM event loop): events are queued through a shared
//! `RefCell` and drained by the view once per frame. Emitting never blocks
//! and never calls back into the view.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use mindplus_types::event::MindEvent;

/// Shared event queue, cheap to clone.
#[derive(Clone)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<MindEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn emit(&self, event: MindEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event in emission order.
    pub fn drain(&self) -> Vec<MindEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
