use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Trailing-edge debounce.
///
/// Every [`Debouncer::call`] replaces the pending timer, so only the last call
/// in a burst runs, `wait_ms` after the burst ends. Clones share the timer.
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::new(self.wait_ms, f);
        // Dropping the previous Timeout clears it
        let previous = self.pending.borrow_mut().replace(timeout);
        drop(previous);
    }

    pub fn cancel(&self) {
        if let Some(timeout) = self.pending.borrow_mut().take() {
            timeout.cancel();
        }
    }
}
