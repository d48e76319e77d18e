//! Notice timer seam
//!
//! Hiding the signup notice is the only timed behaviour. A scheduled hide
//! is never cancelled: a later notice replaces the text, but an earlier
//! pending hide still fires and hides whatever is showing.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Deferred work after a fixed delay
pub trait NoticeTimer: Clone + 'static {
    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>);
}

struct Pending {
    after: Duration,
    task: Box<dyn FnOnce()>,
}

/// Timer that queues tasks until the owner runs them.
///
/// Used where no event loop drives time, such as native callers that
/// flush notices themselves, and tests. Nothing runs on its own: the owner
/// must drain the queue with [`QueuedTimer::run_next`] or
/// [`QueuedTimer::run_all`], otherwise every signup leaves a task (and a
/// handle to the view store) behind.
#[derive(Clone, Default)]
pub struct QueuedTimer {
    queue: Rc<RefCell<VecDeque<Pending>>>,
}

impl QueuedTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Delays of the waiting tasks, oldest first
    pub fn delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|p| p.after).collect()
    }

    /// Run the oldest waiting task. Returns false when none is waiting.
    pub fn run_next(&self) -> bool {
        // Pop before running so the task may schedule more work
        let next = self.queue.borrow_mut().pop_front();

        match next {
            Some(pending) => {
                (pending.task)();
                true
            }
            None => false,
        }
    }

    /// Run every waiting task in scheduling order
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl NoticeTimer for QueuedTimer {
    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(Pending { after, task });
    }
}

impl std::fmt::Debug for QueuedTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueuedTimer")
            .field("pending", &self.pending())
            .finish()
    }
}
