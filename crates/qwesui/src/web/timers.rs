//! [`Scheduler`] over `setTimeout` / `setInterval`.
//!
//! One-shot timeouts are forgotten once armed; intervals live as long as the scheduler.
//! Every delivery goes through the sink, which holds only a weak reference to the
//! instance, so timers outliving an installation fire into nothing.

use std::fmt;
use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};

use crate::host::{Scheduler, TimerId, TimerTask};

/// Receiver for fired timer tasks.
pub type TimerSink = Rc<dyn Fn(TimerTask)>;

/// Browser timers delivering [`TimerTask`]s to a sink.
pub struct BrowserScheduler {
    sink: TimerSink,
    intervals: Vec<Interval>,
    next: u64,
}

impl BrowserScheduler {
    /// Scheduler delivering into `sink`.
    #[must_use]
    pub const fn new(sink: TimerSink) -> Self {
        Self {
            sink,
            intervals: Vec::new(),
            next: 1,
        }
    }

    fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next);
        self.next += 1;
        id
    }
}

impl fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserScheduler")
            .field("intervals", &self.intervals.len())
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule_once(&mut self, delay_ms: u32, task: TimerTask) -> TimerId {
        let sink = Rc::clone(&self.sink);
        let _ = Timeout::new(delay_ms, move || sink(task)).forget();
        self.next_id()
    }

    fn schedule_repeating(&mut self, period_ms: u32, task: TimerTask) -> TimerId {
        let sink = Rc::clone(&self.sink);
        self.intervals
            .push(Interval::new(period_ms, move || sink(task)));
        self.next_id()
    }
}
