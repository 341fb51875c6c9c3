//! Dispatching refresh cycles.
//!
//! The scheduler fires the job once at startup, once per timer tick and once
//! per manual trigger. It never waits for a dispatched job: each one runs on its
//! own thread, so a hung request never delays the next tick and overlapping
//! jobs are allowed.
//!
//! Crossbeam `select!` multiplexes the three inputs. The loop ends when the
//! shutdown channel fires or disconnects, or when the timer disconnects. A
//! disconnected manual channel (e.g. stdin closed) only stops manual triggers.
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{never, select, tick, Receiver};
use log::{debug, info};

/// Why a refresh cycle was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The initial cycle fired before waiting on any input.
    Startup,
    /// A timer tick delivered at the given instant.
    Timer(Instant),
    /// A user-requested refresh.
    Manual,
}

/// Job run for every dispatched cycle.
pub type RefreshJob = Arc<dyn Fn(Trigger) + Send + Sync>;

/// Timer and trigger multiplexer for refresh cycles.
pub struct RefreshScheduler {
    ticks: Receiver<Instant>,
    manual: Receiver<()>,
    shutdown: Receiver<()>,
}

impl RefreshScheduler {
    /// Scheduler driven by an unbounded repeating timer with period `interval`.
    pub fn with_interval(interval: Duration, manual: Receiver<()>, shutdown: Receiver<()>) -> Self {
        Self::new(tick(interval), manual, shutdown)
    }

    /// Scheduler driven by an arbitrary tick source.
    pub fn new(ticks: Receiver<Instant>, manual: Receiver<()>, shutdown: Receiver<()>) -> Self {
        Self {
            ticks,
            manual,
            shutdown,
        }
    }

    /// Blocking loop dispatching `job` until shutdown. Returns the number of
    /// dispatched cycles.
    pub fn run(self, job: RefreshJob) -> u64 {
        let mut dispatched = 0u64;
        let mut manual = self.manual;
        let mut manual_closed = false;

        let mut dispatch = |trigger: Trigger| {
            dispatched += 1;
            debug!("Dispatching refresh #{} ({:?})", dispatched, trigger);
            let job = Arc::clone(&job);
            thread::spawn(move || job(trigger));
        };

        dispatch(Trigger::Startup);

        loop {
            if manual_closed {
                manual = never();
                manual_closed = false;
            }
            select! {
                recv(self.shutdown) -> _ => {
                    info!("Scheduler received shutdown");
                    break;
                },
                recv(self.ticks) -> msg => match msg {
                    Ok(at) => dispatch(Trigger::Timer(at)),
                    Err(_) => {
                        info!("Timer stopped; scheduler exiting");
                        break;
                    }
                },
                recv(manual) -> msg => match msg {
                    Ok(()) => dispatch(Trigger::Manual),
                    Err(_) => {
                        debug!("Manual trigger channel closed");
                        manual_closed = true;
                    }
                },
            }
        }

        dispatched
    }
}
