#[cfg(test)]
#[path = "../../tests/unit/evolution/control_test.rs"]
mod control_test;

use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Specifies a state of the evolution run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The run is not started yet.
    Init,
    /// Generations are being processed.
    Running,
    /// The run is suspended between generations.
    Paused,
    /// The run is finished.
    Terminated,
}

struct ControlState {
    state: RunState,
    is_cancelled: bool,
    is_started: bool,
}

/// A cloneable handle to pause, resume or cancel the evolution run from any thread.
///
/// The controller checks the handle only between generations, so an in-flight evaluation
/// is never interrupted. A pause or cancel requested before the run starts is kept and takes
/// effect after the initial generation. Cancellation is consumed when the run terminates, so
/// the same handle can drive the next run.
#[derive(Clone)]
pub struct RunControl {
    inner: Arc<(Mutex<ControlState>, Condvar)>,
}

impl RunControl {
    /// Creates a new instance of `RunControl`.
    pub fn new() -> Self {
        Self { inner: Arc::new((Mutex::new(ControlState {
                state: RunState::Init,
                is_cancelled: false,
                is_started: false,
            }), Condvar::new())) }
    }

    /// Returns current state.
    pub fn state(&self) -> RunState {
        self.lock().state
    }

    /// Returns true if cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.lock().is_cancelled
    }

    /// Requests a pause of a running or not yet started evolution.
    pub fn pause(&self) {
        let mut guard = self.lock();
        if matches!(guard.state, RunState::Init | RunState::Running) {
            guard.state = RunState::Paused;
        }
    }

    /// Resumes a paused evolution or drops a pending pause.
    pub fn resume(&self) {
        let mut guard = self.lock();
        if guard.state == RunState::Paused {
            guard.state = if guard.is_started { RunState::Running } else { RunState::Init };
            self.inner.1.notify_all();
        }
    }

    /// Requests cancellation, which also wakes up a paused evolution.
    pub fn cancel(&self) {
        let mut guard = self.lock();
        guard.is_cancelled = true;
        self.inner.1.notify_all();
    }

    /// Blocks while paused. Returns how long the caller was blocked.
    pub(crate) fn wait_if_paused(&self) -> Duration {
        let started = Instant::now();
        let mut guard = self.lock();
        let mut was_paused = false;

        while guard.state == RunState::Paused && !guard.is_cancelled {
            was_paused = true;
            guard = self.inner.1.wait(guard).unwrap_or_else(|poisoned| poisoned.into_inner());
        }

        if was_paused { started.elapsed() } else { Duration::ZERO }
    }

    /// Marks the run as started keeping a pending pause.
    pub(crate) fn start(&self) {
        let mut guard = self.lock();
        guard.is_started = true;
        if guard.state != RunState::Paused {
            guard.state = RunState::Running;
        }
    }

    /// Marks the run as terminated and consumes cancellation.
    pub(crate) fn finish(&self) {
        let mut guard = self.lock();
        guard.state = RunState::Terminated;
        guard.is_started = false;
        guard.is_cancelled = false;
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        self.inner.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}
