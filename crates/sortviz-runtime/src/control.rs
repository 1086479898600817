#![forbid(unsafe_code)]

//! Cooperative playback control: cancel, pause and live speed changes.
//!
//! The [`ControlSignal`] trait is what playback polls at each step
//! boundary. [`PlaybackControl`] is the control-surface side and
//! [`ControlToken`] the cloneable playback side; both observe the same
//! shared state, so a worker thread can be steered from the caller.
//!
//! # Example
//!
//! ```
//! use sortviz_runtime::control::{ControlSignal, PlaybackControl};
//! use std::time::Duration;
//!
//! let control = PlaybackControl::new();
//! let token = control.token();
//!
//! let worker = std::thread::spawn(move || {
//!     while !token.wait_timeout(Duration::from_millis(10)) {}
//! });
//!
//! control.cancel();
//! worker.join().unwrap();
//! ```

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Condvar, Mutex};
use web_time::{Duration, Instant};

/// What playback polls between steps.
///
/// Implementations must be cheap to query; the controller calls
/// `is_cancelled` and `is_paused` once per step.
pub trait ControlSignal {
    /// Stop at the next step boundary.
    fn is_cancelled(&self) -> bool;

    /// Hold at the next step boundary until resumed or cancelled.
    fn is_paused(&self) -> bool;

    /// Replacement for the configured inter-step delay, if one was set
    /// after playback started.
    fn step_delay(&self) -> Option<Duration> {
        None
    }

    /// Suspend for up to `duration`. Returns `true` if cancelled.
    fn wait_timeout(&self, duration: Duration) -> bool {
        if self.is_cancelled() {
            return true;
        }
        std::thread::sleep(duration);
        self.is_cancelled()
    }
}

/// A signal that is never cancelled or paused.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unattended;

impl ControlSignal for Unattended {
    fn is_cancelled(&self) -> bool {
        false
    }

    fn is_paused(&self) -> bool {
        false
    }
}

/// Sentinel for "no delay override".
const NO_DELAY: u64 = u64::MAX;

struct ControlInner {
    cancelled: AtomicBool,
    paused: AtomicBool,
    delay_ms: AtomicU64,
    /// Wake epoch; bumped on every cancel or resume.
    notify: (Mutex<u64>, Condvar),
}

impl ControlInner {
    fn wake(&self) {
        let (lock, cvar) = &self.notify;
        let mut epoch = lock.lock().unwrap_or_else(|e| e.into_inner());
        *epoch = epoch.wrapping_add(1);
        cvar.notify_all();
    }
}

/// Control-surface handle for one playback.
///
/// Dropping it does **not** cancel playback; call [`cancel`](Self::cancel).
pub struct PlaybackControl {
    inner: Arc<ControlInner>,
}

impl PlaybackControl {
    /// Fresh control: not cancelled, not paused, no delay override.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ControlInner {
                cancelled: AtomicBool::new(false),
                paused: AtomicBool::new(false),
                delay_ms: AtomicU64::new(NO_DELAY),
                notify: (Mutex::new(0), Condvar::new()),
            }),
        }
    }

    /// A token observing this control.
    pub fn token(&self) -> ControlToken {
        ControlToken {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Request cancellation and wake any pending wait. Idempotent.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, AtomicOrdering::Release);
        self.inner.wake();
    }

    pub fn pause(&self) {
        self.inner.paused.store(true, AtomicOrdering::Release);
    }

    /// Clear the pause flag and wake a paused playback immediately.
    pub fn resume(&self) {
        self.inner.paused.store(false, AtomicOrdering::Release);
        self.inner.wake();
    }

    /// Flip pause state. Returns the new paused flag.
    pub fn toggle_pause(&self) -> bool {
        let was_paused = self.inner.paused.fetch_xor(true, AtomicOrdering::AcqRel);
        if was_paused {
            self.inner.wake();
        }
        !was_paused
    }

    /// Override the inter-step delay from the next step on.
    pub fn set_step_delay(&self, delay: Duration) {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(NO_DELAY - 1);
        self.inner.delay_ms.store(ms.min(NO_DELAY - 1), AtomicOrdering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(AtomicOrdering::Acquire)
    }

    pub fn is_paused(&self) -> bool {
        self.inner.paused.load(AtomicOrdering::Acquire)
    }
}

impl Default for PlaybackControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Playback-side view of a [`PlaybackControl`]. Cheap to clone.
#[derive(Clone)]
pub struct ControlToken {
    inner: Arc<ControlInner>,
}

impl ControlSignal for ControlToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(AtomicOrdering::Acquire)
    }

    #[inline]
    fn is_paused(&self) -> bool {
        self.inner.paused.load(AtomicOrdering::Acquire)
    }

    fn step_delay(&self) -> Option<Duration> {
        match self.inner.delay_ms.load(AtomicOrdering::Acquire) {
            NO_DELAY => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    /// Block until cancelled, resumed, or the timeout elapses.
    ///
    /// Returns `true` if cancelled. A resume ends the wait early with
    /// `false` so a paused playback continues without a poll delay.
    fn wait_timeout(&self, duration: Duration) -> bool {
        if self.is_cancelled() {
            return true;
        }
        let (lock, cvar) = &self.inner.notify;
        let mut guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        let epoch = *guard;
        let start = Instant::now();
        let mut remaining = duration;
        loop {
            if self.is_cancelled() {
                return true;
            }
            if *guard != epoch {
                return false;
            }
            let (new_guard, result) = cvar
                .wait_timeout(guard, remaining)
                .unwrap_or_else(|e| e.into_inner());
            guard = new_guard;
            if self.is_cancelled() {
                return true;
            }
            if *guard != epoch || result.timed_out() {
                return false;
            }
            let elapsed = start.elapsed();
            if elapsed >= duration {
                return false;
            }
            remaining = duration - elapsed;
        }
    }
}
