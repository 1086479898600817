#![forbid(unsafe_code)]

//! Trace playback.
//!
//! Applies a [`Trace`] to a live [`Sequence`] one step at a time, notifying
//! a [`Renderer`] after each step and waiting between steps.
//!
//! # Invariants
//!
//! 1. Steps are applied strictly in trace order, each one whole.
//! 2. On cancellation the live sequence equals the input with exactly
//!    `steps_applied` steps replayed. Nothing is rolled back.
//! 3. Pausing never consumes a step.
//! 4. Finalization is only signalled after the last step of a completed
//!    playback, and only when [`PlaybackOptions::finalize`] is set.
//!
//! # Failure modes
//!
//! A trace that addresses positions outside the live sequence is a
//! programming error and panics before any step is applied.

use rand::Rng;
use sortviz_core::{Sequence, Trace, TraceKind, shuffle_trace};
use web_time::{Duration, Instant};

use crate::control::ControlSignal;
use crate::renderer::Renderer;

/// Fixed cadence for shuffle playback.
pub const SHUFFLE_STEP: Duration = Duration::from_millis(10);

/// Interval at which a paused playback re-checks its signal.
pub const PAUSE_POLL: Duration = Duration::from_millis(100);

/// How playback ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Cancelled,
}

/// Summary of one playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackReport {
    pub outcome: PlaybackOutcome,
    pub steps_applied: usize,
    pub total_steps: usize,
}

impl PlaybackReport {
    pub fn is_completed(&self) -> bool {
        self.outcome == PlaybackOutcome::Completed
    }

    pub fn is_cancelled(&self) -> bool {
        self.outcome == PlaybackOutcome::Cancelled
    }
}

/// Playback tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackOptions {
    /// Delay after each step unless the signal overrides it.
    pub step_delay: Duration,
    /// Re-check interval while paused.
    pub pause_poll: Duration,
    /// Honor the signal's pause flag.
    pub pausable: bool,
    /// Call [`Renderer::mark_finalized`] after a completed playback.
    pub finalize: bool,
}

impl PlaybackOptions {
    /// Options for a sort: pausable, finalized on completion.
    pub fn sort(step_delay: Duration) -> Self {
        Self {
            step_delay,
            pause_poll: PAUSE_POLL,
            pausable: true,
            finalize: true,
        }
    }

    /// Options for a shuffle: fixed cadence, never paused or finalized.
    pub fn shuffle(step_delay: Duration) -> Self {
        Self {
            step_delay,
            pause_poll: PAUSE_POLL,
            pausable: false,
            finalize: false,
        }
    }

    /// Options matching what produced `trace`.
    pub fn for_trace(trace: &Trace, step_delay: Duration) -> Self {
        match trace.kind() {
            TraceKind::Sort { .. } => Self::sort(step_delay),
            TraceKind::Shuffle => Self::shuffle(step_delay),
        }
    }

    #[must_use]
    pub fn with_pause_poll(mut self, pause_poll: Duration) -> Self {
        self.pause_poll = pause_poll;
        self
    }
}

/// Replay `trace` against `live` with the default options for its kind.
pub fn play<R, S>(
    trace: &Trace,
    live: &mut Sequence,
    renderer: &mut R,
    step_delay: Duration,
    signal: &S,
) -> PlaybackReport
where
    R: Renderer + ?Sized,
    S: ControlSignal + ?Sized,
{
    play_with(
        trace,
        live,
        renderer,
        signal,
        &PlaybackOptions::for_trace(trace, step_delay),
    )
}

/// Shuffle `live` in place through the renderer at the fixed shuffle cadence.
pub fn shuffle<R, S, G>(
    live: &mut Sequence,
    renderer: &mut R,
    rng: &mut G,
    signal: &S,
) -> PlaybackReport
where
    R: Renderer + ?Sized,
    S: ControlSignal + ?Sized,
    G: Rng + ?Sized,
{
    let trace = shuffle_trace(live.len(), rng);
    play_with(
        &trace,
        live,
        renderer,
        signal,
        &PlaybackOptions::shuffle(SHUFFLE_STEP),
    )
}

/// Replay `trace` against `live` with explicit options.
///
/// # Panics
///
/// Panics if any step addresses a position outside `live`.
pub fn play_with<R, S>(
    trace: &Trace,
    live: &mut Sequence,
    renderer: &mut R,
    signal: &S,
    options: &PlaybackOptions,
) -> PlaybackReport
where
    R: Renderer + ?Sized,
    S: ControlSignal + ?Sized,
{
    if let Some(bad) = trace.iter().find(|s| s.max_index() >= live.len()) {
        panic!(
            "trace step {bad:?} out of range for live sequence of length {}",
            live.len()
        );
    }

    let total_steps = trace.len();
    let started = Instant::now();
    tracing::info!(
        target: "sortviz.playback",
        playback_event = "start",
        kind = ?trace.kind(),
        steps = total_steps,
        len = live.len(),
        step_delay_ms = options.step_delay.as_millis() as u64,
    );

    let stop = |renderer: &mut R, outcome: PlaybackOutcome, steps_applied: usize| {
        let reason = match outcome {
            PlaybackOutcome::Completed => "completed",
            PlaybackOutcome::Cancelled => "cancelled",
        };
        tracing::info!(
            target: "sortviz.playback",
            playback_event = "stop",
            reason,
            steps_applied,
            total_steps,
            elapsed_ms = started.elapsed().as_millis() as u64,
        );
        if outcome == PlaybackOutcome::Cancelled {
            renderer.clear_highlights();
        }
        PlaybackReport {
            outcome,
            steps_applied,
            total_steps,
        }
    };

    for (index, step) in trace.iter().enumerate() {
        if signal.is_cancelled() {
            return stop(renderer, PlaybackOutcome::Cancelled, index);
        }
        if options.pausable && signal.is_paused() {
            tracing::debug!(target: "sortviz.playback", at_step = index, "paused");
            while signal.is_paused() {
                if signal.wait_timeout(options.pause_poll) {
                    return stop(renderer, PlaybackOutcome::Cancelled, index);
                }
            }
            tracing::debug!(target: "sortviz.playback", at_step = index, "resumed");
        }

        live.apply(step);
        renderer.apply_step(step, live.values());
        tracing::trace!(target: "sortviz.playback", index, step = ?step, "step applied");

        let delay = signal.step_delay().unwrap_or(options.step_delay);
        if !delay.is_zero() && signal.wait_timeout(delay) {
            return stop(renderer, PlaybackOutcome::Cancelled, index + 1);
        }
    }

    renderer.clear_highlights();
    if options.finalize {
        renderer.mark_finalized(live.values());
    }
    stop(renderer, PlaybackOutcome::Completed, total_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Unattended;
    use crate::renderer::{RecordingRenderer, RenderEvent};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use sortviz_core::{Algorithm, Ordering, Step, generate};
    use std::cell::{Cell, RefCell};

    /// Scripted signal: cancels after `cancel_after` waits, stays paused for
    /// `paused_polls` pause polls, and records every wait instead of sleeping.
    #[derive(Default)]
    struct ScriptedSignal {
        cancel_after: Option<usize>,
        paused_polls: Cell<usize>,
        waits: RefCell<Vec<Duration>>,
        delay_override: Option<Duration>,
    }

    impl ControlSignal for ScriptedSignal {
        fn is_cancelled(&self) -> bool {
            self.cancel_after
                .is_some_and(|n| self.waits.borrow().len() >= n)
        }

        fn is_paused(&self) -> bool {
            self.paused_polls.get() > 0
        }

        fn step_delay(&self) -> Option<Duration> {
            self.delay_override
        }

        fn wait_timeout(&self, duration: Duration) -> bool {
            self.waits.borrow_mut().push(duration);
            if self.paused_polls.get() > 0 {
                self.paused_polls.set(self.paused_polls.get() - 1);
            }
            self.is_cancelled()
        }
    }

    fn seq(values: &[f64]) -> Sequence {
        Sequence::new(values.to_vec()).unwrap()
    }

    #[test]
    fn completed_playback_sorts_and_finalizes() {
        let mut live = seq(&[5.0, 3.0, 8.0, 1.0]);
        let trace = generate(Algorithm::Bubble, &live, Ordering::Ascending);
        let mut renderer = RecordingRenderer::new();
        let signal = ScriptedSignal::default();

        let report = play(&trace, &mut live, &mut renderer, Duration::from_millis(50), &signal);

        assert!(report.is_completed());
        assert_eq!(report.steps_applied, trace.len());
        assert_eq!(live.values(), &[1.0, 3.0, 5.0, 8.0]);
        assert_eq!(renderer.steps(), trace.steps());
        assert!(renderer.is_finalized());
        assert_eq!(signal.waits.borrow().len(), trace.len());
        assert!(signal.waits.borrow().iter().all(|d| *d == Duration::from_millis(50)));
    }

    #[test]
    fn renderer_sees_post_step_state() {
        let mut live = seq(&[2.0, 1.0]);
        let trace = generate(Algorithm::Bubble, &live, Ordering::Ascending);
        let mut renderer = RecordingRenderer::new();
        play(&trace, &mut live, &mut renderer, Duration::ZERO, &Unattended);
        assert_eq!(
            renderer.events()[1],
            RenderEvent::Step(Step::Swap(0, 1), vec![1.0, 2.0])
        );
    }

    #[test]
    fn cancellation_leaves_exact_prefix() {
        let input = [9.0, 7.0, 5.0, 3.0, 1.0];
        let trace = generate(Algorithm::Insertion, &seq(&input), Ordering::Ascending);
        for cancel_after in 1..trace.len() {
            let mut live = seq(&input);
            let mut renderer = RecordingRenderer::new();
            let signal = ScriptedSignal {
                cancel_after: Some(cancel_after),
                ..ScriptedSignal::default()
            };
            let report = play(&trace, &mut live, &mut renderer, Duration::from_millis(1), &signal);
            assert!(report.is_cancelled());
            assert_eq!(report.steps_applied, cancel_after);
            assert_eq!(live.values(), trace.replay_prefix(&input, cancel_after).as_slice());
            assert!(!renderer.is_finalized());
            assert_eq!(renderer.events().last(), Some(&RenderEvent::ClearHighlights));
        }
    }

    #[test]
    fn cancelled_before_start_applies_nothing() {
        let mut live = seq(&[3.0, 2.0, 1.0]);
        let trace = generate(Algorithm::Quick, &live, Ordering::Ascending);
        let signal = ScriptedSignal {
            cancel_after: Some(0),
            ..ScriptedSignal::default()
        };
        let report = play(&trace, &mut live, &mut RecordingRenderer::new(), Duration::ZERO, &signal);
        assert_eq!(report.steps_applied, 0);
        assert_eq!(live.values(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn pause_holds_without_consuming_steps() {
        let mut live = seq(&[2.0, 1.0]);
        let trace = generate(Algorithm::Bubble, &live, Ordering::Ascending);
        let signal = ScriptedSignal {
            paused_polls: Cell::new(3),
            ..ScriptedSignal::default()
        };
        let report = play_with(
            &trace,
            &mut live,
            &mut RecordingRenderer::new(),
            &signal,
            &PlaybackOptions::sort(Duration::from_millis(50)).with_pause_poll(Duration::from_millis(7)),
        );
        assert!(report.is_completed());
        let waits = signal.waits.borrow();
        assert_eq!(&waits[..3], &[Duration::from_millis(7); 3]);
        assert_eq!(waits.len(), 3 + trace.len());
    }

    #[test]
    fn shuffle_options_ignore_pause() {
        let mut live = seq(&[1.0, 2.0, 3.0, 4.0]);
        let trace = Trace::new(TraceKind::Shuffle, vec![Step::Swap(3, 0)]);
        let signal = ScriptedSignal {
            paused_polls: Cell::new(usize::MAX),
            ..ScriptedSignal::default()
        };
        let mut renderer = RecordingRenderer::new();
        let report = play(&trace, &mut live, &mut renderer, SHUFFLE_STEP, &signal);
        assert!(report.is_completed());
        assert_eq!(live.values(), &[4.0, 2.0, 3.0, 1.0]);
        assert!(!renderer.is_finalized());
    }

    #[test]
    fn signal_delay_override_wins() {
        let mut live = seq(&[2.0, 1.0]);
        let trace = generate(Algorithm::Selection, &live, Ordering::Ascending);
        let signal = ScriptedSignal {
            delay_override: Some(Duration::from_millis(300)),
            ..ScriptedSignal::default()
        };
        play(&trace, &mut live, &mut RecordingRenderer::new(), Duration::from_millis(5), &signal);
        assert!(signal.waits.borrow().iter().all(|d| *d == Duration::from_millis(300)));
    }

    #[test]
    fn empty_trace_still_finalizes() {
        let mut live = seq(&[4.0]);
        let trace = generate(Algorithm::Merge, &live, Ordering::Ascending);
        let mut renderer = RecordingRenderer::new();
        let report = play(&trace, &mut live, &mut renderer, Duration::ZERO, &Unattended);
        assert_eq!(report.total_steps, 0);
        assert!(renderer.is_finalized());
    }

    #[test]
    fn shuffle_permutes_live_sequence() {
        let mut live = seq(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = SmallRng::seed_from_u64(11);
        let signal = ScriptedSignal::default();
        let report = shuffle(&mut live, &mut RecordingRenderer::new(), &mut rng, &signal);
        assert!(report.is_completed());
        let mut values = live.into_vec();
        values.sort_by(f64::total_cmp);
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(signal.waits.borrow().iter().all(|d| *d == SHUFFLE_STEP));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn malformed_trace_panics_before_applying() {
        let mut live = seq(&[1.0, 2.0]);
        let trace = Trace::new(TraceKind::Shuffle, vec![Step::Swap(0, 7)]);
        play(&trace, &mut live, &mut RecordingRenderer::new(), Duration::ZERO, &Unattended);
    }
}
