#![forbid(unsafe_code)]

//! Session: the control surface's single point of coordination.
//!
//! A [`Session`] owns the live sequence and its renderer. While idle they
//! sit in the session; an operation (shuffle or sort) lends them to one
//! worker thread and gets them back when the worker is joined. At most one
//! operation is active at a time.
//!
//! # Conflict resolution
//!
//! Starting any operation first cancels the active one and joins its
//! worker. The join is the acknowledgment: once it returns, the previous
//! playback has stopped at a step boundary and handed the sequence back.
//! Requests are never queued.
//!
//! # Example
//!
//! ```no_run
//! use sortviz_runtime::{BarChartRenderer, Session, VisualizerConfig};
//!
//! let mut session = Session::new(VisualizerConfig::default(), BarChartRenderer::new())?;
//! session.shuffle()?;
//! session.wait();
//! session.start_sort()?;
//! let report = session.wait();
//! # Ok::<(), sortviz_runtime::SessionError>(())
//! ```

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use sortviz_core::{Algorithm, Ordering, Sequence, Trace, generate, shuffle_trace};
use web_time::Duration;

use crate::config::{ConfigError, VisualizerConfig};
use crate::control::PlaybackControl;
use crate::error::SessionError;
use crate::player::{PlaybackOptions, PlaybackReport, play_with};
use crate::renderer::Renderer;

/// What the session is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Idle,
    Shuffling,
    Sorting,
    /// A sort is active but held.
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JobKind {
    Shuffle,
    Sort,
}

impl JobKind {
    fn thread_name(self) -> &'static str {
        match self {
            Self::Shuffle => "sortviz-shuffle",
            Self::Sort => "sortviz-sort",
        }
    }
}

/// Live sequence plus the renderer drawing it. Owned by exactly one side.
struct Stage<R> {
    live: Sequence,
    renderer: R,
}

type JobResult<R> = Option<(Stage<R>, PlaybackReport)>;

struct ActiveJob<R> {
    kind: JobKind,
    control: PlaybackControl,
    handle: JoinHandle<JobResult<R>>,
}

/// Coordinates shuffles and sorts over one live sequence.
pub struct Session<R: Renderer + Send + 'static> {
    config: VisualizerConfig,
    rng: SmallRng,
    stage: Option<Stage<R>>,
    active: Option<ActiveJob<R>>,
    last_report: Option<PlaybackReport>,
}

impl<R: Renderer + Send + 'static> Session<R> {
    /// Validate `config`, generate a random sequence and draw it.
    pub fn new(config: VisualizerConfig, renderer: R) -> Result<Self, SessionError> {
        Self::with_rng(config, renderer, SmallRng::from_os_rng())
    }

    /// Like [`new`](Self::new) with a reproducible random source.
    pub fn with_seed(
        config: VisualizerConfig,
        renderer: R,
        seed: u64,
    ) -> Result<Self, SessionError> {
        Self::with_rng(config, renderer, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(
        config: VisualizerConfig,
        mut renderer: R,
        mut rng: SmallRng,
    ) -> Result<Self, SessionError> {
        let errors = config.validate();
        if !errors.is_empty() {
            tracing::warn!(target: "sortviz.session", ?errors, "config rejected");
            return Err(ConfigError::Invalid(errors).into());
        }
        let live = Sequence::random(config.size, config.value_range(), &mut rng)?;
        renderer.render_initial(live.values());
        tracing::debug!(
            target: "sortviz.session",
            size = config.size,
            algorithm = %config.algorithm,
            ordering = %config.ordering,
            "session created"
        );
        Ok(Self {
            config,
            rng,
            stage: Some(Stage { live, renderer }),
            active: None,
            last_report: None,
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn algorithm(&self) -> Algorithm {
        self.config.algorithm
    }

    pub fn ordering(&self) -> Ordering {
        self.config.ordering
    }

    /// The live sequence, or `None` while an operation has it.
    pub fn sequence(&self) -> Option<&Sequence> {
        self.stage.as_ref().map(|s| &s.live)
    }

    /// The renderer, or `None` while an operation has it.
    pub fn renderer(&self) -> Option<&R> {
        self.stage.as_ref().map(|s| &s.renderer)
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.stage.as_mut().map(|s| &mut s.renderer)
    }

    /// Report of the most recently finished operation.
    pub fn last_report(&self) -> Option<PlaybackReport> {
        self.last_report
    }

    /// Current activity. Reaps a finished operation first.
    pub fn status(&mut self) -> Activity {
        self.poll();
        match &self.active {
            None => Activity::Idle,
            Some(job) => match job.kind {
                JobKind::Shuffle => Activity::Shuffling,
                JobKind::Sort if job.control.is_paused() => Activity::Paused,
                JobKind::Sort => Activity::Sorting,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Cancel whatever is active, then shuffle the live sequence.
    pub fn shuffle(&mut self) -> Result<(), SessionError> {
        self.cancel();
        let len = self.idle_stage()?.live.len();
        let trace = shuffle_trace(len, &mut self.rng);
        let options = PlaybackOptions::shuffle(self.config.shuffle_step())
            .with_pause_poll(self.config.pause_poll());
        self.launch(JobKind::Shuffle, trace, options)
    }

    /// Cancel whatever is active, then sort with the configured algorithm
    /// and ordering.
    pub fn start_sort(&mut self) -> Result<(), SessionError> {
        self.cancel();
        let (algorithm, ordering) = (self.config.algorithm, self.config.ordering);
        let trace = generate(algorithm, &self.idle_stage()?.live, ordering);
        let options = PlaybackOptions::sort(self.config.step_delay())
            .with_pause_poll(self.config.pause_poll());
        self.launch(JobKind::Sort, trace, options)
    }

    /// Hold an active sort. Returns `false` if no sort is active.
    pub fn pause(&mut self) -> bool {
        self.with_sort_control(PlaybackControl::pause)
    }

    /// Release a held sort. Returns `false` if no sort is active.
    pub fn resume(&mut self) -> bool {
        self.with_sort_control(PlaybackControl::resume)
    }

    /// Flip pause state of an active sort; `None` if no sort is active.
    pub fn toggle_pause(&mut self) -> Option<bool> {
        self.poll();
        self.active
            .as_ref()
            .filter(|job| job.kind == JobKind::Sort)
            .map(|job| job.control.toggle_pause())
    }

    /// Cancel the active operation and wait for it to stop.
    pub fn cancel(&mut self) -> Option<PlaybackReport> {
        self.finish(true)
    }

    /// Block until the active operation finishes on its own.
    pub fn wait(&mut self) -> Option<PlaybackReport> {
        self.finish(false)
    }

    /// Reap the active operation if it has finished. Never blocks.
    pub fn poll(&mut self) -> Option<PlaybackReport> {
        if self.active.as_ref().is_some_and(|job| job.handle.is_finished()) {
            self.finish(false)
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    /// Change the step delay. An active sort picks it up at its next step.
    pub fn set_speed(&mut self, speed_ms: u64) -> Result<(), SessionError> {
        if !self.config.speed_bounds().contains(&speed_ms) {
            return Err(SessionError::SpeedOutOfRange {
                speed_ms,
                min: self.config.min_speed_ms,
                max: self.config.max_speed_ms,
            });
        }
        self.config.speed_ms = speed_ms;
        if let Some(job) = self.active.as_ref().filter(|job| job.kind == JobKind::Sort) {
            job.control.set_step_delay(Duration::from_millis(speed_ms));
        }
        tracing::debug!(target: "sortviz.session", speed_ms, "speed changed");
        Ok(())
    }

    /// Cancel any activity and replace the sequence with `size` fresh values.
    pub fn set_size(&mut self, size: usize) -> Result<(), SessionError> {
        if !self.config.size_bounds().contains(&size) {
            return Err(SessionError::SizeOutOfRange {
                size,
                min: self.config.min_size,
                max: self.config.max_size,
            });
        }
        self.cancel();
        let live = Sequence::random(size, self.config.value_range(), &mut self.rng)?;
        let stage = self.idle_stage()?;
        stage.live = live;
        stage.renderer.render_initial(stage.live.values());
        self.config.size = size;
        tracing::debug!(target: "sortviz.session", size, "size changed");
        Ok(())
    }

    /// Select a new algorithm, cancelling any activity and reshuffling.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SessionError> {
        self.config.algorithm = algorithm;
        tracing::debug!(target: "sortviz.session", %algorithm, "algorithm changed");
        self.shuffle()
    }

    /// Flip the ordering, cancelling any activity and reshuffling.
    pub fn toggle_ordering(&mut self) -> Result<Ordering, SessionError> {
        self.config.ordering = self.config.ordering.toggle();
        tracing::debug!(target: "sortviz.session", ordering = %self.config.ordering, "ordering changed");
        self.shuffle()?;
        Ok(self.config.ordering)
    }

    /// Cancel any activity and hand back the live sequence and renderer.
    pub fn into_parts(mut self) -> Option<(Sequence, R)> {
        self.cancel();
        self.stage.take().map(|s| (s.live, s.renderer))
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn idle_stage(&mut self) -> Result<&mut Stage<R>, SessionError> {
        self.stage.as_mut().ok_or(SessionError::Detached)
    }

    fn with_sort_control(&mut self, f: impl FnOnce(&PlaybackControl)) -> bool {
        self.poll();
        match self.active.as_ref().filter(|job| job.kind == JobKind::Sort) {
            Some(job) => {
                f(&job.control);
                true
            }
            None => false,
        }
    }

    fn launch(
        &mut self,
        kind: JobKind,
        trace: Trace,
        options: PlaybackOptions,
    ) -> Result<(), SessionError> {
        let stage = self.stage.take().ok_or(SessionError::Detached)?;
        let control = PlaybackControl::new();
        let token = control.token();
        let (tx, rx) = mpsc::channel::<Stage<R>>();

        let spawned = thread::Builder::new()
            .name(kind.thread_name().into())
            .spawn(move || -> JobResult<R> {
                let mut stage = rx.recv().ok()?;
                let report = play_with(&trace, &mut stage.live, &mut stage.renderer, &token, &options);
                Some((stage, report))
            });
        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                self.stage = Some(stage);
                return Err(SessionError::Spawn(err));
            }
        };
        if let Err(mpsc::SendError(stage)) = tx.send(stage) {
            self.stage = Some(stage);
            let _ = handle.join();
            return Err(SessionError::Spawn(std::io::Error::other(
                "playback worker exited before start",
            )));
        }

        tracing::debug!(target: "sortviz.session", ?kind, "operation started");
        self.active = Some(ActiveJob {
            kind,
            control,
            handle,
        });
        Ok(())
    }

    fn finish(&mut self, cancel: bool) -> Option<PlaybackReport> {
        let job = self.active.take()?;
        if cancel {
            job.control.cancel();
        }
        match job.handle.join() {
            Ok(Some((stage, report))) => {
                tracing::debug!(
                    target: "sortviz.session",
                    kind = ?job.kind,
                    outcome = ?report.outcome,
                    steps_applied = report.steps_applied,
                    "operation finished"
                );
                self.stage = Some(stage);
                self.last_report = Some(report);
                Some(report)
            }
            Ok(None) => {
                tracing::error!(target: "sortviz.session", kind = ?job.kind, "worker returned no stage");
                None
            }
            Err(payload) => std::panic::resume_unwind(payload),
        }
    }
}

impl<R: Renderer + Send + 'static> Drop for Session<R> {
    fn drop(&mut self) {
        if let Some(job) = self.active.take() {
            job.control.cancel();
            let _ = job.handle.join();
        }
    }
}
