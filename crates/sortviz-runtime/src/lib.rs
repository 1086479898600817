#![forbid(unsafe_code)]

//! sortviz runtime
//!
//! Plays [`Trace`]s recorded by `sortviz-core` against a live sequence,
//! one step at a time, with cooperative cancellation and pausing.
//!
//! # Key Components
//!
//! - [`play_with`] - Step-by-step playback with pacing, pause and cancel
//! - [`PlaybackControl`] / [`ControlToken`] - Shared cancel, pause and speed flags
//! - [`Renderer`] - Receives the sequence state after every step
//! - [`BarChartRenderer`] - Bar heights and highlight state for display
//! - [`Session`] - One active operation at a time over a live sequence
//! - [`VisualizerConfig`] - Bounds and defaults for size, speed and values
//!
//! # Logging
//!
//! Playback and session transitions are emitted as `tracing` events under
//! the `sortviz.playback` and `sortviz.session` targets. Nothing is logged
//! unless the embedding application installs a subscriber.

pub mod bars;
pub mod config;
pub mod control;
pub mod error;
pub mod player;
pub mod renderer;
pub mod session;

pub use bars::{Bar, BarChart, BarChartRenderer, Highlight};
pub use config::{ConfigError, VisualizerConfig};
pub use control::{ControlSignal, ControlToken, PlaybackControl, Unattended};
pub use error::SessionError;
pub use player::{
    PAUSE_POLL, PlaybackOptions, PlaybackOutcome, PlaybackReport, SHUFFLE_STEP, play, play_with,
    shuffle,
};
pub use renderer::{RecordingRenderer, RenderEvent, Renderer};
pub use session::{Activity, Session};

pub use sortviz_core::{Algorithm, Ordering, Sequence, Step, Trace, TraceKind};
