#![forbid(unsafe_code)]

//! sortviz public facade crate.
//!
//! Re-exports the trace model from `sortviz-core` and, with the default
//! `runtime` feature, playback and session control from `sortviz-runtime`.
//!
//! # Example
//!
//! ```
//! use sortviz::prelude::*;
//!
//! let trace = sortviz::trace_for(&[3.0, 1.0, 2.0], Algorithm::Quick, Ordering::Descending)?;
//! assert_eq!(trace.replay(&[3.0, 1.0, 2.0]), vec![3.0, 2.0, 1.0]);
//! # Ok::<(), sortviz::Error>(())
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use sortviz_core::{
    Algorithm, Ordering, ParseError, Sequence, SequenceError, Step, StepCounts, Trace, TraceKind,
    generate, shuffle_trace,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use sortviz_runtime::{
    Activity, Bar, BarChart, BarChartRenderer, ConfigError, ControlSignal, ControlToken,
    Highlight, PlaybackControl, PlaybackOptions, PlaybackOutcome, PlaybackReport,
    RecordingRenderer, RenderEvent, Renderer, Session, SessionError, Unattended, VisualizerConfig,
    play, play_with, shuffle,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for sortviz.
#[derive(Debug)]
pub enum Error {
    /// Input values were rejected.
    Sequence(SequenceError),
    /// An algorithm or ordering name did not parse.
    Parse(ParseError),
    /// Configuration failed to load or validate.
    #[cfg(feature = "runtime")]
    Config(ConfigError),
    /// A session request was rejected.
    #[cfg(feature = "runtime")]
    Session(SessionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Config(err) => write!(f, "{err}"),
            #[cfg(feature = "runtime")]
            Self::Session(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sequence(err) => Some(err),
            Self::Parse(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Config(err) => Some(err),
            #[cfg(feature = "runtime")]
            Self::Session(err) => Some(err),
        }
    }
}

impl From<SequenceError> for Error {
    fn from(err: SequenceError) -> Self {
        Self::Sequence(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

#[cfg(feature = "runtime")]
impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

#[cfg(feature = "runtime")]
impl From<SessionError> for Error {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

/// Standard result type for sortviz APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate `values` and record the trace `algorithm` produces for them.
pub fn trace_for(values: &[f64], algorithm: Algorithm, ordering: Ordering) -> Result<Trace> {
    let input = Sequence::new(values.to_vec())?;
    Ok(generate(algorithm, &input, ordering))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{Algorithm, Error, Ordering, Result, Sequence, Step, Trace};

    #[cfg(feature = "runtime")]
    pub use crate::{
        Activity, BarChartRenderer, PlaybackControl, PlaybackReport, Renderer, Session,
        VisualizerConfig,
    };

    pub use crate::core;
    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use sortviz_core as core;
#[cfg(feature = "runtime")]
pub use sortviz_runtime as runtime;
