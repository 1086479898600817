//! Session error type.

use std::fmt;

use sortviz_core::SequenceError;

use crate::config::ConfigError;

/// Rejected control-surface requests.
///
/// Cancellation is not an error; see
/// [`PlaybackOutcome`](crate::player::PlaybackOutcome).
#[derive(Debug)]
pub enum SessionError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Requested bar count outside the configured bounds.
    SizeOutOfRange { size: usize, min: usize, max: usize },
    /// Requested step delay outside the configured bounds.
    SpeedOutOfRange { speed_ms: u64, min: u64, max: u64 },
    /// Sequence generation rejected its input.
    Sequence(SequenceError),
    /// The playback worker thread could not be started.
    Spawn(std::io::Error),
    /// A playback worker exited without handing back the live sequence.
    Detached,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{e}"),
            Self::SizeOutOfRange { size, min, max } => {
                write!(f, "size {size} outside {min}..={max}")
            }
            Self::SpeedOutOfRange { speed_ms, min, max } => {
                write!(f, "speed {speed_ms}ms outside {min}..={max}ms")
            }
            Self::Sequence(e) => write!(f, "sequence error: {e}"),
            Self::Spawn(e) => write!(f, "failed to start playback thread: {e}"),
            Self::Detached => f.write_str("live sequence lost with a failed playback worker"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Sequence(e) => Some(e),
            Self::Spawn(e) => Some(e),
            Self::SizeOutOfRange { .. } | Self::SpeedOutOfRange { .. } | Self::Detached => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<SequenceError> for SessionError {
    fn from(err: SequenceError) -> Self {
        Self::Sequence(err)
    }
}
