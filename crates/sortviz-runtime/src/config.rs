#![forbid(unsafe_code)]

//! Visualizer configuration.
//!
//! [`VisualizerConfig`] gathers every tunable of a session. Defaults match
//! the classic widget: 20 bars valued 10..=109, 50 ms per step, 10 ms per
//! shuffle swap.
//!
//! # Loading
//!
//! With the `config` feature the struct loads from TOML or JSON, and any
//! field left out keeps its default:
//!
//! ```toml
//! # sortviz.toml
//! size = 40
//! speed_ms = 25
//! algorithm = "quick"
//! ordering = "descending"
//! ```
//!
//! ```rust,ignore
//! let config = VisualizerConfig::from_toml_file("sortviz.toml")?;
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use std::ops::RangeInclusive;

use sortviz_core::{Algorithm, Ordering};
use web_time::Duration;

/// Every tunable of a visualizer session.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct VisualizerConfig {
    /// Number of bars.
    pub size: usize,
    /// Smallest accepted `size`.
    pub min_size: usize,
    /// Largest accepted `size`.
    pub max_size: usize,

    /// Delay between sort steps, in milliseconds.
    pub speed_ms: u64,
    pub min_speed_ms: u64,
    pub max_speed_ms: u64,

    /// Delay between shuffle swaps, in milliseconds. Independent of `speed_ms`.
    pub shuffle_step_ms: u64,
    /// How often a paused playback re-checks its flags, in milliseconds.
    pub pause_poll_ms: u64,

    /// Smallest generated value.
    pub min_value: u32,
    /// Largest generated value.
    pub max_value: u32,

    pub algorithm: Algorithm,
    pub ordering: Ordering,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            size: 20,
            min_size: 5,
            max_size: 100,
            speed_ms: 50,
            min_speed_ms: 1,
            max_speed_ms: 500,
            shuffle_step_ms: 10,
            pause_poll_ms: 100,
            min_value: 10,
            max_value: 109,
            algorithm: Algorithm::Bubble,
            ordering: Ordering::Ascending,
        }
    }
}

impl VisualizerConfig {
    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Check every constraint, collecting all violations.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.min_size > self.max_size {
            errors.push(format!(
                "min_size ({}) exceeds max_size ({})",
                self.min_size, self.max_size
            ));
        }
        if !self.size_bounds().contains(&self.size) {
            errors.push(format!(
                "size ({}) outside {}..={}",
                self.size, self.min_size, self.max_size
            ));
        }
        if self.min_speed_ms > self.max_speed_ms {
            errors.push(format!(
                "min_speed_ms ({}) exceeds max_speed_ms ({})",
                self.min_speed_ms, self.max_speed_ms
            ));
        }
        if !self.speed_bounds().contains(&self.speed_ms) {
            errors.push(format!(
                "speed_ms ({}) outside {}..={}",
                self.speed_ms, self.min_speed_ms, self.max_speed_ms
            ));
        }
        if self.pause_poll_ms == 0 {
            errors.push("pause_poll_ms must be > 0".into());
        }
        if self.min_value > self.max_value {
            errors.push(format!(
                "min_value ({}) exceeds max_value ({})",
                self.min_value, self.max_value
            ));
        }
        if self.max_value == 0 {
            errors.push("max_value must be > 0".into());
        }
        errors
    }

    pub fn size_bounds(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    pub fn speed_bounds(&self) -> RangeInclusive<u64> {
        self.min_speed_ms..=self.max_speed_ms
    }

    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.min_value..=self.max_value
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn shuffle_step(&self) -> Duration {
        Duration::from_millis(self.shuffle_step_ms)
    }

    pub fn pause_poll(&self) -> Duration {
        Duration::from_millis(self.pause_poll_ms)
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from loading or validating a [`VisualizerConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// One or more constraints failed.
    Invalid(Vec<String>),
    #[cfg(feature = "config")]
    Io(std::io::Error),
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    #[cfg(feature = "config")]
    Json(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "invalid config: {}", errors.join("; ")),
            #[cfg(feature = "config")]
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "config TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "config JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(_) => None,
            #[cfg(feature = "config")]
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
        }
    }
}
