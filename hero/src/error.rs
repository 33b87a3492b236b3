//! Errors raised while loading a [`HeroConfig`](crate::config::HeroConfig) override.

use thiserror::Error;

/// Why a configuration override was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Not JSON, or not shaped like a config
    #[error("failed to parse hero config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Negative or non-finite time
    #[error("{field} must be a finite, non-negative number of seconds (got {value})")]
    InvalidDuration {
        /// Dotted path of the offending value
        field: String,
        /// Rejected seconds
        value: f64,
    },

    /// Spring the motion model cannot settle
    #[error("{field} is not a usable spring: {reason}")]
    InvalidSpring {
        /// Dotted path of the offending spring
        field: String,
        /// Which parameter is out of range
        reason: &'static str,
    },

    /// Zero, negative or non-finite size
    #[error("{field} must be a positive size (got {value})")]
    InvalidSize {
        /// Dotted path of the offending value
        field: String,
        /// Rejected px
        value: f64,
    },

    /// Entrance variant whose hidden and visible opacity match
    #[error("{field} must change opacity between hidden and visible (both {opacity})")]
    StaticOpacity {
        /// Dotted path of the offending variant
        field: String,
        /// Hidden opacity
        opacity: f64,
    },
}
