use alloc::string::String;

use thiserror::Error;

/// A rejected [`crate::LayoutConfig`].
///
/// Returned from [`crate::Pagify::new`], [`crate::Pagify::reconfigure`] and
/// [`crate::LayoutConfig::validate`]. A rejected reconfiguration leaves the engine untouched.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be a finite number (got {value})")]
    NonFinitePercent { field: &'static str, value: f32 },

    #[error("{field} must be greater than 0 (got {value})")]
    NonPositivePercent { field: &'static str, value: f32 },

    #[error("{field} must be at most 100 (got {value})")]
    PercentOutOfRange { field: &'static str, value: f32 },

    #[error("unknown ordering {0:?} (expected \"row\" or \"column\")")]
    UnknownOrdering(String),

    #[error("unknown turn unit {0:?} (expected \"page\", \"column\" or \"view\")")]
    UnknownTurnUnit(String),
}

/// A failure reported by a page loader.
///
/// The engine never propagates this: a failed load is treated exactly like a declined one and
/// the navigation that triggered it is abandoned.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("page loader failed: {message}")]
pub struct LoadError {
    message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
