//! Submission strategy configuration

use serde::Deserialize;
use std::fmt;

/// How a finished draft is sent to the profile service
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStrategy {
    /// One signup request carrying the whole draft. Nothing is committed on failure.
    #[default]
    Atomic,
    /// Best-effort fan-out: root profile first, then one request per sub-item.
    /// A failure can leave a partially committed profile behind.
    FanOut,
}

impl fmt::Display for SubmissionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStrategy::Atomic => write!(f, "atomic"),
            SubmissionStrategy::FanOut => write!(f, "fan_out"),
        }
    }
}

/// Submission configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default)]
    pub strategy: SubmissionStrategy,
}
