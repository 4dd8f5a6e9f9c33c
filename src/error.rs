//! Closed failure sums for acquisition, the fold, and whole runs.

use thiserror::Error;

/// What went wrong while turning an identifier into a record.
///
/// Per-record failures follow the configured
/// [`FailurePolicy`](crate::FailurePolicy): masked with the default record,
/// or escalated to abort the run.
#[derive(Debug, Clone, Error)]
pub enum AcquisitionError {
    /// The network request could not be completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The response body is not valid JSON.
    #[error("decode failure: {0}")]
    Decode(String),
    /// The decoded body does not match the two-field record shape.
    #[error("validation failure: {0}")]
    Validation(String),
}

/// Two records in sequence share the running maximum weight.
///
/// Raised by [`heaviest_weight`](crate::heaviest_weight), carrying the
/// duplicated weight. [`Pipeline::run`](crate::Pipeline::run) always recovers
/// this by kind into [`Outcome::SameWeight`](crate::Outcome::SameWeight); it
/// never aborts a run.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("two pokemon have the same weight: {weight}")]
pub struct SameWeightError {
    /// The duplicated weight, in hectograms.
    pub weight: f64,
}

/// Rejected pipeline configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The identifier range contains no values.
    #[error("empty id range: {start}..={end}")]
    EmptyIdRange {
        /// Configured range start.
        start: u32,
        /// Configured range end.
        end: u32,
    },
}

/// Failure of a whole pipeline run.
///
/// The tie condition never appears here: it is recovered inside the run.
/// Anything that does appear should propagate to the process boundary.
#[derive(Debug, Clone, Error)]
pub enum RunError {
    /// The configuration could not be satisfied.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// An acquisition failed under
    /// [`FailurePolicy::Escalate`](crate::FailurePolicy::Escalate).
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),
}
