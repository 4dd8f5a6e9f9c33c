//! Pipeline configuration.

use std::num::NonZeroUsize;
use std::ops::RangeInclusive;
use std::time::Duration;

use crate::error::ConfigError;

/// What to do when acquiring one record fails.
///
/// Masking and propagating are both reasonable for a batch of independent
/// fetches, so the choice is a toggle rather than hard-wired behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Substitute [`Pokemon::default`](crate::Pokemon::default) and keep going.
    #[default]
    SubstituteDefault,
    /// Abort the whole run with the first failure, in identifier order.
    Escalate,
}

/// Tunables for one pipeline run.
///
/// The defaults draw ten identifiers from `1..=100` with failures masked,
/// keep at most 8 acquisitions in flight, and give each fetch a 10 second
/// deadline. Pass `None` to either bound to remove it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pokefold::{FailurePolicy, PipelineConfig};
///
/// let config = PipelineConfig::new()
///     .with_count(5)
///     .with_failure_policy(FailurePolicy::Escalate)
///     .with_fetch_timeout(Some(Duration::from_secs(2)))
///     .with_seed(1685);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// How many identifiers to generate.
    pub count: usize,
    /// Inclusive identifier range.
    pub id_range: RangeInclusive<u32>,
    /// Per-record failure handling.
    pub failure_policy: FailurePolicy,
    /// Maximum in-flight acquisitions; `None` removes the bound.
    pub concurrency: Option<NonZeroUsize>,
    /// Per-acquisition deadline; `None` disables it.
    pub fetch_timeout: Option<Duration>,
    /// RNG seed for reproducible identifier batches.
    pub seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            count: 10,
            id_range: 1..=100,
            failure_policy: FailurePolicy::default(),
            concurrency: NonZeroUsize::new(8),
            fetch_timeout: Some(Duration::from_secs(10)),
            seed: None,
        }
    }
}

impl PipelineConfig {
    /// Creates the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many identifiers to generate.
    #[inline]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the inclusive identifier range.
    #[inline]
    pub fn with_id_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.id_range = range;
        self
    }

    /// Sets the per-record failure handling.
    #[inline]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Bounds in-flight acquisitions, or removes the bound with `None`.
    #[inline]
    pub fn with_concurrency(mut self, limit: Option<NonZeroUsize>) -> Self {
        self.concurrency = limit;
        self
    }

    /// Sets the per-acquisition deadline, or disables it with `None`.
    #[inline]
    pub fn with_fetch_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Seeds identifier generation for reproducible runs.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects configurations no run could satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_range.is_empty() {
            return Err(ConfigError::EmptyIdRange {
                start: *self.id_range.start(),
                end: *self.id_range.end(),
            });
        }
        Ok(())
    }
}
