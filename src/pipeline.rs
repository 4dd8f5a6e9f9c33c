//! The fetch → log → fold pipeline.

use std::fmt;
use std::num::NonZeroUsize;

use futures::stream::{self, StreamExt, TryStreamExt};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::config::{FailurePolicy, PipelineConfig};
use crate::error::{AcquisitionError, RunError};
use crate::fold::heaviest_weight;
use crate::ids::IdSampler;
use crate::pokemon::Pokemon;
use crate::source::PokemonSource;

/// How a run ended: one summary value, never both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The maximum weight, in hectograms.
    Heaviest(f64),
    /// Two records shared the running maximum weight.
    SameWeight(f64),
}

/// Renders the summary log line for either ending.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Heaviest(weight) => {
                write!(f, "The heaviest pokemon weighs {weight} hectograms!")
            }
            Outcome::SameWeight(weight) => {
                write!(f, "Two pokemon have the same weight: {weight}")
            }
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// The identifiers, in generation order.
    pub ids: Vec<u32>,
    /// The acquired records, in identifier order.
    pub pokemon: Vec<Pokemon>,
    /// The summary value.
    pub outcome: Outcome,
}

/// A configured pipeline over a constructor-injected source.
///
/// One call to [`run`](Pipeline::run) is one complete execution: sample
/// identifiers, acquire every record concurrently, report each one, fold out
/// the heaviest. The tie condition is recovered here; a run whose fold ties
/// still succeeds, with [`Outcome::SameWeight`] as its summary.
///
/// # Examples
///
/// ```
/// use pokefold::{Outcome, Pipeline, PipelineConfig, Pokemon, StaticSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = StaticSource::new()
///     .with_pokemon(1, Pokemon::new("pikachu", 60.0))
///     .with_pokemon(2, Pokemon::new("snorlax", 4600.0));
///
/// let pipeline = Pipeline::new(source, PipelineConfig::default());
/// let report = pipeline.run_with_ids(&[1, 2]).await.unwrap();
/// assert_eq!(report.outcome, Outcome::Heaviest(4600.0));
/// # }
/// ```
pub struct Pipeline<S> {
    source: S,
    config: PipelineConfig,
}

impl<S: PokemonSource> Pipeline<S> {
    /// Creates a pipeline from a source and a configuration.
    pub fn new(source: S, config: PipelineConfig) -> Self {
        Self { source, config }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Runs the pipeline over a freshly sampled identifier batch.
    ///
    /// Seeded configurations reproduce the same batch on every call;
    /// unseeded ones draw from OS entropy.
    pub async fn run(&self) -> Result<RunReport, RunError> {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let ids = IdSampler::new(self.config.count, self.config.id_range.clone()).sample(&mut rng);
        self.run_inner(ids).await
    }

    /// Runs the pipeline over caller-chosen identifiers.
    ///
    /// An empty slice is a valid run: zero records, and the fold of nothing
    /// is the initial accumulator, `Outcome::Heaviest(0.0)`.
    pub async fn run_with_ids(&self, ids: &[u32]) -> Result<RunReport, RunError> {
        self.run_inner(ids.to_vec()).await
    }

    async fn run_inner(&self, ids: Vec<u32>) -> Result<RunReport, RunError> {
        info!(
            source = self.source.source_name(),
            count = ids.len(),
            policy = ?self.config.failure_policy,
            "starting pipeline run"
        );
        debug!(?ids, "generated identifiers");

        let pokemon = self.acquire_all(&ids).await?;
        for record in &pokemon {
            info!("{record}");
        }

        let outcome = match heaviest_weight(&pokemon) {
            Ok(weight) => Outcome::Heaviest(weight),
            // The tie is the one failure every run recovers from.
            Err(tie) => Outcome::SameWeight(tie.weight),
        };
        info!("{outcome}");

        Ok(RunReport {
            ids,
            pokemon,
            outcome,
        })
    }

    /// Acquires every record, all in flight together up to the configured
    /// bound. Results come back in identifier order regardless of completion
    /// order; the fold never starts before the last acquisition settles.
    async fn acquire_all(&self, ids: &[u32]) -> Result<Vec<Pokemon>, AcquisitionError> {
        let width = self
            .config
            .concurrency
            .map(NonZeroUsize::get)
            .unwrap_or(ids.len())
            .clamp(1, ids.len().max(1));

        match self.config.failure_policy {
            FailurePolicy::SubstituteDefault => {
                let pokemon = stream::iter(ids.iter().copied())
                    .map(|id| async move {
                        match self.fetch_one(id).await {
                            Ok(record) => record,
                            Err(error) => {
                                warn!(id, %error, "acquisition failed, substituting default record");
                                Pokemon::default()
                            }
                        }
                    })
                    .buffered(width)
                    .collect::<Vec<_>>()
                    .await;
                Ok(pokemon)
            }
            FailurePolicy::Escalate => {
                stream::iter(ids.iter().copied())
                    .map(|id| self.fetch_one(id))
                    .buffered(width)
                    .try_collect()
                    .await
            }
        }
    }

    async fn fetch_one(&self, id: u32) -> Result<Pokemon, AcquisitionError> {
        debug!(source = self.source.source_name(), id, "fetching pokemon");
        let fetch = self.source.fetch(id);
        match self.config.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, fetch).await {
                Ok(result) => result,
                Err(_) => Err(AcquisitionError::Transport(format!(
                    "no response for id {id} within {limit:?}"
                ))),
            },
            None => fetch.await,
        }
    }
}
