//! Fetch a batch of pokemon concurrently, report each one, and fold out the
//! heaviest, treating an exact weight tie as its own, recoverable failure.
//!
//! The crate is a worked example of composing asynchronous, fallible steps
//! with plain `Result`s. Each stage returns a typed error, and the one
//! domain failure ([`SameWeightError`]) is caught by kind at the top of the
//! pipeline. The outside world sits behind a constructor-injected
//! [`PokemonSource`]; there is no effect runtime and no ambient registry.
//!
//! # Examples
//!
//! ## The fold
//!
//! ```
//! use pokefold::{heaviest_weight, Pokemon};
//!
//! let team = vec![
//!     Pokemon::new("bulbasaur", 69.0),
//!     Pokemon::new("charmander", 85.0),
//!     Pokemon::new("squirtle", 90.0),
//! ];
//! assert_eq!(heaviest_weight(&team).unwrap(), 90.0);
//!
//! // An exact tie with the running maximum aborts the fold.
//! let tied = vec![Pokemon::new("plusle", 42.0), Pokemon::new("minun", 42.0)];
//! assert_eq!(heaviest_weight(&tied).unwrap_err().weight, 42.0);
//! ```
//!
//! ## A full run against an injected source
//!
//! ```
//! use pokefold::{Outcome, Pipeline, PipelineConfig, Pokemon, StaticSource};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = StaticSource::new()
//!     .with_pokemon(1, Pokemon::new("pikachu", 60.0))
//!     .with_pokemon(2, Pokemon::new("snorlax", 4600.0));
//!
//! let pipeline = Pipeline::new(source, PipelineConfig::default());
//! let report = pipeline.run_with_ids(&[1, 2]).await.unwrap();
//! assert_eq!(report.outcome, Outcome::Heaviest(4600.0));
//! # }
//! ```
//!
//! Swap the stub for [`PokeApiSource`] and [`run`](Pipeline::run) to fetch a
//! random batch from the live endpoint instead; `cargo run --example
//! live_pokeapi` does exactly that.

/// Pipeline configuration and failure policies
pub mod config;
/// Closed failure sums for acquisition, the fold, and runs
pub mod error;
/// The heaviest-weight fold with tie detection
pub mod fold;
/// Pseudo-random identifier generation
pub mod ids;
/// The fetch → log → fold pipeline
pub mod pipeline;
/// The pokemon record and its wire parsing
pub mod pokemon;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Record acquisition sources: live client, stubs, closures
pub mod source;

pub use config::{FailurePolicy, PipelineConfig};
pub use error::{AcquisitionError, ConfigError, RunError, SameWeightError};
pub use fold::heaviest_weight;
pub use ids::IdSampler;
pub use pipeline::{Outcome, Pipeline, RunReport};
pub use pokemon::{parse_pokemon, Pokemon};
#[cfg(feature = "http")]
pub use source::{PokeApiSource, POKEAPI_BASE_URL};
pub use source::{PokemonSource, StaticSource};
