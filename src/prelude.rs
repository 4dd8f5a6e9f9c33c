//! Convenience re-exports for the common pipeline workflow.
//!
//! Import everything with:
//!
//! ```
//! use pokefold::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use pokefold::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = StaticSource::new().with_pokemon(7, Pokemon::new("squirtle", 90.0));
//! let report = Pipeline::new(source, PipelineConfig::default())
//!     .run_with_ids(&[7])
//!     .await
//!     .unwrap();
//! assert_eq!(report.outcome, Outcome::Heaviest(90.0));
//! # }
//! ```

pub use crate::config::{FailurePolicy, PipelineConfig};
pub use crate::error::{AcquisitionError, ConfigError, RunError, SameWeightError};
pub use crate::fold::heaviest_weight;
pub use crate::ids::IdSampler;
pub use crate::pipeline::{Outcome, Pipeline, RunReport};
pub use crate::pokemon::{parse_pokemon, Pokemon};
#[cfg(feature = "http")]
pub use crate::source::PokeApiSource;
pub use crate::source::{PokemonSource, StaticSource};
