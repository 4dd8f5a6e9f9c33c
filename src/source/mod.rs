//! Record acquisition sources.
//!
//! [`PokemonSource`] is the seam between the pipeline and the outside world:
//! one capability, identifier in, record or typed failure out. The live
//! implementation is [`PokeApiSource`]; tests and demos inject
//! [`StaticSource`] or a plain closure. The pipeline receives its source
//! through its constructor, never through an ambient lookup.

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::AcquisitionError;
use crate::pokemon::Pokemon;

#[cfg(feature = "http")]
mod http;
mod stub;

#[cfg(feature = "http")]
pub use http::{PokeApiSource, POKEAPI_BASE_URL};
pub use stub::StaticSource;

/// A source of pokemon records.
pub trait PokemonSource: Send + Sync {
    /// Resolves one identifier to a record.
    fn fetch(&self, id: u32) -> BoxFuture<'_, Result<Pokemon, AcquisitionError>>;

    /// Short name used in log lines.
    fn source_name(&self) -> &'static str {
        "source"
    }
}

/// Plain closures are sources, which keeps test stubs to one line.
///
/// # Examples
///
/// ```
/// use pokefold::{Pokemon, PokemonSource};
///
/// let source = |id: u32| Ok(Pokemon::new(format!("pokemon-{id}"), f64::from(id)));
/// # let _ = &source as &dyn PokemonSource;
/// ```
impl<F> PokemonSource for F
where
    F: Fn(u32) -> Result<Pokemon, AcquisitionError> + Send + Sync,
{
    fn fetch(&self, id: u32) -> BoxFuture<'_, Result<Pokemon, AcquisitionError>> {
        future::ready(self(id)).boxed()
    }

    fn source_name(&self) -> &'static str {
        "closure"
    }
}
