//! In-memory source for tests and demos. No real I/O.

use std::collections::HashMap;

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::AcquisitionError;
use crate::pokemon::Pokemon;

use super::PokemonSource;

/// Fixed id → result table. Unknown ids fail with a transport error.
///
/// # Examples
///
/// ```
/// use pokefold::{AcquisitionError, Pokemon, StaticSource};
///
/// let source = StaticSource::new()
///     .with_pokemon(1, Pokemon::new("bulbasaur", 69.0))
///     .with_failure(2, AcquisitionError::Transport("connection reset".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    table: HashMap<u32, Result<Pokemon, AcquisitionError>>,
}

impl StaticSource {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record for an id.
    pub fn with_pokemon(mut self, id: u32, pokemon: Pokemon) -> Self {
        self.table.insert(id, Ok(pokemon));
        self
    }

    /// Registers a failure for an id.
    pub fn with_failure(mut self, id: u32, error: AcquisitionError) -> Self {
        self.table.insert(id, Err(error));
        self
    }
}

impl PokemonSource for StaticSource {
    fn fetch(&self, id: u32) -> BoxFuture<'_, Result<Pokemon, AcquisitionError>> {
        let result = self
            .table
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(AcquisitionError::Transport(format!("no route to id {id}"))));
        future::ready(result).boxed()
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
