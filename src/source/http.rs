//! The live pokeapi client.
//!
//! # Feature Flag
//!
//! Requires the `http` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! pokefold = { version = "0.1", features = ["http"] }
//! ```

use futures::future::{BoxFuture, FutureExt};

use crate::error::AcquisitionError;
use crate::pokemon::{parse_pokemon, Pokemon};

use super::PokemonSource;

/// Base URL of the public API.
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// HTTP source backed by the public pokeapi.
///
/// Issues one idempotent `GET {base_url}/pokemon/{id}` per fetch. The HTTP
/// status is not consulted: only a request that could not complete at all is
/// a transport failure, and an error page that is not JSON (a 404's
/// `Not Found`, for instance) fails decoding instead.
///
/// # Examples
///
/// ```no_run
/// use pokefold::{PokeApiSource, PokemonSource};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let source = PokeApiSource::new();
/// let pokemon = source.fetch(25).await.unwrap();
/// assert_eq!(pokemon.name, "pikachu");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PokeApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiSource {
    /// Creates a source against [`POKEAPI_BASE_URL`] with a fresh client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a source reusing an existing client's connection pool.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: POKEAPI_BASE_URL.to_string(),
        }
    }

    /// Points the source at a different base URL.
    #[inline]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch_record(&self, id: u32) -> Result<Pokemon, AcquisitionError> {
        let url = format!("{}/pokemon/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let body = response.text().await.map_err(map_transport_error)?;
        parse_pokemon(&body)
    }
}

impl Default for PokeApiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PokemonSource for PokeApiSource {
    fn fetch(&self, id: u32) -> BoxFuture<'_, Result<Pokemon, AcquisitionError>> {
        self.fetch_record(id).boxed()
    }

    fn source_name(&self) -> &'static str {
        "pokeapi"
    }
}

fn map_transport_error(error: reqwest::Error) -> AcquisitionError {
    if error.is_timeout() {
        AcquisitionError::Transport(format!("request timed out: {error}"))
    } else if error.is_connect() {
        AcquisitionError::Transport(format!("connection failed: {error}"))
    } else {
        AcquisitionError::Transport(error.to_string())
    }
}
