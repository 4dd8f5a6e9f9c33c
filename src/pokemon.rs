//! The two-field pokemon record and its wire parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AcquisitionError;

/// A single acquired record: a name and a weight in hectograms.
///
/// Only these two fields are read from the source JSON; anything else the
/// API returns is ignored. Records are immutable after construction and
/// live only for the duration of one pipeline run.
///
/// # Examples
///
/// ```
/// use pokefold::Pokemon;
///
/// let pokemon = Pokemon::new("pikachu", 60.0);
/// assert_eq!(pokemon.to_string(), "pikachu weighs 60 hectograms");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Display name.
    pub name: String,
    /// Weight in hectograms.
    pub weight: f64,
}

impl Pokemon {
    /// Creates a record from a name and a weight in hectograms.
    #[inline]
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// The fallback record, `(name = "default", weight = 0)`.
///
/// Substituted for failed acquisitions under
/// [`FailurePolicy::SubstituteDefault`](crate::FailurePolicy::SubstituteDefault).
impl Default for Pokemon {
    fn default() -> Self {
        Self::new("default", 0.0)
    }
}

/// Renders the per-record report line: `<name> weighs <weight> hectograms`.
impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} weighs {} hectograms", self.name, self.weight)
    }
}

/// Decodes a response body and validates it against the record shape.
///
/// The two failure kinds stay distinct: a body that is not JSON at all fails
/// with [`AcquisitionError::Decode`], while JSON that does not carry a string
/// `name` and a numeric `weight` fails with [`AcquisitionError::Validation`].
///
/// # Examples
///
/// ```
/// use pokefold::{parse_pokemon, AcquisitionError};
///
/// let pokemon = parse_pokemon(r#"{"name":"ditto","weight":40,"order":214}"#).unwrap();
/// assert_eq!(pokemon.name, "ditto");
///
/// assert!(matches!(parse_pokemon("Not Found"), Err(AcquisitionError::Decode(_))));
/// assert!(matches!(
///     parse_pokemon(r#"{"name":"ditto"}"#),
///     Err(AcquisitionError::Validation(_))
/// ));
/// ```
pub fn parse_pokemon(body: &str) -> Result<Pokemon, AcquisitionError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| AcquisitionError::Decode(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| AcquisitionError::Validation(e.to_string()))
}
