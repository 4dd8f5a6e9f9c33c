//! The heaviest-weight fold with tie detection.

use crate::error::SameWeightError;
use crate::pokemon::Pokemon;

/// Computes the maximum weight of a record sequence, left to right.
///
/// The accumulator starts at 0. A record whose weight exactly equals the
/// running maximum aborts the fold with a [`SameWeightError`] carrying that
/// weight; records after the offending one are never inspected.
///
/// Because the accumulator starts at 0, a record weighing exactly 0 ties
/// against the initial accumulator, so a 0-weight first element already
/// aborts the fold. This is a documented boundary of the zero start value,
/// not a rule about zero-weight entries. An empty sequence folds to
/// `Ok(0.0)`.
///
/// # Examples
///
/// ```
/// use pokefold::{heaviest_weight, Pokemon};
///
/// let team = vec![Pokemon::new("weedle", 32.0), Pokemon::new("pidgey", 18.0)];
/// assert_eq!(heaviest_weight(&team).unwrap(), 32.0);
///
/// let tied = vec![Pokemon::new("plusle", 42.0), Pokemon::new("minun", 42.0)];
/// assert_eq!(heaviest_weight(&tied).unwrap_err().weight, 42.0);
/// ```
pub fn heaviest_weight(pokemon: &[Pokemon]) -> Result<f64, SameWeightError> {
    let mut highest = 0.0_f64;
    for record in pokemon {
        if record.weight == highest {
            return Err(SameWeightError {
                weight: record.weight,
            });
        }
        if record.weight > highest {
            highest = record.weight;
        }
    }
    Ok(highest)
}
