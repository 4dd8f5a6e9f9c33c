//! Fold behavior: maxima, tie detection, and the zero-accumulator boundary.

use pokefold::{heaviest_weight, Pokemon};

fn team(weights: &[f64]) -> Vec<Pokemon> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &weight)| Pokemon::new(format!("pokemon-{i}"), weight))
        .collect()
}

#[test]
fn returns_the_true_maximum_without_duplicates() {
    let pokemon = team(&[4.0, 9.0, 2.0]);
    assert_eq!(heaviest_weight(&pokemon).unwrap(), 9.0);
}

#[test]
fn maximum_can_arrive_first() {
    let pokemon = team(&[90.0, 60.0, 5.0]);
    assert_eq!(heaviest_weight(&pokemon).unwrap(), 90.0);
}

#[test]
fn empty_sequence_folds_to_zero() {
    assert_eq!(heaviest_weight(&[]).unwrap(), 0.0);
}

#[test]
fn tie_carries_the_duplicated_weight() {
    let pokemon = team(&[12.0, 12.0, 9.0]);
    let tie = heaviest_weight(&pokemon).unwrap_err();
    assert_eq!(tie.weight, 12.0);
}

#[test]
fn elements_after_the_tie_cannot_influence_the_result() {
    // 999 would win the fold, but the tie at index 1 aborts first.
    let pokemon = team(&[12.0, 12.0, 999.0]);
    assert_eq!(heaviest_weight(&pokemon).unwrap_err().weight, 12.0);
}

#[test]
fn duplicate_weights_below_the_running_maximum_do_not_tie() {
    // 7 repeats, but is no longer the running maximum when it returns.
    let pokemon = team(&[7.0, 9.0, 7.0]);
    assert_eq!(heaviest_weight(&pokemon).unwrap(), 9.0);
}

#[test]
fn zero_weight_first_element_ties_with_the_initial_accumulator() {
    let pokemon = team(&[0.0]);
    assert_eq!(heaviest_weight(&pokemon).unwrap_err().weight, 0.0);
}

#[test]
fn zero_weight_after_a_positive_record_does_not_tie() {
    // The accumulator has already moved past 0 by then.
    let pokemon = team(&[5.0, 0.0]);
    assert_eq!(heaviest_weight(&pokemon).unwrap(), 5.0);
}
