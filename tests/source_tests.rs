//! The acquisition seam: parsing kinds, stub behavior, closure sources.

use pokefold::{parse_pokemon, AcquisitionError, Pokemon, PokemonSource, StaticSource};

#[test]
fn decode_failure_for_a_non_json_body() {
    // What a 404 from the live endpoint looks like.
    let result = parse_pokemon("Not Found");
    assert!(matches!(result, Err(AcquisitionError::Decode(_))));
}

#[test]
fn validation_failure_for_a_missing_field() {
    let result = parse_pokemon(r#"{"name":"ditto"}"#);
    assert!(matches!(result, Err(AcquisitionError::Validation(_))));
}

#[test]
fn validation_failure_for_a_mistyped_weight() {
    let result = parse_pokemon(r#"{"name":"ditto","weight":"40"}"#);
    assert!(matches!(result, Err(AcquisitionError::Validation(_))));
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"name":"ditto","weight":40,"base_experience":101,"abilities":[]}"#;
    let pokemon = parse_pokemon(body).unwrap();
    assert_eq!(pokemon, Pokemon::new("ditto", 40.0));
}

#[test]
fn default_record_is_the_documented_fallback() {
    assert_eq!(Pokemon::default(), Pokemon::new("default", 0.0));
}

#[test]
fn record_line_formats_name_and_weight() {
    let line = Pokemon::new("snorlax", 4600.0).to_string();
    assert_eq!(line, "snorlax weighs 4600 hectograms");
}

#[tokio::test]
async fn static_source_serves_registered_entries() {
    let source = StaticSource::new().with_pokemon(1, Pokemon::new("bulbasaur", 69.0));
    let pokemon = source.fetch(1).await.unwrap();
    assert_eq!(pokemon, Pokemon::new("bulbasaur", 69.0));
}

#[tokio::test]
async fn static_source_fails_unknown_ids_with_transport() {
    let source = StaticSource::new();
    assert!(matches!(
        source.fetch(9).await,
        Err(AcquisitionError::Transport(_))
    ));
}

#[tokio::test]
async fn closures_are_sources() {
    let source = |id: u32| {
        if id == 0 {
            Err(AcquisitionError::Validation("id out of range".into()))
        } else {
            Ok(Pokemon::new("rattata", 35.0))
        }
    };

    assert!(source.fetch(1).await.is_ok());
    assert!(source.fetch(0).await.is_err());
    assert_eq!(source.source_name(), "closure");
}
