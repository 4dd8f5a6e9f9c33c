//! Quick start: full offline runs against an injected source.
//!
//! Run with: `cargo run --example quick_start`

use pokefold::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn kanto_source() -> StaticSource {
    StaticSource::new()
        .with_pokemon(1, Pokemon::new("bulbasaur", 69.0))
        .with_pokemon(4, Pokemon::new("charmander", 85.0))
        .with_pokemon(7, Pokemon::new("squirtle", 90.0))
        .with_pokemon(25, Pokemon::new("pikachu", 60.0))
        .with_pokemon(143, Pokemon::new("snorlax", 4600.0))
}

#[tokio::main]
async fn main() -> Result<(), RunError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pipeline = Pipeline::new(kanto_source(), PipelineConfig::default());

    // 1. A clean batch. Sequential binding style: each step yields a value
    //    or returns early through `?`.
    println!("1. Heaviest of a clean batch:");
    let report = pipeline.run_with_ids(&[1, 4, 7, 25, 143]).await?;
    for pokemon in &report.pokemon {
        println!("   {pokemon}");
    }
    println!("   {}", report.outcome);

    // 2. A batch with a repeated identifier folds into the tie condition,
    //    which the pipeline recovers into a message rather than a failure.
    println!("\n2. A tied batch:");
    let report = pipeline.run_with_ids(&[7, 7, 25]).await?;
    println!("   {}", report.outcome);

    Ok(())
}
