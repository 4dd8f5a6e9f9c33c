//! The whole pipeline end to end: ten random pokemon from the live API,
//! the heaviest reported, a weight tie recovered into a message.
//!
//! Run with: `cargo run --example live_pokeapi` (needs network access).

use std::process::ExitCode;

use pokefold::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pipeline = Pipeline::new(PokeApiSource::new(), PipelineConfig::default());

    match pipeline.run().await {
        Ok(report) => {
            for pokemon in &report.pokemon {
                println!("{pokemon}");
            }
            println!("{}", report.outcome);
            ExitCode::SUCCESS
        }
        // Anything the pipeline does not recover from ends the process
        // with a non-zero outcome.
        Err(error) => {
            eprintln!("run failed: {error}");
            ExitCode::FAILURE
        }
    }
}
