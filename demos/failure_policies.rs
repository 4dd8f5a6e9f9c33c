//! The two acquisition-failure policies, side by side, over the same source.
//!
//! Run with: `cargo run --example failure_policies`

use pokefold::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn flaky_source() -> StaticSource {
    StaticSource::new()
        .with_pokemon(1, Pokemon::new("geodude", 200.0))
        .with_failure(2, AcquisitionError::Transport("connection reset".into()))
        .with_pokemon(3, Pokemon::new("golem", 3000.0))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ids = [1, 2, 3];

    // 1. SubstituteDefault: the failed identifier becomes the default record
    //    and the fold still runs over three records.
    println!("1. SubstituteDefault:");
    let masked = Pipeline::new(flaky_source(), PipelineConfig::default());
    match masked.run_with_ids(&ids).await {
        Ok(report) => {
            for pokemon in &report.pokemon {
                println!("   {pokemon}");
            }
            println!("   {}", report.outcome);
        }
        Err(error) => println!("   unexpected: {error}"),
    }

    // 2. Escalate: the first failure aborts the whole run; no records.
    println!("\n2. Escalate:");
    let config = PipelineConfig::new().with_failure_policy(FailurePolicy::Escalate);
    let strict = Pipeline::new(flaky_source(), config);
    match strict.run_with_ids(&ids).await {
        Ok(report) => println!("   {}", report.outcome),
        Err(error) => println!("   run aborted: {error}"),
    }
}
