//! Configuration defaults, builders, and validation.

use std::num::NonZeroUsize;
use std::time::Duration;

use pokefold::{ConfigError, FailurePolicy, PipelineConfig};

#[test]
fn defaults_draw_ten_ids_with_bounded_resources() {
    let config = PipelineConfig::default();

    assert_eq!(config.count, 10);
    assert_eq!(config.id_range, 1..=100);
    assert_eq!(config.failure_policy, FailurePolicy::SubstituteDefault);
    assert_eq!(config.concurrency, NonZeroUsize::new(8));
    assert_eq!(config.fetch_timeout, Some(Duration::from_secs(10)));
    assert_eq!(config.seed, None);
}

#[test]
fn builders_override_each_field() {
    let config = PipelineConfig::new()
        .with_count(3)
        .with_id_range(1..=151)
        .with_failure_policy(FailurePolicy::Escalate)
        .with_concurrency(None)
        .with_fetch_timeout(Some(Duration::from_millis(250)))
        .with_seed(7);

    assert_eq!(config.count, 3);
    assert_eq!(config.id_range, 1..=151);
    assert_eq!(config.failure_policy, FailurePolicy::Escalate);
    assert_eq!(config.concurrency, None);
    assert_eq!(config.fetch_timeout, Some(Duration::from_millis(250)));
    assert_eq!(config.seed, Some(7));
}

#[test]
fn empty_id_range_fails_validation() {
    let config = PipelineConfig::new().with_id_range(100..=1);

    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyIdRange { start: 100, end: 1 })
    ));
}

#[test]
fn unbounded_and_untimed_configuration_is_still_valid() {
    // No cap and no deadline is allowed, but only ever opt-in.
    let config = PipelineConfig::new()
        .with_concurrency(None)
        .with_fetch_timeout(None);

    assert!(config.validate().is_ok());
}
