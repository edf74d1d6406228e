//! Configuration effects on engine behaviour.

use syna_core::{Error, ProcessingMode, SynaConfig};
use syna_engine::EnhancedSyna;

#[tokio::test]
async fn test_max_insights_limits_single_mode_output() {
    let config = SynaConfig::from_toml_str("[processing]\nmax_insights = 2\n").unwrap();
    let syna = EnhancedSyna::new(&config).unwrap();

    let output = syna
        .process_with_mode(
            "glacier nebula violin sonata dragon castle",
            ProcessingMode::Convergent,
        )
        .await
        .unwrap();
    assert_eq!(output.result.insights.len(), 2);
}

#[tokio::test]
async fn test_bilateral_output_capped_at_twice_max_insights() {
    let config = SynaConfig::from_toml_str("[processing]\nmax_insights = 2\n").unwrap();
    let syna = EnhancedSyna::new(&config).unwrap();

    let output = syna
        .process_with_mode(
            "glacier nebula glacier violin nebula sonata dragon castle",
            ProcessingMode::Bilateral,
        )
        .await
        .unwrap();
    assert!(output.result.insights.len() <= 4);
}

#[tokio::test]
async fn test_disabled_stopwords_keep_function_words() {
    let config = SynaConfig::from_toml_str("[processing]\nstopwords = false\n").unwrap();
    let syna = EnhancedSyna::new(&config).unwrap();

    let output = syna
        .process_with_mode("the the the glacier", ProcessingMode::Convergent)
        .await
        .unwrap();
    assert_eq!(output.result.insights[0], "the");
}

#[test]
fn test_invalid_threshold_rejected_at_construction() {
    let mut config = SynaConfig::default();
    config.integration.synergy_threshold = 2.0;
    let err = EnhancedSyna::new(&config).unwrap_err();
    let Error::Validation { field, .. } = err else {
        unreachable!("Expected Validation error");
    };
    assert_eq!(field.as_deref(), Some("integration.synergy_threshold"));
}

#[test]
fn test_zero_timeout_rejected() {
    let err = SynaConfig::from_toml_str("[processing]\ntimeout_ms = 0\n").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}
