//! Integration tests for bilateral processing with scripted processors.

use std::time::Duration;
use syna_core::{Error, ProcessingMode, SynaConfig};

use crate::common::{ScriptedProcessor, TestHarness, agreeing_sides};

#[tokio::test]
async fn test_bilateral_calls_each_side_once() {
    let (d, c) = agreeing_sides();
    let harness = TestHarness::new(&SynaConfig::default(), d, c);

    let output = harness
        .syna
        .process_with_mode("anything at all", ProcessingMode::Bilateral)
        .await
        .expect("Bilateral run should succeed");

    assert_eq!(harness.divergent.calls(), 1);
    assert_eq!(harness.convergent.calls(), 1);
    assert_eq!(output.result.mode, ProcessingMode::Bilateral);
}

#[tokio::test]
async fn test_bilateral_merges_synergies_first() {
    let (d, c) = agreeing_sides();
    let harness = TestHarness::new(&SynaConfig::default(), d, c);

    let output = harness
        .syna
        .process_with_mode("anything at all", ProcessingMode::Bilateral)
        .await
        .unwrap();

    assert_eq!(
        output.result.insights,
        vec![
            "dragon: castle~dragon",
            "dragon: dragon~moat",
            "dragon",
            "castle~dragon",
            "dragon~moat",
        ]
    );
    // mean(0.6, 0.7) + 0.2 synergy bonus
    assert!((output.result.confidence - 0.85).abs() < 1e-9);
    assert_eq!(
        output.result.processing_path,
        vec![
            "divergent:scripted-divergent",
            "convergent:scripted-convergent",
            "integrate",
        ]
    );
    assert_eq!(output.result.resource_usage, 2.0);
}

#[tokio::test]
async fn test_single_modes_call_one_side_only() {
    let (d, c) = agreeing_sides();
    let harness = TestHarness::new(&SynaConfig::default(), d, c);

    harness
        .syna
        .process_with_mode("anything", ProcessingMode::Divergent)
        .await
        .unwrap();
    harness
        .syna
        .process_with_mode("anything", ProcessingMode::Convergent)
        .await
        .unwrap();

    assert_eq!(harness.divergent.calls(), 1);
    assert_eq!(harness.convergent.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_bilateral_sides_run_concurrently() {
    let d = ScriptedProcessor::new(ProcessingMode::Divergent, &["a~b"], 0.5)
        .with_delay(Duration::from_millis(200));
    let c = ScriptedProcessor::new(ProcessingMode::Convergent, &["a"], 0.5)
        .with_delay(Duration::from_millis(200));
    let harness = TestHarness::new(&SynaConfig::default(), d, c);

    let start = tokio::time::Instant::now();
    harness
        .syna
        .process_with_mode("anything", ProcessingMode::Bilateral)
        .await
        .unwrap();

    // Sequential execution would take 400ms
    assert!(start.elapsed() < Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn test_slow_side_times_out() {
    let mut config = SynaConfig::default();
    config.processing.timeout_ms = 50;

    let d = ScriptedProcessor::new(ProcessingMode::Divergent, &["a~b"], 0.5)
        .with_delay(Duration::from_secs(5));
    let c = ScriptedProcessor::new(ProcessingMode::Convergent, &["a"], 0.5);
    let harness = TestHarness::new(&config, d, c);

    let err = harness
        .syna
        .process_with_mode("anything", ProcessingMode::Bilateral)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout { millis: 50 }));
    assert!(err.is_retryable());
}

#[tokio::test(start_paused = true)]
async fn test_single_mode_also_has_a_budget() {
    let mut config = SynaConfig::default();
    config.processing.timeout_ms = 50;

    let d = ScriptedProcessor::new(ProcessingMode::Divergent, &["a~b"], 0.5)
        .with_delay(Duration::from_secs(5));
    let c = ScriptedProcessor::new(ProcessingMode::Convergent, &["a"], 0.5);
    let harness = TestHarness::new(&config, d, c);

    let result = harness
        .syna
        .process_with_mode("anything", ProcessingMode::Divergent)
        .await;
    assert!(matches!(result, Err(Error::Timeout { .. })));
}
