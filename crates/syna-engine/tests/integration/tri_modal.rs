//! Integration tests for mode selection with the built-in processors.

use syna_core::{ProcessingMode, SynaConfig};
use syna_engine::EnhancedSyna;

use crate::common::default_engine;

#[tokio::test]
async fn test_creative_prompt_runs_divergent() {
    let syna = default_engine();

    let output = syna
        .process_input("Imagine a story where a dragon guards a frozen castle")
        .await
        .expect("Creative prompt should process");

    assert_eq!(output.mode, ProcessingMode::Divergent);
    assert!(
        output.result.insights.iter().all(|i| i.contains('~')),
        "Divergent insights are associations: {:?}",
        output.result.insights
    );
    assert_eq!(
        output.result.processing_path,
        vec!["tokenize", "filter", "associate", "diverge"]
    );
}

#[tokio::test]
async fn test_analytical_prompt_runs_convergent() {
    let syna = default_engine();

    let output = syna
        .process_input("Calculate the glacier melt rate and compare glacier volume data")
        .await
        .expect("Analytical prompt should process");

    assert_eq!(output.mode, ProcessingMode::Convergent);
    assert_eq!(output.result.insights[0], "glacier");
    assert!(output.result.confidence > 0.0);
}

#[tokio::test]
async fn test_mixed_prompt_runs_bilateral() {
    let syna = default_engine();

    let output = syna
        .process_input(
            "Imagine and design a novel telescope. Then analyze, measure and compare the telescope.",
        )
        .await
        .expect("Mixed prompt should process");

    assert_eq!(output.mode, ProcessingMode::Bilateral);
    assert_eq!(syna.current_mode(), ProcessingMode::Bilateral);
    assert_eq!(
        output.result.processing_path.last().map(String::as_str),
        Some("integrate")
    );
    assert!(
        output
            .result
            .insights
            .iter()
            .any(|i| i.starts_with("telescope: ")),
        "Expected a telescope synergy in {:?}",
        output.result.insights
    );
}

#[tokio::test]
async fn test_every_forced_mode_reports_itself() {
    let syna = default_engine();

    for mode in ProcessingMode::ALL {
        let output = syna
            .process_with_mode("violin sonata violin concerto", mode)
            .await
            .expect("Forced mode should process");
        assert_eq!(output.mode, mode);
        assert_eq!(output.result.mode, mode);
        assert_eq!(syna.current_mode(), mode);
        assert!((0.0..=1.0).contains(&output.result.confidence));
        assert!((0.0..=1.0).contains(&output.result.novelty_score));
    }
}

#[tokio::test]
async fn test_batch_runs_all_inputs() {
    let syna = default_engine();
    let inputs = vec![
        "Imagine a dragon".to_string(),
        "Calculate the sum".to_string(),
        "   ".to_string(),
        "glacier".to_string(),
    ];

    let outputs = syna.process_batch(&inputs, 3).await;

    assert_eq!(outputs.len(), 4);
    assert_eq!(outputs[0].as_ref().unwrap().mode, ProcessingMode::Divergent);
    assert_eq!(outputs[1].as_ref().unwrap().mode, ProcessingMode::Convergent);
    assert!(outputs[2].is_err());
    assert_eq!(outputs[3].as_ref().unwrap().result.insights, vec!["glacier"]);
}

#[tokio::test]
async fn test_custom_thresholds_change_selection() {
    let mut config = SynaConfig::default();
    config.selection.integration_threshold = 0.3;
    let syna = EnhancedSyna::new(&config).unwrap();

    // One cue on each side is enough at a 0.3 threshold
    let (profile, mode) = syna.analyze("imagine then explain").unwrap();
    assert!((profile.creativity_required - 0.35).abs() < 1e-9);
    assert!((profile.analysis_required - 0.35).abs() < 1e-9);
    assert_eq!(mode, ProcessingMode::Bilateral);
}

#[tokio::test]
async fn test_output_serializes_to_json() {
    let syna = default_engine();
    let output = syna.process_input("glacier nebula").await.unwrap();

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["mode"], "convergent");
    assert!(json["metadata"]["thought_id"].is_string());
    assert!(json["result"]["insights"].is_array());
}
