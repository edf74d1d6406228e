//! Error handling as seen through the engine's public API.

use syna_core::{Error, ProcessingMode, SynaConfig};
use syna_engine::EnhancedSyna;

fn engine() -> EnhancedSyna {
    EnhancedSyna::new(&SynaConfig::default()).unwrap()
}

#[tokio::test]
async fn test_empty_input_is_validation_error() {
    let err = engine().process_input("").await.unwrap_err();
    assert_eq!(err.to_string(), "Validation error: must not be empty");
    assert!(!err.is_retryable(), "Bad input is not retryable");
}

#[tokio::test]
async fn test_punctuation_only_input_fails_in_processor() {
    // Passes the blank check but has no words to process
    let err = engine()
        .process_with_mode("?!?", ProcessingMode::Convergent)
        .await
        .unwrap_err();
    match &err {
        Error::Validation { field, message } => {
            assert_eq!(field.as_deref(), Some("input"));
            assert_eq!(message, "contains no words");
        }
        _ => unreachable!("Expected Validation error"),
    }
}

#[tokio::test]
async fn test_punctuation_only_input_fails_bilateral() {
    let result = engine()
        .process_with_mode("...", ProcessingMode::Bilateral)
        .await;
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[tokio::test]
async fn test_failed_thought_still_records_mode() {
    let syna = engine();
    let _ = syna.process_with_mode("!!", ProcessingMode::Divergent).await;
    assert_eq!(syna.current_mode(), ProcessingMode::Divergent);
}

#[test]
fn test_analyze_rejects_blank_input() {
    assert!(engine().analyze(" \t ").is_err());
}

#[test]
fn test_input_limit_counts_characters_not_bytes() {
    let mut config = SynaConfig::default();
    config.processing.max_input_chars = 4;
    let syna = EnhancedSyna::new(&config).unwrap();

    // Four characters, eight bytes
    assert!(syna.analyze("éééé").is_ok());
    assert!(syna.analyze("ééééé").is_err());
}
