//! # Configuration Error Tests
//!
//! Every error names the offending parameter and value.

use bpsim_core::common::ConfigError;
use bpsim_core::config::Config;

#[test]
fn range_errors_name_the_parameter() {
    assert_eq!(
        ConfigError::TaggedCount(0).to_string(),
        "tagged_count = 0 is out of range [1, 64]"
    );
    assert!(ConfigError::TaggedLogLen(31).to_string().contains("tagged_loglen = 31"));
    assert!(ConfigError::TagWidth(1).to_string().contains("tagged_tag_width = 1"));
    assert!(ConfigError::CounterWidth(9).to_string().contains("tagged_ctr_width = 9"));
    assert!(ConfigError::BimodalLogLen(0).to_string().contains("bimodal_loglen = 0"));
}

#[test]
fn history_length_error_shows_both_bounds() {
    let msg = ConfigError::HistoryLength { min: 64, max: 8 }.to_string();
    assert!(msg.contains("min = 64"));
    assert!(msg.contains("max = 8"));
}

#[test]
fn parse_error_wraps_serde() {
    let err = Config::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("malformed configuration"));
}

#[test]
fn io_error_wraps_missing_file() {
    let err = Config::from_file("/nonexistent/bpsim/config.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
