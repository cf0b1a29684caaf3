use std::path::PathBuf;

use transit_sssp::config::RunConfig;
use transit_sssp::{Error, Strategy};

#[test]
fn test_defaults() {
    let config = RunConfig::default();
    assert_eq!(config.network_path, PathBuf::from("Metro.txt"));
    assert_eq!(config.arc_delay, 20);
    assert_eq!(config.strategy, Strategy::Sparse);
    assert!(!config.json_output);

    assert_eq!(RunConfig::from_json("{}").unwrap(), config);
}

#[test]
fn test_partial_json_overrides_fields() {
    let config = RunConfig::from_json(r#"{"strategy": "dense", "arc_delay": 0}"#).unwrap();
    assert_eq!(config.strategy, Strategy::Dense);
    assert_eq!(config.arc_delay, 0);
    assert_eq!(config.network_path, PathBuf::from("Metro.txt"));
}

#[test]
fn test_unknown_fields_and_bad_values_are_rejected() {
    assert!(matches!(RunConfig::from_json(r#"{"delay": 3}"#), Err(Error::Config(_))));
    assert!(matches!(RunConfig::from_json(r#"{"strategy": "astar"}"#), Err(Error::Config(_))));
    assert!(matches!(RunConfig::from_path("/nonexistent/run.json"), Err(Error::Config(_))));
}

#[test]
fn test_strategy_from_str() {
    assert_eq!("dense".parse::<Strategy>().unwrap(), Strategy::Dense);
    assert_eq!("Sparse".parse::<Strategy>().unwrap(), Strategy::Sparse);
    assert!("bfs".parse::<Strategy>().is_err());
    assert_eq!(Strategy::Dense.to_string(), "dense");
}
