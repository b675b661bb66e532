//! Error handling tests for the conversion pipeline

use super::write_log;
use crate::config::ConverterConfig;
use crate::error::LogError;
use crate::processor::{Command, LogProcessor};
use tempfile::TempDir;

#[test]
fn test_missing_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("out.csv");

    let result = LogProcessor::new(temp_dir.path().join("missing.log"), output_path.clone())
        .unwrap()
        .run(Command::Csv);

    assert!(matches!(result, Err(LogError::LogNotFound { .. })));
    assert!(!output_path.exists());
}

#[test]
fn test_result_before_graph_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = write_log(
        &temp_dir,
        "Nodes: 10, Edges: 20\nPLP: Runtime: 5.5ms, Modularity: 0.42\n",
    );
    let output_path = temp_dir.path().join("out.csv");

    let result = LogProcessor::new(log_path, output_path.clone())
        .unwrap()
        .run(Command::Csv);

    match result {
        Err(LogError::ResultWithoutGraph { line }) => assert_eq!(line, 2),
        other => panic!("expected ResultWithoutGraph, got {:?}", other),
    }
    assert!(!output_path.exists());
}

#[test]
fn test_invalid_config_rejected_before_reading() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = write_log(&temp_dir, "");
    let config = ConverterConfig {
        line_terminator: String::new(),
        ..Default::default()
    };

    let result = LogProcessor::new(log_path, temp_dir.path().join("out.csv"))
        .unwrap()
        .with_config(config)
        .run(Command::Csv);

    assert!(matches!(result, Err(LogError::Configuration { .. })));
}

#[test]
fn test_empty_log_produces_header_only_combined_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = write_log(&temp_dir, "");
    let output_path = temp_dir.path().join("out.csv");

    let stats = LogProcessor::new(log_path, output_path.clone())
        .unwrap()
        .run(Command::Csv)
        .unwrap();

    assert_eq!(stats.records_parsed, 0);
    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.lines().count(), 1);
}
