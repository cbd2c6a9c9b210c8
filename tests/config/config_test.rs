use std::fs;
use std::path::Path;

use benefit_synth::{OutputFormat, SimulationConfig, SynthError};
use chrono::NaiveDate;
use tempfile::tempdir;

#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "population": { "size": 1000, "seed": 7, "parallel": true, "chunk_size": 250 },
            "wind": { "start": "2020-01-01T00:00:00", "end": "2020-01-31T23:50:00" },
            "output": { "directory": "out", "format": "parquet", "delimiter": "," }
        }"#,
    )
    .unwrap();

    let config = SimulationConfig::from_json_file(&path).unwrap();
    assert_eq!(config.population.size, 1000);
    assert_eq!(config.population.seed, 7);
    assert!(config.population.parallel);
    assert_eq!(config.population.chunk_size, 250);
    assert_eq!(
        config.population.reference_date,
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    );
    assert_eq!(config.wind.seed, 42);
    assert_eq!(config.wind.step_minutes, 10);
    assert_eq!(config.wind.sample_count(), 31 * 144);
    assert_eq!(config.output.format, OutputFormat::Parquet);
    assert_eq!(config.output.population_path(), Path::new("out/benefit_recipients.parquet"));
    assert_eq!(config.output.export_options().unwrap().delimiter, b',');
    assert!(config.validate().is_ok());
}

#[test]
fn test_negative_size_fails_validation() {
    let config = SimulationConfig::from_json_str(r#"{"population": {"size": -10}}"#).unwrap();
    assert!(matches!(config.validate(), Err(SynthError::InvalidCount(-10))));
}

#[test]
fn test_reversed_wind_range_fails_validation() {
    let config = SimulationConfig::from_json_str(
        r#"{"wind": {"start": "2021-01-01T00:00:00", "end": "2020-01-01T00:00:00"}}"#,
    )
    .unwrap();
    assert!(matches!(config.validate(), Err(SynthError::Config(_))));
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        SimulationConfig::from_json_str("{ not json"),
        Err(SynthError::Json(_))
    ));
    assert!(matches!(
        SimulationConfig::from_json_str(r#"{"output": {"format": "xlsx"}}"#),
        Err(SynthError::Json(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        SimulationConfig::from_json_file(&dir.path().join("absent.json")),
        Err(SynthError::Io(_))
    ));
}

#[test]
fn test_summary_lists_sections() {
    let text = SimulationConfig::default().to_string();
    assert!(text.contains("Population Configuration:"));
    assert!(text.contains("Wind Series Configuration:"));
    assert!(text.contains("Output Configuration:"));
    assert!(text.contains("Size: 2184973"));
}
