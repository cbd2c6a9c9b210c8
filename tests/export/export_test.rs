use std::fs::{self, File};

use benefit_synth::export::csv::UTF8_BOM;
use benefit_synth::export::{POPULATION_FILE_STEM, output_path};
use benefit_synth::{
    ExportOptions, IndividualRecord, OutputFormat, SynthError, WindConfig, WindRecord, WindSeries,
    generate, write_rows,
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use tempfile::tempdir;

fn population_rows(n: i64) -> Vec<IndividualRecord> {
    generate(n, 42).unwrap().map(IndividualRecord::from).collect()
}

#[test]
fn test_csv_population_output() {
    let dir = tempdir().unwrap();
    let path = output_path(dir.path(), POPULATION_FILE_STEM, OutputFormat::Csv);
    let rows = population_rows(25);

    let options = ExportOptions {
        batch_size: 10,
        ..ExportOptions::default()
    };
    let written = write_rows(&path, rows.clone(), &options).unwrap();
    assert_eq!(written, 25);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Header once, even across several batches
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], IndividualRecord::COLUMNS.join(";"));
    assert!(lines[1].starts_with(&format!("{};{};{}", rows[0].id, rows[0].last_name, rows[0].first_name)));
    assert_eq!(lines[1].split(';').count(), IndividualRecord::COLUMNS.len());
}

#[test]
fn test_csv_without_bom_and_custom_delimiter() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let options = ExportOptions {
        delimiter: b',',
        include_bom: false,
        ..ExportOptions::default()
    };
    write_rows(&path, population_rows(3), &options).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("id,last_name,first_name"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_empty_dataset_still_has_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let options = ExportOptions {
        include_bom: false,
        ..ExportOptions::default()
    };
    let written = write_rows(&path, Vec::<IndividualRecord>::new(), &options).unwrap();
    assert_eq!(written, 0);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("id;"));
}

#[test]
fn test_parquet_population_output() {
    let dir = tempdir().unwrap();
    let path = output_path(dir.path(), POPULATION_FILE_STEM, OutputFormat::Parquet);
    let options = ExportOptions {
        format: OutputFormat::Parquet,
        batch_size: 7,
        ..ExportOptions::default()
    };
    assert_eq!(write_rows(&path, population_rows(20), &options).unwrap(), 20);

    let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path).unwrap())
        .unwrap()
        .build()
        .unwrap();
    let mut rows = 0;
    for batch in reader {
        let batch = batch.unwrap();
        assert_eq!(batch.num_columns(), IndividualRecord::COLUMNS.len());
        assert_eq!(batch.schema().field(0).name(), "id");
        rows += batch.num_rows();
    }
    assert_eq!(rows, 20);
}

#[test]
fn test_wind_series_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("wind.csv");
    let mut config = WindConfig::default();
    config.end = config.start + chrono::TimeDelta::hours(1);

    let series = WindSeries::new(&config).unwrap();
    let options = ExportOptions {
        include_bom: false,
        ..ExportOptions::default()
    };
    let written = write_rows(&path, series.map(WindRecord::from), &options).unwrap();
    assert_eq!(written, 7);

    let text = fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "timestamp;temperature;wind_speed;revenue_eco_wind;revenue_sky_blade;revenue_green_power;curtailment"
    );
    assert!(lines.next().unwrap().starts_with("2015-01-01 00:00:00;"));
}

#[test]
fn test_zero_batch_size_is_rejected() {
    let dir = tempdir().unwrap();
    let options = ExportOptions {
        batch_size: 0,
        ..ExportOptions::default()
    };
    assert!(matches!(
        write_rows(&dir.path().join("x.csv"), population_rows(1), &options),
        Err(SynthError::Config(_))
    ));
}
