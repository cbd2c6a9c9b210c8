//! Dataset emitter
//!
//! Rows are converted to Arrow record batches through `serde_arrow` and
//! written as delimited text or Parquet. Both the population and the wind
//! series go through the same path, so any serializable row type works.

pub mod csv;
pub mod parquet;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use arrow_schema::{FieldRef, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::{Result, SynthError};
use crate::utils::DEFAULT_BATCH_SIZE;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Base file name of the population dataset
pub const POPULATION_FILE_STEM: &str = "benefit_recipients";
/// Base file name of the wind series dataset
pub const WIND_FILE_STEM: &str = "wind_turbine_data";

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Delimited text with a header row
    #[default]
    Csv,
    /// Apache Parquet
    Parquet,
}

impl OutputFormat {
    /// File extension, without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "parquet" => Ok(Self::Parquet),
            other => Err(SynthError::config(format!("unknown output format '{other}'"))),
        }
    }
}

/// How rows are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    /// Field delimiter for CSV output
    pub delimiter: u8,
    /// Write a UTF-8 byte order mark before CSV output
    pub include_bom: bool,
    /// Rows per record batch
    pub batch_size: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            delimiter: b';',
            include_bom: true,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Destination of record batches
pub trait BatchSink {
    /// Write one batch
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()>;

    /// Flush and close the destination
    fn finish(self: Box<Self>) -> Result<()>;
}

/// Output path for a file stem in a directory
#[must_use]
pub fn output_path(directory: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    directory.join(format!("{stem}.{}", format.extension()))
}

/// Arrow fields traced from a row type
pub fn fields_for<T: Serialize + DeserializeOwned>() -> Result<Vec<FieldRef>> {
    Ok(Vec::<FieldRef>::from_type::<T>(TracingOptions::default())?)
}

/// Arrow schema traced from a row type
pub fn schema_for<T: Serialize + DeserializeOwned>() -> Result<SchemaRef> {
    Ok(Arc::new(Schema::new(fields_for::<T>()?)))
}

fn open_sink(path: &Path, schema: SchemaRef, options: &ExportOptions) -> Result<Box<dyn BatchSink>> {
    Ok(match options.format {
        OutputFormat::Csv => Box::new(self::csv::CsvSink::create(path, options)?),
        OutputFormat::Parquet => Box::new(self::parquet::ParquetSink::create(path, schema)?),
    })
}

/// Write rows to `path`, returning the number of rows written
///
/// Rows are consumed lazily in batches of `options.batch_size`. Parent
/// directories are created as needed.
pub fn write_rows<T, I>(path: &Path, rows: I, options: &ExportOptions) -> Result<usize>
where
    T: Serialize + DeserializeOwned,
    I: IntoIterator<Item = T>,
{
    if options.batch_size == 0 {
        return Err(SynthError::config("batch_size must be greater than zero"));
    }
    let start = Instant::now();
    log_operation_start(&format!("Writing {}", options.format), path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    if path.exists() {
        log_warning("Overwriting existing file", Some(path));
    }

    let fields = fields_for::<T>()?;
    let schema = Arc::new(Schema::new(fields.clone()));
    let mut sink = open_sink(path, Arc::clone(&schema), options)?;

    let mut written = 0;
    for chunk in &rows.into_iter().chunks(options.batch_size) {
        let rows: Vec<T> = chunk.collect();
        let batch = serde_arrow::to_record_batch(&fields, &rows)?;
        sink.write_batch(&batch)?;
        written += rows.len();
    }
    if written == 0 {
        // Header-only output for an empty dataset
        sink.write_batch(&RecordBatch::new_empty(schema))?;
    }
    sink.finish()?;

    log_operation_complete("wrote", path, written, Some(start.elapsed()));
    Ok(written)
}
