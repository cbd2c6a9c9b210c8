//! Configuration for a simulation run
//!
//! Every section has defaults, so a JSON file only needs the values it
//! changes. Command line flags are applied on top of the loaded file.

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::algorithm::population::PopulationConfig;
use crate::error::{Result, SynthError};
use crate::export::{ExportOptions, OutputFormat, POPULATION_FILE_STEM, WIND_FILE_STEM, output_path};
use crate::utils::DEFAULT_BATCH_SIZE;
use crate::wind::WindConfig;

/// Where and how datasets are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the dataset files
    pub directory: PathBuf,
    pub format: OutputFormat,
    /// CSV field delimiter, a single ASCII character
    pub delimiter: char,
    /// Prefix CSV files with a UTF-8 byte order mark
    pub include_bom: bool,
    /// Rows per record batch
    pub batch_size: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            format: OutputFormat::Csv,
            delimiter: ';',
            include_bom: true,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl OutputConfig {
    /// Check the delimiter and batch size
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(SynthError::config(format!(
                "delimiter '{}' is not a single ASCII character",
                self.delimiter
            )));
        }
        if self.batch_size == 0 {
            return Err(SynthError::config("batch_size must be greater than zero"));
        }
        Ok(())
    }

    /// Options handed to the emitter
    pub fn export_options(&self) -> Result<ExportOptions> {
        self.validate()?;
        let delimiter = u8::try_from(self.delimiter)
            .map_err(|_| SynthError::config(format!("invalid delimiter '{}'", self.delimiter)))?;
        Ok(ExportOptions {
            format: self.format,
            delimiter,
            include_bom: self.include_bom,
            batch_size: self.batch_size,
        })
    }

    /// Path of the population dataset
    #[must_use]
    pub fn population_path(&self) -> PathBuf {
        output_path(&self.directory, POPULATION_FILE_STEM, self.format)
    }

    /// Path of the wind series dataset
    #[must_use]
    pub fn wind_path(&self) -> PathBuf {
        output_path(&self.directory, WIND_FILE_STEM, self.format)
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Output Configuration:")?;
        writeln!(f, "  Directory: {}", self.directory.display())?;
        writeln!(f, "  Format: {}", self.format)?;
        if self.format == OutputFormat::Csv {
            writeln!(f, "  Delimiter: '{}'", self.delimiter)?;
            writeln!(f, "  BOM: {}", self.include_bom)?;
        }
        writeln!(f, "  Batch Size: {}", self.batch_size)?;
        Ok(())
    }
}

/// Complete configuration of a simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub population: PopulationConfig,
    pub wind: WindConfig,
    pub output: OutputConfig,
}

impl SimulationConfig {
    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.population.validate()?;
        self.wind.validate()?;
        self.output.validate()
    }
}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.population, self.wind, self.output)
    }
}
