use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use benefit_synth::algorithm::population::{PopulationGenerator, generate_parallel};
use benefit_synth::utils::logging::{create_main_progress_bar, create_spinner, finish_progress_bar};
use benefit_synth::{
    IndividualRecord, OutputFormat, PopulationStatistics, SimulationConfig, WindRecord, WindSeries,
    write_rows,
};
use clap::{Parser, Subcommand};
use indicatif::ProgressIterator;
use log::info;

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[derive(Parser, Debug)]
#[command(name = "benefit-synth")]
#[command(about = "Generate synthetic benefit-recipient and wind turbine datasets")]
struct Cli {
    /// JSON configuration file; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format (csv or parquet)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Random seed, used for both datasets
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the benefit-recipient population
    Population {
        /// Number of individuals
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Generate in parallel chunks
        #[arg(long)]
        parallel: bool,
    },
    /// Simulate the wind turbine time series
    Wind,
    /// Generate both datasets concurrently
    All {
        /// Number of individuals
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Generate in parallel chunks
        #[arg(long)]
        parallel: bool,
    },
}

impl Cli {
    /// Load the configuration file, if any, and apply flag overrides
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(directory) = &self.output {
            config.output.directory.clone_from(directory);
        }
        if let Some(format) = &self.format {
            config.output.format = format.parse::<OutputFormat>()?;
        }
        if let Some(seed) = self.seed {
            config.population.seed = seed;
            config.wind.seed = seed;
        }
        match self.command {
            Command::Population { count, parallel } | Command::All { count, parallel } => {
                if let Some(count) = count {
                    config.population.size = count;
                }
                config.population.parallel |= parallel;
            }
            Command::Wind => {}
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }
}

/// Generate the population and write it, returning the number of rows
fn run_population(config: &SimulationConfig) -> Result<usize> {
    let population = &config.population;
    let options = config.output.export_options()?;
    let path = config.output.population_path();
    info!("{population}");

    let generator = PopulationGenerator::from_config(population)?;
    let length = u64::try_from(population.size).unwrap_or(0);
    let pb = create_main_progress_bar(length, Some("Generating population"));
    let mut stats = PopulationStatistics::new();
    let start = Instant::now();

    let written = if population.parallel {
        let individuals = generate_parallel(
            &generator,
            population.size,
            population.seed,
            population.chunk_size,
            Some(&pb),
        )?;
        finish_progress_bar(&pb, Some("Population generated"));
        let spinner = create_spinner(Some("Writing population"));
        let rows = individuals.iter().inspect(|i| stats.record(i)).map(IndividualRecord::from);
        let written = write_rows(&path, rows, &options)?;
        finish_progress_bar(&spinner, Some("Population written"));
        written
    } else {
        let rows = generator
            .generate(population.size, population.seed)?
            .progress_with(pb.clone())
            .inspect(|i| stats.record(i))
            .map(IndividualRecord::from);
        let written = write_rows(&path, rows, &options)?;
        finish_progress_bar(&pb, Some("Population written"));
        written
    };

    info!("Generated {written} individuals in {:?}", start.elapsed());
    info!("{stats}");
    Ok(written)
}

/// Simulate the wind series and write it, returning the number of rows
fn run_wind(config: &SimulationConfig) -> Result<usize> {
    let options = config.output.export_options()?;
    let path = config.output.wind_path();
    info!("{}", config.wind);

    let series = WindSeries::new(&config.wind)?;
    let pb = create_main_progress_bar(series.len() as u64, Some("Simulating wind series"));
    let written = write_rows(&path, series.progress_with(pb.clone()).map(WindRecord::from), &options)?;
    finish_progress_bar(&pb, Some("Wind series written"));
    Ok(written)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let start = Instant::now();

    match cli.command {
        Command::Population { .. } => {
            run_population(&config).context("Population generation failed")?;
        }
        Command::Wind => {
            run_wind(&config).context("Wind simulation failed")?;
        }
        Command::All { .. } => {
            let population_config = config.clone();
            let population = tokio::task::spawn_blocking(move || run_population(&population_config));
            let wind = tokio::task::spawn_blocking(move || run_wind(&config));
            let (population, wind) = tokio::try_join!(population, wind)?;
            let individuals = population.context("Population generation failed")?;
            let samples = wind.context("Wind simulation failed")?;
            info!("Wrote {individuals} individuals and {samples} wind samples");
        }
    }

    info!("Finished in {:?}", start.elapsed());
    Ok(())
}
