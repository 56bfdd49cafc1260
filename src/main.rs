use anyhow::{Context, Result};
use clap::Parser;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use datacheck::config::{self, parse_delimiter};
use datacheck::services::output::{self, OutputFormat};
use datacheck::{logging, Profiler};

/// Fast dataset profiling and data quality checks for CSV, Parquet and Excel files.
///
/// Reports row counts, missing values, inferred column types and summary
/// statistics (min, max, mean, median, standard deviation, string lengths).
#[derive(Parser, Debug)]
#[command(name = "datacheck", version, about, long_about)]
struct Cli {
    /// File to profile (.csv, .parquet, .xlsx, .xlsm, .xls, .ods)
    file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Maximum number of sample values shown per column
    #[arg(long)]
    samples: Option<usize>,

    /// CSV field delimiter (a single character, or "\t")
    #[arg(long)]
    delimiter: Option<String>,

    /// Accept CSV rows whose field count differs from the header
    #[arg(long)]
    flexible: bool,

    /// Worksheet to profile in a workbook (defaults to the first sheet)
    #[arg(long)]
    sheet: Option<String>,

    /// Profile columns one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logging::init_logging(cli.verbose)?;

    // Load configuration, then let flags override it
    let mut config = config::load_config()?;
    if let Some(samples) = cli.samples {
        config.sample_size = samples;
    }
    if let Some(delimiter) = cli.delimiter.as_deref() {
        config.delimiter = parse_delimiter(delimiter)?;
    }
    if cli.flexible {
        config.flexible = true;
    }
    if cli.sheet.is_some() {
        config.sheet = cli.sheet.clone();
    }
    if cli.sequential {
        config.parallel = false;
    }
    let format = cli.format.or(config.default_format).unwrap_or_default();

    let profiler = Profiler::new(config);
    let profile = profiler
        .profile_file(&cli.file)
        .context("failed to profile file")?;

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    output::render(&profile, format, &mut writer)?;
    writer.flush()?;

    Ok(())
}
