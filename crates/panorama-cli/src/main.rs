use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use panorama_core::{DatasetSizes, SampleOptions};
use panorama_data::{ExportError, export_all};
use panorama_report::{RenderError, build_dashboard};

#[derive(Debug, Error)]
enum CliError {
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "panorama", version, about = "Panorama analytics dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the dashboard to a static HTML file.
    Render(RenderArgs),
    /// Export the generated datasets as CSV files.
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output path for the dashboard.
    #[arg(long, default_value = "dashboard.html")]
    out: PathBuf,
    /// Dashboard title.
    #[arg(long, default_value = "Panorama Analytics Dashboard")]
    title: String,
    #[command(flatten)]
    sample: SampleArgs,
    /// Number of monthly sales periods.
    #[arg(long, default_value_t = 12)]
    months: usize,
    /// Number of days in the price history.
    #[arg(long, default_value_t = 90)]
    days: usize,
    /// Scatter point count, split across three clusters.
    #[arg(long, default_value_t = 150)]
    points: usize,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Output directory for the CSV files.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
    #[command(flatten)]
    sample: SampleArgs,
    /// Number of monthly sales periods.
    #[arg(long, default_value_t = 12)]
    months: usize,
    /// Number of days in the price history.
    #[arg(long, default_value_t = 90)]
    days: usize,
    /// Scatter point count, split across three clusters.
    #[arg(long, default_value_t = 100)]
    points: usize,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Seed for the pseudo-random source.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// First day of the generated timeline.
    #[arg(long, default_value = "2024-01-01")]
    base_date: NaiveDate,
}

impl SampleArgs {
    fn options(&self) -> SampleOptions {
        SampleOptions {
            seed: self.seed,
            base_date: self.base_date,
        }
    }
}

fn main() -> Result<(), CliError> {
    init_logging()?;

    let cli = Cli::parse();
    match cli.command {
        Command::Render(args) => run_render(args),
        Command::Export(args) => run_export(args),
    }
}

fn run_render(args: RenderArgs) -> Result<(), CliError> {
    let opts = args.sample.options();
    let sizes = DatasetSizes {
        months: args.months,
        days: args.days,
        points: args.points,
    };

    info!(seed = opts.seed, months = sizes.months, days = sizes.days, "rendering dashboard");
    let dashboard = build_dashboard(&opts, &sizes, &args.title);
    dashboard.write_html(&args.out)?;

    info!(out = %args.out.display(), "render finished");
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let opts = args.sample.options();
    let sizes = DatasetSizes {
        months: args.months,
        days: args.days,
        points: args.points,
    };

    info!(seed = opts.seed, out_dir = %args.out_dir.display(), "exporting datasets");
    let tables = export_all(&args.out_dir, &opts, &sizes)?;

    let rows: u64 = tables.iter().map(|table| table.rows).sum();
    let bytes: u64 = tables.iter().map(|table| table.bytes).sum();
    info!(tables = tables.len(), rows, bytes, "export finished");
    Ok(())
}

fn init_logging() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}
