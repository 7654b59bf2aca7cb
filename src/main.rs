use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use queue_report::analyzer;
use queue_report::chart;
use queue_report::config::ReportConfig;
use queue_report::report;
use queue_report::source::{JsonFileSource, SeriesSource};

#[derive(Parser)]
#[command(
    name = "queue-report",
    about = "Queue and storage metrics reports with text-mode charts",
    version
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the total and per-day breakdown, followed by the volume chart.
    Summary {
        /// JSON metrics export to read the series from.
        #[arg(long, short)]
        input: PathBuf,
        /// Queue name shown in the report header.
        #[arg(long, short)]
        name: Option<String>,
        /// Lookback window in days; defaults to the configured window.
        #[arg(long, short)]
        days: Option<u32>,
    },
    /// Analyze volume trends: peak day vs runner-up, mean, and median.
    Analyze {
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short)]
        days: Option<u32>,
    },
    /// Render the bar chart only.
    Chart {
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short)]
        days: Option<u32>,
        /// Bar area height in rows.
        #[arg(long)]
        height: Option<usize>,
        /// Characters per sample column.
        #[arg(long)]
        column_width: Option<usize>,
        /// Minimum y-axis label width.
        #[arg(long)]
        axis_width: Option<usize>,
    },
    /// Summarize oldest-message age readings (values in seconds).
    Age {
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short)]
        days: Option<u32>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("❌ {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ReportConfig::load(&cli.config)?;

    match cli.command {
        Command::Summary { input, name, days } => {
            let series = JsonFileSource::new(input).fetch(days.unwrap_or(cfg.days_window))?;
            info!("📊 Summarizing {} samples", series.len());

            for line in report::series_summary(name.as_deref(), &series) {
                println!("{line}");
            }

            println!();
            println!("Message Volume Chart:");
            println!();
            for line in chart::render(&series, &cfg.chart.options())? {
                println!("{line}");
            }
        }
        Command::Analyze { input, days } => {
            let days = days.unwrap_or(cfg.days_window);
            let series = JsonFileSource::new(input).fetch(days)?;
            info!("📈 Analyzing volume over {} samples", series.len());

            let analysis = analyzer::analyze(&series, days);
            for line in report::volume_report(&analysis) {
                println!("{line}");
            }
        }
        Command::Chart {
            input,
            days,
            height,
            column_width,
            axis_width,
        } => {
            let series = JsonFileSource::new(input).fetch(days.unwrap_or(cfg.days_window))?;

            let mut opts = cfg.chart.options();
            if let Some(height) = height {
                opts.height = height;
            }
            if let Some(column_width) = column_width {
                opts.column_width = column_width;
            }
            if let Some(axis_width) = axis_width {
                opts.axis_width = axis_width;
            }

            for line in chart::render(&series, &opts)? {
                println!("{line}");
            }
        }
        Command::Age { input, days } => {
            let series = JsonFileSource::new(input).fetch(days.unwrap_or(cfg.days_window))?;
            let summary = analyzer::summarize_age(&series);
            for line in report::age_report(&summary) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
