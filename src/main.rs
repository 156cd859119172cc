//! Lapboard - lap record leaderboard in the terminal
//!
//! Loads the lap record document once, then filters, sorts and summarizes it.
//!
//! # Usage
//! ```sh
//! lapboard --source data.json --filter track=Spa --sort time
//! lapboard --source https://example.com/data.json --format json
//! lapboard --options car
//! ```
//!
//! # Environment Variables
//! - `LAPBOARD_SOURCE` - File path or http(s) URL (default: data.json)
//! - `LAPBOARD_SORT_FIELD` / `LAPBOARD_SORT_ASCENDING` - Initial sort (default: time, true)
//! - `LAPBOARD_OUTPUT` - `table` or `json` (default: table)

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use lapboard::application::leaderboard::FilterCriteria;
use lapboard::application::presenter::Presenter;
use lapboard::application::session::Session;
use lapboard::config::{Config, ConfigOverrides, OutputFormat};
use lapboard::domain::lap::LapField;
use lapboard::infrastructure::sources::DataSource;
use lapboard::interfaces::{JsonPresenter, TablePresenter, write_options};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Filter, sort and summarize lap records", long_about = None)]
struct Cli {
    /// Data file path or http(s) URL (overrides LAPBOARD_SOURCE)
    #[arg(short, long)]
    source: Option<String>,

    /// Filter as FIELD=VALUE, repeatable (track, car, drivetrain, layout, start_type, power_type)
    #[arg(short = 'f', long = "filter", value_name = "FIELD=VALUE")]
    filters: Vec<String>,

    /// Field to sort by
    #[arg(long, value_name = "FIELD")]
    sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    desc: bool,

    /// Output format (table or json)
    #[arg(long)]
    format: Option<String>,

    /// Print the distinct values of FIELD and exit
    #[arg(long, value_name = "FIELD")]
    options: Option<String>,

    /// List the values of every filter field above the table
    #[arg(long)]
    list_filters: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the table / JSON
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(Level::INFO.to_string())),
        )
        .with(stderr_layer)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    config.apply_overrides(&ConfigOverrides {
        source: cli.source,
        sort_field: cli.sort,
        descending: cli.desc,
        output: cli.format,
    })?;

    let criteria = FilterCriteria::from_expressions(&cli.filters)?;
    info!(
        "Lapboard {} | source={} sort={}",
        env!("CARGO_PKG_VERSION"),
        config.source.location,
        config.display.sort.field
    );

    let source = DataSource::parse(&config.source.location)?
        .into_source(config.source.http_settings());

    let mut session = Session::new(config.display.fallbacks.clone());
    let loaded = session.load(source.as_ref()).await.is_ok();

    if let Some(name) = &cli.options {
        let field = name.parse::<LapField>()?;
        let listed = write_options(&session, field, &mut io::stdout().lock(), &mut io::stderr())?;
        return Ok(if listed { ExitCode::SUCCESS } else { ExitCode::FAILURE });
    }

    let stdout = io::stdout().lock();
    let mut presenter: Box<dyn Presenter> = match config.display.output {
        OutputFormat::Table => Box::new(TablePresenter::new(stdout).with_options(cli.list_filters)),
        OutputFormat::Json => Box::new(JsonPresenter::new(stdout)),
    };

    session.refresh(presenter.as_mut(), &criteria, config.display.sort)?;

    Ok(if loaded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
