use advocates_scraper::config::{Config, Overrides};
use advocates_scraper::logging;
use advocates_scraper::pipeline::Pipeline;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "advocates_scraper")]
#[command(about = "Export the public register of advocates to JSON")]
#[command(version)]
struct Cli {
    /// Register page to fetch (defaults to the judiciary listing)
    #[arg(long)]
    url: Option<String>,

    /// JSON file to write; replaced if it exists
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file with [source] and [output] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail instead of writing an empty list when no rows match
    #[arg(long)]
    require_records: bool,

    /// Also write JSON logs to a daily file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard =
        logging::init_logging(cli.log_dir.as_deref()).context("Failed to initialize logging")?;

    let config = Config::resolve(
        cli.config.as_deref(),
        Overrides {
            url: cli.url,
            output: cli.output,
            require_records: cli.require_records,
        },
    )
    .context("Failed to load configuration")?;
    debug!(?config, "Resolved configuration");

    let summary = Pipeline::new(config).run().map_err(|e| {
        error!("Run failed: {}", e);
        e
    })?;

    info!(
        url = %summary.url,
        records = summary.records,
        skipped = summary.skipped_rows,
        "Run complete"
    );
    println!("Successfully wrote data to {}", summary.output_file.display());
    Ok(())
}
