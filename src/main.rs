use beacon::core::config::{self, BeaconConfig, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "beacon", about = "Terminal landing page with a resilient quote generator")]
struct Args {
    /// Quote API endpoint (overrides config file and BEACON_QUOTE_URL)
    #[arg(long)]
    quote_url: Option<String>,

    /// Total fetch attempts before falling back to the static quote
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Config file to use instead of ~/.beacon/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to beacon.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("beacon.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(file_config) => file_config,
        Err(e) => {
            log::warn!("{}; using built-in defaults", e);
            BeaconConfig::default()
        }
    };
    let cli = CliOverrides {
        quote_url: args.quote_url,
        max_attempts: args.max_attempts,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Beacon starting up with quote API {} ({} attempt(s))",
        resolved.quote_url,
        resolved.retry.attempts()
    );

    beacon::tui::run(resolved)
}
