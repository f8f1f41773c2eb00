//! NextStep - a terminal client for immigration policy news
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use tracing::{info, warn};

use nextstep_api::{ApiClient, DEFAULT_BASE_URL};

/// NextStep - monitor immigration policy updates across countries
#[derive(Parser, Debug)]
#[command(name = "nextstep")]
#[command(about = "Monitor immigration policy updates across countries", long_about = None)]
struct Args {
    /// Country to open directly (e.g. "uk"); defaults to the home listing
    #[arg(value_name = "COUNTRY")]
    country: Option<String>,

    /// Base URL of the NextStep backend API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // File logging only; stdout belongs to the TUI
    nextstep_core::logging::init()?;

    let api = ApiClient::with_base_url(&args.api_url)?;
    if api.health_check().await {
        info!(url = %args.api_url, "backend is reachable");
    } else {
        warn!(url = %args.api_url, "backend health check failed, starting anyway");
    }

    nextstep_tui::run(api, args.country).await?;
    Ok(())
}
