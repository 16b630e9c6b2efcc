//! notam-bot: Canadian NOTAM display tool.
//!
//! Single-binary Tokio application that:
//! 1. Loads airport coordinates from an ourairports CSV export
//! 2. Composes one multi-point query against the NAV CANADA alpha API
//! 3. Pools the returned notices, deduplicating by primary key
//! 4. Prints them to stdout, most recent first

mod config;

use std::path::Path;

use clap::Parser;
use tracing::{error, info, warn};

use airport_directory::AirportDirectory;
use navcanada_client::{build_query, NavCanadaClient};
use notam_pool::{aggregate, render};

/// Display Canadian NOTAMs.
#[derive(Parser)]
#[command(name = "notam-bot", about = "Display Canadian NOTAMs")]
struct Cli {
    /// Radius (nautical miles) to search around each airport.
    #[arg(short, long)]
    radius: Option<u32>,

    /// Airport identifiers (e.g. CYOW CYYZ).
    #[arg(value_name = "ID", required = true)]
    airports: Vec<String>,

    /// Resolve airports and print the composed query without calling the API.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so rendered NOTAM text owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "notam_bot=info,airport_directory=info,navcanada_client=info,notam_pool=info"
                    .into()
            }),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cfg = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let directory = match AirportDirectory::load(Path::new(&cfg.airport_data_path)) {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let radius_nm = cli.radius.unwrap_or(cfg.radius_nm);

    let (query, unresolved) = match build_query(&directory, &cli.airports, radius_nm) {
        Ok(built) => built,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    for ident in &unresolved {
        warn!("Airport {} not found", ident);
    }

    if cli.dry_run {
        info!(
            "Dry run: {} points, radius {} nm",
            query.points.len(),
            radius_nm
        );
        for point in &query.points {
            info!("  {} at {},{}", point.ident, point.longitude, point.latitude);
        }
        info!("URL: {}", query.to_url(&cfg.api.base_url));
        return;
    }

    let client = NavCanadaClient::new(&cfg.api);
    let notams = match client.fetch_notams(&query).await {
        Ok(n) => n,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Fetched {} notices for {} airports",
        notams.len(),
        query.points.len()
    );

    let pool = aggregate(notams);
    for entry in render(&pool) {
        println!("{}\n", entry);
    }
}
