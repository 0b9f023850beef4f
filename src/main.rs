mod analyzer;
mod api;
mod config;
mod model;
mod normalizer;
mod parser;
mod report;
mod scraper;
mod search;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{load_config_or_default, AppConfig};
use model::{FlightRecord, SearchRequest};
use rand::Rng;
use report::{export_csv, render_results, render_search_header};
use scraper::CostamarClient;
use search::FlightSearch;
use std::path::Path;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::info;

#[derive(Parser)]
#[command(name = "costamar-fares")]
#[command(about = "Cheapest-fare search over the Costamar flight API", long_about = None)]
struct Cli {
    /// Path to the JSON config file; defaults apply when it does not exist
    #[arg(long, default_value = "config.json")]
    config: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the quote API
    Serve,
    /// Run one search and print the cheapest offers
    Search {
        /// Origin IATA code, e.g. LIM
        #[arg(long)]
        origin: String,
        /// Destination IATA code, e.g. CUZ
        #[arg(long)]
        destination: String,
        /// Outbound date as YYYYMMDD
        #[arg(long)]
        depart: String,
        /// Return date as YYYYMMDD; omit for one-way
        #[arg(long = "return")]
        return_date: Option<String>,
        #[arg(long, default_value_t = 1)]
        adults: u32,
        #[arg(long, default_value_t = 0)]
        children: u32,
        #[arg(long, default_value_t = 0)]
        infants: u32,
        /// How many offers to keep (default from config)
        #[arg(long)]
        top: Option<usize>,
        /// Also export the results to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },
    /// Run the configured demo searches and export them all to CSV
    Demo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config_or_default(&cli.config).context("Config load error")?;

    let provider = Arc::new(CostamarClient::new(&config.provider)?);
    let search = Arc::new(FlightSearch::new(
        provider,
        config.provider.terminal_ids.clone(),
    ));

    match cli.command {
        Commands::Serve => serve(&config, search).await,
        Commands::Search {
            origin,
            destination,
            depart,
            return_date,
            adults,
            children,
            infants,
            top,
            csv,
        } => {
            let request = SearchRequest::new(
                &origin,
                &destination,
                &depart,
                return_date.as_deref(),
                adults,
                children,
                infants,
            )?;
            let flights = run_search(&search, &request, top.unwrap_or(config.cli.top)).await;
            if let Some(path) = csv {
                export_csv(&flights, Path::new(&path))?;
            }
            Ok(())
        }
        Commands::Demo => demo(&config, &search).await,
    }
}

async fn serve(config: &AppConfig, search: Arc<FlightSearch>) -> Result<()> {
    let state = api::AppState {
        search,
        top: config.server.top,
    };
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Quote API listening on http://{}", addr);
    info!("Endpoints: POST /api/cotizar, GET /api/health");
    axum::serve(listener, api::router(state)).await?;
    Ok(())
}

/// Prints the search header, runs the search and prints its results.
async fn run_search(search: &FlightSearch, request: &SearchRequest, top: usize) -> Vec<FlightRecord> {
    println!("{}", render_search_header(request));
    let flights = search.search(request, Some(top)).await;
    println!("{}", render_results(request, &flights));
    flights
}

/// Runs the scripted searches one after another, pausing a random
/// interval between calls, then exports everything found.
async fn demo(config: &AppConfig, search: &FlightSearch) -> Result<()> {
    let mut all_flights = Vec::new();
    let searches = &config.cli.demo_searches;

    for (i, entry) in searches.iter().enumerate() {
        info!("Demo search {}/{}: {} → {}", i + 1, searches.len(), entry.origin, entry.destination);
        let request = SearchRequest::new(
            &entry.origin,
            &entry.destination,
            &entry.depart_date,
            entry.return_date.as_deref(),
            entry.adults,
            entry.children,
            entry.infants,
        )
        .with_context(|| format!("Invalid demo search #{}", i + 1))?;

        all_flights.extend(run_search(search, &request, config.cli.top).await);

        if i + 1 < searches.len() {
            let delay = rand::rng()
                .random_range(config.cli.delay_min_seconds..=config.cli.delay_max_seconds);
            sleep(Duration::from_secs_f64(delay)).await;
        }
    }

    export_csv(&all_flights, Path::new(&config.cli.csv_path))?;
    info!("🎉 Demo finished: {} flights found", all_flights.len());
    Ok(())
}
