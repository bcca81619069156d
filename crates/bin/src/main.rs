//! Raw Filings CLI binary.
//!
//! Provides a command-line interface for fetching raw SEC filings and XBRL facts.

mod commands;

use clap::{Parser, Subcommand};
use rawfilings::{ClientConfig, FactsRequest, RawFilingsClient, SystemEnvironment};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "rawfilings")]
#[command(
    about = "Fetch raw SEC filings and XBRL facts from the Raw Filings API",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// API key (defaults to RAW_FILINGS_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// API base URL (defaults to RAW_FILINGS_API_URL, then https://api.rawfilings.ai)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a filing by accession number
    Fetch {
        /// SEC accession number
        accession: String,

        /// Company ticker symbol
        #[arg(long)]
        ticker: Option<String>,

        /// Company CIK number
        #[arg(long)]
        cik: Option<String>,

        /// Write the filing to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Fetch the XBRL facts for one tag of a company
    Facts {
        /// Company CIK number
        cik: String,

        /// XBRL tag (e.g., Assets)
        tag: String,
    },

    /// List the XBRL tags available for a company
    Tags {
        /// Company CIK number
        cik: String,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("rawfilings=debug,info")
    } else {
        EnvFilter::new("rawfilings=warn")
    };

    // stdout carries filing bytes
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let config = ClientConfig::resolve(
        cli.api_key.as_deref(),
        cli.base_url.as_deref(),
        &SystemEnvironment,
    )?;
    let client = RawFilingsClient::new(config)?;

    match cli.command {
        Commands::Fetch {
            accession,
            ticker,
            cik,
            output,
        } => {
            let request = commands::filing_request(accession, ticker, cik);
            match output {
                Some(path) => commands::save(&client, &request, &path).await,
                None => commands::print(client.fetch(&request).await?),
            }
        }
        Commands::Facts { cik, tag } => {
            let request = FactsRequest::new(cik, tag);
            commands::print(client.fetch_facts(&request).await?)
        }
        Commands::Tags { cik } => commands::print(client.fetch_tags(&cik).await?),
    }
}
