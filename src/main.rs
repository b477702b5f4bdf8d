//! Wayfarer CLI entry point.
//!
//! Stands in for the browser front end: `ask` handles a single transcript,
//! `chat` reads one utterance per line from stdin, and `flights` lists the
//! loaded catalog.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use wayfarer::booking::BookingResolver;
use wayfarer::catalog::{CatalogClient, FlightRecord};
use wayfarer::config::{load_config, load_default_config, Config};
use wayfarer::logging;
use wayfarer::pipeline::IntentPipeline;
use wayfarer::session::{Reply, Session};
use wayfarer::speech;

/// Wayfarer — find and book mock flights from a spoken request.
#[derive(Parser)]
#[command(name = "wayfarer", version, about)]
struct Cli {
    /// Path to a config file (default: ~/.wayfarer/wayfarer.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Command {
    /// Handle a single transcript and print the reply.
    Ask {
        /// Recognised speech, e.g. "fly to Goa next Friday".
        transcript: String,
        /// Reference date for relative dates (default: today).
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Print the reply as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read utterances from stdin, one per line.
    Chat {
        /// Reference date for relative dates (default: today).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List every flight in the catalog.
    Flights,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };

    let _logging_guard = match &config.logging.dir {
        Some(dir) => Some(logging::init_file(dir, &config.logging.level)?),
        None => {
            logging::init_cli(&config.logging.level);
            None
        }
    };

    let client = CatalogClient::new(config.catalog.catalog_source());
    let catalog = client
        .flights()
        .await
        .with_context(|| format!("failed to load flight catalog from {}", config.catalog.source))?;

    match cli.command {
        Command::Ask {
            transcript,
            today,
            json,
        } => {
            let mut session = build_session(&config, catalog)?;
            let reply = session.respond(&transcript, today.unwrap_or_else(local_today));
            if json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                print_reply(&reply);
            }
            Ok(())
        }
        Command::Chat { today } => handle_chat(build_session(&config, catalog)?, today).await,
        Command::Flights => {
            print_flights(&catalog);
            Ok(())
        }
    }
}

fn build_session(
    config: &Config,
    catalog: std::sync::Arc<[FlightRecord]>,
) -> anyhow::Result<Session> {
    let pipeline = IntentPipeline::from_config(config).context("failed to build pipeline")?;
    let resolver = BookingResolver::new().context("failed to build booking resolver")?;
    Ok(Session::new(pipeline, resolver, catalog))
}

/// Line-oriented conversation over stdin.
///
/// `:book N` selects the Nth flight on offer, `:clear` forgets the list,
/// `:quit` exits. Any other line is an utterance.
async fn handle_chat(mut session: Session, today: Option<NaiveDate>) -> anyhow::Result<()> {
    info!("chat started");
    println!("Say where and when you want to fly. Type :quit to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line == ":quit" {
            break;
        }
        if line == ":clear" {
            session.clear();
            println!("Cleared.");
            continue;
        }
        if let Some(arg) = line.strip_prefix(":book") {
            match parse_position(arg).and_then(|i| session.select(i)) {
                Some(confirmation) => println!("{}", confirmation.message),
                None => warn!(input = arg.trim(), "no flight at that position"),
            }
            continue;
        }

        let reference = today.unwrap_or_else(local_today);
        print_reply(&session.respond(line, reference));
    }

    info!("chat ended");
    Ok(())
}

/// Parse a one-based list position into a zero-based index.
fn parse_position(arg: &str) -> Option<usize> {
    arg.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn print_reply(reply: &Reply) {
    println!("{}", reply.speech);
    if reply.booking.is_none() {
        if let Some(flights) = reply.outcome.as_ref().and_then(|o| o.flights()) {
            print_flights(flights);
        }
    }
}

fn print_flights(flights: &[FlightRecord]) {
    for (position, f) in (1_usize..).zip(flights) {
        println!(
            "  {position}. {} {} | {} -> {} | {} - {} | {} | {} | \u{20b9}{}",
            f.airline,
            f.flight_number,
            f.origin,
            f.destination,
            f.depart_time,
            f.arrive_time,
            f.duration,
            speech::pretty_date(&f.date),
            f.price_inr
        );
    }
}
