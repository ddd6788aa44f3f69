//! `itinerary` CLI — find free time in a booking snapshot from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for a JSON array of bookings (stdin → stdout)
//! cat bookings.json | itinerary slots
//!
//! # From file to file, with a custom day window
//! itinerary slots -i bookings.json -o slots.json --day-start 08:00 --day-end 20:00
//!
//! # Load the analyzer policy from a JSON file
//! itinerary slots -i bookings.json --policy policy.json
//!
//! # Full itinerary report for a user
//! itinerary report --user-id 42 -i bookings.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use itinerary_engine::{
    analyze_itinerary, analyze_with_policy, ingest, AnalyzerPolicy, Booking, ClockTime,
    IngestMode, TemplateComposer,
};
use std::io::{self, Read};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(
    name = "itinerary",
    version,
    about = "Find free time between travel bookings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List free time slots as a JSON array
    Slots {
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
    /// Build an itinerary report: slots, bookings, and a message
    Report {
        /// User the snapshot belongs to
        #[arg(long)]
        user_id: i64,
        #[command(flatten)]
        io: IoArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input JSON file of bookings (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Drop invalid bookings instead of failing
    #[arg(long)]
    skip_invalid: bool,
}

#[derive(Args)]
struct PolicyArgs {
    /// JSON file with analyzer policy (day_start, day_end, free_day_end, min_gap_minutes)
    #[arg(long)]
    policy: Option<String>,
    /// Start of the day window (HH:MM)
    #[arg(long, value_parser = parse_clock)]
    day_start: Option<ClockTime>,
    /// End of the day window (HH:MM)
    #[arg(long, value_parser = parse_clock)]
    day_end: Option<ClockTime>,
    /// End of the slot offered for a day without bookings (HH:MM)
    #[arg(long, value_parser = parse_clock)]
    free_day_end: Option<ClockTime>,
    /// Shortest gap to report, in minutes
    #[arg(long)]
    min_gap: Option<u32>,
}

fn parse_clock(raw: &str) -> std::result::Result<ClockTime, String> {
    ClockTime::parse(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Slots { io: io_args, policy } => {
            let policy = build_policy(&policy)?;
            let bookings = load_bookings(&io_args)?;
            let slots = analyze_with_policy(&bookings, &policy);
            let json = serde_json::to_string_pretty(&slots)?;
            write_output(io_args.output.as_deref(), &json)?;
        }
        Commands::Report {
            user_id,
            io: io_args,
            policy,
        } => {
            let policy = build_policy(&policy)?;
            let bookings = load_bookings(&io_args)?;
            let report = analyze_itinerary(user_id, bookings, &policy, &TemplateComposer);
            let json = serde_json::to_string_pretty(&report)?;
            write_output(io_args.output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` directives (e.g.
/// `itinerary_engine=debug`) win over `-v` when set.
fn init_logging(verbose: u8) {
    let from_flag = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(from_flag.into()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

/// Start from the policy file (or defaults), then apply individual flags.
fn build_policy(args: &PolicyArgs) -> Result<AnalyzerPolicy> {
    let mut policy = match args.policy.as_deref() {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read policy file: {}", path))?;
            AnalyzerPolicy::from_json(&json)
                .with_context(|| format!("Invalid policy file: {}", path))?
        }
        None => AnalyzerPolicy::default(),
    };

    if let Some(day_start) = args.day_start {
        policy.day_start = day_start;
    }
    if let Some(day_end) = args.day_end {
        policy.day_end = day_end;
    }
    if let Some(free_day_end) = args.free_day_end {
        policy.free_day_end = free_day_end;
    }
    if let Some(min_gap) = args.min_gap {
        policy.min_gap_minutes = min_gap;
    }

    policy.validate().context("Invalid analyzer policy")?;
    debug!(?policy, "analyzer policy");
    Ok(policy)
}

fn load_bookings(args: &IoArgs) -> Result<Vec<Booking>> {
    let json = read_input(args.input.as_deref())?;
    let bookings =
        itinerary_engine::bookings_from_json(&json).context("Failed to parse bookings JSON")?;
    let mode = if args.skip_invalid {
        IngestMode::SkipInvalid
    } else {
        IngestMode::Strict
    };
    let bookings = ingest(bookings, mode).context("Booking snapshot rejected")?;
    debug!(count = bookings.len(), "bookings loaded");
    Ok(bookings)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
