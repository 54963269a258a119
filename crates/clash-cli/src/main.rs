//! `clashes` CLI: find room and teacher double-bookings in exported timetable JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Detect clashes in a JSON array of slots (stdin → stdout)
//! cat slots.json | clashes detect
//!
//! # Read timetables (each with a "slots" array) from a file, emit JSON
//! clashes detect --timetables -i timetables.json --format json
//!
//! # Only room clashes
//! clashes detect --only room -i slots.json
//!
//! # Counts per axis and per day
//! clashes summary -i slots.json
//!
//! # Clashes involving one slot; exits with status 1 if there are any
//! clashes check --id 42 -i slots.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clash_engine::{ClashKind, DetectOptions, ResourceId, Slot};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "clashes",
    version,
    about = "Room and teacher clash detection for timetables"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List every clash
    Detect {
        #[command(flatten)]
        input: InputArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Check a single axis
        #[arg(long, value_enum)]
        only: Option<Axis>,
    },
    /// Count clashes per axis and per day
    Summary {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the clashes one slot is part of
    Check {
        #[command(flatten)]
        input: InputArgs,
        /// Slot id to look up
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Input is an array of timetables rather than a flat array of slots
    #[arg(long)]
    timetables: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Axis {
    Room,
    Teacher,
}

impl From<Axis> for ClashKind {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Room => ClashKind::Room,
            Axis::Teacher => ClashKind::Teacher,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Detect {
            input,
            output,
            format,
            only,
        } => {
            let slots = load_slots(&input)?;
            let options = only
                .map(|axis| DetectOptions::only(axis.into()))
                .unwrap_or_default();
            let clashes = clash_engine::detect_clashes_with(&slots, &options);

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&clashes)?,
                Format::Text if clashes.is_empty() => "No clashes found.\n".to_string(),
                Format::Text => clashes
                    .iter()
                    .map(|c| format!("{}\n", clash_engine::describe_clash(c)))
                    .collect(),
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Summary { input, format } => {
            let slots = load_slots(&input)?;
            let clashes = clash_engine::detect_clashes(&slots);
            let summary = clash_engine::summarize(&clashes);

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
                Format::Text => {
                    println!("Slots:          {}", slots.len());
                    println!("Clashes:        {}", summary.total);
                    println!("  Room:         {}", summary.room);
                    println!("  Teacher:      {}", summary.teacher);
                    println!("Affected slots: {}", summary.affected_slots);
                    for (day, count) in &summary.by_day {
                        println!("  {:<14}{}", day_label(*day), count);
                    }
                }
            }
        }
        Commands::Check { input, id } => {
            let slots = load_slots(&input)?;
            let clashes = clash_engine::detect_clashes(&slots);
            let target = Slot::new(parse_id(&id));

            let details = clash_engine::get_clash_details(&target, &clashes);
            if details.is_empty() {
                println!("Slot {} has no clashes.", id);
                return Ok(());
            }
            for clash in details {
                println!("{}", clash_engine::describe_clash(clash));
            }
            process::exit(1);
        }
    }

    Ok(())
}

/// Default level is `warn`; `RUST_LOG` overrides the flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Day name, or `day {n}` for an ordinal outside Monday..Sunday.
fn day_label(day: u8) -> String {
    match clash_engine::day_name(day) {
        "" => format!("day {}", day),
        name => name.to_string(),
    }
}

/// Numeric ids match integer slot ids; anything else matches string ids.
fn parse_id(raw: &str) -> ResourceId {
    raw.parse::<i64>()
        .map(ResourceId::Int)
        .unwrap_or_else(|_| ResourceId::Str(raw.to_string()))
}

fn load_slots(args: &InputArgs) -> Result<Vec<Slot>> {
    let json = read_input(args.input.as_deref())?;
    let slots = if args.timetables {
        clash_engine::timetables_from_json(&json).context("Failed to parse timetables JSON")?
    } else {
        clash_engine::slots_from_json(&json).context("Failed to parse slots JSON")?
    };
    log::info!("Loaded {} slots", slots.len());
    Ok(slots)
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
            print!("{}", content);
        }
    }
    Ok(())
}
