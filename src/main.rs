//! Mapitals - CLI
//!
//! Daily capital-city guessing game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mapitals::{
    atlas,
    atlas::loader::capitals_from_records,
    commands::{ShareOutput, all_regions_share, daily_share, gather_stats, run_simple, run_spread},
    core::Region,
    daily::{GameMode, parse_date, today_string},
    interactive::{App, run_tui},
    output::display,
    store::{FileStore, Profile},
};

#[derive(Parser)]
#[command(
    name = "mapitals",
    about = "Guess the capital letter by letter before the map zooms out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Region: world (default), americas, europe, asia, africa, oceania, us-states
    #[arg(short, long, global = true, default_value = "world")]
    region: String,

    /// Mode: daily (default, one shared puzzle per date) or practice
    #[arg(short, long, global = true, default_value = "daily")]
    mode: String,

    /// Puzzle date as YYYY-MM-DD (default: today)
    #[arg(short, long, global = true)]
    date: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Print share text for a completed daily puzzle
    Daily {
        /// Summarize every completed region for the date
        #[arg(long)]
        all: bool,
    },

    /// Show profile statistics
    Stats,

    /// Audit how daily picks spread over the candidate pool
    Spread {
        /// Number of consecutive dates to replay
        #[arg(short = 'n', long, default_value = "30")]
        days: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let region: Region = cli.region.parse()?;
    let mode: GameMode = cli.mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let date = match cli.date {
        Some(date) => {
            parse_date(&date)?;
            date
        }
        None => today_string(),
    };

    let capitals = capitals_from_records(atlas::CAPITALS);
    let state_capitals = capitals_from_records(atlas::STATE_CAPITALS);

    let mut profile = Profile::new(FileStore::open_default()?);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(capitals, state_capitals, region, mode, date, profile);
            run_tui(app)
        }
        Commands::Simple => run_simple(
            &capitals,
            &state_capitals,
            region,
            mode,
            &date,
            &mut profile,
        )
        .map_err(|e| anyhow::anyhow!(e)),
        Commands::Daily { all } => {
            let output = if all {
                all_regions_share(&profile, &date)
            } else {
                daily_share(&profile, region, &date)
            };
            print_share_output(&output);
            Ok(())
        }
        Commands::Stats => {
            display::print_stats(&gather_stats(&profile));
            Ok(())
        }
        Commands::Spread { days } => {
            let start = parse_date(&date)?;
            let report = run_spread(&capitals, &state_capitals, region, start, days)?;
            display::print_spread(&report);
            Ok(())
        }
    }
}

fn print_share_output(output: &ShareOutput) {
    match output {
        ShareOutput::Ready(text) => display::print_share(text),
        ShareOutput::NotCompleted { region, date } => {
            println!("No completed {region} daily for {date} yet. Play it first!");
        }
        ShareOutput::NothingCompleted { date } => {
            println!("No region completed for {date} yet. Play a daily first!");
        }
    }
}
