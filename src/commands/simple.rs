//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI.

use crate::core::{Capital, Game, GameStatus, GuessOutcome, MAX_WRONG_GUESSES, Region};
use crate::daily::{DailyResult, GameMode, daily_capital, share_text};
use crate::output::display;
use crate::practice::PracticeDeck;
use crate::store::{Profile, Store};
use colored::Colorize;
use std::io::{self, Write};

/// How a single game loop ended
enum PlayEnd {
    Finished,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failures, store write failures, or an empty
/// candidate pool for the region.
pub fn run_simple<S: Store>(
    capitals: &[Capital],
    state_capitals: &[Capital],
    region: Region,
    mode: GameMode,
    date: &str,
    profile: &mut Profile<S>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Mapitals - Capital Guessing Game               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the capital and its country/state one letter at a time.");
    println!(
        "{MAX_WRONG_GUESSES} wrong guesses lose the game; punctuation is free.\n"
    );
    println!("Commands: 'giveup' to concede, 'quit' to exit\n");

    match mode {
        GameMode::Daily => run_daily(capitals, state_capitals, region, date, profile),
        GameMode::Practice => run_practice(capitals, state_capitals, region, profile),
    }
}

fn run_daily<S: Store>(
    capitals: &[Capital],
    state_capitals: &[Capital],
    region: Region,
    date: &str,
    profile: &mut Profile<S>,
) -> Result<(), String> {
    if profile.is_daily_completed(region, date) {
        println!(
            "{}",
            format!("You already played the {region} daily for {date}.").yellow()
        );
        if let Some(result) = profile.daily_result(region, date) {
            display::print_share(&share_text(region, date, &result, MAX_WRONG_GUESSES));
        }
        return Ok(());
    }

    println!(
        "🌍 Daily puzzle — {} — {}\n",
        region.to_string().bright_yellow().bold(),
        date
    );

    let capital = daily_capital(capitals, state_capitals, region, date)
        .map_err(|e| e.to_string())?
        .clone();
    let mut game = Game::new(capital);

    if matches!(play_game(&mut game)?, PlayEnd::Quit) {
        println!("\n👋 Come back before midnight!\n");
        return Ok(());
    }

    let won = game.status() == GameStatus::Won;
    let result = DailyResult {
        won,
        wrong_guesses: game.wrong_guesses(),
        guessed_letters: game.guessed_letters(),
    };
    profile
        .mark_daily_completed(region, date)
        .and_then(|()| profile.save_daily_result(region, date, &result))
        .and_then(|()| {
            if won {
                profile.record_win(game.score())
            } else {
                profile.record_loss()
            }
        })
        .map_err(|e| e.to_string())?;

    display::print_share(&share_text(region, date, &result, MAX_WRONG_GUESSES));
    if profile.are_all_regions_completed(date) {
        println!(
            "{}",
            "🏆 All regions completed today! Run 'mapitals daily --all' to share."
                .bright_green()
                .bold()
        );
    }
    Ok(())
}

fn run_practice<S: Store>(
    capitals: &[Capital],
    state_capitals: &[Capital],
    region: Region,
    profile: &mut Profile<S>,
) -> Result<(), String> {
    let pool: Vec<Capital> = match region {
        Region::UsStates => state_capitals.to_vec(),
        Region::World => capitals.to_vec(),
        _ => capitals
            .iter()
            .filter(|c| c.region() == region)
            .cloned()
            .collect(),
    };
    let mut deck = PracticeDeck::new(pool);

    println!(
        "🎲 Practice mode — {} ({} capitals)\n",
        region.to_string().bright_yellow().bold(),
        deck.pool_size()
    );

    loop {
        let Some(capital) = deck.next() else {
            return Err(format!("No capitals available for region '{region}'"));
        };
        let mut game = Game::new(capital);

        if matches!(play_game(&mut game)?, PlayEnd::Quit) {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        if game.status() == GameStatus::Won {
            profile.record_win(game.score()).map_err(|e| e.to_string())?;
        } else {
            profile.record_loss().map_err(|e| e.to_string())?;
        }
        println!(
            "Score: {}  Streak: {}",
            profile.score().to_string().bright_yellow(),
            profile.current_streak().to_string().green()
        );

        match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New capital!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}

fn play_game(game: &mut Game) -> Result<PlayEnd, String> {
    loop {
        display::print_board(game);

        let input = get_user_input("Guess a letter")?.to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => return Ok(PlayEnd::Quit),
            "giveup" | "give up" | "resign" => game.resign(),
            _ => {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(letter), None) if letter.is_alphabetic() => {
                        report_outcome(game.guess(letter), letter);
                    }
                    _ => println!("{}", "Type a single letter A-Z.".yellow()),
                }
            }
        }

        if game.is_over() {
            display::print_game_over(game);
            return Ok(PlayEnd::Finished);
        }
    }
}

fn report_outcome(outcome: GuessOutcome, letter: char) {
    let letter = letter.to_uppercase();
    match outcome {
        GuessOutcome::Hit | GuessOutcome::Won { .. } => {
            println!("{}", format!("✓ '{letter}' is in the answer!").green());
        }
        GuessOutcome::Miss | GuessOutcome::Lost => {
            println!(
                "{}",
                format!("✗ No '{letter}' — the map zooms out.").red()
            );
        }
        GuessOutcome::AlreadyGuessed => {
            println!("{}", format!("'{letter}' was already guessed.").yellow());
        }
        GuessOutcome::GameOver => {}
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
