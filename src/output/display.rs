//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, miss_meter, spaced};
use crate::commands::{SpreadReport, StatsReport};
use crate::core::text::is_letter_in_text;
use crate::core::{Game, GameStatus};
use colored::Colorize;

/// Print the current board: masked answer, miss meter, keyboard
pub fn print_board(game: &Game) {
    println!();
    println!("  {}", spaced(&game.masked_city()).bright_white().bold());
    println!("  {}", spaced(&game.masked_region_name()).bright_cyan());
    println!();
    println!(
        "  Misses: {}   Zoom: {:.1}",
        miss_meter(game.wrong_guesses(), game.max_wrong_guesses()).red(),
        game.zoom_level()
    );
    println!();

    let full_text = game.capital().full_text();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut line = String::new();
        for c in row.chars() {
            let colored_letter = if game.has_guessed(c) {
                if is_letter_in_text(c, &full_text) {
                    c.to_string().bright_green().bold().to_string()
                } else {
                    c.to_string().bright_black().to_string()
                }
            } else {
                c.to_string().normal().to_string()
            };
            line.push_str(&colored_letter);
            line.push(' ');
        }
        println!("  {}{line}", " ".repeat(i));
    }
    println!();
}

/// Print the end-of-game banner and reveal the answer
pub fn print_game_over(game: &Game) {
    let answer = game.capital();
    println!("\n{}", "═".repeat(60).bright_cyan());
    match game.status() {
        GameStatus::Won => {
            println!(
                "{}",
                "    🎉 ✨  C A P I T A L   G U E S S E D !  ✨ 🎉    "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
            println!("\n  {}", answer.to_string().bright_yellow().bold());
            println!(
                "  {} wrong {} — {} points",
                game.wrong_guesses(),
                if game.wrong_guesses() == 1 {
                    "guess"
                } else {
                    "guesses"
                },
                format!("+{}", game.score()).bright_green().bold()
            );
        }
        GameStatus::Lost => {
            println!("{}", "    ❌  OUT OF GUESSES  ❌    ".red().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  The answer was {}",
                answer.to_string().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}\n", "═".repeat(60).bright_cyan());
}

/// Print profile statistics
pub fn print_stats(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "MAPITALS STATS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Score:            {}",
        report.score.to_string().bright_yellow().bold()
    );
    println!("   Games played:     {}", report.games_played);
    println!(
        "   Current streak:   {}",
        report.current_streak.to_string().green()
    );
    println!(
        "   Best streak:      {}",
        report.best_streak.to_string().bright_green().bold()
    );
    println!();
}

/// Print the daily spread audit
pub fn print_spread(report: &SpreadReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "DAILY SPREAD:".bright_cyan().bold(),
        report.region.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📅 {} days starting {}",
        report.days, report.start_date
    );
    println!(
        "   Candidate pool:   {} capitals",
        report.pool_size.to_string().bright_yellow()
    );
    println!(
        "   Distinct picks:   {}",
        report.distinct.to_string().bright_yellow()
    );
    println!(
        "   Deterministic:    {}",
        if report.deterministic {
            "yes ✅".green().to_string()
        } else {
            "NO ❌".red().bold().to_string()
        }
    );

    let max_count = report.counts.first().map_or(1, |(_, n)| *n);
    println!("\n   Most frequent picks:");
    for (name, count) in report.counts.iter().take(10) {
        println!(
            "   [{}] {:>3}  {}",
            create_progress_bar(*count as f64, max_count as f64, 20).green(),
            count,
            name
        );
    }
    println!();
}

/// Print share text between rulers so it's easy to copy
pub fn print_share(text: &str) {
    println!("\n{}", "─".repeat(40).bright_black());
    println!("{text}");
    println!("{}\n", "─".repeat(40).bright_black());
}
