//! TUI application state and logic

use crate::core::{Capital, Game, GameStatus, GuessOutcome, MAX_WRONG_GUESSES, Region};
use crate::daily::{DailyResult, GameMode, daily_capital, share_text};
use crate::practice::PracticeDeck;
use crate::store::{Profile, Store};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: Store> {
    pub capitals: Vec<Capital>,
    pub state_capitals: Vec<Capital>,
    pub region: Region,
    pub mode: GameMode,
    pub date: String,
    pub game: Option<Game>,
    pub deck: PracticeDeck,
    pub profile: Profile<S>,
    pub messages: Vec<Message>,
    pub share_preview: Option<String>,
    pub should_quit: bool,
    recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: Store> App<S> {
    #[must_use]
    pub fn new(
        capitals: Vec<Capital>,
        state_capitals: Vec<Capital>,
        region: Region,
        mode: GameMode,
        date: String,
        profile: Profile<S>,
    ) -> Self {
        let deck = PracticeDeck::new(region_pool(&capitals, &state_capitals, region));
        let mut app = Self {
            capitals,
            state_capitals,
            region,
            mode,
            date,
            game: None,
            deck,
            profile,
            messages: vec![Message {
                text: "Guess letters A-Z to reveal the capital and its country.".to_string(),
                style: MessageStyle::Info,
            }],
            share_preview: None,
            should_quit: false,
            recorded: false,
        };
        app.start_new_game();
        app
    }

    pub fn start_new_game(&mut self) {
        self.share_preview = None;
        self.recorded = false;

        match self.mode {
            GameMode::Daily => {
                if self.profile.is_daily_completed(self.region, &self.date) {
                    self.game = None;
                    if let Some(result) = self.profile.daily_result(self.region, &self.date) {
                        self.share_preview = Some(share_text(
                            self.region,
                            &self.date,
                            &result,
                            MAX_WRONG_GUESSES,
                        ));
                    }
                    self.add_message(
                        &format!(
                            "{} daily for {} already completed. Tab for another region, F2 for practice.",
                            self.region, self.date
                        ),
                        MessageStyle::Info,
                    );
                    return;
                }

                match daily_capital(&self.capitals, &self.state_capitals, self.region, &self.date)
                {
                    Ok(capital) => {
                        self.game = Some(Game::new(capital.clone()));
                        self.add_message(
                            &format!("Daily puzzle for {} — good luck!", self.region),
                            MessageStyle::Info,
                        );
                    }
                    Err(e) => {
                        self.game = None;
                        self.add_message(&e.to_string(), MessageStyle::Error);
                    }
                }
            }
            GameMode::Practice => match self.deck.next() {
                Some(capital) => {
                    self.game = Some(Game::new(capital));
                    self.add_message("New practice capital dealt.", MessageStyle::Info);
                }
                None => {
                    self.game = None;
                    self.add_message(
                        &format!("No capitals available for region '{}'", self.region),
                        MessageStyle::Error,
                    );
                }
            },
        }
    }

    pub fn handle_letter(&mut self, letter: char) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if game.is_over() {
            return;
        }

        let outcome = game.guess(letter);
        let upper = letter.to_uppercase().to_string();
        match outcome {
            GuessOutcome::Hit => {
                self.add_message(&format!("'{upper}' is in the answer!"), MessageStyle::Success);
            }
            GuessOutcome::Miss => {
                self.add_message(
                    &format!("No '{upper}' — the map zooms out."),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message(&format!("'{upper}' was already guessed."), MessageStyle::Info);
            }
            GuessOutcome::Won { score } => {
                self.add_message(
                    &format!("Capital guessed! +{score} points."),
                    MessageStyle::Success,
                );
                self.finish_game();
            }
            GuessOutcome::Lost => {
                self.add_message("Out of guesses!", MessageStyle::Error);
                self.finish_game();
            }
            GuessOutcome::GameOver => {}
        }
    }

    pub fn give_up(&mut self) {
        if let Some(game) = self.game.as_mut() {
            if !game.is_over() {
                game.resign();
                self.add_message("Conceded.", MessageStyle::Info);
                self.finish_game();
            }
        }
    }

    fn finish_game(&mut self) {
        if self.recorded {
            return;
        }
        let Some(game) = self.game.as_ref() else {
            return;
        };
        self.recorded = true;

        let won = game.status() == GameStatus::Won;
        let score = game.score();
        let result = DailyResult {
            won,
            wrong_guesses: game.wrong_guesses(),
            guessed_letters: game.guessed_letters(),
        };

        let outcome = if won {
            self.profile.record_win(score)
        } else {
            self.profile.record_loss()
        };

        let daily_outcome = if self.mode == GameMode::Daily {
            self.share_preview = Some(share_text(
                self.region,
                &self.date,
                &result,
                MAX_WRONG_GUESSES,
            ));
            self.profile
                .mark_daily_completed(self.region, &self.date)
                .and_then(|()| {
                    self.profile
                        .save_daily_result(self.region, &self.date, &result)
                })
        } else {
            Ok(())
        };

        if let Err(e) = outcome.and(daily_outcome) {
            self.add_message(&format!("Could not save progress: {e}"), MessageStyle::Error);
        }

        match self.mode {
            GameMode::Daily => self.add_message(
                "Daily recorded. Tab for another region, F2 for practice.",
                MessageStyle::Info,
            ),
            GameMode::Practice => {
                self.add_message("Press Enter for the next capital.", MessageStyle::Info);
            }
        }
    }

    pub fn next_region(&mut self) {
        self.abandon_in_progress();
        self.region = self.region.next();
        self.deck = PracticeDeck::new(region_pool(
            &self.capitals,
            &self.state_capitals,
            self.region,
        ));
        self.start_new_game();
    }

    pub fn toggle_mode(&mut self) {
        self.abandon_in_progress();
        self.mode = match self.mode {
            GameMode::Daily => GameMode::Practice,
            GameMode::Practice => GameMode::Daily,
        };
        self.start_new_game();
    }

    /// Request a fresh game from the Enter key.
    ///
    /// A finished game is replaced; an in-progress game stays (misclicks
    /// must not throw a puzzle away). An unfinished daily cannot be
    /// rerolled anyway — the same capital would come back.
    pub fn request_new_game(&mut self) {
        match self.game.as_ref() {
            Some(game) if !game.is_over() => {
                self.add_message(
                    "Finish or concede this one first (Ctrl+G).",
                    MessageStyle::Info,
                );
            }
            _ => self.start_new_game(),
        }
    }

    fn abandon_in_progress(&mut self) {
        // Switching region or mode mid-game counts as a concession in
        // practice; an untouched daily stays replayable because nothing
        // was recorded.
        if let Some(game) = self.game.as_ref() {
            if !game.is_over() && self.mode == GameMode::Practice && !game.guessed_letters().is_empty()
            {
                if let Err(e) = self.profile.record_loss() {
                    self.add_message(
                        &format!("Could not save progress: {e}"),
                        MessageStyle::Error,
                    );
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn region_pool(capitals: &[Capital], state_capitals: &[Capital], region: Region) -> Vec<Capital> {
    match region {
        Region::UsStates => state_capitals.to_vec(),
        Region::World => capitals.to_vec(),
        _ => capitals
            .iter()
            .filter(|c| c.region() == region)
            .cloned()
            .collect(),
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<S: Store>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.give_up();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.next_region();
                }
                KeyCode::F(2) => {
                    app.toggle_mode();
                }
                KeyCode::Enter => {
                    app.request_new_game();
                }
                KeyCode::Char(c)
                    if c.is_alphabetic()
                        && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT) =>
                {
                    app.handle_letter(c);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
