//! TUI application state and logic

use crate::commands::{HintKind, HintResult, take_hint};
use crate::core::FishEntity;
use crate::error::FishdleError;
use crate::game::{ATTRIBUTE_HINT_COST, GameSession, GuessOutcome, LETTER_HINT_COST};
use crate::output::format_share;
use crate::storage::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Autocomplete entries shown under the input
pub const SUGGESTION_LIMIT: usize = 6;

/// Application state
pub struct App<'db, S: KeyValueStore> {
    pub session: GameSession<'db, S>,
    pub input_buffer: String,
    pub suggestions: Vec<&'db FishEntity>,
    pub selected: usize,
    pub messages: Vec<Message>,
    pub share_text: Option<String>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'db, S: KeyValueStore> App<'db, S> {
    #[must_use]
    pub fn new(session: GameSession<'db, S>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected: 0,
            messages: Vec::new(),
            share_text: None,
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        if app.session.is_over() {
            app.input_mode = InputMode::GameOver;
            app.add_message(
                "You already found today's fish. Press 's' to share.",
                MessageStyle::Success,
            );
        } else if app.session.guesses().is_empty() {
            app.add_message("Welcome! Type a fish name and press Enter.", MessageStyle::Info);
            app.add_message(
                "Ctrl-L reveals a letter, Ctrl-T reveals an attribute.",
                MessageStyle::Info,
            );
        } else {
            let resumed = format!("Resumed with {} guesses.", app.session.guesses().len());
            app.add_message(&resumed, MessageStyle::Info);
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if ctrl => self.should_quit = true,
            (_, KeyCode::Esc) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::GameOver, KeyCode::Char('s')) => self.share(),
            (InputMode::GameOver, _) => {}
            (InputMode::Guessing, KeyCode::Char('l')) if ctrl => self.hint(HintKind::Letter),
            (InputMode::Guessing, KeyCode::Char('t')) if ctrl => self.hint(HintKind::Attribute),
            (InputMode::Guessing, KeyCode::Char(c)) if !ctrl => {
                self.input_buffer.push(c);
                self.update_suggestions();
            }
            (InputMode::Guessing, KeyCode::Backspace) => {
                self.input_buffer.pop();
                self.update_suggestions();
            }
            (InputMode::Guessing, KeyCode::Up) => {
                self.selected = self.selected.saturating_sub(1);
            }
            (InputMode::Guessing, KeyCode::Down) => {
                if self.selected + 1 < self.suggestions.len() {
                    self.selected += 1;
                }
            }
            (InputMode::Guessing, KeyCode::Tab) => self.accept_suggestion(),
            (InputMode::Guessing, KeyCode::Enter) => self.submit(),
            _ => {}
        }
    }

    pub fn update_suggestions(&mut self) {
        self.suggestions = self
            .session
            .database()
            .suggest(&self.input_buffer, SUGGESTION_LIMIT)
            .into_iter()
            .filter(|fish| !self.session.has_guessed(&fish.id))
            .collect();
        self.selected = 0;
    }

    /// Complete the input with the highlighted suggestion
    pub fn accept_suggestion(&mut self) {
        if let Some(fish) = self.suggestions.get(self.selected) {
            self.input_buffer = fish.name.clone();
            self.update_suggestions();
        }
    }

    /// Submit the typed name, or the highlighted suggestion if the text names no fish
    pub fn submit(&mut self) {
        let text = self.input_buffer.trim().to_string();
        if text.is_empty() {
            return;
        }

        let highlighted = self.suggestions.get(self.selected).copied();
        let result = match self.session.database().find_by_name(&text) {
            Ok(fish) => self.session.submit_guess(fish),
            Err(FishdleError::NotFound(_)) => match highlighted {
                Some(fish) => self.session.submit_guess(fish),
                None => {
                    self.add_message(&format!("No fish called '{text}'"), MessageStyle::Error);
                    return;
                }
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(GuessOutcome::Correct) => {
                self.input_mode = InputMode::GameOver;
                let won = format!(
                    "🎉 It was the {}! Score {}. Press 's' to share, 'q' to quit.",
                    self.session.target().name,
                    self.session.current_score()
                );
                self.add_message(&won, MessageStyle::Success);
            }
            Ok(GuessOutcome::Incorrect) => {
                if let Some(guess) = self.session.guesses().last() {
                    let text = format!("{} {}", guess.entity.name, guess.comparison.to_emoji());
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            Ok(GuessOutcome::Duplicate) => {
                self.add_message("Already guessed that one.", MessageStyle::Error);
            }
            Ok(GuessOutcome::AlreadyOver) => {
                self.input_mode = InputMode::GameOver;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }

        self.input_buffer.clear();
        self.update_suggestions();
    }

    pub fn hint(&mut self, kind: HintKind) {
        match take_hint(&mut self.session, kind) {
            HintResult::Letter(hint) => {
                let text = format!(
                    "Letter {} is '{}' (-{LETTER_HINT_COST})",
                    hint.position + 1,
                    hint.letter
                );
                self.add_message(&text, MessageStyle::Success);
            }
            HintResult::Attribute(hint) => {
                let text = format!(
                    "{} is {} (-{ATTRIBUTE_HINT_COST})",
                    hint.attribute, hint.value
                );
                self.add_message(&text, MessageStyle::Success);
            }
            HintResult::Unavailable(_) => {
                self.add_message("No more hints of that kind.", MessageStyle::Error);
            }
        }
    }

    pub fn share(&mut self) {
        self.share_text = Some(format_share(&self.session.share_card()));
        self.add_message(
            "Share text ready; it is printed when you quit.",
            MessageStyle::Info,
        );
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

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: &mut App<'_, S>) -> Result<()> {
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
        log::error!("TUI stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{clownfish, fish, goldfish};
    use crate::daily;
    use crate::database::FishDatabase;
    use crate::storage::MemoryStore;

    fn database() -> FishDatabase {
        FishDatabase::new(vec![
            clownfish(),
            goldfish(),
            fish("blue-tang", "Blue Tang", ["Reef", "small", "Acanthuridae", "Indo-Pacific"]),
        ])
        .unwrap()
    }

    fn press(app: &mut App<'_, MemoryStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App<'_, MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_updates_suggestions() {
        let db = database();
        let session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();
        let mut app = App::new(session);

        type_text(&mut app, "gol");
        assert_eq!(app.input_buffer, "gol");
        assert_eq!(app.suggestions.len(), 1);
        assert_eq!(app.suggestions[0].id, "goldfish");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input_buffer, "Goldfish");
    }

    #[test]
    fn enter_submits_highlighted_suggestion() {
        let db = database();
        let session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();
        let target = session.target().id.clone();
        let mut app = App::new(session);

        let partial: String = db.get(&target).unwrap().name.chars().take(3).collect();
        type_text(&mut app, &partial);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.guesses().len(), 1);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::GameOver);
    }

    #[test]
    fn unknown_name_without_suggestions_is_rejected() {
        let db = database();
        let session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();
        let mut app = App::new(session);

        type_text(&mut app, "kraken");
        press(&mut app, KeyCode::Enter);

        assert!(app.session.guesses().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn ctrl_keys_buy_hints() {
        let db = database();
        let session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();
        let mut app = App::new(session);

        app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL));

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.hints().letters_revealed(), 1);
        assert_eq!(app.session.hints().attributes_revealed(), 1);
        assert_eq!(app.session.current_score(), 85);

        let costs: Vec<_> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert!(costs[costs.len() - 2].ends_with(&format!("(-{LETTER_HINT_COST})")));
        assert!(costs[costs.len() - 1].ends_with(&format!("(-{ATTRIBUTE_HINT_COST})")));
    }

    #[test]
    fn share_only_after_game_over() {
        let db = database();
        let session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();
        let target_name = session.target().name.clone();
        let mut app = App::new(session);

        // 's' is just a letter while guessing
        press(&mut app, KeyCode::Char('s'));
        assert!(app.share_text.is_none());
        press(&mut app, KeyCode::Backspace);

        type_text(&mut app, &target_name);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('s'));

        let text = app.share_text.as_deref().unwrap();
        assert!(text.starts_with("Fishdle #1 1/∞ Score: 100"));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn guessed_fish_drop_out_of_suggestions() {
        let db = database();
        let date = (0..)
            .map(|d| daily::EPOCH + chrono::Days::new(d))
            .find(|&d| daily::select(db.as_slice(), d).unwrap().entity.id != "goldfish")
            .unwrap();
        let session = GameSession::start(&db, MemoryStore::new(), date).unwrap();
        let mut app = App::new(session);

        type_text(&mut app, "Goldfish");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "gold");
        assert!(app.suggestions.is_empty());
    }
}
