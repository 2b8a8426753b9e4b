//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use super::hint::{HintKind, take_hint};
use super::share::share_result;
use crate::error::{FishdleError, Result};
use crate::game::{GameSession, GuessOutcome};
use crate::output::display::print_suggestions;
use crate::output::{StdoutSink, print_hint, print_outcome, print_status};
use crate::storage::KeyValueStore;
use colored::Colorize;
use std::io::{self, Write};

const SUGGESTION_LIMIT: usize = 5;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an I/O error if reading user input fails.
pub fn run_simple<S: KeyValueStore>(session: &mut GameSession<'_, S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Fishdle - Guess today's fish                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a fish name to guess. Each guess compares habitat, size,");
    println!("family and region with today's fish:\n");
    println!("  - 🟩 exact match");
    println!("  - 🟨 close (adjacent size, or a neighbouring region)");
    println!("  - ⬜ wrong");
    println!("  - ↑/↓ the fish is bigger/smaller\n");
    println!("Commands: 'hint letter', 'hint attribute', 'status', 'share',");
    println!("          'suggest <text>', 'quit'\n");

    print_status(session);

    loop {
        let input = get_user_input("\nGuess")?;
        if input.is_empty() {
            continue;
        }

        let lower = input.to_lowercase();
        let mut words = lower.split_whitespace();
        match (words.next(), words.next()) {
            (Some("quit" | "q" | "exit"), None) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            (Some("status"), None) => print_status(session),
            (Some("share"), None) => {
                share_result(session, &mut StdoutSink);
            }
            (Some("hint"), Some(kind)) => match HintKind::from_input(kind) {
                Some(kind) => print_hint(&take_hint(session, kind)),
                None => println!("❌ Use 'hint letter' or 'hint attribute'"),
            },
            (Some("suggest"), Some(_)) => {
                let query = input["suggest".len()..].trim();
                print_suggestions(query, &session.database().suggest(query, SUGGESTION_LIMIT));
            }
            _ => {
                if submit(session, &input) {
                    print_status(session);
                    println!("\n{}", "Type 'share' for your result, or 'quit'.".bright_black());
                }
            }
        }
    }
}

/// Submit a typed guess; returns whether the game was just won
fn submit<S: KeyValueStore>(session: &mut GameSession<'_, S>, input: &str) -> bool {
    match session.submit_guess_by_name(input) {
        Ok(outcome) => {
            print_outcome(outcome, session);
            outcome == GuessOutcome::Correct
        }
        Err(FishdleError::NotFound(_)) => {
            println!("❌ Unknown fish '{input}'");
            let matches = session.database().suggest(input, SUGGESTION_LIMIT);
            if !matches.is_empty() {
                println!("Did you mean:");
                print_suggestions(input, &matches);
            }
            false
        }
        Err(e) => {
            println!("{}", format!("❌ {e}").red());
            false
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
