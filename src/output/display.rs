//! Display functions for command results

use super::formatters::{cell_text, create_progress_bar, name_mask};
use crate::commands::{HintKind, HintResult};
use crate::core::{Attribute, AttributeComparison, FishEntity, MatchKind};
use crate::game::{BASE_SCORE, GameSession, Guess, GuessOutcome, PlayerStats};
use crate::storage::KeyValueStore;
use colored::{ColoredString, Colorize};

const CELL_WIDTH: usize = 18;

fn paint(cell: &AttributeComparison) -> ColoredString {
    let text = format!("{:^CELL_WIDTH$}", cell_text(cell));
    match cell.kind {
        MatchKind::Exact => text.black().on_green(),
        MatchKind::Close => text.black().on_yellow(),
        MatchKind::Wrong => text.white().on_bright_black(),
    }
}

/// Print one guess as a colored board row
pub fn print_guess(turn: usize, guess: &Guess<'_>) {
    let cells: Vec<String> = Attribute::ALL
        .iter()
        .map(|&attr| paint(guess.comparison.get(attr)).to_string())
        .collect();
    println!(
        "  {:>2}. {:<24} {}",
        turn.to_string().bright_black(),
        guess.entity.name.bright_white().bold(),
        cells.join(" ")
    );
}

/// Print the board header and every guess so far
pub fn print_board<S: KeyValueStore>(session: &GameSession<'_, S>) {
    if session.guesses().is_empty() {
        println!("  {}", "No guesses yet.".bright_black());
        return;
    }
    let headers: Vec<String> = Attribute::ALL
        .iter()
        .map(|attr| format!("{:^CELL_WIDTH$}", attr.name().to_uppercase()))
        .collect();
    println!("      {:<24} {}", "", headers.join(" ").bright_cyan());
    for (i, guess) in session.guesses().iter().enumerate() {
        print_guess(i + 1, guess);
    }
}

/// Print the full game status: name mask, revealed attributes, board and score
pub fn print_status<S: KeyValueStore>(session: &GameSession<'_, S>) {
    println!("\n{}", "─".repeat(70).cyan());
    println!(
        "🐟 {} {}",
        format!("Fishdle #{}", session.game_index())
            .bright_cyan()
            .bold(),
        format!("({})", session.date()).bright_black()
    );
    println!("{}", "─".repeat(70).cyan());

    println!(
        "\n  Name:     {}",
        name_mask(&session.name_slots()).bright_yellow().bold()
    );
    for (attr, value) in session.revealed_attributes() {
        println!("  {:<9} {}", format!("{}:", capitalize(attr.name())), value);
    }
    println!();

    print_board(session);

    let score = session.current_score();
    println!(
        "\n  Score:    [{}] {}",
        create_progress_bar(f64::from(score), f64::from(BASE_SCORE), 20).green(),
        score.to_string().bright_yellow().bold()
    );

    if session.won() {
        println!(
            "\n  {}",
            format!(
                "🎉 Solved! It was the {} ({}).",
                session.target().name,
                session.target().scientific_name
            )
            .green()
            .bold()
        );
    } else {
        let mut hints = Vec::new();
        if session.can_use_letter_hint() {
            hints.push("letter");
        }
        if session.can_use_attribute_hint() {
            hints.push("attribute");
        }
        if !hints.is_empty() {
            println!(
                "  Hints:    {}",
                format!("{} available", hints.join(", ")).bright_black()
            );
        }
    }
}

/// Print what happened to a submitted guess
pub fn print_outcome<S: KeyValueStore>(outcome: GuessOutcome, session: &GameSession<'_, S>) {
    match outcome {
        GuessOutcome::Correct => println!(
            "{}",
            format!(
                "✅ Correct in {} {}! Score: {}",
                session.guesses().len(),
                if session.guesses().len() == 1 {
                    "guess"
                } else {
                    "guesses"
                },
                session.current_score()
            )
            .green()
            .bold()
        ),
        GuessOutcome::Incorrect => {
            if let Some(guess) = session.guesses().last() {
                print_guess(session.guesses().len(), guess);
            }
        }
        GuessOutcome::Duplicate => println!("{}", "Already guessed that one.".yellow()),
        GuessOutcome::AlreadyOver => {
            println!("{}", "Today's game is over. Come back tomorrow!".yellow());
        }
    }
}

/// Print a hint result
pub fn print_hint(result: &HintResult) {
    match result {
        HintResult::Letter(hint) => println!(
            "💡 Letter {} is {}",
            hint.position + 1,
            hint.letter.to_string().bright_yellow().bold()
        ),
        HintResult::Attribute(hint) => println!(
            "💡 {} is {}",
            capitalize(hint.attribute.name()),
            hint.value.bright_yellow().bold()
        ),
        HintResult::Unavailable(kind) => {
            let kind = match kind {
                HintKind::Letter => "letter",
                HintKind::Attribute => "attribute",
            };
            println!("{}", format!("No {kind} hints available.").yellow());
        }
    }
}

/// Print aggregate player stats
pub fn print_stats(stats: &PlayerStats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "FISHDLE STATS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n  Played:          {}", stats.games_played);
    println!("  Wins:            {}", stats.wins);
    println!(
        "  Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
    println!(
        "  Current streak:  {}",
        stats.current_streak.to_string().green().bold()
    );
    println!("  Max streak:      {}", stats.max_streak);
}

/// Print autocomplete suggestions for a query
pub fn print_suggestions(query: &str, matches: &[&FishEntity]) {
    if matches.is_empty() {
        println!("{}", format!("No fish match '{query}'.").yellow());
        return;
    }
    for fish in matches {
        println!(
            "  • {} {}",
            fish.name.bright_white().bold(),
            fish.scientific_name.italic().bright_black()
        );
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("habitat"), "Habitat");
        assert_eq!(capitalize(""), "");
    }
}
