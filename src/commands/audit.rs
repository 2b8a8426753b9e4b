//! Database audit
//!
//! Checks that every fish's attributes lie in their domains and simulates the
//! daily selection over a range of days to show how targets are spread.

use crate::daily;
use crate::database::FishDatabase;
use crate::error::{FishdleError, Result};
use chrono::{Days, NaiveDate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// How often one fish was picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickCount {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Result of auditing the database
#[derive(Debug)]
pub struct AuditReport {
    pub from: NaiveDate,
    pub days: u32,
    pub fish_count: usize,
    /// (fish id, problem) for every attribute outside its domain
    pub data_issues: Vec<(String, String)>,
    /// Picked fish, most frequent first
    pub picks: Vec<PickCount>,
    pub never_picked: Vec<String>,
    /// Days whose target equals the previous day's
    pub back_to_back: usize,
    pub duration: Duration,
}

impl AuditReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.data_issues.is_empty()
    }
}

/// Audit `database` over `days` consecutive days starting at `from`
///
/// # Errors
/// Returns `FishdleError::Configuration` if the database is empty or the
/// range runs past the supported calendar.
pub fn run_audit(
    database: &FishDatabase,
    from: NaiveDate,
    days: u32,
    show_progress: bool,
) -> Result<AuditReport> {
    let start = Instant::now();

    let data_issues = database
        .attribute_issues()
        .into_iter()
        .map(|(fish, err)| (fish.id.clone(), err.to_string()))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(u64::from(days));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} days ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let indices: Vec<usize> = (0..days)
        .into_par_iter()
        .map(|offset| {
            let index = pick_index(database, from, offset);
            pb.inc(1);
            index
        })
        .collect::<Result<_>>()?;

    pb.finish_and_clear();

    let mut counts = vec![0_usize; database.len()];
    for &index in &indices {
        counts[index] += 1;
    }

    let back_to_back = indices.windows(2).filter(|w| w[0] == w[1]).count();

    let mut picks: Vec<PickCount> = database
        .iter()
        .zip(&counts)
        .filter(|&(_, &count)| count > 0)
        .map(|(fish, &count)| PickCount {
            id: fish.id.clone(),
            name: fish.name.clone(),
            count,
        })
        .collect();
    picks.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));

    let never_picked = database
        .iter()
        .zip(&counts)
        .filter(|&(_, &count)| count == 0)
        .map(|(fish, _)| fish.id.clone())
        .collect();

    Ok(AuditReport {
        from,
        days,
        fish_count: database.len(),
        data_issues,
        picks,
        never_picked,
        back_to_back,
        duration: start.elapsed(),
    })
}

fn pick_index(database: &FishDatabase, from: NaiveDate, offset: u32) -> Result<usize> {
    let date = from
        .checked_add_days(Days::new(offset.into()))
        .ok_or_else(|| {
            FishdleError::Configuration(format!("{from} + {offset} days is out of range"))
        })?;
    Ok(daily::select(database.as_slice(), date)?.index)
}

/// Print an audit report
pub fn print_audit_report(report: &AuditReport, top: usize) {
    println!("\n{}", "═".repeat(70));
    println!(" Fish Database Audit ");
    println!("{}", "═".repeat(70));

    println!("\n🐟 {}", "Data".bright_cyan().bold());
    println!("  Fish in database:    {}", report.fish_count);
    if report.is_clean() {
        println!("  Attribute domains:   {}", "all valid".green());
    } else {
        println!(
            "  Attribute domains:   {}",
            format!("{} problem(s)", report.data_issues.len()).red()
        );
        for (id, problem) in &report.data_issues {
            println!("    • {}: {problem}", id.bright_white());
        }
    }

    println!("\n📅 {}", "Daily Selection".bright_cyan().bold());
    println!(
        "  Range:               {} + {} days",
        report.from, report.days
    );
    println!(
        "  Distinct targets:    {} of {}",
        report.picks.len(),
        report.fish_count
    );
    println!("  Back-to-back repeats: {}", report.back_to_back);
    println!(
        "  Time taken:          {:.1}ms",
        report.duration.as_secs_f64() * 1000.0
    );

    let max_count = report.picks.first().map_or(1, |p| p.count);
    println!("\n📈 {}", "Most Picked".bright_cyan().bold());
    for pick in report.picks.iter().take(top) {
        let bar_len = pick.count * 30 / max_count.max(1);
        println!(
            "  {:<28} {}{} {:4}",
            pick.name,
            "█".repeat(bar_len).green(),
            "░".repeat(30 - bar_len).bright_black(),
            pick.count
        );
    }

    if !report.never_picked.is_empty() {
        println!(
            "\n⚠️  {} {}",
            "Never picked:".yellow().bold(),
            report.never_picked.join(", ")
        );
    }
}
