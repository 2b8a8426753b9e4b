//! Fishdle - CLI
//!
//! Daily fish guessing game with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use fishdle::{
    commands::{
        HintKind, print_audit_report, render_silhouette, run_audit, run_simple, share_result,
        take_hint,
    },
    config::{DATA_DIR_ENV, Settings, log_level},
    daily,
    database::FishDatabase,
    error::FishdleError,
    game::{GameSession, load_stats},
    interactive::{App, run_tui},
    output::{
        FileSink, ShareSink, StdoutSink, display::print_suggestions, print_hint, print_outcome,
        print_stats, print_status,
    },
    storage::AnyStore,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fishdle",
    about = "Guess the fish of the day from its habitat, size, family and region",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved games and stats
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Fish database JSON file (default: built-in database)
    #[arg(long, global = true)]
    database: Option<PathBuf>,

    /// Play the game of another day (YYYY-MM-DD, default: today in UTC)
    #[arg(long, global = true)]
    date: Option<String>,

    /// Do not save progress
    #[arg(long, global = true)]
    memory: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Submit one guess
    Guess {
        /// Common or scientific name
        name: String,
    },

    /// Buy a hint
    Hint {
        #[arg(value_enum)]
        kind: HintKind,
    },

    /// Show today's board
    Status,

    /// Print or save the share text
    Share {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show your stats
    Stats,

    /// List fish whose name matches a query
    Suggest {
        query: String,

        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Check the database and the spread of daily targets
    Audit {
        /// Number of days to simulate
        #[arg(short = 'd', long, default_value = "365")]
        days: u32,

        /// First day to simulate (default: --date or today)
        #[arg(short, long)]
        from: Option<String>,

        /// Most-picked fish to list
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Print a fish's silhouette SVG
    Silhouette {
        /// Common or scientific name
        name: String,

        /// Directory holding silhouette assets
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    let settings = Settings::resolve(
        cli.data_dir,
        cli.database,
        cli.date.as_deref(),
        cli.memory,
    )?;
    log::debug!("settings: {settings:?}");

    let db = settings
        .load_database()
        .context("failed to load the fish database")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&settings, &db),
        Commands::Simple => {
            let mut session = start_session(&settings, &db)?;
            run_simple(&mut session).context("line mode failed")
        }
        Commands::Guess { name } => run_guess_command(&settings, &db, &name),
        Commands::Hint { kind } => {
            let mut session = start_session(&settings, &db)?;
            print_hint(&take_hint(&mut session, kind));
            Ok(())
        }
        Commands::Status => {
            print_status(&start_session(&settings, &db)?);
            Ok(())
        }
        Commands::Share { out } => run_share_command(&settings, &db, out),
        Commands::Stats => {
            print_stats(&load_stats(&settings.open_store()));
            Ok(())
        }
        Commands::Suggest { query, limit } => {
            print_suggestions(&query, &db.suggest(&query, limit));
            Ok(())
        }
        Commands::Audit { days, from, top } => {
            let from = match from {
                Some(text) => daily::parse_date(&text)?,
                None => settings.date,
            };
            println!("Simulating {days} days from {from}...");
            let report = run_audit(&db, from, days, true)?;
            print_audit_report(&report, top);
            Ok(())
        }
        Commands::Silhouette { name, assets, out } => {
            run_silhouette_command(&db, &name, assets, out)
        }
    }
}

fn start_session<'db>(
    settings: &Settings,
    db: &'db FishDatabase,
) -> Result<GameSession<'db, AnyStore>> {
    GameSession::start(db, settings.open_store(), settings.date)
        .with_context(|| format!("cannot start the game for {}", settings.date))
}

fn run_play_command(settings: &Settings, db: &FishDatabase) -> Result<()> {
    let mut app = App::new(start_session(settings, db)?);
    run_tui(&mut app)?;

    if let Some(text) = app.share_text {
        StdoutSink.share(&text);
    }
    Ok(())
}

fn run_guess_command(settings: &Settings, db: &FishDatabase, name: &str) -> Result<()> {
    let mut session = start_session(settings, db)?;
    match session.submit_guess_by_name(name) {
        Ok(outcome) => {
            print_outcome(outcome, &session);
            print_status(&session);
            Ok(())
        }
        Err(FishdleError::NotFound(_)) => {
            println!("{}", format!("❌ Unknown fish '{name}'").red());
            let matches = db.suggest(name, 5);
            if !matches.is_empty() {
                println!("Did you mean:");
                print_suggestions(name, &matches);
            }
            bail!("no fish matches '{name}'")
        }
        Err(e) => Err(e).context("guess rejected"),
    }
}

fn run_share_command(settings: &Settings, db: &FishDatabase, out: Option<PathBuf>) -> Result<()> {
    let session = start_session(settings, db)?;
    let delivered = match out {
        Some(path) => share_result(&session, &mut FileSink::new(path)),
        None => share_result(&session, &mut StdoutSink),
    };
    if !delivered {
        bail!("could not deliver the share text");
    }
    Ok(())
}

fn run_silhouette_command(
    db: &FishDatabase,
    name: &str,
    assets: Option<PathBuf>,
    out: Option<PathBuf>,
) -> Result<()> {
    let silhouette = render_silhouette(db, name, assets.as_deref())?;
    if silhouette.is_fallback() {
        log::info!("using a procedural outline for '{name}'");
    }

    match out {
        Some(path) => fs::write(&path, silhouette.markup())
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => println!("{}", silhouette.markup()),
    }
    Ok(())
}
