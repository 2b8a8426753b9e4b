//! End-to-end games against the embedded database and on-disk storage

use chrono::{Days, NaiveDate};
use fishdle::core::{FishEntity, MatchKind};
use fishdle::daily;
use fishdle::database::{FishDatabase, loader};
use fishdle::error::FishdleError;
use fishdle::game::{GameSession, GuessOutcome, PlayerStats, load_stats};
use fishdle::output::format_share;
use fishdle::storage::{FileStore, KeyValueStore, MemoryStore};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

fn wrong_guess<'a>(db: &'a FishDatabase, target: &FishEntity) -> &'a FishEntity {
    db.iter().find(|f| f.id != target.id).unwrap()
}

#[test]
fn same_date_same_target() {
    let db = loader::embedded().unwrap();
    let first = daily::select(db.as_slice(), date()).unwrap();
    let second = daily::select(db.as_slice(), date()).unwrap();
    assert_eq!(first.entity.id, second.entity.id);
    assert_eq!(first.game_index, 65);
}

#[test]
fn session_resumes_from_disk() {
    let dir = TempDir::new().unwrap();
    let db = loader::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    let (snapshot, score) = {
        let mut session = GameSession::start(&db, FileStore::new(dir.path()), date()).unwrap();
        let wrong = wrong_guess(&db, session.target());
        assert_eq!(session.submit_guess(wrong).unwrap(), GuessOutcome::Incorrect);
        session.use_letter_hint_with(&mut rng).unwrap();
        session.use_attribute_hint_with(&mut rng).unwrap();
        (session.snapshot(), session.current_score())
    };
    assert_eq!(score, 80);

    let resumed = GameSession::restore(&db, FileStore::new(dir.path()), date()).unwrap();
    assert_eq!(resumed.snapshot(), snapshot);
    assert_eq!(resumed.current_score(), 80);
    assert_eq!(resumed.hints().letters_revealed(), 1);
    assert_eq!(resumed.revealed_attributes().len(), 1);
}

#[test]
fn full_game_produces_share_text() {
    let db = loader::embedded().unwrap();
    let mut store = MemoryStore::new();
    let mut session = GameSession::start(&db, &mut store, date()).unwrap();

    let wrong = wrong_guess(&db, session.target());
    session.submit_guess(wrong).unwrap();
    let target = session.target();
    assert_eq!(session.submit_guess(target).unwrap(), GuessOutcome::Correct);

    let text = format_share(&session.share_card());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Fishdle #65 2/∞ Score: 95");
    assert_eq!(lines[1], session.guesses()[0].comparison.to_emoji());
    assert_eq!(lines[2], "🟩🟩🟩🟩 🏆");
    assert_eq!(lines[3], "Hints: 0 letters, 0 attributes");
    assert_eq!(lines[4], "#Fishdle 🐟");

    drop(session);
    assert_eq!(
        load_stats(&store),
        PlayerStats {
            games_played: 1,
            wins: 1,
            current_streak: 1,
            max_streak: 1,
        }
    );
}

#[test]
fn won_game_is_not_counted_twice_after_resume() {
    let dir = TempDir::new().unwrap();
    let db = loader::embedded().unwrap();

    {
        let mut session = GameSession::start(&db, FileStore::new(dir.path()), date()).unwrap();
        let target = session.target();
        session.submit_guess(target).unwrap();
    }

    let mut session = GameSession::start(&db, FileStore::new(dir.path()), date()).unwrap();
    assert!(session.is_over());
    assert!(session.won());
    let target = session.target();
    assert_eq!(session.submit_guess(target).unwrap(), GuessOutcome::AlreadyOver);
    assert_eq!(session.stats().wins, 1);
    assert_eq!(load_stats(session.store()).games_played, 1);
}

#[test]
fn consecutive_wins_build_a_streak() {
    let db = loader::embedded().unwrap();
    let mut store = MemoryStore::new();

    for offset in 0..3 {
        let day = date().checked_add_days(Days::new(offset)).unwrap();
        let mut session = GameSession::start(&db, &mut store, day).unwrap();
        let target = session.target();
        session.submit_guess(target).unwrap();
    }

    let stats = load_stats(&store);
    assert_eq!(stats.current_streak, 3);
    assert_eq!(stats.max_streak, 3);
    assert_eq!(stats.wins, 3);
}

#[test]
fn save_with_unknown_fish_is_rejected_or_replaced() {
    let dir = TempDir::new().unwrap();
    let db = loader::embedded().unwrap();
    let mut store = FileStore::new(dir.path());

    let bogus = r#"{
        "guesses": [{
            "entityId": "kraken",
            "comparison": {
                "habitat": {"value": "Deep Sea", "match": "wrong", "direction": null},
                "size": {"value": "giant", "match": "wrong", "direction": "down"},
                "family": {"value": "Mythidae", "match": "wrong", "direction": null},
                "region": {"value": "Atlantic", "match": "wrong", "direction": null}
            },
            "correct": false
        }],
        "hints": {"revealedLetters": [], "revealedAttributes": []},
        "isOver": false,
        "won": false
    }"#;
    store.set(&daily::day_key(date()), bogus).unwrap();

    let err = GameSession::restore(&db, FileStore::new(dir.path()), date())
        .err()
        .unwrap();
    assert!(matches!(err, FishdleError::DataIntegrity(_)));
    assert!(err.resets_session());

    let session = GameSession::start(&db, FileStore::new(dir.path()), date()).unwrap();
    assert!(session.guesses().is_empty());
    assert!(!session.is_over());
}

#[test]
fn free_text_guesses_ignore_case() {
    let db = loader::embedded().unwrap();
    let mut session = GameSession::start(&db, MemoryStore::new(), date()).unwrap();
    let name = session.target().name.to_uppercase();

    assert_eq!(
        session.submit_guess_by_name(&name).unwrap(),
        GuessOutcome::Correct
    );
    assert_eq!(session.guesses()[0].comparison.kinds(), [MatchKind::Exact; 4]);

    let err = session.submit_guess_by_name("Kraken").unwrap_err();
    assert!(matches!(err, FishdleError::NotFound(_)));
}

#[test]
fn suggestions_prefer_prefix_matches() {
    let db = loader::embedded().unwrap();
    let names: Vec<&str> = db
        .suggest("ma", 10)
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names[..2], ["Mahi-mahi", "Mandarinfish"]);
    assert!(names.contains(&"Giant Manta Ray"));
    assert!(names.contains(&"Arapaima"));
}
