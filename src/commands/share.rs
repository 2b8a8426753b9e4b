//! Share command

use crate::game::GameSession;
use crate::output::{ShareSink, format_share};
use crate::storage::KeyValueStore;

/// Format the session's result and send it to `sink`
///
/// Returns whether the sink accepted the text.
pub fn share_result<S: KeyValueStore, K: ShareSink + ?Sized>(
    session: &GameSession<'_, S>,
    sink: &mut K,
) -> bool {
    if !session.is_over() {
        log::info!("sharing game #{} before it is finished", session.game_index());
    }
    sink.share(&format_share(&session.share_card()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::{clownfish, goldfish};
    use crate::daily;
    use crate::database::FishDatabase;
    use crate::storage::MemoryStore;

    #[derive(Default)]
    struct Capture(Vec<String>);

    impl ShareSink for Capture {
        fn share(&mut self, text: &str) -> bool {
            self.0.push(text.to_string());
            true
        }
    }

    #[test]
    fn shares_formatted_card() {
        let db = FishDatabase::new(vec![clownfish(), goldfish()]).unwrap();
        let mut session = GameSession::start(&db, MemoryStore::new(), daily::EPOCH).unwrap();
        let target = session.target().clone();
        session.submit_guess(&target).unwrap();

        let mut sink = Capture::default();
        assert!(share_result(&session, &mut sink));
        assert_eq!(sink.0.len(), 1);
        assert!(sink.0[0].starts_with("Fishdle #1 1/∞ Score: 100"));
        assert!(sink.0[0].contains("🟩🟩🟩🟩 🏆"));
    }
}
