//! Property-based tests for the quiz session state machine.

use std::sync::Arc;

use flashcards_core::model::{CardDraft, Deck, QuizSettings, Score};
use flashcards_core::time::fixed_clock;
use proptest::prelude::*;

use super::*;

// ============================================================================
// Generators
// ============================================================================

/// A deck of `n` cards whose answers are the option at `answer_idx`.
fn arb_deck() -> impl Strategy<Value = Arc<Deck>> {
    prop::collection::vec(0usize..4, 1..12).prop_map(|answers| {
        let drafts = answers.iter().enumerate().map(|(i, &answer_idx)| {
            let options: Vec<String> = (0..4).map(|o| format!("q{i}-opt{o}")).collect();
            let answer = options[answer_idx].to_uppercase();
            CardDraft::new(format!("question {i}"), options, answer)
        });
        Arc::new(Deck::from_drafts(None, drafts).expect("generated deck is valid"))
    })
}

/// Per-card plan: whether to answer correctly and how many extra submissions follow.
fn arb_plan() -> impl Strategy<Value = Vec<(bool, usize)>> {
    prop::collection::vec((any::<bool>(), 0usize..3), 12)
}

fn session(deck: Arc<Deck>, seed: u64) -> QuizSession {
    QuizSession::with_seed(deck, QuizSettings::default(), fixed_clock(), seed)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn full_run_scores_every_card_once(deck in arb_deck(), plan in arb_plan(), seed in any::<u64>()) {
        let n = deck.len();
        let mut session = session(Arc::clone(&deck), seed);
        let mut expected = Score::default();

        for (i, &(answer_right, extra)) in plan.iter().take(n).enumerate() {
            prop_assert_eq!(session.phase(), SessionPhase::Presenting(i));
            let card = session.current_card().clone();
            let choice = if answer_right {
                card.answer().to_owned()
            } else {
                "definitely not an option".to_owned()
            };

            session.submit_answer(&choice).unwrap();
            expected.record(answer_right);
            let after_first = session.score();

            for _ in 0..extra {
                session.submit_answer(card.answer()).unwrap();
                prop_assert_eq!(session.score(), after_first);
            }
            session.advance().unwrap();
        }

        prop_assert!(session.is_finished());
        let final_score = session.final_score().unwrap();
        prop_assert_eq!(final_score, expected);
        prop_assert_eq!(final_score.answered() as usize, n);
    }

    #[test]
    fn displayed_options_are_a_permutation(deck in arb_deck(), seed in any::<u64>()) {
        let mut session = session(Arc::clone(&deck), seed);
        loop {
            let mut shown: Vec<String> =
                session.displayed_options().into_iter().map(str::to_owned).collect();
            let mut stored: Vec<String> = session
                .current_card()
                .options()
                .iter()
                .map(|o| o.as_str().to_owned())
                .collect();
            shown.sort();
            stored.sort();
            prop_assert_eq!(shown, stored);

            session.submit_selected().unwrap();
            if let Advance::Finished(_) = session.advance().unwrap() {
                break;
            }
        }
    }

    #[test]
    fn invalid_transitions_never_touch_the_score(deck in arb_deck(), seed in any::<u64>()) {
        let mut session = session(deck, seed);
        prop_assert!(session.advance().is_err());
        prop_assert_eq!(session.score(), Score::default());

        while !session.is_finished() {
            session.submit_selected().unwrap();
            session.advance().unwrap();
        }
        let before = session.score();
        prop_assert!(session.submit_answer("anything").is_err());
        prop_assert!(session.advance().is_err());
        prop_assert_eq!(session.score(), before);
    }
}
