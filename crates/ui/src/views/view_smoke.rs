use chrono::Duration;
use dioxus::prelude::*;
use flashcards_core::model::{Score, SessionSummary};
use flashcards_core::time::fixed_now;

use super::SummaryView;
use super::test_harness::{card, setup_quiz_harness};
use crate::vm::{QuizIntent, SummaryVm};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_card() {
    let mut harness = setup_quiz_harness(vec![
        card("2+2?", ["3", "4", "5", "6"], "4"),
        card("Capital of France?", ["Rome", "Paris", "Oslo", "Bern"], "Paris"),
    ])
    .await;

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("2+2?"), "missing question in {html}");
    assert!(!html.contains("Capital of France?"), "second card leaked into {html}");
    assert!(html.contains("1 / 2"), "missing progress label in {html}");
    assert!(
        html.contains("score-counter__correct\">0</span>"),
        "missing correct counter in {html}"
    );
    assert!(
        html.contains("score-counter__wrong\">0</span>"),
        "missing wrong counter in {html}"
    );
    for option in ["3", "4", "5", "6"] {
        let value = format!("value=\"{option}\"");
        assert!(html.contains(&value), "missing option {option} in {html}");
    }
    assert!(html.contains("Next"), "missing Next button in {html}");
    assert!(!html.contains("quiz-result"), "feedback shown before answering: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_single_card_deck() {
    let mut harness = setup_quiz_harness(vec![card(
        "Largest planet?",
        ["Mars", "Venus", "Jupiter", "Earth"],
        "Jupiter",
    )])
    .await;

    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Largest planet?"), "missing question in {html}");
    assert!(html.contains("1 / 1"), "missing progress label in {html}");
    assert!(html.contains("width: 0%;"), "progress bar should start empty: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_advances_after_feedback_and_ends_on_summary() {
    let mut harness = setup_quiz_harness(vec![
        card("2+2?", ["3", "4", "5", "6"], "4"),
        card("Capital of France?", ["Rome", "Paris", "Oslo", "Bern"], "Paris"),
    ])
    .await;
    harness.rebuild();

    harness.dispatch(QuizIntent::Select("4".into()));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(html.contains("🌷 Correct!"), "missing feedback in {html}");
    assert!(html.contains("2+2?"), "advanced before the delay: {html}");
    assert!(
        html.contains("score-counter__correct\">1</span>"),
        "correct counter not bumped in {html}"
    );

    let html = harness.drive_until("Capital of France?").await;
    assert!(html.contains("Capital of France?"), "second card never shown: {html}");
    assert!(html.contains("2 / 2"), "missing progress label in {html}");
    assert!(!html.contains("quiz-result"), "stale feedback on new card: {html}");

    harness.dispatch(QuizIntent::Select("Rome".into()));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    assert!(
        html.contains("🌼 Wrong! The correct answer is “Paris”"),
        "missing wrong feedback in {html}"
    );

    let html = harness.drive_until("🎉 Congratulations! 🎉").await;
    assert!(html.contains("🎉 Congratulations! 🎉"), "summary never shown: {html}");
    assert!(html.contains("You got 1 correct and 1 wrong!"), "wrong tally in {html}");
    assert!(!html.contains("quiz-question"), "quiz still rendered: {html}");
}

#[test]
fn summary_view_smoke_renders_counts() {
    let start = fixed_now();
    let summary =
        SessionSummary::new(4, Score::new(3, 1), start, start + Duration::seconds(75)).unwrap();
    let vm = SummaryVm::from(&summary);

    let html = dioxus_ssr::render_element(rsx! { SummaryView { summary: vm } });

    assert!(html.contains("🎉 Congratulations! 🎉"), "missing title in {html}");
    assert!(html.contains("You got 3 correct and 1 wrong!"), "missing headline in {html}");
    assert!(html.contains("75%"), "missing accuracy in {html}");
    assert!(html.contains("1m 15s"), "missing elapsed time in {html}");
    assert!(html.contains("Close"), "missing close button in {html}");
}
