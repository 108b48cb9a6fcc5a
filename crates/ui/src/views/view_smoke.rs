use std::sync::Arc;

use quiz_core::model::{CourseId, Question};

use crate::vm::QuizIntent;

use super::test_harness::{
    CannedExplainer, ViewKind, disabled_explainer, sample_bank, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz, sample_bank(), Arc::new(CannedExplainer)).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 / 2 (course "), "missing header in {html}");
    assert!(html.contains("Score so far: 0 / 2"), "missing score in {html}");
    assert!(html.contains("1. "), "missing choice labels in {html}");
    assert!(
        html.contains("Validate and go to next question"),
        "missing submit in {html}"
    );
    assert!(!html.contains("Correct answer"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_plays_a_perfect_run() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz, sample_bank(), Arc::new(CannedExplainer)).await;
    harness.rebuild();
    harness.drive_async().await;

    let correct = harness.correct_choice().expect("first question on screen");
    harness.dispatch(QuizIntent::Choose(correct)).await;
    harness.dispatch(QuizIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains("✅ Correct answer!"), "missing success in {html}");
    assert!(html.contains("<strong>payslips</strong>"), "missing explanation in {html}");
    assert!(html.contains("Question 2 / 2"), "missing second question in {html}");
    assert!(html.contains("Score so far: 1 / 2"), "missing score in {html}");

    let correct = harness.correct_choice().expect("second question on screen");
    harness.dispatch(QuizIntent::Choose(correct)).await;
    harness.dispatch(QuizIntent::Submit).await;

    let html = harness.render();
    assert!(
        html.contains("Final score: 2 / 2 (100.0%)"),
        "missing final score in {html}"
    );
    assert!(
        html.contains("Perfect, you have mastered this material!"),
        "missing tier message in {html}"
    );
    assert!(!html.contains("Validate and go"), "question still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_warning_without_credential() {
    let mut harness = setup_view_harness(ViewKind::Quiz, sample_bank(), disabled_explainer()).await;
    harness.rebuild();
    harness.drive_async().await;

    let correct = harness.correct_choice().expect("question on screen");
    let wrong = if correct == 0 { 1 } else { 0 };
    harness.dispatch(QuizIntent::Choose(wrong)).await;
    harness.dispatch(QuizIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains("❌ Wrong answer."), "missing error in {html}");
    assert!(
        html.contains(&format!("Correct answer: {}.", correct + 1)),
        "missing correct answer in {html}"
    );
    assert!(
        html.contains("Explanations are not configured"),
        "missing warning in {html}"
    );
    assert!(html.contains("Score so far: 0 / 2"), "score changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_ignores_submit_without_choice() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz, sample_bank(), Arc::new(CannedExplainer)).await;
    harness.rebuild();
    harness.drive_async().await;

    harness.dispatch(QuizIntent::Submit).await;

    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "question advanced in {html}");
    assert!(!html.contains("Correct answer"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_state() {
    let mut harness =
        setup_view_harness(ViewKind::Quiz, Vec::new(), Arc::new(CannedExplainer)).await;
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("No questions available for this course"),
        "missing empty state in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_lists_courses() {
    let mut harness =
        setup_view_harness(ViewKind::Sidebar, sample_bank(), disabled_explainer()).await;
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("in-memory question bank"), "missing source in {html}");
    assert!(html.contains(">All</option>"), "missing All option in {html}");
    assert!(html.contains(">1</option>"), "missing course 1 in {html}");
    assert!(html.contains(">2</option>"), "missing course 2 in {html}");
    assert!(html.contains("value=\"2\""), "missing third option in {html}");
    assert!(html.contains("(Re)start the quiz"), "missing restart in {html}");
    assert!(html.contains("Explanations: off"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_smoke_keys_options_by_position() {
    let bank = vec![
        Question::new("Q1", vec!["a".into(), "b".into()], 0, CourseId::number(2)).unwrap(),
        Question::new("Q2", vec!["a".into(), "b".into()], 1, CourseId::name("2")).unwrap(),
        Question::new("Q3", vec!["a".into(), "b".into()], 0, CourseId::name("All")).unwrap(),
    ];
    let mut harness = setup_view_harness(ViewKind::Sidebar, bank, disabled_explainer()).await;
    harness.rebuild();

    let html = harness.render();
    for value in ["0", "1", "2", "3"] {
        assert!(
            html.contains(&format!("value=\"{value}\"")),
            "missing option {value} in {html}"
        );
    }
    assert!(!html.contains("value=\"All\""), "label used as value in {html}");
    assert_eq!(html.matches("<option").count(), 4, "options in {html}");
}
