use phono_core::model::PracticeType;
use services::QuizPhase;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with, start_session};
use crate::routes::Tab;

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

#[test]
fn explorer_view_smoke_renders_chart_and_stats() {
    let html = render(ViewKind::Explorer);
    assert!(html.contains("Sound Explorer"), "missing title in {html}");
    assert!(html.contains("Diphthongs"), "missing diphthong group in {html}");
    assert!(html.contains("12/20"), "missing vowel mastery in {html}");
    assert!(
        html.contains("Select a symbol to see its details."),
        "detail should be empty without a selection: {html}"
    );
}

#[test]
fn explorer_view_smoke_shows_selected_symbol() {
    let mut harness = setup_view_harness_with(ViewKind::Explorer, Tab::Explorer, Some("p"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("/p/"), "missing symbol label in {html}");
    assert!(html.contains("voiceless bilabial plosive"), "missing description in {html}");
    assert!(html.contains("Open in Visualizer"), "missing visualizer link in {html}");
}

#[test]
fn converter_view_smoke_lists_every_row() {
    let html = render(ViewKind::Converter);
    assert!(html.contains("Showing 17 of 17 sounds"), "missing count in {html}");
    assert!(html.contains("IY"), "missing ARPAbet cell in {html}");
    assert!(html.contains("Notation Guide"), "missing guide in {html}");
}

#[test]
fn languages_view_smoke_renders_cards() {
    let html = render(ViewKind::Languages);
    assert!(html.contains("Mandarin"), "missing language card in {html}");
    assert!(html.contains("33/44 sounds mastered"), "missing English mastery in {html}");
    assert!(html.contains("+3 more"), "missing dialect overflow in {html}");
}

#[test]
fn language_detail_smoke_renders_pairs() {
    let html = render(ViewKind::LanguageDetail("french"));
    assert!(html.contains("French"), "missing language name in {html}");
    assert!(html.contains("Quebecois"), "missing dialect in {html}");
    assert!(html.contains("Minimal Pairs"), "missing pairs in {html}");
}

#[test]
fn language_detail_smoke_reports_unknown_language() {
    let html = render(ViewKind::LanguageDetail("Klingon"));
    assert!(html.contains("No language module named"), "missing miss text in {html}");
}

#[test]
fn visualizer_smoke_defaults_to_close_front_vowel() {
    let html = render(ViewKind::Visualizer);
    assert!(html.contains("Close front unrounded vowel"), "missing record in {html}");
    assert!(html.contains("1.0x"), "missing speed steps in {html}");
    assert!(html.contains("<svg"), "missing diagram in {html}");
    assert!(html.contains("cx=\"180\""), "marker not at /i/ position: {html}");
    assert!(html.contains("Pronunciation Tips"), "missing tips card in {html}");
}

#[test]
fn visualizer_smoke_reports_missing_articulation() {
    let mut harness = setup_view_harness_with(ViewKind::Visualizer, Tab::Explorer, Some("ʒ"));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No articulation data"), "missing fallback in {html}");
}

#[test]
fn practice_view_smoke_lists_practice_types() {
    let html = render(ViewKind::Practice);
    assert!(html.contains("Transcribe Words"), "missing practice type in {html}");
    assert!(html.contains("Recommended Focus"), "missing focus panel in {html}");
}

#[test]
fn quiz_panel_smoke_renders_first_question() {
    let session = start_session(PracticeType::MinimalPairs);
    assert_eq!(session.phase(), QuizPhase::Answering);

    let html = render(ViewKind::QuizInProgress(PracticeType::MinimalPairs));
    assert!(html.contains("Question 1 of 2"), "missing position in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("sheep"), "missing option in {html}");
    assert!(html.contains("Submit Answer"), "missing submit button in {html}");
}

#[test]
fn profile_view_smoke_renders_dashboard() {
    let html = render(ViewKind::Profile);
    assert!(html.contains("Phonetics Learner"), "missing name in {html}");
    assert!(html.contains("2,340"), "missing XP in {html}");
    assert!(html.contains("Jan 15, 2024"), "missing activity date in {html}");
    assert!(html.contains("Sounds to Practice"), "missing problem sounds in {html}");
}

#[test]
fn start_view_renders_configured_tab() {
    let mut harness = setup_view_harness_with(ViewKind::Start, Tab::Profile, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Phonetics Learner"), "start tab not honored: {html}");
}
