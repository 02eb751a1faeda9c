use phono_core::model::{PracticeType, QuizSettings};
use phono_core::time::{fixed_clock, fixed_now};
use services::{AdvanceOutcome, AppServices, QuizError, QuizPhase, SubmitOutcome};

#[test]
fn listen_identify_runs_to_summary() {
    let services = AppServices::builtin(fixed_clock(), QuizSettings::default());
    let practice = services.practice();

    let mut quiz = practice.start(PracticeType::ListenIdentify).unwrap();
    assert_eq!(quiz.total_questions(), 2);

    let mut summary = None;
    while !quiz.is_finished() {
        let correct = quiz.current_question().unwrap().correct().to_string();
        quiz.select_answer(&correct).unwrap();
        let SubmitOutcome::Answered(feedback) = practice.submit(&mut quiz).unwrap() else {
            panic!("answer was selected");
        };
        assert!(feedback.is_correct);
        assert!(feedback.explanation.is_some());
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
        if let AdvanceOutcome::Finished(done) = practice.advance(&mut quiz).unwrap() {
            summary = Some(done);
        }
    }

    let summary = summary.expect("session finished");
    assert_eq!(summary.correct(), 2);
    assert!(summary.is_perfect());
    assert_eq!(summary.started_at(), fixed_now());
    assert_eq!(quiz.score_label(), "2/2");
}

#[test]
fn minimal_pairs_scores_only_exact_matches() {
    let services = AppServices::builtin(fixed_clock(), QuizSettings::default());
    let practice = services.practice();
    let mut quiz = practice.start(PracticeType::MinimalPairs).unwrap();

    quiz.select_answer("sheep").unwrap();
    practice.submit(&mut quiz).unwrap();
    assert_eq!(quiz.score(), 0);
    assert_eq!(quiz.score_label(), "0/1");
    practice.advance(&mut quiz).unwrap();

    quiz.select_answer("beat").unwrap();
    practice.submit(&mut quiz).unwrap();
    assert_eq!(quiz.score_label(), "1/2");
    assert!(matches!(
        practice.advance(&mut quiz).unwrap(),
        AdvanceOutcome::Finished(_)
    ));
    assert!(matches!(
        practice.advance(&mut quiz),
        Err(QuizError::InvalidState {
            phase: QuizPhase::Finished,
            ..
        })
    ));
}

#[test]
fn session_length_follows_configured_total() {
    let services = AppServices::builtin(fixed_clock(), QuizSettings::new(1).unwrap());
    let quiz = services.practice().start(PracticeType::Transcribe).unwrap();
    assert_eq!(quiz.total_questions(), 1);
    assert_eq!(quiz.progress().percent.value(), 100);
}

#[test]
fn speak_match_has_no_quiz() {
    let services = AppServices::builtin(fixed_clock(), QuizSettings::default());
    let err = services
        .practice()
        .start(PracticeType::SpeakMatch)
        .unwrap_err();
    assert_eq!(err.to_string(), "no questions available for Speak & Match");
}
