use chrono::{DateTime, Utc};
use std::fmt;

use phono_core::model::{Percentage, PracticeType, Question, QuestionId, QuizSettings, QuizSummary};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where a quiz session is in its answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    /// Waiting for the learner to pick and submit an option.
    Answering,
    /// The answer was checked; feedback is visible.
    Revealed,
    /// Every question has been answered.
    Finished,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizPhase::Answering => "answering",
            QuizPhase::Revealed => "revealed",
            QuizPhase::Finished => "finished",
        })
    }
}

/// Transition attempted on a session, reported by `QuizError::InvalidState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAction {
    Select,
    Submit,
    Advance,
}

impl fmt::Display for QuizAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuizAction::Select => "select an answer",
            QuizAction::Submit => "submit an answer",
            QuizAction::Advance => "advance",
        })
    }
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of checking a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_id: QuestionId,
    pub chosen: String,
    pub is_correct: bool,
    pub correct_answer: String,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No option was selected; the session is unchanged.
    NothingSelected,
    Answered(AnswerFeedback),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the next question.
    Next,
    Finished(QuizSummary),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz over a fixed list of questions.
///
/// The cycle is `Answering -> Revealed -> Answering`, ending in `Finished` after the
/// last question is revealed and advanced. The score only ever grows and never
/// exceeds the number of answered questions.
#[derive(Clone)]
pub struct QuizSession {
    practice_type: PracticeType,
    questions: Vec<Question>,
    current: usize,
    selected: Option<String>,
    score: u32,
    phase: QuizPhase,
    feedback: Option<AnswerFeedback>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Start a session over at most `settings.total_questions()` questions from `bank`.
    ///
    /// The bank is never cycled: a bank shorter than the configured total yields a
    /// shorter session.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if `bank` is empty.
    pub fn new(
        practice_type: PracticeType,
        mut bank: Vec<Question>,
        settings: QuizSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        bank.truncate(settings.session_length(bank.len()));
        if bank.is_empty() {
            return Err(QuizError::EmptyBank(practice_type));
        }

        Ok(Self {
            practice_type,
            questions: bank,
            current: 0,
            selected: None,
            score: 0,
            phase: QuizPhase::Answering,
            feedback: None,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn practice_type(&self) -> PracticeType {
        self.practice_type
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// Zero-based index of the question on screen.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// The question being answered or reviewed; `None` once finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Feedback for the last submitted answer, present while `Revealed`.
    #[must_use]
    pub fn feedback(&self) -> Option<&AnswerFeedback> {
        self.feedback.as_ref()
    }

    /// Questions whose answers have been checked.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        match self.phase {
            QuizPhase::Answering => self.current,
            QuizPhase::Revealed => self.current + 1,
            QuizPhase::Finished => self.questions.len(),
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        self.progress().score_label()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        let total = self.questions.len();
        let position = (self.current + 1).min(total);
        QuizProgress {
            position,
            total,
            answered: self.answered_count(),
            score: self.score,
            percent: Percentage::from_ratio(to_u32(position), to_u32(total)),
        }
    }

    /// Record `choice` as the pending answer. An empty choice clears the selection.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the session is `Answering`.
    pub fn select_answer(&mut self, choice: &str) -> Result<(), QuizError> {
        self.require(QuizAction::Select, QuizPhase::Answering)?;
        self.selected = if choice.is_empty() {
            None
        } else {
            Some(choice.to_string())
        };
        Ok(())
    }

    /// Check the pending answer against the current question.
    ///
    /// Without a selection this does nothing and returns `NothingSelected`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the session is `Answering`.
    pub fn submit_answer(&mut self) -> Result<SubmitOutcome, QuizError> {
        self.require(QuizAction::Submit, QuizPhase::Answering)?;
        let Some(chosen) = self.selected.clone() else {
            return Ok(SubmitOutcome::NothingSelected);
        };
        let Some(question) = self.questions.get(self.current) else {
            return Err(self.invalid(QuizAction::Submit));
        };

        let is_correct = question.is_correct(&chosen);
        let feedback = AnswerFeedback {
            question_id: question.id(),
            chosen,
            is_correct,
            correct_answer: question.correct().to_string(),
            explanation: question.explanation().map(str::to_string),
        };
        if is_correct {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealed;
        self.feedback = Some(feedback.clone());
        Ok(SubmitOutcome::Answered(feedback))
    }

    /// Move past a revealed answer.
    ///
    /// After the last question the session finishes at `now` and its summary is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the session is `Revealed`, or
    /// `QuizError::Summary` if `now` precedes the start time.
    pub fn advance(&mut self, now: DateTime<Utc>) -> Result<AdvanceOutcome, QuizError> {
        self.require(QuizAction::Advance, QuizPhase::Revealed)?;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.feedback = None;
            self.phase = QuizPhase::Answering;
            return Ok(AdvanceOutcome::Next);
        }

        let summary = QuizSummary::new(
            self.practice_type,
            self.started_at,
            now,
            to_u32(self.questions.len()),
            self.score,
        )?;
        self.selected = None;
        self.feedback = None;
        self.phase = QuizPhase::Finished;
        self.completed_at = Some(now);
        Ok(AdvanceOutcome::Finished(summary))
    }

    fn require(&self, action: QuizAction, expected: QuizPhase) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn invalid(&self, action: QuizAction) -> QuizError {
        QuizError::InvalidState {
            action,
            phase: self.phase,
        }
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("practice_type", &self.practice_type)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use phono_core::model::AnswerOption;
    use phono_core::time::fixed_now;

    fn question(id: u32, correct: &str) -> Question {
        Question::new(
            QuestionId::new(id),
            "Which symbol matches the sound?",
            vec![AnswerOption::plain("/i/"), AnswerOption::plain("/ɪ/")],
            correct,
        )
        .unwrap()
        .with_explanation("close front vowel")
    }

    fn session(len: u32) -> QuizSession {
        let bank = (1..=len).map(|id| question(id, "/i/")).collect();
        QuizSession::new(
            PracticeType::ListenIdentify,
            bank,
            QuizSettings::default(),
            fixed_now(),
        )
        .unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        let err = QuizSession::new(
            PracticeType::SpeakMatch,
            Vec::new(),
            QuizSettings::default(),
            fixed_now(),
        )
        .unwrap_err();
        assert_eq!(err, QuizError::EmptyBank(PracticeType::SpeakMatch));
    }

    #[test]
    fn length_is_capped_by_settings_and_bank() {
        assert_eq!(session(2).total_questions(), 2);
        assert_eq!(session(14).total_questions(), 10);

        let bank = (1..=5).map(|id| question(id, "/i/")).collect();
        let short = QuizSession::new(
            PracticeType::Transcribe,
            bank,
            QuizSettings::new(3).unwrap(),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(short.total_questions(), 3);
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut quiz = session(2);
        assert_eq!(quiz.submit_answer().unwrap(), SubmitOutcome::NothingSelected);
        assert_eq!(quiz.phase(), QuizPhase::Answering);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.answered_count(), 0);
    }

    #[test]
    fn empty_choice_clears_selection() {
        let mut quiz = session(1);
        quiz.select_answer("/ɪ/").unwrap();
        assert_eq!(quiz.selected_answer(), Some("/ɪ/"));
        quiz.select_answer("").unwrap();
        assert_eq!(quiz.selected_answer(), None);
    }

    #[test]
    fn correct_answer_scores_and_reveals() {
        let mut quiz = session(2);
        quiz.select_answer("/i/").unwrap();
        let SubmitOutcome::Answered(feedback) = quiz.submit_answer().unwrap() else {
            panic!("expected feedback");
        };
        assert!(feedback.is_correct);
        assert_eq!(feedback.correct_answer, "/i/");
        assert_eq!(feedback.explanation.as_deref(), Some("close front vowel"));
        assert_eq!(quiz.phase(), QuizPhase::Revealed);
        assert_eq!(quiz.score_label(), "1/1");
    }

    #[test]
    fn comparison_is_exact() {
        let mut quiz = session(1);
        quiz.select_answer("i").unwrap();
        let SubmitOutcome::Answered(feedback) = quiz.submit_answer().unwrap() else {
            panic!("expected feedback");
        };
        assert!(!feedback.is_correct);
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn invalid_transitions_are_reported() {
        let mut quiz = session(2);
        assert_eq!(
            quiz.advance(fixed_now()).unwrap_err(),
            QuizError::InvalidState {
                action: QuizAction::Advance,
                phase: QuizPhase::Answering,
            }
        );

        quiz.select_answer("/i/").unwrap();
        quiz.submit_answer().unwrap();
        assert_eq!(
            quiz.submit_answer().unwrap_err(),
            QuizError::InvalidState {
                action: QuizAction::Submit,
                phase: QuizPhase::Revealed,
            }
        );
        assert!(matches!(
            quiz.select_answer("/ɪ/"),
            Err(QuizError::InvalidState { .. })
        ));
    }

    #[test]
    fn advance_moves_on_then_finishes_with_summary() {
        let mut quiz = session(2);
        quiz.select_answer("/i/").unwrap();
        quiz.submit_answer().unwrap();
        assert_eq!(quiz.advance(fixed_now()).unwrap(), AdvanceOutcome::Next);
        assert_eq!(quiz.current_index(), 1);
        assert_eq!(quiz.selected_answer(), None);
        assert!(quiz.feedback().is_none());
        assert_eq!(quiz.progress().position_label(), "Question 2 of 2");
        assert_eq!(quiz.score_label(), "1/1");

        quiz.select_answer("/ɪ/").unwrap();
        quiz.submit_answer().unwrap();
        let done = fixed_now() + Duration::minutes(2);
        let AdvanceOutcome::Finished(summary) = quiz.advance(done).unwrap() else {
            panic!("expected summary");
        };
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.correct(), 1);
        assert_eq!(summary.accuracy().value(), 50);
        assert!(quiz.is_finished());
        assert!(quiz.current_question().is_none());
        assert_eq!(quiz.completed_at(), Some(done));
        assert_eq!(quiz.score_label(), "1/2");
    }

    #[test]
    fn progress_percent_floors() {
        let mut quiz = session(3);
        assert_eq!(quiz.progress().percent.value(), 33);
        quiz.select_answer("/i/").unwrap();
        quiz.submit_answer().unwrap();
        quiz.advance(fixed_now()).unwrap();
        assert_eq!(quiz.progress().percent.value(), 66);
    }

    #[test]
    fn score_never_exceeds_answered() {
        let mut quiz = session(4);
        for _ in 0..4 {
            quiz.select_answer("/i/").unwrap();
            quiz.submit_answer().unwrap();
            assert!(quiz.score() as usize <= quiz.current_index() + 1);
            quiz.advance(fixed_now()).unwrap();
        }
        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 4);
    }
}
