use std::sync::Arc;

use phono_core::data;
use phono_core::model::{Percentage, PracticeType, QuizSettings};

use super::bank::{BuiltinQuestionBank, QuestionBank};
use super::session::{AdvanceOutcome, QuizSession, SubmitOutcome};
use crate::Clock;
use crate::error::QuizError;

/// Starts quiz sessions and drives their time-stamped transitions.
#[derive(Clone)]
pub struct PracticeService {
    clock: Clock,
    settings: QuizSettings,
    bank: Arc<dyn QuestionBank>,
}

impl PracticeService {
    #[must_use]
    pub fn new(clock: Clock, settings: QuizSettings, bank: Arc<dyn QuestionBank>) -> Self {
        Self {
            clock,
            settings,
            bank,
        }
    }

    /// Service over the compiled-in question banks.
    #[must_use]
    pub fn builtin(clock: Clock, settings: QuizSettings) -> Self {
        Self::new(clock, settings, Arc::new(BuiltinQuestionBank))
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn practice_types(&self) -> &'static [PracticeType] {
        &PracticeType::ALL
    }

    /// Per-exercise accuracy shown beside the practice picker.
    #[must_use]
    pub fn recent_performance(&self) -> &'static [(&'static str, Percentage)] {
        &data::RECENT_PERFORMANCE
    }

    #[must_use]
    pub fn recommended_focus(&self) -> &'static [&'static str] {
        &data::RECOMMENDED_FOCUS
    }

    /// Start a session for `practice_type`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` when the bank has no questions, or
    /// `QuizError::Question` if the bank cannot be built.
    pub fn start(&self, practice_type: PracticeType) -> Result<QuizSession, QuizError> {
        let bank = self.bank.questions(practice_type)?;
        let session = QuizSession::new(practice_type, bank, self.settings, self.clock.now())
            .inspect_err(|err| tracing::warn!(%practice_type, %err, "quiz not started"))?;
        tracing::info!(
            practice_type = practice_type.id(),
            questions = session.total_questions(),
            "quiz started"
        );
        Ok(session)
    }

    /// Submit the pending answer of `session`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the session is answering.
    pub fn submit(&self, session: &mut QuizSession) -> Result<SubmitOutcome, QuizError> {
        let outcome = session.submit_answer()?;
        match &outcome {
            SubmitOutcome::NothingSelected => {
                tracing::debug!("submit ignored, no answer selected");
            }
            SubmitOutcome::Answered(feedback) => {
                tracing::info!(
                    question = %feedback.question_id,
                    correct = feedback.is_correct,
                    score = session.score(),
                    "answer submitted"
                );
            }
        }
        Ok(outcome)
    }

    /// Advance `session`, finishing it at the service clock's current time.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the session is revealed.
    pub fn advance(&self, session: &mut QuizSession) -> Result<AdvanceOutcome, QuizError> {
        let outcome = session.advance(self.clock.now())?;
        if let AdvanceOutcome::Finished(summary) = &outcome {
            tracing::info!(
                practice_type = summary.practice_type().id(),
                correct = summary.correct(),
                total = summary.total(),
                accuracy = %summary.accuracy(),
                "quiz finished"
            );
        }
        Ok(outcome)
    }
}

impl std::fmt::Debug for PracticeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticeService")
            .field("clock", &self.clock)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phono_core::model::{AnswerOption, Question, QuestionError, QuestionId};
    use phono_core::time::{fixed_clock, fixed_now};

    struct RepeatingBank(u32);

    impl QuestionBank for RepeatingBank {
        fn questions(&self, _: PracticeType) -> Result<Vec<Question>, QuestionError> {
            (1..=self.0)
                .map(|id| {
                    Question::new(
                        QuestionId::new(id),
                        format!("Q{id}"),
                        vec![AnswerOption::plain("a"), AnswerOption::plain("b")],
                        "a",
                    )
                })
                .collect()
        }
    }

    #[test]
    fn builtin_banks_start_or_report_empty() {
        let service = PracticeService::builtin(fixed_clock(), QuizSettings::default());
        let quiz = service.start(PracticeType::ListenIdentify).unwrap();
        assert_eq!(quiz.total_questions(), 2);
        assert_eq!(quiz.started_at(), fixed_now());

        let pairs = service.start(PracticeType::MinimalPairs).unwrap();
        let first = pairs.current_question().unwrap();
        assert_eq!(first.options()[1].transcription.as_deref(), Some("/ʃiːp/"));

        assert_eq!(
            service.start(PracticeType::SpeakMatch).unwrap_err(),
            QuizError::EmptyBank(PracticeType::SpeakMatch)
        );
    }

    #[test]
    fn configured_total_caps_large_banks() {
        let service = PracticeService::new(
            fixed_clock(),
            QuizSettings::default(),
            Arc::new(RepeatingBank(25)),
        );
        let quiz = service.start(PracticeType::Transcribe).unwrap();
        assert_eq!(quiz.total_questions(), 10);
    }

    #[test]
    fn advance_stamps_completion_with_service_clock() {
        let service =
            PracticeService::new(fixed_clock(), QuizSettings::default(), Arc::new(RepeatingBank(1)));
        let mut quiz = service.start(PracticeType::Transcribe).unwrap();
        quiz.select_answer("a").unwrap();
        service.submit(&mut quiz).unwrap();
        let AdvanceOutcome::Finished(summary) = service.advance(&mut quiz).unwrap() else {
            panic!("expected summary");
        };
        assert!(summary.is_perfect());
        assert_eq!(summary.completed_at(), fixed_now());
    }
}
