use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::progress::Percentage;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("correct answer {0:?} is not one of the options")]
    CorrectNotAnOption(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizSettingsError {
    #[error("total questions must be > 0")]
    InvalidTotalQuestions,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown practice type: {0}")]
pub struct PracticeTypeError(pub String);

//
// ─── PRACTICE TYPES ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeType {
    ListenIdentify,
    SpeakMatch,
    Transcribe,
    MinimalPairs,
}

impl PracticeType {
    pub const ALL: [PracticeType; 4] = [
        Self::ListenIdentify,
        Self::SpeakMatch,
        Self::Transcribe,
        Self::MinimalPairs,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            PracticeType::ListenIdentify => "listen-identify",
            PracticeType::SpeakMatch => "speak-match",
            PracticeType::Transcribe => "transcribe",
            PracticeType::MinimalPairs => "minimal-pairs",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PracticeType::ListenIdentify => "Listen & Identify",
            PracticeType::SpeakMatch => "Speak & Match",
            PracticeType::Transcribe => "Transcribe Words",
            PracticeType::MinimalPairs => "Minimal Pairs",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PracticeType::ListenIdentify => "Hear a sound and identify the IPA symbol",
            PracticeType::SpeakMatch => "Pronounce a sound and get feedback",
            PracticeType::Transcribe => "Write the IPA transcription for words",
            PracticeType::MinimalPairs => "Distinguish between similar sounds",
        }
    }

    /// Heading shown above each question.
    #[must_use]
    pub fn instructions(self) -> &'static str {
        match self {
            PracticeType::ListenIdentify => {
                "Listen to the sound and select the correct IPA symbol"
            }
            PracticeType::SpeakMatch => "Say the sound clearly and compare it with the model",
            PracticeType::Transcribe => "Choose the IPA transcription of the word",
            PracticeType::MinimalPairs => "Listen and identify which word you hear",
        }
    }
}

impl fmt::Display for PracticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PracticeType {
    type Err = PracticeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pt| pt.id() == s)
            .ok_or_else(|| PracticeTypeError(s.to_string()))
    }
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// A selectable answer. Minimal-pair options carry the word's transcription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub value: String,
    pub transcription: Option<String>,
}

impl AnswerOption {
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            transcription: None,
        }
    }

    #[must_use]
    pub fn transcribed(value: impl Into<String>, transcription: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            transcription: Some(transcription.into()),
        }
    }
}

/// Multiple-choice question from a practice bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    audio_ref: Option<String>,
    options: Vec<AnswerOption>,
    correct: String,
    explanation: Option<String>,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, there are no options, or
    /// `correct` does not equal any option value.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
        correct: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let correct = correct.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if !options.iter().any(|option| option.value == correct) {
            return Err(QuestionError::CorrectNotAnOption(correct));
        }
        Ok(Self {
            id,
            prompt,
            audio_ref: None,
            options,
            correct,
            explanation: None,
        })
    }

    #[must_use]
    pub fn with_audio_ref(mut self, audio_ref: impl Into<String>) -> Self {
        self.audio_ref = Some(audio_ref.into());
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Sound the learner would hear; audio playback itself is out of scope.
    #[must_use]
    pub fn audio_ref(&self) -> Option<&str> {
        self.audio_ref.as_deref()
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> &str {
        &self.correct
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    /// Exact string comparison, no normalization.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct == choice
    }
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Session length configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSettings {
    total_questions: u32,
}

impl QuizSettings {
    pub const DEFAULT_TOTAL_QUESTIONS: u32 = 10;

    /// # Errors
    ///
    /// Returns `QuizSettingsError::InvalidTotalQuestions` for zero.
    pub fn new(total_questions: u32) -> Result<Self, QuizSettingsError> {
        if total_questions == 0 {
            return Err(QuizSettingsError::InvalidTotalQuestions);
        }
        Ok(Self { total_questions })
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Questions a session actually asks: the configured total, capped at the
    /// bank size so no question repeats.
    #[must_use]
    pub fn session_length(&self, bank_len: usize) -> usize {
        usize::try_from(self.total_questions)
            .unwrap_or(usize::MAX)
            .min(bank_len)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            total_questions: Self::DEFAULT_TOTAL_QUESTIONS,
        }
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuizSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("correct answers ({correct}) exceed total questions ({total})")]
    CountMismatch { correct: u32, total: u32 },
}

/// Outcome of a finished practice session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    practice_type: PracticeType,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    total: u32,
    correct: u32,
}

impl QuizSummary {
    /// # Errors
    ///
    /// Returns `QuizSummaryError` for an inverted time range or a score above
    /// the question count.
    pub fn new(
        practice_type: PracticeType,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        total: u32,
        correct: u32,
    ) -> Result<Self, QuizSummaryError> {
        if completed_at < started_at {
            return Err(QuizSummaryError::InvalidTimeRange);
        }
        if correct > total {
            return Err(QuizSummaryError::CountMismatch { correct, total });
        }
        Ok(Self {
            practice_type,
            started_at,
            completed_at,
            total,
            correct,
        })
    }

    #[must_use]
    pub fn practice_type(&self) -> PracticeType {
        self.practice_type
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn accuracy(&self) -> Percentage {
        Percentage::from_ratio(self.correct, self.total)
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn options(values: &[&str]) -> Vec<AnswerOption> {
        values.iter().map(|v| AnswerOption::plain(*v)).collect()
    }

    #[test]
    fn question_requires_correct_among_options() {
        let err = Question::new(QuestionId::new(1), "Which?", options(&["/i/", "/ɪ/"]), "/e/")
            .unwrap_err();
        assert_eq!(err, QuestionError::CorrectNotAnOption("/e/".into()));

        let err = Question::new(QuestionId::new(1), "Which?", Vec::new(), "/e/").unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);

        let err = Question::new(QuestionId::new(1), "  ", options(&["a"]), "a").unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn correctness_is_exact_string_equality() {
        let q = Question::new(QuestionId::new(1), "Which?", options(&["ship", "sheep"]), "ship")
            .unwrap();
        assert!(q.is_correct("ship"));
        assert!(!q.is_correct("Ship"));
        assert!(!q.is_correct(" ship"));
    }

    #[test]
    fn settings_cap_session_at_bank_size() {
        let settings = QuizSettings::default();
        assert_eq!(settings.total_questions(), 10);
        assert_eq!(settings.session_length(2), 2);
        assert_eq!(settings.session_length(40), 10);
        assert_eq!(QuizSettings::new(0), Err(QuizSettingsError::InvalidTotalQuestions));
    }

    #[test]
    fn practice_type_ids_round_trip() {
        for pt in PracticeType::ALL {
            assert_eq!(pt.id().parse::<PracticeType>().unwrap(), pt);
        }
        assert!("dictation".parse::<PracticeType>().is_err());
    }

    #[test]
    fn summary_validates_counts_and_time() {
        let now = fixed_now();
        let summary =
            QuizSummary::new(PracticeType::ListenIdentify, now, now + Duration::minutes(2), 2, 1)
                .unwrap();
        assert_eq!(summary.accuracy().value(), 50);
        assert!(!summary.is_perfect());

        assert_eq!(
            QuizSummary::new(PracticeType::ListenIdentify, now, now, 1, 2),
            Err(QuizSummaryError::CountMismatch { correct: 2, total: 1 })
        );
        assert_eq!(
            QuizSummary::new(PracticeType::ListenIdentify, now, now - Duration::seconds(1), 1, 1),
            Err(QuizSummaryError::InvalidTimeRange)
        );
    }
}
