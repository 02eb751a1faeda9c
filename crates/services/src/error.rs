//! Shared error types for the services crate.

use thiserror::Error;

use phono_core::model::{PracticeType, QuestionError, QuizSummaryError};

use crate::practice::{QuizAction, QuizPhase};

/// Errors emitted by the quiz engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for {0}")]
    EmptyBank(PracticeType),
    #[error("cannot {action} while the quiz is {phase}")]
    InvalidState { action: QuizAction, phase: QuizPhase },
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Summary(#[from] QuizSummaryError),
}

/// Errors emitted by `LanguageService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("{language} has no dialect named {dialect:?}")]
    UnknownDialect { language: String, dialect: String },
}
