use thiserror::Error;

use crate::model::{
    NotationError, PracticeTypeError, ProgressError, QuestionError, QuizSettingsError,
    QuizSummaryError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Notation(#[from] NotationError),
    #[error(transparent)]
    PracticeType(#[from] PracticeTypeError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    QuizSettings(#[from] QuizSettingsError),
    #[error(transparent)]
    QuizSummary(#[from] QuizSummaryError),
}
