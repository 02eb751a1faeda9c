#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod explorer_service;
pub mod language_service;
pub mod notation_service;
pub mod practice;
pub mod profile_service;

pub use phono_core::Clock;

pub use app_services::AppServices;
pub use error::{LanguageError, QuizError};
pub use explorer_service::{ExplorerService, ExplorerStats};
pub use language_service::{DialectSelection, LanguageService};
pub use notation_service::NotationService;
pub use practice::{
    AdvanceOutcome, AnswerFeedback, BuiltinQuestionBank, PracticeService, QuestionBank,
    QuizAction, QuizPhase, QuizProgress, QuizSession, SubmitOutcome,
};
pub use profile_service::{ProfileDashboard, ProfileService};
