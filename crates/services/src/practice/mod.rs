mod bank;
mod progress;
mod service;
mod session;

// Public API of the practice subsystem.
pub use crate::error::QuizError;
pub use bank::{BuiltinQuestionBank, QuestionBank};
pub use progress::QuizProgress;
pub use service::PracticeService;
pub use session::{AdvanceOutcome, AnswerFeedback, QuizAction, QuizPhase, QuizSession, SubmitOutcome};
