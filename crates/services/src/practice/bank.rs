use phono_core::data;
use phono_core::model::{PracticeType, Question, QuestionError};

/// Source of quiz questions per practice type.
pub trait QuestionBank: Send + Sync {
    /// Questions for `practice_type`, in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if a question cannot be built.
    fn questions(&self, practice_type: PracticeType) -> Result<Vec<Question>, QuestionError>;
}

/// The compiled-in question banks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinQuestionBank;

impl QuestionBank for BuiltinQuestionBank {
    fn questions(&self, practice_type: PracticeType) -> Result<Vec<Question>, QuestionError> {
        data::question_bank(practice_type)
    }
}
