use phono_core::model::Percentage;

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub answered: usize,
    pub score: u32,
    pub percent: Percentage,
}

impl QuizProgress {
    /// `"Question 2 of 10"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }

    /// `"score/answered"`, e.g. `"1/2"`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.answered)
    }
}
