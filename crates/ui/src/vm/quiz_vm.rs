use phono_core::model::{PracticeType, QuizSummary};
use services::{AdvanceOutcome, QuizError, QuizPhase, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeTypeCardVm {
    pub practice_type: PracticeType,
    pub name: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn map_practice_types(types: &[PracticeType]) -> Vec<PracticeTypeCardVm> {
    types
        .iter()
        .map(|practice_type| PracticeTypeCardVm {
            practice_type: *practice_type,
            name: practice_type.name(),
            description: practice_type.description(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "quiz-option",
            OptionState::Selected => "quiz-option quiz-option--selected",
            OptionState::Correct => "quiz-option quiz-option--correct",
            OptionState::Incorrect => "quiz-option quiz-option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub value: String,
    pub transcription: Option<String>,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub headline: String,
    pub explanation: Option<String>,
}

/// Everything the quiz screen renders for one session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub title: &'static str,
    pub instructions: &'static str,
    pub position_label: String,
    pub score_label: String,
    pub progress_pct: u8,
    pub prompt: String,
    pub audio_label: Option<String>,
    pub options: Vec<QuizOptionVm>,
    pub can_select: bool,
    pub can_submit: bool,
    pub feedback: Option<FeedbackVm>,
    pub next_label: &'static str,
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> Option<QuizScreenVm> {
    let question = session.current_question()?;
    let progress = session.progress();
    let revealed = session.phase() == QuizPhase::Revealed;
    let selected = session.selected_answer();
    let feedback = session.feedback();

    let options = question
        .options()
        .iter()
        .map(|option| {
            let state = if revealed {
                if question.is_correct(&option.value) {
                    OptionState::Correct
                } else if feedback.is_some_and(|f| f.chosen == option.value) {
                    OptionState::Incorrect
                } else {
                    OptionState::Idle
                }
            } else if selected == Some(option.value.as_str()) {
                OptionState::Selected
            } else {
                OptionState::Idle
            };
            QuizOptionVm {
                value: option.value.clone(),
                transcription: option.transcription.clone(),
                state,
            }
        })
        .collect();

    let feedback = feedback.map(|f| FeedbackVm {
        is_correct: f.is_correct,
        headline: if f.is_correct {
            "Correct!".to_string()
        } else {
            format!("Not quite. The answer is {}", f.correct_answer)
        },
        explanation: f.explanation.clone(),
    });

    let last = progress.position == progress.total;
    Some(QuizScreenVm {
        title: session.practice_type().name(),
        instructions: session.practice_type().instructions(),
        position_label: progress.position_label(),
        score_label: format!("Score: {}", progress.score_label()),
        progress_pct: progress.percent.value(),
        prompt: question.prompt().to_string(),
        audio_label: question.audio_ref().map(|sound| format!("Play {sound}")),
        options,
        can_select: !revealed,
        can_submit: !revealed && selected.is_some(),
        feedback,
        next_label: if last { "Finish" } else { "Next Question" },
    })
}

/// Banner shown on the picker after a session ends.
#[must_use]
pub fn summary_banner(summary: &QuizSummary) -> String {
    format!(
        "{} complete: {}/{} correct ({})",
        summary.practice_type().name(),
        summary.correct(),
        summary.total(),
        summary.accuracy()
    )
}

/// Which practice screen follows an advance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PracticeScreen {
    /// Keep showing the quiz at its next question.
    Quiz,
    /// Drop the session and return to the practice-type picker with a banner.
    Picker { banner: String },
}

#[must_use]
pub fn screen_after_advance(outcome: &AdvanceOutcome) -> PracticeScreen {
    match outcome {
        AdvanceOutcome::Next => PracticeScreen::Quiz,
        AdvanceOutcome::Finished(summary) => PracticeScreen::Picker {
            banner: summary_banner(summary),
        },
    }
}

/// Short user-facing message for a quiz failure.
#[must_use]
pub fn quiz_error_message(err: &QuizError) -> String {
    match err {
        QuizError::EmptyBank(practice_type) => {
            format!("{} has no questions yet.", practice_type.name())
        }
        _ => "Something went wrong. Please try again.".to_string(),
    }
}
