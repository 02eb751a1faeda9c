pub mod articulation;
mod ids;
pub mod language;
pub mod notation;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod symbol;

pub use ids::{AchievementId, QuestionId};

pub use articulation::{ArticulationLookup, ArticulationRecord, TonguePosition};
pub use language::{Difficulty, LanguageModule, MinimalPair};
pub use notation::{NotationError, NotationRow, NotationSystem, WordTranscription};
pub use profile::{
    Achievement, ActivityEntry, ActivityKind, LanguageProgress, LearnerProfile, ProblemSound,
};
pub use progress::{MasteryStat, Percentage, ProgressError, ProgressStat, mastered_count};
pub use quiz::{
    AnswerOption, PracticeType, PracticeTypeError, Question, QuestionError, QuizSettings,
    QuizSettingsError, QuizSummary, QuizSummaryError,
};
pub use symbol::{SymbolAttributes, SymbolEntry, SymbolKind, Voicing};
