use chrono::NaiveDate;
use serde::Serialize;

use crate::model::ids::AchievementId;
use crate::model::progress::{MasteryStat, Percentage, mastered_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

/// Per-language progress row of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageProgress {
    pub language: &'static str,
    pub progress: Percentage,
    pub sounds: u32,
}

impl LanguageProgress {
    #[must_use]
    pub fn mastered(&self) -> u32 {
        mastered_count(self.progress, self.sounds)
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.sounds - self.mastered()
    }

    #[must_use]
    pub fn as_mastery(&self) -> MasteryStat {
        MasteryStat::new(self.language, self.mastered(), self.sounds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Practice,
    Learning,
    Challenge,
    Review,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    /// ISO `YYYY-MM-DD`.
    pub date: &'static str,
    pub activity: &'static str,
    pub score: &'static str,
    pub kind: ActivityKind,
}

impl ActivityEntry {
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProblemSound {
    pub sound: &'static str,
    pub language: &'static str,
    pub attempts: u32,
    pub accuracy: Percentage,
}

/// Header figures of the learner profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearnerProfile {
    pub display_name: &'static str,
    pub initials: &'static str,
    pub learning_since: &'static str,
    pub rank: &'static str,
    pub level: u32,
    pub xp: u32,
    pub level_progress: Percentage,
    pub sounds_mastered: u32,
    pub streak_days: u32,
    pub average_accuracy: Percentage,
    pub languages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_progress_derives_mastered_and_remaining() {
        let spanish = LanguageProgress {
            language: "Spanish",
            progress: Percentage::clamped(60),
            sounds: 24,
        };
        assert_eq!(spanish.mastered(), 14);
        assert_eq!(spanish.remaining(), 10);
        assert_eq!(spanish.as_mastery().percentage().value(), 58);
    }

    #[test]
    fn activity_dates_parse_as_iso() {
        let entry = ActivityEntry {
            date: "2024-01-15",
            activity: "Completed Vowel Practice",
            score: "9/10",
            kind: ActivityKind::Practice,
        };
        assert_eq!(entry.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let broken = ActivityEntry {
            date: "yesterday",
            ..entry
        };
        assert_eq!(broken.parsed_date(), None);
    }
}
