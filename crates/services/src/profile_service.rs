use std::cmp::Reverse;

use phono_core::data;
use phono_core::model::{
    Achievement, ActivityEntry, LanguageProgress, LearnerProfile, ProblemSound,
};

/// Earned achievements shown in the profile sidebar.
pub const RECENT_ACHIEVEMENT_LIMIT: usize = 4;

/// Everything the profile page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDashboard {
    pub learner: &'static LearnerProfile,
    pub recent_achievements: Vec<&'static Achievement>,
    pub achievements: &'static [Achievement],
    pub language_progress: &'static [LanguageProgress],
    pub problem_sounds: &'static [ProblemSound],
    pub recent_activity: Vec<&'static ActivityEntry>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileService;

impl ProfileService {
    #[must_use]
    pub fn dashboard(&self) -> ProfileDashboard {
        ProfileDashboard {
            learner: &data::LEARNER,
            recent_achievements: recent_achievements(&data::ACHIEVEMENTS),
            achievements: &data::ACHIEVEMENTS,
            language_progress: &data::LANGUAGE_PROGRESS,
            problem_sounds: &data::PROBLEM_SOUNDS,
            recent_activity: newest_first(&data::RECENT_ACTIVITY),
        }
    }
}

/// Earned achievements in source order, at most `RECENT_ACHIEVEMENT_LIMIT`.
#[must_use]
pub fn recent_achievements(all: &[Achievement]) -> Vec<&Achievement> {
    all.iter()
        .filter(|achievement| achievement.earned)
        .take(RECENT_ACHIEVEMENT_LIMIT)
        .collect()
}

/// Activity sorted by date, newest first. Entries with unparseable dates go last,
/// keeping their relative order.
#[must_use]
pub fn newest_first(entries: &[ActivityEntry]) -> Vec<&ActivityEntry> {
    let mut sorted: Vec<_> = entries.iter().collect();
    sorted.sort_by_key(|entry| Reverse(entry.parsed_date()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use phono_core::model::{AchievementId, ActivityKind};

    fn entry(date: &'static str, activity: &'static str) -> ActivityEntry {
        ActivityEntry {
            date,
            activity,
            score: "8/10",
            kind: ActivityKind::Practice,
        }
    }

    #[test]
    fn activity_sorts_newest_first_with_bad_dates_last() {
        let entries = [
            entry("2024-01-11", "oldest"),
            entry("last tuesday", "unknown-a"),
            entry("2024-01-15", "newest"),
            entry("2024-13-01", "unknown-b"),
            entry("2024-01-12", "middle"),
        ];
        let order: Vec<_> = newest_first(&entries).iter().map(|e| e.activity).collect();
        assert_eq!(
            order,
            vec!["newest", "middle", "oldest", "unknown-a", "unknown-b"]
        );
    }

    #[test]
    fn recent_achievements_are_earned_and_capped() {
        let make = |id, earned| Achievement {
            id: AchievementId::new(id),
            name: "A",
            description: "",
            icon: "*",
            earned,
        };
        let all: Vec<_> = (1..=7).map(|id| make(id, id != 2)).collect();
        let recent = recent_achievements(&all);
        let ids: Vec<_> = recent.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
    }

    #[test]
    fn dashboard_matches_sample_profile() {
        let dashboard = ProfileService.dashboard();
        assert_eq!(dashboard.learner.level, 8);
        assert_eq!(dashboard.learner.xp, 2_340);
        assert_eq!(dashboard.recent_achievements.len(), 4);
        assert_eq!(dashboard.recent_activity[0].date, "2024-01-15");
        let french = &dashboard.language_progress[2];
        assert_eq!((french.mastered(), french.remaining()), (12, 25));
    }
}
