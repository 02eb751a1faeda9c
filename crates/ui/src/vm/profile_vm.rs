use phono_core::model::{
    Achievement, ActivityEntry, ActivityKind, LanguageProgress, LearnerProfile,
};

use crate::vm::time_fmt::format_activity_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub value: String,
    pub label: &'static str,
}

#[must_use]
pub fn map_header_stats(learner: &LearnerProfile) -> Vec<StatTileVm> {
    vec![
        StatTileVm {
            value: learner.sounds_mastered.to_string(),
            label: "Sounds Mastered",
        },
        StatTileVm {
            value: learner.streak_days.to_string(),
            label: "Day Streak",
        },
        StatTileVm {
            value: learner.average_accuracy.to_string(),
            label: "Avg. Accuracy",
        },
        StatTileVm {
            value: learner.languages.to_string(),
            label: "Languages",
        },
    ]
}

/// `"Level 8 · 2,340 XP"`.
#[must_use]
pub fn level_label(learner: &LearnerProfile) -> String {
    format!("Level {} · {} XP", learner.level, group_thousands(learner.xp))
}

#[must_use]
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementVm {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub class: &'static str,
}

#[must_use]
pub fn map_achievement(achievement: &Achievement) -> AchievementVm {
    AchievementVm {
        name: achievement.name,
        description: achievement.description,
        icon: achievement.icon,
        class: if achievement.earned {
            "achievement achievement--earned"
        } else {
            "achievement achievement--locked"
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageProgressVm {
    pub language: &'static str,
    pub progress_pct: u8,
    pub detail_label: String,
}

#[must_use]
pub fn map_language_progress(row: &LanguageProgress) -> LanguageProgressVm {
    LanguageProgressVm {
        language: row.language,
        progress_pct: row.progress.value(),
        detail_label: format!(
            "{}/{} sounds · {} to go",
            row.mastered(),
            row.sounds,
            row.remaining()
        ),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityVm {
    pub date_label: String,
    pub activity: &'static str,
    pub score: &'static str,
    pub icon: &'static str,
}

#[must_use]
pub fn map_activity(entry: &ActivityEntry) -> ActivityVm {
    ActivityVm {
        date_label: format_activity_date(entry),
        activity: entry.activity,
        score: entry.score,
        icon: match entry.kind {
            ActivityKind::Practice => "🎯",
            ActivityKind::Learning => "📚",
            ActivityKind::Challenge => "⚡",
            ActivityKind::Review => "🔁",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phono_core::data;

    #[test]
    fn level_label_groups_xp() {
        assert_eq!(level_label(&data::LEARNER), "Level 8 · 2,340 XP");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn header_stats_show_sample_profile() {
        let stats = map_header_stats(&data::LEARNER);
        let values: Vec<_> = stats.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["127", "23", "82%", "4"]);
    }

    #[test]
    fn language_rows_floor_mastered() {
        let french = map_language_progress(&data::LANGUAGE_PROGRESS[2]);
        assert_eq!(french.detail_label, "12/37 sounds · 25 to go");
    }

    #[test]
    fn locked_achievements_are_styled() {
        let locked = map_achievement(&data::ACHIEVEMENTS[2]);
        assert_eq!(locked.class, "achievement achievement--locked");
    }

    #[test]
    fn activity_uses_readable_dates() {
        let vm = map_activity(&data::RECENT_ACTIVITY[0]);
        assert_eq!(vm.date_label, "Jan 15, 2024");
        assert_eq!(vm.icon, "🎯");
    }
}
