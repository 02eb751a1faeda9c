use crate::model::AchievementId;
use crate::model::profile::{
    Achievement, ActivityEntry, ActivityKind, LanguageProgress, LearnerProfile, ProblemSound,
};
use crate::model::progress::{MasteryStat, Percentage};

pub const LEARNER: LearnerProfile = LearnerProfile {
    display_name: "Phonetics Learner",
    initials: "PL",
    learning_since: "January 2024",
    rank: "Intermediate",
    level: 8,
    xp: 2_340,
    level_progress: Percentage::clamped(75),
    sounds_mastered: 127,
    streak_days: 23,
    average_accuracy: Percentage::clamped(82),
    languages: 4,
};

pub const ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        id: AchievementId::new(1),
        name: "Vowel Master",
        description: "Mastered all English vowels",
        icon: "🎯",
        earned: true,
    },
    Achievement {
        id: AchievementId::new(2),
        name: "Consonant Champion",
        description: "Perfect score on consonant identification",
        icon: "🏆",
        earned: true,
    },
    Achievement {
        id: AchievementId::new(3),
        name: "Diphthong Dynamo",
        description: "Completed all diphthong exercises",
        icon: "⚡",
        earned: false,
    },
    Achievement {
        id: AchievementId::new(4),
        name: "Multi-lingual",
        description: "Practiced 3+ languages",
        icon: "🌍",
        earned: true,
    },
    Achievement {
        id: AchievementId::new(5),
        name: "Streak Master",
        description: "7-day practice streak",
        icon: "🔥",
        earned: false,
    },
    Achievement {
        id: AchievementId::new(6),
        name: "Perfectionist",
        description: "100% accuracy in a practice session",
        icon: "💎",
        earned: true,
    },
];

pub const LANGUAGE_PROGRESS: [LanguageProgress; 4] = [
    LanguageProgress {
        language: "English",
        progress: Percentage::clamped(85),
        sounds: 44,
    },
    LanguageProgress {
        language: "Spanish",
        progress: Percentage::clamped(60),
        sounds: 24,
    },
    LanguageProgress {
        language: "French",
        progress: Percentage::clamped(35),
        sounds: 37,
    },
    LanguageProgress {
        language: "German",
        progress: Percentage::clamped(20),
        sounds: 40,
    },
];

pub const RECENT_ACTIVITY: [ActivityEntry; 5] = [
    ActivityEntry {
        date: "2024-01-15",
        activity: "Completed Vowel Practice",
        score: "9/10",
        kind: ActivityKind::Practice,
    },
    ActivityEntry {
        date: "2024-01-14",
        activity: "Learned French /y/ sound",
        score: "New",
        kind: ActivityKind::Learning,
    },
    ActivityEntry {
        date: "2024-01-13",
        activity: "Minimal Pairs Challenge",
        score: "8/10",
        kind: ActivityKind::Challenge,
    },
    ActivityEntry {
        date: "2024-01-12",
        activity: "IPA Chart Review",
        score: "Complete",
        kind: ActivityKind::Review,
    },
    ActivityEntry {
        date: "2024-01-11",
        activity: "German Consonants",
        score: "7/10",
        kind: ActivityKind::Practice,
    },
];

pub const PROBLEM_SOUNDS: [ProblemSound; 4] = [
    ProblemSound {
        sound: "/θ/",
        language: "English",
        attempts: 15,
        accuracy: Percentage::clamped(65),
    },
    ProblemSound {
        sound: "/ʁ/",
        language: "French",
        attempts: 8,
        accuracy: Percentage::clamped(45),
    },
    ProblemSound {
        sound: "/ɯ/",
        language: "Korean",
        attempts: 12,
        accuracy: Percentage::clamped(55),
    },
    ProblemSound {
        sound: "/ɲ/",
        language: "Spanish",
        attempts: 6,
        accuracy: Percentage::clamped(70),
    },
];

/// Explorer quick stats: (label, mastered, total).
pub const CHART_MASTERY: [(&str, u32, u32); 2] =
    [("Vowels Mastered", 12, 20), ("Consonants Mastered", 18, 24)];

pub const OVERALL_PROGRESS: Percentage = Percentage::clamped(68);

/// Per-practice-type accuracy shown under "Recent Performance".
pub const RECENT_PERFORMANCE: [(&str, Percentage); 3] = [
    ("Listen & Identify", Percentage::clamped(85)),
    ("Minimal Pairs", Percentage::clamped(72)),
    ("Transcription", Percentage::clamped(68)),
];

pub const RECOMMENDED_FOCUS: [&str; 3] = [
    "Vowel distinctions (/ɪ/ vs /iː/)",
    "Dental fricatives (/θ/ vs /ð/)",
    "Diphthong recognition",
];

#[must_use]
pub fn chart_mastery() -> Vec<MasteryStat> {
    CHART_MASTERY
        .iter()
        .map(|(label, mastered, total)| MasteryStat::new(*label, *mastered, *total))
        .collect()
}
