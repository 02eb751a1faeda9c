use crate::model::language::{Difficulty, LanguageModule, MinimalPair};
use crate::model::progress::Percentage;

pub const LANGUAGES: [LanguageModule; 6] = [
    LanguageModule {
        name: "English",
        dialects: &[
            "Received Pronunciation (RP)",
            "General American (GA)",
            "Australian",
            "Irish",
            "Scottish",
            "Indian",
        ],
        progress: Percentage::clamped(75),
        sounds: 44,
        difficulty: Difficulty::Beginner,
    },
    LanguageModule {
        name: "Spanish",
        dialects: &["Castilian", "Mexican", "Argentinian", "Colombian"],
        progress: Percentage::clamped(45),
        sounds: 24,
        difficulty: Difficulty::Beginner,
    },
    LanguageModule {
        name: "French",
        dialects: &["Standard French", "Quebecois", "Belgian"],
        progress: Percentage::clamped(30),
        sounds: 37,
        difficulty: Difficulty::Intermediate,
    },
    LanguageModule {
        name: "German",
        dialects: &["Standard German", "Austrian", "Swiss"],
        progress: Percentage::clamped(20),
        sounds: 40,
        difficulty: Difficulty::Intermediate,
    },
    LanguageModule {
        name: "Mandarin",
        dialects: &["Standard Mandarin", "Beijing", "Taiwan"],
        progress: Percentage::clamped(10),
        sounds: 25,
        difficulty: Difficulty::Advanced,
    },
    LanguageModule {
        name: "Arabic",
        dialects: &["Modern Standard", "Egyptian", "Levantine", "Gulf"],
        progress: Percentage::clamped(5),
        sounds: 28,
        difficulty: Difficulty::Advanced,
    },
];

pub const MINIMAL_PAIRS: [MinimalPair; 4] = [
    MinimalPair {
        word1: "bit",
        ipa1: "/bɪt/",
        word2: "beat",
        ipa2: "/biːt/",
        focus: "/ɪ/ vs /iː/",
    },
    MinimalPair {
        word1: "ship",
        ipa1: "/ʃɪp/",
        word2: "sheep",
        ipa2: "/ʃiːp/",
        focus: "/ɪ/ vs /iː/",
    },
    MinimalPair {
        word1: "cat",
        ipa1: "/kæt/",
        word2: "cut",
        ipa2: "/kʌt/",
        focus: "/æ/ vs /ʌ/",
    },
    MinimalPair {
        word1: "pen",
        ipa1: "/pen/",
        word2: "pan",
        ipa2: "/pæn/",
        focus: "/e/ vs /æ/",
    },
];

/// Key features listed for every dialect.
pub const DIALECT_FEATURES: [&str; 3] = [
    "Rhotic vs non-rhotic",
    "Vowel system differences",
    "Consonant variations",
];
