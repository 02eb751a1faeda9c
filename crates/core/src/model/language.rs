use serde::Serialize;
use std::fmt;

use crate::model::progress::{Percentage, mastered_count};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        })
    }
}

/// A language course with its dialects and the learner's completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageModule {
    pub name: &'static str,
    pub dialects: &'static [&'static str],
    pub progress: Percentage,
    pub sounds: u32,
    pub difficulty: Difficulty,
}

impl LanguageModule {
    #[must_use]
    pub fn mastered(&self) -> u32 {
        mastered_count(self.progress, self.sounds)
    }

    #[must_use]
    pub fn has_dialect(&self, dialect: &str) -> bool {
        self.dialects.contains(&dialect)
    }
}

/// Two words separated by a single contrasting sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MinimalPair {
    pub word1: &'static str,
    pub ipa1: &'static str,
    pub word2: &'static str,
    pub ipa2: &'static str,
    pub focus: &'static str,
}
