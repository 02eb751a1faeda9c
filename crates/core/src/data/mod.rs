//! Compiled-in reference content: symbol charts, notation tables, articulation
//! records, language courses, question banks and the sample learner profile.

mod articulation;
mod languages;
mod notation;
mod profile;
mod questions;
mod symbols;

pub use articulation::ARTICULATION_RECORDS;
pub use languages::{DIALECT_FEATURES, LANGUAGES, MINIMAL_PAIRS};
pub use notation::{NOTATION_ROWS, WORD_TRANSCRIPTIONS};
pub use profile::{
    ACHIEVEMENTS, CHART_MASTERY, LANGUAGE_PROGRESS, LEARNER, OVERALL_PROGRESS, PROBLEM_SOUNDS,
    RECENT_ACTIVITY, RECENT_PERFORMANCE, RECOMMENDED_FOCUS, chart_mastery,
};
pub use questions::question_bank;
pub use symbols::{CONSONANTS, DIPHTHONGS, VOWELS};

use crate::model::SymbolKind;
use crate::model::symbol::SymbolEntry;

/// Chart entries for one symbol category.
#[must_use]
pub fn symbols(kind: SymbolKind) -> &'static [SymbolEntry] {
    match kind {
        SymbolKind::Vowel => &VOWELS,
        SymbolKind::Consonant => &CONSONANTS,
        SymbolKind::Diphthong => &DIPHTHONGS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_sizes_match_sections() {
        assert_eq!(symbols(SymbolKind::Vowel).len(), 29);
        assert_eq!(symbols(SymbolKind::Consonant).len(), 24);
        assert_eq!(symbols(SymbolKind::Diphthong).len(), 8);
        assert!(symbols(SymbolKind::Diphthong).iter().all(|e| e.kind() == SymbolKind::Diphthong));
    }

    #[test]
    fn sample_profile_figures() {
        assert_eq!(LEARNER.xp, 2_340);
        assert_eq!(ACHIEVEMENTS.iter().filter(|a| a.earned).count(), 4);
        let french = LANGUAGE_PROGRESS.iter().find(|l| l.language == "French").unwrap();
        assert_eq!(french.mastered(), 12);
        let stats = chart_mastery();
        assert_eq!(stats[0].percentage().value(), 60);
        assert_eq!(stats[1].percentage().value(), 75);
    }

    #[test]
    fn articulation_records_are_unique() {
        for (i, a) in ARTICULATION_RECORDS.iter().enumerate() {
            assert!(ARTICULATION_RECORDS[i + 1..].iter().all(|b| b.symbol != a.symbol));
        }
    }
}
