use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("percentage must be in 0..=100, got {0}")]
    OutOfRange(u32),
}

/// A whole-number percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const FULL: Percentage = Percentage(100);

    /// # Errors
    ///
    /// Returns `ProgressError::OutOfRange` for values above 100.
    pub fn new(value: u32) -> Result<Self, ProgressError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= 100)
            .map(Self)
            .ok_or(ProgressError::OutOfRange(value))
    }

    /// Clamps to 100. Intended for compiled-in tables.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// `floor(part * 100 / whole)`, capped at 100. A zero `whole` yields 0%.
    #[must_use]
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let pct = u64::from(part) * 100 / u64::from(whole);
        Self(u8::try_from(pct.min(100)).unwrap_or(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Number of mastered sounds implied by a completion percentage.
///
/// Always rounds down: 75% of 44 is 33, 60% of 24 is 14.
#[must_use]
pub fn mastered_count(progress: Percentage, total_sounds: u32) -> u32 {
    let mastered = u64::from(progress.value()) * u64::from(total_sounds) / 100;
    // progress <= 100 keeps the result <= total_sounds
    u32::try_from(mastered).unwrap_or(total_sounds)
}

/// Labelled progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressStat {
    pub label: String,
    pub percentage: Percentage,
}

impl ProgressStat {
    #[must_use]
    pub fn new(label: impl Into<String>, percentage: Percentage) -> Self {
        Self {
            label: label.into(),
            percentage,
        }
    }
}

/// Labelled "mastered of total" counter with its derived percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasteryStat {
    pub label: String,
    pub mastered: u32,
    pub total: u32,
}

impl MasteryStat {
    #[must_use]
    pub fn new(label: impl Into<String>, mastered: u32, total: u32) -> Self {
        Self {
            label: label.into(),
            mastered: mastered.min(total),
            total,
        }
    }

    #[must_use]
    pub fn percentage(&self) -> Percentage {
        Percentage::from_ratio(self.mastered, self.total)
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.total - self.mastered
    }

    #[must_use]
    pub fn as_progress(&self) -> ProgressStat {
        ProgressStat::new(self.label.clone(), self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mastered_count_floors() {
        assert_eq!(mastered_count(Percentage::clamped(75), 44), 33);
        assert_eq!(mastered_count(Percentage::clamped(60), 24), 14);
        assert_eq!(mastered_count(Percentage::clamped(35), 37), 12);
        assert_eq!(mastered_count(Percentage::ZERO, 40), 0);
        assert_eq!(mastered_count(Percentage::FULL, 40), 40);
    }

    #[test]
    fn percentage_rejects_out_of_range() {
        assert_eq!(Percentage::new(100).unwrap().value(), 100);
        assert_eq!(Percentage::new(101), Err(ProgressError::OutOfRange(101)));
        assert_eq!(Percentage::new(1_000), Err(ProgressError::OutOfRange(1_000)));
        assert_eq!(Percentage::clamped(250), Percentage::FULL);
    }

    #[test]
    fn ratio_floors_and_handles_zero_whole() {
        assert_eq!(Percentage::from_ratio(12, 20).value(), 60);
        assert_eq!(Percentage::from_ratio(18, 24).value(), 75);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(9, 4), Percentage::FULL);
    }

    #[test]
    fn mastery_stat_derives_percentage_and_remaining() {
        let stat = MasteryStat::new("Vowels Mastered", 12, 20);
        assert_eq!(stat.percentage().to_string(), "60%");
        assert_eq!(stat.remaining(), 8);
        assert_eq!(stat.as_progress().label, "Vowels Mastered");
    }
}
