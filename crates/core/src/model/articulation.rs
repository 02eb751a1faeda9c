use serde::Serialize;

use crate::model::symbol::Voicing;

/// Where the tongue marker sits in the 300x300 sagittal diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TonguePosition {
    pub x: u16,
    pub y: u16,
}

impl TonguePosition {
    /// Resting position used for sounds without a specific marker.
    pub const NEUTRAL: TonguePosition = TonguePosition { x: 150, y: 160 };
}

/// Static articulation description for one sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticulationRecord {
    pub symbol: &'static str,
    pub tongue: &'static str,
    pub lips: &'static str,
    pub velum: &'static str,
    pub voicing: Voicing,
    pub description: &'static str,
    pub tongue_position: TonguePosition,
}

/// Result of looking a symbol up in the articulation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticulationLookup<'a> {
    Found(&'a ArticulationRecord),
    NotFound,
}

impl<'a> ArticulationLookup<'a> {
    #[must_use]
    pub fn record(self) -> Option<&'a ArticulationRecord> {
        match self {
            ArticulationLookup::Found(record) => Some(record),
            ArticulationLookup::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, ArticulationLookup::Found(_))
    }

    /// Marker position, falling back to the neutral tongue position.
    #[must_use]
    pub fn tongue_position(self) -> TonguePosition {
        self.record()
            .map_or(TonguePosition::NEUTRAL, |record| record.tongue_position)
    }
}

/// Strips phonemic slashes, phonetic brackets and surrounding whitespace.
///
/// `"/i/"`, `"[i]"` and `" i "` all normalize to `"i"`.
#[must_use]
pub fn normalize_symbol(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .or_else(|| {
            trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
        })
        .unwrap_or(trimmed);
    inner.trim()
}

/// Finds the record for `symbol` after normalization.
#[must_use]
pub fn lookup<'a>(records: &'a [ArticulationRecord], symbol: &str) -> ArticulationLookup<'a> {
    let wanted = normalize_symbol(symbol);
    if wanted.is_empty() {
        return ArticulationLookup::NotFound;
    }
    records
        .iter()
        .find(|record| record.symbol == wanted)
        .map_or(ArticulationLookup::NotFound, ArticulationLookup::Found)
}
