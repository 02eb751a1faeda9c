use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown notation system: {0}")]
    UnknownSystem(String),
}

//
// ─── SYSTEMS ───────────────────────────────────────────────────────────────────
//

/// Phonetic notation systems shown as columns of the conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotationSystem {
    /// IPA, Received Pronunciation.
    IpaRp,
    /// IPA, General American.
    IpaGa,
    /// Merriam-Webster dictionary respelling.
    Dsp,
    /// Collins English Dictionary style.
    Ced,
    Erfr,
    XSampa,
    Arpabet,
    Kirshenbaum,
    Sampa,
}

impl NotationSystem {
    pub const COUNT: usize = 9;

    /// Column order of the table.
    pub const ALL: [NotationSystem; Self::COUNT] = [
        Self::IpaRp,
        Self::IpaGa,
        Self::Dsp,
        Self::Ced,
        Self::Erfr,
        Self::XSampa,
        Self::Arpabet,
        Self::Kirshenbaum,
        Self::Sampa,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable machine name, also accepted by `FromStr`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            NotationSystem::IpaRp => "ipa-rp",
            NotationSystem::IpaGa => "ipa-ga",
            NotationSystem::Dsp => "dsp",
            NotationSystem::Ced => "ced",
            NotationSystem::Erfr => "erfr",
            NotationSystem::XSampa => "x-sampa",
            NotationSystem::Arpabet => "arpabet",
            NotationSystem::Kirshenbaum => "kirshenbaum",
            NotationSystem::Sampa => "sampa",
        }
    }

    /// Column header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NotationSystem::IpaRp => "IPA (RP)",
            NotationSystem::IpaGa => "IPA (GA)",
            NotationSystem::Dsp => "DSP (M-W)",
            NotationSystem::Ced => "CED Style",
            NotationSystem::Erfr => "ERFR",
            NotationSystem::XSampa => "X-SAMPA",
            NotationSystem::Arpabet => "ARPAbet",
            NotationSystem::Kirshenbaum => "Kirshenbaum",
            NotationSystem::Sampa => "SAMPA",
        }
    }

    /// One-line entry for the notation guide.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            NotationSystem::IpaRp | NotationSystem::IpaGa => {
                "International Phonetic Alphabet - universal standard"
            }
            NotationSystem::Dsp => "Merriam-Webster dictionary pronunciation system",
            NotationSystem::Ced => "Collins English Dictionary transcription style",
            NotationSystem::Erfr => "Respelling with diacritics used in early readers",
            NotationSystem::XSampa => "Extended Speech Assessment Methods Phonetic Alphabet",
            NotationSystem::Arpabet => "ASCII-based phonetic notation for American English",
            NotationSystem::Kirshenbaum => "ASCII IPA used on Usenet, also known as ASCII-IPA",
            NotationSystem::Sampa => "Speech Assessment Methods Phonetic Alphabet",
        }
    }
}

impl fmt::Display for NotationSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NotationSystem {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|system| system.id() == wanted || system.label().to_lowercase() == wanted)
            .or(match wanted.as_str() {
                "rp" => Some(Self::IpaRp),
                "ga" => Some(Self::IpaGa),
                "xsampa" => Some(Self::XSampa),
                _ => None,
            })
            .ok_or_else(|| NotationError::UnknownSystem(s.to_string()))
    }
}

//
// ─── ROWS ──────────────────────────────────────────────────────────────────────
//

/// One sound written in every notation system.
///
/// Cells are optional: a row may lack a mapping for some system, in which case
/// the cell is simply absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NotationRow {
    cells: [Option<&'static str>; NotationSystem::COUNT],
}

impl NotationRow {
    /// Row with a value for every system, in `NotationSystem::ALL` order.
    #[must_use]
    pub const fn full(values: [&'static str; NotationSystem::COUNT]) -> Self {
        let mut cells = [None; NotationSystem::COUNT];
        let mut i = 0;
        while i < NotationSystem::COUNT {
            cells[i] = Some(values[i]);
            i += 1;
        }
        Self { cells }
    }

    #[must_use]
    pub const fn from_cells(cells: [Option<&'static str>; NotationSystem::COUNT]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, system: NotationSystem) -> Option<&'static str> {
        self.cells[system.index()]
    }

    /// Present cells in column order.
    pub fn fields(&self) -> impl Iterator<Item = (NotationSystem, &'static str)> + '_ {
        NotationSystem::ALL
            .into_iter()
            .filter_map(|system| self.get(system).map(|value| (system, value)))
    }

    /// Case-insensitive substring match against any present cell.
    ///
    /// `query` must already be lowercased; an empty query matches every row.
    #[must_use]
    pub fn matches_lowercase(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .fields()
                .any(|(_, value)| value.to_lowercase().contains(query))
    }

    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

/// Rows whose cells contain `query`, in table order.
#[must_use]
pub fn filter_rows<'a>(rows: &'a [NotationRow], query: &str) -> Vec<&'a NotationRow> {
    let query = query.to_lowercase();
    rows.iter()
        .filter(|row| row.matches_lowercase(&query))
        .collect()
}

/// Values in `to` for every row whose `from` cell equals `value` exactly.
///
/// Duplicates are dropped; first-seen order is kept.
#[must_use]
pub fn convert(
    rows: &[NotationRow],
    from: NotationSystem,
    value: &str,
    to: NotationSystem,
) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for row in rows {
        if row.get(from) != Some(value) {
            continue;
        }
        if let Some(target) = row.get(to) {
            if !out.contains(&target) {
                out.push(target);
            }
        }
    }
    out
}

//
// ─── WORD TRANSCRIPTIONS ───────────────────────────────────────────────────────
//

/// Whole-word transcriptions for the word lookup panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordTranscription {
    pub word: &'static str,
    pub ipa_rp: &'static str,
    pub ipa_ga: &'static str,
    pub arpabet: &'static str,
    pub xsampa: &'static str,
}

impl WordTranscription {
    /// Labelled transcriptions in display order.
    #[must_use]
    pub fn entries(&self) -> [(NotationSystem, &'static str); 4] {
        [
            (NotationSystem::IpaRp, self.ipa_rp),
            (NotationSystem::IpaGa, self.ipa_ga),
            (NotationSystem::Arpabet, self.arpabet),
            (NotationSystem::XSampa, self.xsampa),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: [NotationRow; 3] = [
        NotationRow::full(["/iː/", "/i/", "ē", "/i/", "ē", "i", "IY", "i", "i"]),
        NotationRow::full(["/ɑː/", "/ɑ/", "o", "/ɑ/", "ä", "A", "AA", "a", "A"]),
        NotationRow::from_cells([
            Some("/ɒ/"),
            Some("/ɑ/"),
            None,
            None,
            None,
            Some("Q"),
            Some("AA"),
            None,
            None,
        ]),
    ];

    #[test]
    fn empty_query_returns_every_row() {
        assert_eq!(filter_rows(&ROWS, "").len(), ROWS.len());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hits = filter_rows(&ROWS, "iy");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].get(NotationSystem::IpaRp), Some("/iː/"));
    }

    #[test]
    fn filter_preserves_source_order_and_skips_absent_cells() {
        let hits = filter_rows(&ROWS, "aa");
        let rp: Vec<_> = hits
            .iter()
            .filter_map(|row| row.get(NotationSystem::IpaRp))
            .collect();
        assert_eq!(rp, vec!["/ɑː/", "/ɒ/"]);
        assert!(filter_rows(&ROWS, "zz").is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        assert!(filter_rows(&ROWS, " iy").is_empty());
    }

    #[test]
    fn convert_collects_distinct_targets() {
        let rp = convert(&ROWS, NotationSystem::Arpabet, "AA", NotationSystem::IpaRp);
        assert_eq!(rp, vec!["/ɑː/", "/ɒ/"]);
        let ga = convert(&ROWS, NotationSystem::Arpabet, "AA", NotationSystem::IpaGa);
        assert_eq!(ga, vec!["/ɑ/"]);
        let dsp = convert(&ROWS, NotationSystem::Arpabet, "AA", NotationSystem::Dsp);
        assert_eq!(dsp, vec!["o"]);
    }

    #[test]
    fn systems_parse_from_ids_and_labels() {
        assert_eq!("x-sampa".parse::<NotationSystem>().unwrap(), NotationSystem::XSampa);
        assert_eq!("ARPAbet".parse::<NotationSystem>().unwrap(), NotationSystem::Arpabet);
        assert_eq!("rp".parse::<NotationSystem>().unwrap(), NotationSystem::IpaRp);
        assert!("klingon".parse::<NotationSystem>().is_err());
    }
}
