use serde::Serialize;
use std::fmt;

//
// ─── VOWEL QUALITY ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Height {
    Close,
    NearClose,
    CloseMid,
    Mid,
    OpenMid,
    NearOpen,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backness {
    Front,
    Central,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    Rounded,
    Unrounded,
}

/// Tongue height, tongue backness and lip rounding of a vowel.
///
/// Rounding is absent for the mid and near-open central vowels, which the
/// chart leaves unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VowelQuality {
    pub height: Height,
    pub backness: Backness,
    pub rounding: Option<Rounding>,
}

//
// ─── CONSONANT QUALITY ─────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Voicing {
    Voiced,
    Voiceless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Place {
    Bilabial,
    Labiodental,
    Dental,
    Alveolar,
    Postalveolar,
    Palatal,
    Velar,
    LabialVelar,
    Glottal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Manner {
    Plosive,
    Fricative,
    Nasal,
    Lateral,
    Approximant,
    Affricate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConsonantQuality {
    pub voicing: Voicing,
    pub place: Place,
    pub manner: Manner,
}

//
// ─── SYMBOL ENTRY ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolKind {
    Vowel,
    Consonant,
    Diphthong,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 3] = [Self::Vowel, Self::Consonant, Self::Diphthong];

    /// Plural heading used by the chart sections.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            SymbolKind::Vowel => "Vowels",
            SymbolKind::Consonant => "Consonants",
            SymbolKind::Diphthong => "Diphthongs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SymbolAttributes {
    Vowel(VowelQuality),
    Consonant(ConsonantQuality),
    Diphthong { example: &'static str },
}

/// One clickable symbol of the IPA chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SymbolEntry {
    pub symbol: &'static str,
    pub attributes: SymbolAttributes,
}

impl SymbolEntry {
    #[must_use]
    pub const fn vowel(
        symbol: &'static str,
        height: Height,
        backness: Backness,
        rounding: Option<Rounding>,
    ) -> Self {
        Self {
            symbol,
            attributes: SymbolAttributes::Vowel(VowelQuality {
                height,
                backness,
                rounding,
            }),
        }
    }

    #[must_use]
    pub const fn consonant(
        symbol: &'static str,
        voicing: Voicing,
        place: Place,
        manner: Manner,
    ) -> Self {
        Self {
            symbol,
            attributes: SymbolAttributes::Consonant(ConsonantQuality {
                voicing,
                place,
                manner,
            }),
        }
    }

    #[must_use]
    pub const fn diphthong(symbol: &'static str, example: &'static str) -> Self {
        Self {
            symbol,
            attributes: SymbolAttributes::Diphthong { example },
        }
    }

    #[must_use]
    pub fn kind(&self) -> SymbolKind {
        match self.attributes {
            SymbolAttributes::Vowel(_) => SymbolKind::Vowel,
            SymbolAttributes::Consonant(_) => SymbolKind::Consonant,
            SymbolAttributes::Diphthong { .. } => SymbolKind::Diphthong,
        }
    }

    /// Human-readable description shown as the symbol's tooltip.
    #[must_use]
    pub fn description(&self) -> String {
        self.attributes.to_string()
    }
}

//
// ─── DISPLAY ───────────────────────────────────────────────────────────────────
//

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Height::Close => "close",
            Height::NearClose => "near-close",
            Height::CloseMid => "close-mid",
            Height::Mid => "mid",
            Height::OpenMid => "open-mid",
            Height::NearOpen => "near-open",
            Height::Open => "open",
        })
    }
}

impl fmt::Display for Backness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backness::Front => "front",
            Backness::Central => "central",
            Backness::Back => "back",
        })
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rounding::Rounded => "rounded",
            Rounding::Unrounded => "unrounded",
        })
    }
}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Voicing::Voiced => "voiced",
            Voicing::Voiceless => "voiceless",
        })
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Place::Bilabial => "bilabial",
            Place::Labiodental => "labiodental",
            Place::Dental => "dental",
            Place::Alveolar => "alveolar",
            Place::Postalveolar => "postalveolar",
            Place::Palatal => "palatal",
            Place::Velar => "velar",
            Place::LabialVelar => "labial-velar",
            Place::Glottal => "glottal",
        })
    }
}

impl fmt::Display for Manner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Manner::Plosive => "plosive",
            Manner::Fricative => "fricative",
            Manner::Nasal => "nasal",
            Manner::Lateral => "lateral",
            Manner::Approximant => "approximant",
            Manner::Affricate => "affricate",
        })
    }
}

impl fmt::Display for SymbolAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolAttributes::Vowel(q) => {
                write!(f, "{} {}", q.height, q.backness)?;
                if let Some(rounding) = q.rounding {
                    write!(f, " {rounding}")?;
                }
                Ok(())
            }
            SymbolAttributes::Consonant(q) => {
                write!(f, "{} {} {}", q.voicing, q.place, q.manner)
            }
            SymbolAttributes::Diphthong { example } => write!(f, "as in \"{example}\""),
        }
    }
}
