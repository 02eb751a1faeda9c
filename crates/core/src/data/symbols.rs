use crate::model::symbol::Backness::{Back, Central, Front};
use crate::model::symbol::Height::{Close, CloseMid, Mid, NearClose, NearOpen, Open, OpenMid};
use crate::model::symbol::Manner::{Affricate, Approximant, Fricative, Lateral, Nasal, Plosive};
use crate::model::symbol::Place::{
    Alveolar, Bilabial, Dental, Glottal, LabialVelar, Labiodental, Palatal, Postalveolar, Velar,
};
use crate::model::symbol::Rounding::{Rounded, Unrounded};
use crate::model::symbol::SymbolEntry;
use crate::model::symbol::Voicing::{Voiced, Voiceless};

pub const VOWELS: [SymbolEntry; 29] = [
    SymbolEntry::vowel("i", Close, Front, Some(Unrounded)),
    SymbolEntry::vowel("y", Close, Front, Some(Rounded)),
    SymbolEntry::vowel("ɨ", Close, Central, Some(Unrounded)),
    SymbolEntry::vowel("ʉ", Close, Central, Some(Rounded)),
    SymbolEntry::vowel("ɯ", Close, Back, Some(Unrounded)),
    SymbolEntry::vowel("u", Close, Back, Some(Rounded)),
    SymbolEntry::vowel("ɪ", NearClose, Front, Some(Unrounded)),
    SymbolEntry::vowel("ʏ", NearClose, Front, Some(Rounded)),
    SymbolEntry::vowel("ʊ", NearClose, Back, Some(Rounded)),
    SymbolEntry::vowel("e", CloseMid, Front, Some(Unrounded)),
    SymbolEntry::vowel("ø", CloseMid, Front, Some(Rounded)),
    SymbolEntry::vowel("ɘ", CloseMid, Central, Some(Unrounded)),
    SymbolEntry::vowel("ɵ", CloseMid, Central, Some(Rounded)),
    SymbolEntry::vowel("ɤ", CloseMid, Back, Some(Unrounded)),
    SymbolEntry::vowel("o", CloseMid, Back, Some(Rounded)),
    SymbolEntry::vowel("ə", Mid, Central, None),
    SymbolEntry::vowel("ɛ", OpenMid, Front, Some(Unrounded)),
    SymbolEntry::vowel("œ", OpenMid, Front, Some(Rounded)),
    SymbolEntry::vowel("ɜ", OpenMid, Central, Some(Unrounded)),
    SymbolEntry::vowel("ɞ", OpenMid, Central, Some(Rounded)),
    SymbolEntry::vowel("ʌ", OpenMid, Back, Some(Unrounded)),
    SymbolEntry::vowel("ɔ", OpenMid, Back, Some(Rounded)),
    SymbolEntry::vowel("æ", NearOpen, Front, Some(Unrounded)),
    SymbolEntry::vowel("ɐ", NearOpen, Central, None),
    SymbolEntry::vowel("a", Open, Front, Some(Unrounded)),
    SymbolEntry::vowel("ɶ", Open, Front, Some(Rounded)),
    SymbolEntry::vowel("ä", Open, Central, Some(Unrounded)),
    SymbolEntry::vowel("ɑ", Open, Back, Some(Unrounded)),
    SymbolEntry::vowel("ɒ", Open, Back, Some(Rounded)),
];

pub const CONSONANTS: [SymbolEntry; 24] = [
    SymbolEntry::consonant("p", Voiceless, Bilabial, Plosive),
    SymbolEntry::consonant("b", Voiced, Bilabial, Plosive),
    SymbolEntry::consonant("t", Voiceless, Alveolar, Plosive),
    SymbolEntry::consonant("d", Voiced, Alveolar, Plosive),
    SymbolEntry::consonant("k", Voiceless, Velar, Plosive),
    SymbolEntry::consonant("g", Voiced, Velar, Plosive),
    SymbolEntry::consonant("f", Voiceless, Labiodental, Fricative),
    SymbolEntry::consonant("v", Voiced, Labiodental, Fricative),
    SymbolEntry::consonant("θ", Voiceless, Dental, Fricative),
    SymbolEntry::consonant("ð", Voiced, Dental, Fricative),
    SymbolEntry::consonant("s", Voiceless, Alveolar, Fricative),
    SymbolEntry::consonant("z", Voiced, Alveolar, Fricative),
    SymbolEntry::consonant("ʃ", Voiceless, Postalveolar, Fricative),
    SymbolEntry::consonant("ʒ", Voiced, Postalveolar, Fricative),
    SymbolEntry::consonant("h", Voiceless, Glottal, Fricative),
    SymbolEntry::consonant("m", Voiced, Bilabial, Nasal),
    SymbolEntry::consonant("n", Voiced, Alveolar, Nasal),
    SymbolEntry::consonant("ŋ", Voiced, Velar, Nasal),
    SymbolEntry::consonant("l", Voiced, Alveolar, Lateral),
    SymbolEntry::consonant("ɹ", Voiced, Alveolar, Approximant),
    SymbolEntry::consonant("j", Voiced, Palatal, Approximant),
    SymbolEntry::consonant("w", Voiced, LabialVelar, Approximant),
    SymbolEntry::consonant("tʃ", Voiceless, Postalveolar, Affricate),
    SymbolEntry::consonant("dʒ", Voiced, Postalveolar, Affricate),
];

pub const DIPHTHONGS: [SymbolEntry; 8] = [
    SymbolEntry::diphthong("aɪ", "price"),
    SymbolEntry::diphthong("aʊ", "mouth"),
    SymbolEntry::diphthong("eɪ", "face"),
    SymbolEntry::diphthong("oʊ", "goat"),
    SymbolEntry::diphthong("ɔɪ", "choice"),
    SymbolEntry::diphthong("ɪə", "near"),
    SymbolEntry::diphthong("eə", "square"),
    SymbolEntry::diphthong("ʊə", "cure"),
];
