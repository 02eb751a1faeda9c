use crate::model::articulation::{ArticulationRecord, TonguePosition};
use crate::model::symbol::Voicing::{Voiced, Voiceless};

pub const ARTICULATION_RECORDS: [ArticulationRecord; 8] = [
    ArticulationRecord {
        symbol: "i",
        tongue: "high front",
        lips: "unrounded",
        velum: "raised",
        voicing: Voiced,
        description: "Close front unrounded vowel",
        tongue_position: TonguePosition { x: 180, y: 120 },
    },
    ArticulationRecord {
        symbol: "ɑ",
        tongue: "low back",
        lips: "unrounded",
        velum: "raised",
        voicing: Voiced,
        description: "Open back unrounded vowel",
        tongue_position: TonguePosition { x: 120, y: 200 },
    },
    ArticulationRecord {
        symbol: "p",
        tongue: "neutral",
        lips: "bilabial closure",
        velum: "raised",
        voicing: Voiceless,
        description: "Voiceless bilabial plosive",
        tongue_position: TonguePosition::NEUTRAL,
    },
    ArticulationRecord {
        symbol: "u",
        tongue: "high back",
        lips: "rounded",
        velum: "raised",
        voicing: Voiced,
        description: "Close back rounded vowel",
        tongue_position: TonguePosition::NEUTRAL,
    },
    ArticulationRecord {
        symbol: "θ",
        tongue: "tip between the teeth",
        lips: "spread",
        velum: "raised",
        voicing: Voiceless,
        description: "Voiceless dental fricative",
        tongue_position: TonguePosition::NEUTRAL,
    },
    ArticulationRecord {
        symbol: "s",
        tongue: "blade near alveolar ridge",
        lips: "spread",
        velum: "raised",
        voicing: Voiceless,
        description: "Voiceless alveolar fricative",
        tongue_position: TonguePosition::NEUTRAL,
    },
    ArticulationRecord {
        symbol: "m",
        tongue: "neutral",
        lips: "bilabial closure",
        velum: "lowered",
        voicing: Voiced,
        description: "Voiced bilabial nasal",
        tongue_position: TonguePosition::NEUTRAL,
    },
    ArticulationRecord {
        symbol: "k",
        tongue: "back raised to velum",
        lips: "neutral",
        velum: "raised",
        voicing: Voiceless,
        description: "Voiceless velar plosive",
        tongue_position: TonguePosition::NEUTRAL,
    },
];
