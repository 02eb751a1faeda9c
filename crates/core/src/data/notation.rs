use crate::model::notation::{NotationRow, WordTranscription};

/// Columns: IPA (RP), IPA (GA), DSP, CED, ERFR, X-SAMPA, ARPAbet, Kirshenbaum, SAMPA.
pub const NOTATION_ROWS: [NotationRow; 17] = [
    NotationRow::full(["/iː/", "/i/", "ē", "/i/", "ē", "i", "IY", "i", "i"]),
    NotationRow::full(["/ɪ/", "/ɪ/", "i", "/ɪ/", "ĭ", "I", "IH", "i", "I"]),
    NotationRow::full(["/e/", "/e/", "ā", "/e/", "ā", "e", "EY", "e", "e"]),
    NotationRow::full(["/ɛ/", "/ɛ/", "e", "/e/", "ĕ", "E", "EH", "E", "E"]),
    NotationRow::full(["/æ/", "/æ/", "a", "/æ/", "ă", "{", "AE", "ae", "AE"]),
    NotationRow::full(["/ʌ/", "/ʌ/", "u", "/ʌ/", "ŭ", "V", "AH", "v", "V"]),
    NotationRow::full(["/ɑː/", "/ɑ/", "o", "/ɑ/", "ä", "A", "AA", "a", "A"]),
    NotationRow::full(["/ɒ/", "/ɑ/", "o", "/ɒ/", "ô", "Q", "AA", "o", "Q"]),
    NotationRow::full(["/ɔː/", "/ɔ/", "ô", "/ɔ/", "ô", "O", "AO", "c", "O"]),
    NotationRow::full(["/ə/", "/ə/", "ə", "/ə/", "ə", "@", "AH", "uh", "@"]),
    NotationRow::full(["/uː/", "/u/", "ū", "/u/", "ū", "u", "UW", "u", "u"]),
    NotationRow::full(["/ʊ/", "/ʊ/", "oo", "/ʊ/", "˘", "U", "UH", "U", "U"]),
    NotationRow::full(["/aɪ/", "/aɪ/", "ī", "/aɪ/", "ī", "aI", "AY", "ai", "ai"]),
    NotationRow::full(["/aʊ/", "/aʊ/", "ou", "/aʊ/", "ou", "aU", "AW", "au", "aw"]),
    NotationRow::full(["/ɔɪ/", "/ɔɪ/", "oi", "/ɔɪ/", "oi", "OI", "OY", "oi", "oy"]),
    NotationRow::full(["/əʊ/", "/oʊ/", "ō", "/əʊ/", "ō", "@U", "OW", "ou", "oU"]),
    NotationRow::full(["/eɪ/", "/eɪ/", "ā", "/eɪ/", "ā", "eI", "EY", "ei", "ei"]),
];

pub const WORD_TRANSCRIPTIONS: [WordTranscription; 10] = [
    WordTranscription {
        word: "word",
        ipa_rp: "/wɜːd/",
        ipa_ga: "/wɝd/",
        arpabet: "W ER D",
        xsampa: "w3:d",
    },
    WordTranscription {
        word: "see",
        ipa_rp: "/siː/",
        ipa_ga: "/si/",
        arpabet: "S IY",
        xsampa: "si:",
    },
    WordTranscription {
        word: "think",
        ipa_rp: "/θɪŋk/",
        ipa_ga: "/θɪŋk/",
        arpabet: "TH IH NG K",
        xsampa: "TINk",
    },
    WordTranscription {
        word: "ship",
        ipa_rp: "/ʃɪp/",
        ipa_ga: "/ʃɪp/",
        arpabet: "SH IH P",
        xsampa: "SIp",
    },
    WordTranscription {
        word: "sheep",
        ipa_rp: "/ʃiːp/",
        ipa_ga: "/ʃip/",
        arpabet: "SH IY P",
        xsampa: "Si:p",
    },
    WordTranscription {
        word: "bit",
        ipa_rp: "/bɪt/",
        ipa_ga: "/bɪt/",
        arpabet: "B IH T",
        xsampa: "bIt",
    },
    WordTranscription {
        word: "beat",
        ipa_rp: "/biːt/",
        ipa_ga: "/bit/",
        arpabet: "B IY T",
        xsampa: "bi:t",
    },
    WordTranscription {
        word: "cat",
        ipa_rp: "/kæt/",
        ipa_ga: "/kæt/",
        arpabet: "K AE T",
        xsampa: "k{t",
    },
    WordTranscription {
        word: "cut",
        ipa_rp: "/kʌt/",
        ipa_ga: "/kʌt/",
        arpabet: "K AH T",
        xsampa: "kVt",
    },
    WordTranscription {
        word: "goat",
        ipa_rp: "/ɡəʊt/",
        ipa_ga: "/ɡoʊt/",
        arpabet: "G OW T",
        xsampa: "g@Ut",
    },
];
