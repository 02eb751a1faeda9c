use phono_core::model::{NotationRow, NotationSystem, WordTranscription};
use services::NotationService;

/// Column whose spelling the copy button writes to the clipboard.
pub const COPY_SYSTEM: NotationSystem = NotationSystem::IpaRp;

/// Placeholder for a notation cell the table has no value for.
pub const MISSING_CELL: &str = "–";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotationRowVm {
    pub key: String,
    pub cells: Vec<&'static str>,
    pub copy_text: Option<&'static str>,
}

#[must_use]
pub fn map_notation_rows(notation: &NotationService, rows: &[&NotationRow]) -> Vec<NotationRowVm> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| NotationRowVm {
            key: format!("{idx}-{}", row.get(NotationSystem::IpaRp).unwrap_or(MISSING_CELL)),
            cells: NotationSystem::ALL
                .into_iter()
                .map(|system| row.get(system).unwrap_or(MISSING_CELL))
                .collect(),
            copy_text: notation.copy_text(row, COPY_SYSTEM),
        })
        .collect()
}

/// `"Showing 3 of 17 sounds"`.
#[must_use]
pub fn result_count_label(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} sounds")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordLookupVm {
    pub word: &'static str,
    pub entries: Vec<(&'static str, &'static str)>,
}

#[must_use]
pub fn map_word_lookup(found: Option<&WordTranscription>) -> Option<WordLookupVm> {
    found.map(|entry| WordLookupVm {
        word: entry.word,
        entries: entry
            .entries()
            .into_iter()
            .map(|(system, value)| (system.label(), value))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use phono_core::data;

    #[test]
    fn rows_fill_missing_cells() {
        let partial = NotationRow::from_cells([
            Some("/ɒ/"),
            None,
            None,
            None,
            None,
            Some("Q"),
            None,
            None,
            None,
        ]);
        let vms = map_notation_rows(&NotationService::default(), &[&partial]);
        assert_eq!(vms[0].cells.len(), NotationSystem::COUNT);
        assert_eq!(vms[0].cells[1], MISSING_CELL);
        assert_eq!(vms[0].cells[5], "Q");
        assert_eq!(vms[0].copy_text, Some("/ɒ/"));
    }

    #[test]
    fn copy_text_uses_rp_column_of_filtered_rows() {
        let notation = NotationService::default();
        let rows = notation.filter("IY");
        let vms = map_notation_rows(&notation, &rows);
        assert_eq!(vms.len(), 1);
        assert_eq!(vms[0].copy_text, Some("/iː/"));
    }

    #[test]
    fn word_lookup_lists_labelled_entries() {
        let vm = map_word_lookup(data::WORD_TRANSCRIPTIONS.iter().find(|w| w.word == "see"))
            .unwrap();
        assert_eq!(vm.entries[0], ("IPA (RP)", "/siː/"));
        assert_eq!(vm.entries[2], ("ARPAbet", "S IY"));
        assert!(map_word_lookup(None).is_none());
    }

    #[test]
    fn count_label() {
        assert_eq!(result_count_label(2, 17), "Showing 2 of 17 sounds");
    }
}
