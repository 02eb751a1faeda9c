use phono_core::data;
use phono_core::model::notation::{self, NotationRow, NotationSystem, WordTranscription};

/// Notation conversion table, word lookup and notation guide.
#[derive(Debug, Clone, Copy)]
pub struct NotationService {
    rows: &'static [NotationRow],
    words: &'static [WordTranscription],
}

impl Default for NotationService {
    fn default() -> Self {
        Self::new(&data::NOTATION_ROWS, &data::WORD_TRANSCRIPTIONS)
    }
}

impl NotationService {
    #[must_use]
    pub fn new(rows: &'static [NotationRow], words: &'static [WordTranscription]) -> Self {
        Self { rows, words }
    }

    #[must_use]
    pub fn systems(&self) -> &'static [NotationSystem] {
        &NotationSystem::ALL
    }

    #[must_use]
    pub fn rows(&self) -> &'static [NotationRow] {
        self.rows
    }

    /// Rows with any cell containing `query`, case-insensitively. The query is not
    /// trimmed; an empty query returns every row.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&'static NotationRow> {
        let rows = notation::filter_rows(self.rows, query);
        tracing::debug!(query, matches = rows.len(), "notation filter");
        rows
    }

    /// Every `to` spelling of the sound written `value` in `from`.
    #[must_use]
    pub fn convert(
        &self,
        from: NotationSystem,
        value: &str,
        to: NotationSystem,
    ) -> Vec<&'static str> {
        let out = notation::convert(self.rows, from, value, to);
        if out.is_empty() {
            tracing::debug!(from = from.id(), value, to = to.id(), "no conversion");
        }
        out
    }

    /// Text placed on the clipboard when a row's copy button is pressed.
    #[must_use]
    pub fn copy_text(&self, row: &NotationRow, system: NotationSystem) -> Option<&'static str> {
        row.get(system)
    }

    /// Transcriptions of `word`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn lookup_word(&self, word: &str) -> Option<&'static WordTranscription> {
        let wanted = word.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        let found = self.words.iter().find(|entry| entry.word == wanted);
        if found.is_none() {
            tracing::debug!(word = %wanted, "no transcription");
        }
        found
    }

    /// Systems paired with their one-line guide entry, in column order.
    #[must_use]
    pub fn guide(&self) -> Vec<(NotationSystem, &'static str)> {
        NotationSystem::ALL
            .into_iter()
            .map(|system| (system, system.description()))
            .collect()
    }
}
