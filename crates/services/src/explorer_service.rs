use phono_core::data;
use phono_core::model::articulation::{self, ArticulationLookup, ArticulationRecord};
use phono_core::model::{MasteryStat, Percentage, SymbolEntry, SymbolKind};

/// Quick-stat panel of the sound explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerStats {
    pub mastery: Vec<MasteryStat>,
    pub overall: Percentage,
}

/// IPA chart browsing and articulation lookup.
#[derive(Debug, Clone, Copy)]
pub struct ExplorerService {
    records: &'static [ArticulationRecord],
}

impl Default for ExplorerService {
    fn default() -> Self {
        Self::new(&data::ARTICULATION_RECORDS)
    }
}

impl ExplorerService {
    #[must_use]
    pub fn new(records: &'static [ArticulationRecord]) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn symbols(&self, kind: SymbolKind) -> &'static [SymbolEntry] {
        data::symbols(kind)
    }

    /// Chart entry for `symbol`; slashes and brackets are ignored.
    #[must_use]
    pub fn find_symbol(&self, symbol: &str) -> Option<&'static SymbolEntry> {
        let wanted = articulation::normalize_symbol(symbol);
        SymbolKind::ALL
            .into_iter()
            .flat_map(data::symbols)
            .find(|entry| entry.symbol == wanted)
    }

    #[must_use]
    pub fn articulation(&self, symbol: &str) -> ArticulationLookup<'static> {
        let found = articulation::lookup(self.records, symbol);
        if !found.is_found() {
            tracing::debug!(symbol, "no articulation data");
        }
        found
    }

    /// Symbols that have articulation data, in table order.
    #[must_use]
    pub fn visualizer_symbols(&self) -> impl Iterator<Item = &'static str> + 'static {
        self.records.iter().map(|record| record.symbol)
    }

    #[must_use]
    pub fn quick_stats(&self) -> ExplorerStats {
        ExplorerStats {
            mastery: data::chart_mastery(),
            overall: data::OVERALL_PROGRESS,
        }
    }
}
