use phono_core::model::{ArticulationLookup, SymbolEntry, SymbolKind};
use services::ExplorerStats;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTileVm {
    pub symbol: &'static str,
    pub title: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolSectionVm {
    pub heading: &'static str,
    pub tiles: Vec<SymbolTileVm>,
}

#[must_use]
pub fn map_symbol_section(
    kind: SymbolKind,
    entries: &[SymbolEntry],
    selected: Option<&str>,
) -> SymbolSectionVm {
    SymbolSectionVm {
        heading: kind.heading(),
        tiles: entries
            .iter()
            .map(|entry| SymbolTileVm {
                symbol: entry.symbol,
                title: entry.description(),
                selected: selected == Some(entry.symbol),
            })
            .collect(),
    }
}

/// Detail card for the selected sound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolDetailVm {
    pub symbol_label: String,
    pub kind_label: &'static str,
    pub description: String,
    pub articulation: Option<String>,
}

#[must_use]
pub fn map_symbol_detail(
    entry: &SymbolEntry,
    articulation: ArticulationLookup<'_>,
) -> SymbolDetailVm {
    let kind_label = match entry.kind() {
        SymbolKind::Vowel => "Vowel",
        SymbolKind::Consonant => "Consonant",
        SymbolKind::Diphthong => "Diphthong",
    };
    SymbolDetailVm {
        symbol_label: format!("/{}/", entry.symbol),
        kind_label,
        description: entry.description(),
        articulation: articulation
            .record()
            .map(|record| format!("Tongue: {}. Lips: {}.", record.tongue, record.lips)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickStatVm {
    pub label: String,
    pub value_label: String,
    pub width_pct: u8,
}

#[must_use]
pub fn map_quick_stats(stats: &ExplorerStats) -> Vec<QuickStatVm> {
    let mut out: Vec<_> = stats
        .mastery
        .iter()
        .map(|stat| QuickStatVm {
            label: stat.label.clone(),
            value_label: format!("{}/{}", stat.mastered, stat.total),
            width_pct: stat.percentage().value(),
        })
        .collect();
    out.push(QuickStatVm {
        label: "Overall Progress".to_string(),
        value_label: stats.overall.to_string(),
        width_pct: stats.overall.value(),
    });
    out
}
