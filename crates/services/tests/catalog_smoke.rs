use phono_core::model::{NotationSystem, QuizSettings, SymbolKind};
use phono_core::time::fixed_clock;
use services::AppServices;

#[test]
fn every_filtered_row_contains_the_query() {
    let notation = AppServices::builtin(fixed_clock(), QuizSettings::default()).notation();
    for query in ["", "a", "OU", "/ɔ", "ē", "@", "nothing-here"] {
        let rows = notation.filter(query);
        if query.is_empty() {
            assert_eq!(rows.len(), notation.rows().len());
        }
        let lowered = query.to_lowercase();
        for row in rows {
            assert!(
                row.fields()
                    .any(|(_, cell)| cell.to_lowercase().contains(&lowered)),
                "{query:?}"
            );
        }
    }
}

#[test]
fn chart_symbols_with_records_resolve() {
    let explorer = AppServices::builtin(fixed_clock(), QuizSettings::default()).explorer();
    let mut resolved = 0;
    for kind in SymbolKind::ALL {
        for entry in explorer.symbols(kind) {
            if explorer.articulation(&format!("/{}/", entry.symbol)).is_found() {
                resolved += 1;
            }
        }
    }
    assert_eq!(resolved, explorer.visualizer_symbols().count());
}

#[test]
fn converter_and_language_catalog_agree_on_samples() {
    let services = AppServices::builtin(fixed_clock(), QuizSettings::default());
    let ship = services.notation().lookup_word("ship").unwrap();
    let pair = services
        .languages()
        .minimal_pairs()
        .iter()
        .find(|pair| pair.word1 == "ship")
        .unwrap();
    assert_eq!(ship.ipa_rp, pair.ipa1);
    assert_eq!(
        services
            .notation()
            .convert(NotationSystem::IpaRp, "/iː/", NotationSystem::Arpabet),
        vec!["IY"]
    );
}
