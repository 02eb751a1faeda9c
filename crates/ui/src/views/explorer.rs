use dioxus::prelude::*;
use dioxus_router::Link;
use phono_core::model::SymbolKind;

use crate::context::{AppContext, use_sound_selection};
use crate::routes::Route;
use crate::vm::{
    SymbolDetailVm, SymbolTileVm, map_quick_stats, map_symbol_detail, map_symbol_section,
};

#[component]
pub fn ExplorerView() -> Element {
    let ctx = use_context::<AppContext>();
    let explorer = ctx.explorer();
    let selection = use_sound_selection();
    let selected = selection.current();

    let groups = SymbolKind::ALL
        .into_iter()
        .map(|kind| map_symbol_section(kind, explorer.symbols(kind), selected))
        .collect::<Vec<_>>();
    let detail = selected
        .and_then(|symbol| explorer.find_symbol(symbol))
        .map(|entry| map_symbol_detail(entry, explorer.articulation(entry.symbol)));
    let stats = map_quick_stats(&explorer.quick_stats());

    rsx! {
        div { class: "page explorer-page",
            header { class: "view-header",
                h2 { class: "view-title", "Sound Explorer" }
                p { class: "view-subtitle", "Click any symbol on the IPA chart to see how it is produced." }
            }
            div { class: "view-divider" }
            div { class: "explorer-layout",
                div { class: "ipa-chart",
                    for group in groups {
                        div { class: "chart-section", key: "{group.heading}",
                            h3 { class: "chart-heading", "{group.heading}" }
                            div { class: "symbol-grid",
                                for tile in group.tiles {
                                    SymbolTile { key: "{tile.symbol}", tile }
                                }
                            }
                        }
                    }
                }
                aside { class: "explorer-sidebar",
                    SymbolDetail { detail }
                    div { class: "card quick-stats",
                        h3 { "Quick Stats" }
                        for stat in stats {
                            div { class: "quick-stat", key: "{stat.label}",
                                div { class: "quick-stat-row",
                                    span { "{stat.label}" }
                                    span { class: "quick-stat-value", "{stat.value_label}" }
                                }
                                div { class: "progress-track",
                                    div { class: "progress-fill", style: "width: {stat.width_pct}%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SymbolTile(tile: SymbolTileVm) -> Element {
    let mut selection = use_sound_selection();
    let symbol = tile.symbol;
    let class = if tile.selected {
        "symbol-tile symbol-tile--selected"
    } else {
        "symbol-tile"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: "{tile.title}",
            onclick: move |_| selection.select(symbol),
            "{symbol}"
        }
    }
}

#[component]
fn SymbolDetail(detail: Option<SymbolDetailVm>) -> Element {
    match detail {
        Some(detail) => rsx! {
            div { class: "card symbol-detail",
                div { class: "symbol-detail-symbol", "{detail.symbol_label}" }
                span { class: "badge", "{detail.kind_label}" }
                p { class: "symbol-detail-description", "{detail.description}" }
                match detail.articulation {
                    Some(text) => rsx! {
                        p { class: "symbol-detail-articulation", "{text}" }
                        Link { class: "btn btn-secondary", to: Route::Visualizer {}, "Open in Visualizer" }
                    },
                    None => rsx! {
                        p { class: "view-hint", "No articulation diagram for this sound yet." }
                    },
                }
            }
        },
        None => rsx! {
            div { class: "card symbol-detail symbol-detail--empty",
                p { class: "view-hint", "Select a symbol to see its details." }
            }
        },
    }
}
