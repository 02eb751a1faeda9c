use dioxus::prelude::*;
use phono_core::model::NotationSystem;

use super::scripts::copy_to_clipboard;
use crate::context::AppContext;
use crate::vm::{map_notation_rows, map_word_lookup, result_count_label};

#[component]
pub fn ConverterView() -> Element {
    let ctx = use_context::<AppContext>();
    let notation = ctx.notation();
    let mut search = use_signal(String::new);
    let mut word = use_signal(String::new);

    let query = search();
    let rows = notation.filter(&query);
    let count_label = result_count_label(rows.len(), notation.rows().len());
    let row_vms = map_notation_rows(&notation, &rows);

    let word_query = word();
    let lookup = map_word_lookup(notation.lookup_word(&word_query));
    let show_miss = lookup.is_none() && !word_query.trim().is_empty();
    let guide = notation.guide();

    rsx! {
        div { class: "page converter-page",
            header { class: "view-header",
                h2 { class: "view-title", "Notation Converter" }
                p { class: "view-subtitle", "Compare how each sound is written across notation systems." }
            }
            div { class: "view-divider" }
            div { class: "converter-search",
                input {
                    class: "input",
                    r#type: "search",
                    placeholder: "Search any notation (e.g. IY, /ɪ/, ē)",
                    value: "{query}",
                    oninput: move |evt| search.set(evt.value()),
                }
                span { class: "view-hint", "{count_label}" }
            }
            div { class: "table-wrap",
                table { class: "notation-table",
                    thead {
                        tr {
                            for system in NotationSystem::ALL {
                                th { key: "{system.id()}", "{system.label()}" }
                            }
                            th { "" }
                        }
                    }
                    tbody {
                        for row in row_vms {
                            tr { key: "{row.key}",
                                for (idx, cell) in row.cells.iter().enumerate() {
                                    td { key: "{idx}", class: "notation-cell", "{cell}" }
                                }
                                td {
                                    if let Some(text) = row.copy_text {
                                        button {
                                            class: "btn btn-ghost copy-btn",
                                            r#type: "button",
                                            title: "Copy IPA",
                                            onclick: move |_| copy_to_clipboard(text),
                                            "Copy"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if rows.is_empty() {
                    p { class: "view-hint", "No sounds match that search." }
                }
            }
            div { class: "converter-panels",
                div { class: "card word-lookup",
                    h3 { "Word Lookup" }
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Type a word (e.g. think)",
                        value: "{word_query}",
                        oninput: move |evt| word.set(evt.value()),
                    }
                    if let Some(found) = lookup {
                        dl { class: "word-lookup-result",
                            for (label, value) in found.entries {
                                dt { key: "{label}", "{label}" }
                                dd { "{value}" }
                            }
                        }
                    }
                    if show_miss {
                        p { class: "view-hint", "No transcription for \"{word_query.trim()}\"." }
                    }
                }
                div { class: "card notation-guide",
                    h3 { "Notation Guide" }
                    ul {
                        for (system, description) in guide {
                            li { key: "{system.id()}",
                                strong { "{system.label()}" }
                                span { ": {description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
