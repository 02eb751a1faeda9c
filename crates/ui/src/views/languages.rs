use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{LanguageCardVm, map_language_card};

#[component]
pub fn LanguagesView() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = ctx
        .languages()
        .languages()
        .iter()
        .map(map_language_card)
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page languages-page",
            header { class: "view-header",
                h2 { class: "view-title", "Language Modules" }
                p { class: "view-subtitle", "Explore the sound systems of different languages and dialects." }
            }
            div { class: "view-divider" }
            div { class: "language-grid",
                for card in cards {
                    LanguageCard { key: "{card.name}", card }
                }
            }
        }
    }
}

#[component]
fn LanguageCard(card: LanguageCardVm) -> Element {
    rsx! {
        div { class: "card language-card",
            div { class: "language-card-header",
                h3 { "{card.name}" }
                span { class: "{card.difficulty_class}", "{card.difficulty_label}" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {card.progress_pct}%" }
            }
            div { class: "language-card-stats",
                span { "{card.progress_label}" }
                span { "{card.mastered_label}" }
            }
            div { class: "dialect-pills",
                for dialect in card.dialect_preview.iter() {
                    span { key: "{dialect}", class: "pill", "{dialect}" }
                }
                if let Some(extra) = card.extra_dialects_label.as_ref() {
                    span { class: "pill pill--extra", "{extra}" }
                }
            }
            Link {
                class: "btn btn-primary",
                to: Route::LanguageDetail { name: card.name.to_string() },
                "Start Learning"
            }
        }
    }
}

#[component]
pub fn LanguageDetailView(name: String) -> Element {
    let ctx = use_context::<AppContext>();
    let languages = ctx.languages();
    let mut selected_dialect = use_signal(|| None::<&'static str>);
    let mut error = use_signal(|| None::<String>);

    let Ok(module) = languages.find(&name) else {
        return rsx! {
            div { class: "page language-detail-page",
                p { class: "view-hint", "No language module named \"{name}\"." }
                Link { class: "btn btn-secondary", to: Route::Languages {}, "Back to languages" }
            }
        };
    };
    let card = map_language_card(module);
    let pairs = languages.minimal_pairs();
    let features = languages.dialect_features();

    let dialect_buttons = module.dialects.iter().map(|dialect| {
        let dialect = *dialect;
        let languages = languages.clone();
        let class = if selected_dialect() == Some(dialect) {
            "pill pill--button pill--active"
        } else {
            "pill pill--button"
        };
        rsx! {
            button {
                key: "{dialect}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| match languages.select_dialect(module.name, dialect) {
                    Ok(selection) => {
                        selected_dialect.set(Some(selection.dialect));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                },
                "{dialect}"
            }
        }
    });

    rsx! {
        div { class: "page language-detail-page",
            header { class: "view-header",
                Link { class: "btn btn-ghost", to: Route::Languages {}, "← All languages" }
                h2 { class: "view-title", "{card.name}" }
                p { class: "view-subtitle", "{card.difficulty_label} · {card.mastered_label}" }
            }
            div { class: "view-divider" }
            div { class: "card",
                h3 { "Dialects" }
                div { class: "dialect-pills", {dialect_buttons} }
                if let Some(message) = error() {
                    p { class: "form-error", "{message}" }
                }
                if let Some(dialect) = selected_dialect() {
                    div { class: "dialect-detail",
                        h4 { "{dialect}: key features" }
                        ul {
                            for feature in features.iter() {
                                li { key: "{feature}", "{feature}" }
                            }
                        }
                    }
                }
            }
            div { class: "card",
                h3 { "Minimal Pairs" }
                div { class: "pair-grid",
                    for pair in pairs.iter() {
                        div { key: "{pair.word1}-{pair.word2}", class: "pair",
                            div { class: "pair-words",
                                span { "{pair.word1} {pair.ipa1}" }
                                span { class: "pair-vs", "vs" }
                                span { "{pair.word2} {pair.ipa2}" }
                            }
                            span { class: "view-hint", "{pair.focus}" }
                        }
                    }
                }
            }
        }
    }
}
