use dioxus::prelude::*;
use phono_core::model::TonguePosition;

use crate::context::{AppContext, use_sound_selection};
use crate::vm::{
    ArticulationPanelVm, PRONUNCIATION_TIPS, SPEED_STEPS, ViewMode, WAVEFORM_PATH,
    map_articulation_panel, marker_coords, speed_label,
};

const FALLBACK_SYMBOL: &str = "i";

#[component]
pub fn VisualizerView() -> Element {
    let ctx = use_context::<AppContext>();
    let explorer = ctx.explorer();
    let selection = use_sound_selection();
    let mut picked = use_signal(|| None::<&'static str>);
    let mut mode = use_signal(ViewMode::default);
    let mut speed = use_signal(|| 10_u8);
    let mut playing = use_signal(|| false);

    let symbol = picked()
        .or_else(|| selection.current())
        .unwrap_or(FALLBACK_SYMBOL);
    let lookup = explorer.articulation(symbol);
    let marker = lookup.tongue_position();
    let panel = map_articulation_panel(symbol, lookup);
    let choices = explorer.visualizer_symbols().collect::<Vec<_>>();
    let current_mode = mode();
    let current_speed = speed();
    let play_label = if playing() { "Pause" } else { "Play" };

    rsx! {
        div { class: "page visualizer-page",
            header { class: "view-header",
                h2 { class: "view-title", "Articulation Visualizer" }
                p { class: "view-subtitle", "See where the tongue, lips and velum sit for each sound." }
            }
            div { class: "view-divider" }
            div { class: "visualizer-picker",
                for choice in choices {
                    button {
                        key: "{choice}",
                        class: if choice == symbol { "symbol-tile symbol-tile--selected" } else { "symbol-tile" },
                        r#type: "button",
                        onclick: move |_| picked.set(Some(choice)),
                        "{choice}"
                    }
                }
            }
            div { class: "visualizer-layout",
                div { class: "card visualizer-stage",
                    div { class: "segmented",
                        for view_mode in ViewMode::ALL {
                            button {
                                key: "{view_mode.label()}",
                                class: if view_mode == current_mode { "segment segment--active" } else { "segment" },
                                r#type: "button",
                                onclick: move |_| mode.set(view_mode),
                                "{view_mode.label()}"
                            }
                        }
                    }
                    match current_mode {
                        ViewMode::Sagittal => rsx! {
                            SagittalDiagram { marker }
                        },
                        ViewMode::ThreeD => rsx! {
                            div { class: "diagram-placeholder",
                                div { class: "diagram-symbol", "{symbol}" }
                                if let Some(caption) = current_mode.caption() {
                                    p { class: "view-hint", "{caption}" }
                                }
                            }
                        },
                        ViewMode::Waveform => rsx! {
                            div { class: "diagram-placeholder",
                                div { class: "diagram-symbol", "{symbol}" }
                                svg { class: "waveform", view_box: "0 0 200 60", width: "300", height: "90",
                                    path { d: WAVEFORM_PATH, fill: "none", stroke: "currentColor", stroke_width: "2" }
                                }
                                if let Some(caption) = current_mode.caption() {
                                    p { class: "view-hint", "{caption}" }
                                }
                            }
                        },
                    }
                    div { class: "playback",
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| playing.set(!playing()),
                            "{play_label} /{symbol}/"
                        }
                        div { class: "segmented",
                            for step in SPEED_STEPS {
                                button {
                                    key: "{step}",
                                    class: if step == current_speed { "segment segment--active" } else { "segment" },
                                    r#type: "button",
                                    onclick: move |_| speed.set(step),
                                    "{speed_label(step)}"
                                }
                            }
                        }
                    }
                }
                aside { class: "visualizer-sidebar",
                    div { class: "card articulation-panel",
                        h3 { "/{symbol}/" }
                        match panel {
                            ArticulationPanelVm::Found { title, rows } => rsx! {
                                p { class: "articulation-title", "{title}" }
                                dl {
                                    for row in rows {
                                        dt { key: "{row.label}", "{row.label}" }
                                        dd { "{row.value}" }
                                    }
                                }
                            },
                            ArticulationPanelVm::NotFound { message } => rsx! {
                                p { class: "view-hint", "{message}" }
                            },
                        }
                    }
                    div { class: "card pronunciation-tips",
                        h3 { "Pronunciation Tips" }
                        for (label, tip) in PRONUNCIATION_TIPS {
                            p { key: "{label}",
                                strong { "{label}: " }
                                "{tip}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SagittalDiagram(marker: TonguePosition) -> Element {
    let (cx, cy) = marker_coords(marker);
    rsx! {
        svg {
            class: "sagittal",
            view_box: "0 0 300 300",
            width: "300",
            height: "300",
            path {
                class: "sagittal-outline",
                d: "M60 120 Q60 40 150 40 Q240 40 250 120 L250 220 Q200 260 150 260 Q90 260 60 220 Z",
                fill: "none",
                stroke: "currentColor",
            }
            path {
                class: "sagittal-palate",
                d: "M90 120 Q150 70 220 120",
                fill: "none",
                stroke: "currentColor",
            }
            path {
                class: "sagittal-tongue",
                d: "M90 220 Q150 150 220 210",
                fill: "none",
                stroke: "currentColor",
            }
            circle { class: "tongue-marker", cx: "{cx}", cy: "{cy}", r: "8" }
        }
    }
}
