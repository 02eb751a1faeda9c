use dioxus::prelude::*;
use phono_core::model::PracticeType;
use services::{QuizSession, SubmitOutcome};

use crate::context::AppContext;
use crate::vm::{
    PracticeScreen, QuizScreenVm, map_practice_types, map_quiz_screen, quiz_error_message,
    screen_after_advance,
};

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let practice = ctx.practice();
    let mut session = use_signal(|| None::<QuizSession>);
    let mut error = use_signal(|| None::<String>);
    let mut banner = use_signal(|| None::<String>);

    let screen = session.read().as_ref().and_then(map_quiz_screen);
    if let Some(vm) = screen {
        let submit_with = practice.clone();
        let advance_with = practice.clone();
        return rsx! {
            QuizPanel {
                vm,
                error: error(),
                on_select: move |value: String| {
                    let result = match &mut *session.write() {
                        Some(quiz) => quiz.select_answer(&value),
                        None => return,
                    };
                    if let Err(err) = result {
                        error.set(Some(quiz_error_message(&err)));
                    }
                },
                on_submit: move |_| {
                    let result = match &mut *session.write() {
                        Some(quiz) => submit_with.submit(quiz),
                        None => return,
                    };
                    match result {
                        Ok(SubmitOutcome::Answered(_)) => error.set(None),
                        Ok(SubmitOutcome::NothingSelected) => {}
                        Err(err) => error.set(Some(quiz_error_message(&err))),
                    }
                },
                on_advance: move |_| {
                    let result = match &mut *session.write() {
                        Some(quiz) => advance_with.advance(quiz),
                        None => return,
                    };
                    let outcome = match result {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            error.set(Some(quiz_error_message(&err)));
                            return;
                        }
                    };
                    error.set(None);
                    if let PracticeScreen::Picker { banner: message } =
                        screen_after_advance(&outcome)
                    {
                        banner.set(Some(message));
                        session.set(None);
                    }
                },
                on_exit: move |_| {
                    tracing::debug!("quiz abandoned");
                    error.set(None);
                    session.set(None);
                },
            }
        };
    }

    let cards = map_practice_types(practice.practice_types());
    let performance = practice.recent_performance();
    let focus = practice.recommended_focus();

    let start_quiz = move |practice_type: PracticeType| match practice.start(practice_type) {
        Ok(quiz) => {
            banner.set(None);
            error.set(None);
            session.set(Some(quiz));
        }
        Err(err) => error.set(Some(quiz_error_message(&err))),
    };

    rsx! {
        div { class: "page practice-page",
            header { class: "view-header",
                h2 { class: "view-title", "Practice" }
                p { class: "view-subtitle", "Train your ear and your transcription skills." }
            }
            div { class: "view-divider" }
            if let Some(message) = banner() {
                div { class: "banner banner--success", "{message}" }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            div { class: "practice-grid",
                for card in cards {
                    div { key: "{card.practice_type.id()}", class: "card practice-card",
                        h3 { "{card.name}" }
                        p { class: "view-hint", "{card.description}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: {
                                let mut start_quiz = start_quiz.clone();
                                let practice_type = card.practice_type;
                                move |_| start_quiz(practice_type)
                            },
                            "Start"
                        }
                    }
                }
            }
            div { class: "practice-panels",
                div { class: "card",
                    h3 { "Recent Performance" }
                    for (label, score) in performance.iter() {
                        div { key: "{label}", class: "quick-stat-row",
                            span { "{label}" }
                            span { class: "quick-stat-value", "{score}" }
                        }
                    }
                }
                div { class: "card",
                    h3 { "Recommended Focus" }
                    ul {
                        for item in focus.iter() {
                            li { key: "{item}", "{item}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(crate) fn QuizPanel(
    vm: QuizScreenVm,
    error: Option<String>,
    on_select: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_advance: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    let can_select = vm.can_select;
    rsx! {
        div { class: "page quiz-page",
            header { class: "quiz-header",
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| on_exit.call(()),
                    "← Back"
                }
                h2 { class: "view-title", "{vm.title}" }
                span { class: "view-hint", "{vm.score_label}" }
            }
            div { class: "quiz-progress",
                span { "{vm.position_label}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {vm.progress_pct}%" }
                }
            }
            div { class: "card quiz-card",
                p { class: "view-hint", "{vm.instructions}" }
                p { class: "quiz-prompt", "{vm.prompt}" }
                if let Some(audio) = vm.audio_label.as_ref() {
                    button { class: "btn btn-secondary", r#type: "button", disabled: true, "🔊 {audio}" }
                }
                div { class: "quiz-options",
                    for option in vm.options.iter().cloned() {
                        button {
                            key: "{option.value}",
                            class: "{option.state.class()}",
                            r#type: "button",
                            disabled: !can_select,
                            onclick: {
                                let value = option.value.clone();
                                move |_| on_select.call(value.clone())
                            },
                            span { class: "quiz-option-value", "{option.value}" }
                            if let Some(transcription) = option.transcription.as_ref() {
                                span { class: "quiz-option-ipa", "{transcription}" }
                            }
                        }
                    }
                }
                if let Some(feedback) = vm.feedback.as_ref() {
                    div {
                        class: if feedback.is_correct { "feedback feedback--correct" } else { "feedback feedback--incorrect" },
                        p { class: "feedback-headline", "{feedback.headline}" }
                        if let Some(explanation) = feedback.explanation.as_ref() {
                            p { "{explanation}" }
                        }
                    }
                }
                if let Some(message) = error.as_ref() {
                    p { class: "form-error", "{message}" }
                }
                div { class: "quiz-actions",
                    if vm.feedback.is_some() {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| on_advance.call(()),
                            "{vm.next_label}"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: !vm.can_submit,
                            onclick: move |_| on_submit.call(()),
                            "Submit Answer"
                        }
                    }
                }
            }
        }
    }
}
