use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{
    level_label, map_achievement, map_activity, map_header_stats, map_language_progress,
};

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.profile().dashboard();
    let learner = dashboard.learner;

    let stats = map_header_stats(learner);
    let level = level_label(learner);
    let level_pct = learner.level_progress.value();
    let recent = dashboard
        .recent_achievements
        .iter()
        .map(|achievement| map_achievement(achievement))
        .collect::<Vec<_>>();
    let achievements = dashboard
        .achievements
        .iter()
        .map(map_achievement)
        .collect::<Vec<_>>();
    let languages = dashboard
        .language_progress
        .iter()
        .map(map_language_progress)
        .collect::<Vec<_>>();
    let activity = dashboard
        .recent_activity
        .iter()
        .map(|entry| map_activity(entry))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page profile-page",
            header { class: "card profile-header",
                div { class: "avatar", "{learner.initials}" }
                div { class: "profile-identity",
                    h2 { class: "view-title", "{learner.display_name}" }
                    p { class: "view-subtitle", "Learning since {learner.learning_since} · {learner.rank}" }
                    div { class: "level",
                        span { "{level}" }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {level_pct}%" }
                        }
                        span { class: "view-hint", "{learner.level_progress} to next level" }
                    }
                }
                div { class: "stat-tiles",
                    for stat in stats {
                        div { key: "{stat.label}", class: "stat-tile",
                            span { class: "stat-value", "{stat.value}" }
                            span { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
            div { class: "profile-layout",
                div { class: "profile-main",
                    div { class: "card",
                        h3 { "Language Progress" }
                        for row in languages {
                            div { key: "{row.language}", class: "language-progress",
                                div { class: "quick-stat-row",
                                    span { "{row.language}" }
                                    span { class: "quick-stat-value", "{row.progress_pct}%" }
                                }
                                div { class: "progress-track",
                                    div { class: "progress-fill", style: "width: {row.progress_pct}%" }
                                }
                                span { class: "view-hint", "{row.detail_label}" }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Recent Activity" }
                        ul { class: "activity-list",
                            for entry in activity {
                                li { key: "{entry.date_label}-{entry.activity}", class: "activity",
                                    span { class: "activity-icon", "{entry.icon}" }
                                    div {
                                        p { "{entry.activity}" }
                                        span { class: "view-hint", "{entry.date_label}" }
                                    }
                                    span { class: "activity-score", "{entry.score}" }
                                }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "All Achievements" }
                        div { class: "achievement-grid",
                            for achievement in achievements {
                                div { key: "{achievement.name}", class: "{achievement.class}",
                                    span { class: "achievement-icon", "{achievement.icon}" }
                                    strong { "{achievement.name}" }
                                    span { class: "view-hint", "{achievement.description}" }
                                }
                            }
                        }
                    }
                }
                aside { class: "profile-sidebar",
                    div { class: "card",
                        h3 { "Recent Achievements" }
                        for achievement in recent {
                            div { key: "{achievement.name}", class: "{achievement.class}",
                                span { class: "achievement-icon", "{achievement.icon}" }
                                strong { "{achievement.name}" }
                            }
                        }
                    }
                    div { class: "card",
                        h3 { "Sounds to Practice" }
                        for problem in dashboard.problem_sounds.iter() {
                            div { key: "{problem.sound}-{problem.language}", class: "problem-sound",
                                span { class: "problem-symbol", "{problem.sound}" }
                                span { "{problem.language}" }
                                span { class: "view-hint", "{problem.attempts} attempts · {problem.accuracy}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
