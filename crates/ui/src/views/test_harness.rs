use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use phono_core::model::{PracticeType, QuizSettings};
use phono_core::time::fixed_clock;
use services::{AppServices, QuizSession};

use crate::context::{ServicesApp, UiApp, build_app_context, use_sound_selection_provider};
use crate::routes::Tab;
use crate::views::practice::QuizPanel;
use crate::views::{
    ConverterView, ExplorerView, LanguageDetailView, LanguagesView, PracticeView, ProfileView,
    StartView, VisualizerView,
};
use crate::vm::map_quiz_screen;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Start,
    Explorer,
    Converter,
    Languages,
    LanguageDetail(&'static str),
    Visualizer,
    Practice,
    Profile,
    QuizInProgress(PracticeType),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<ServicesApp>,
    view: ViewKind,
    selection: Option<&'static str>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_sound_selection_provider(props.selection);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Start => rsx! { StartView {} },
        ViewKind::Explorer => rsx! { ExplorerView {} },
        ViewKind::Converter => rsx! { ConverterView {} },
        ViewKind::Languages => rsx! { LanguagesView {} },
        ViewKind::LanguageDetail(name) => rsx! { LanguageDetailView { name: name.to_string() } },
        ViewKind::Visualizer => rsx! { VisualizerView {} },
        ViewKind::Practice => rsx! { PracticeView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::QuizInProgress(practice_type) => rsx! { QuizInProgress { practice_type } },
    }
}

/// Renders the quiz panel for a freshly started session.
#[component]
fn QuizInProgress(practice_type: PracticeType) -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    let session = use_signal(|| ctx.practice().start(practice_type).ok());
    let screen = session.read().as_ref().and_then(map_quiz_screen);
    match screen {
        Some(vm) => rsx! {
            QuizPanel {
                vm,
                error: None,
                on_select: |_| {},
                on_submit: |_| {},
                on_advance: |_| {},
                on_exit: |_| {},
            }
        },
        None => rsx! { p { "no session" } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, Tab::default(), None)
}

pub fn setup_view_harness_with(
    view: ViewKind,
    start_tab: Tab,
    selection: Option<&'static str>,
) -> ViewHarness {
    let services = AppServices::builtin(fixed_clock(), QuizSettings::default());
    let app = Arc::new(ServicesApp::new(services, start_tab));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            selection,
        },
    );
    ViewHarness { dom }
}

/// Start a session the same way the practice page does, for assertions on its state.
pub fn start_session(practice_type: PracticeType) -> QuizSession {
    AppServices::builtin(fixed_clock(), QuizSettings::default())
        .practice()
        .start(practice_type)
        .expect("builtin bank has questions")
}
