use std::sync::Arc;

use dioxus::prelude::*;
use services::{
    AppServices, ExplorerService, LanguageService, NotationService, PracticeService,
    ProfileService,
};

use crate::routes::Tab;

pub trait UiApp: Send + Sync {
    fn start_tab(&self) -> Tab;

    fn explorer(&self) -> Arc<ExplorerService>;
    fn notation(&self) -> Arc<NotationService>;
    fn languages(&self) -> Arc<LanguageService>;
    fn practice(&self) -> Arc<PracticeService>;
    fn profile(&self) -> Arc<ProfileService>;
}

#[derive(Clone)]
pub struct AppContext {
    start_tab: Tab,

    explorer: Arc<ExplorerService>,
    notation: Arc<NotationService>,
    languages: Arc<LanguageService>,
    practice: Arc<PracticeService>,
    profile: Arc<ProfileService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            start_tab: app.start_tab(),
            explorer: app.explorer(),
            notation: app.notation(),
            languages: app.languages(),
            practice: app.practice(),
            profile: app.profile(),
        }
    }

    /// Tab shown at `/` when the window opens.
    #[must_use]
    pub fn start_tab(&self) -> Tab {
        self.start_tab
    }

    #[must_use]
    pub fn explorer(&self) -> Arc<ExplorerService> {
        Arc::clone(&self.explorer)
    }

    #[must_use]
    pub fn notation(&self) -> Arc<NotationService> {
        Arc::clone(&self.notation)
    }

    #[must_use]
    pub fn languages(&self) -> Arc<LanguageService> {
        Arc::clone(&self.languages)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<PracticeService> {
        Arc::clone(&self.practice)
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }
}

/// `AppServices` plus the tab to open at launch.
pub struct ServicesApp {
    services: AppServices,
    start_tab: Tab,
}

impl ServicesApp {
    #[must_use]
    pub fn new(services: AppServices, start_tab: Tab) -> Self {
        Self {
            services,
            start_tab,
        }
    }
}

impl UiApp for ServicesApp {
    fn start_tab(&self) -> Tab {
        self.start_tab
    }

    fn explorer(&self) -> Arc<ExplorerService> {
        self.services.explorer()
    }

    fn notation(&self) -> Arc<NotationService> {
        self.services.notation()
    }

    fn languages(&self) -> Arc<LanguageService> {
        self.services.languages()
    }

    fn practice(&self) -> Arc<PracticeService> {
        self.services.practice()
    }

    fn profile(&self) -> Arc<ProfileService> {
        self.services.profile()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The sound picked on the IPA chart, shared by the explorer and the visualizer.
///
/// Only the chart's selection handler writes it.
#[derive(Clone, Copy, PartialEq)]
pub struct SoundSelection(Signal<Option<&'static str>>);

impl SoundSelection {
    #[must_use]
    pub fn current(&self) -> Option<&'static str> {
        (self.0)()
    }

    pub fn select(&mut self, symbol: &'static str) {
        self.0.set(Some(symbol));
    }
}

/// Provide a selection, starting at `initial`, to the calling component's subtree.
pub fn use_sound_selection_provider(initial: Option<&'static str>) -> SoundSelection {
    use_context_provider(|| SoundSelection(Signal::new(initial)))
}

#[must_use]
pub fn use_sound_selection() -> SoundSelection {
    use_context::<SoundSelection>()
}
