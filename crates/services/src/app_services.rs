use std::sync::Arc;

use phono_core::model::QuizSettings;

use crate::Clock;
use crate::explorer_service::ExplorerService;
use crate::language_service::LanguageService;
use crate::notation_service::NotationService;
use crate::practice::PracticeService;
use crate::profile_service::ProfileService;

/// Assembles the app-facing services over the compiled-in data.
#[derive(Debug, Clone)]
pub struct AppServices {
    explorer: Arc<ExplorerService>,
    notation: Arc<NotationService>,
    languages: Arc<LanguageService>,
    practice: Arc<PracticeService>,
    profile: Arc<ProfileService>,
}

impl AppServices {
    #[must_use]
    pub fn builtin(clock: Clock, settings: QuizSettings) -> Self {
        Self {
            explorer: Arc::new(ExplorerService::default()),
            notation: Arc::new(NotationService::default()),
            languages: Arc::new(LanguageService::default()),
            practice: Arc::new(PracticeService::builtin(clock, settings)),
            profile: Arc::new(ProfileService),
        }
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
