use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::use_sound_selection_provider;
use crate::views::{
    ConverterView, ExplorerView, LanguageDetailView, LanguagesView, PracticeView, ProfileView,
    StartView, VisualizerView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Start {},
        #[route("/explorer", ExplorerView)] Explorer {},
        #[route("/converter", ConverterView)] Converter {},
        #[route("/languages", LanguagesView)] Languages {},
        #[route("/languages/:name", LanguageDetailView)] LanguageDetail { name: String },
        #[route("/visualizer", VisualizerView)] Visualizer {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/profile", ProfileView)] Profile {},
}

/// Top-level navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Explorer,
    Converter,
    Languages,
    Visualizer,
    Practice,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Self::Explorer,
        Self::Converter,
        Self::Languages,
        Self::Visualizer,
        Self::Practice,
        Self::Profile,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Explorer => "explorer",
            Tab::Converter => "converter",
            Tab::Languages => "languages",
            Tab::Visualizer => "visualizer",
            Tab::Practice => "practice",
            Tab::Profile => "profile",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Explorer => "Sound Explorer",
            Tab::Converter => "Notation Converter",
            Tab::Languages => "Languages",
            Tab::Visualizer => "Visualizer",
            Tab::Practice => "Practice",
            Tab::Profile => "Profile",
        }
    }

    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Tab::Explorer => Route::Explorer {},
            Tab::Converter => Route::Converter {},
            Tab::Languages => Route::Languages {},
            Tab::Visualizer => Route::Visualizer {},
            Tab::Practice => Route::Practice {},
            Tab::Profile => Route::Profile {},
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == wanted)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

#[component]
fn Layout() -> Element {
    use_sound_selection_provider(None);
    rsx! {
        div { class: "app",
            TabBar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TabBar() -> Element {
    let tabs = Tab::ALL.into_iter().map(|tab| {
        rsx! {
            li { key: "{tab.id()}",
                Link { to: tab.route(), active_class: "tab--active", class: "tab", "{tab.label()}" }
            }
        }
    });
    rsx! {
        nav { class: "tabbar",
            h1 { class: "brand", "PhonoLab" }
            ul { {tabs} }
        }
    }
}
