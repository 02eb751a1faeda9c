use dioxus::prelude::*;

use crate::context::AppContext;
use crate::routes::Tab;
use crate::views::{
    ConverterView, ExplorerView, LanguagesView, PracticeView, ProfileView, VisualizerView,
};

/// `/` renders whichever tab the app was configured to open with.
#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    match ctx.start_tab() {
        Tab::Explorer => rsx! { ExplorerView {} },
        Tab::Converter => rsx! { ConverterView {} },
        Tab::Languages => rsx! { LanguagesView {} },
        Tab::Visualizer => rsx! { VisualizerView {} },
        Tab::Practice => rsx! { PracticeView {} },
        Tab::Profile => rsx! { ProfileView {} },
    }
}
