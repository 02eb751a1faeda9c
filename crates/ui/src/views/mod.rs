mod converter;
mod explorer;
mod languages;
mod practice;
mod profile;
mod scripts;
mod start;
mod visualizer;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use converter::ConverterView;
pub use explorer::ExplorerView;
pub use languages::{LanguageDetailView, LanguagesView};
pub use practice::PracticeView;
pub use profile::ProfileView;
pub use start::StartView;
pub use visualizer::VisualizerView;
