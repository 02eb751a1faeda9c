use phono_core::data;
use phono_core::model::{LanguageModule, MinimalPair};

use crate::error::LanguageError;

/// A language together with one of its dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectSelection {
    pub language: &'static LanguageModule,
    pub dialect: &'static str,
}

/// Language module catalog.
#[derive(Debug, Clone, Copy)]
pub struct LanguageService {
    languages: &'static [LanguageModule],
    pairs: &'static [MinimalPair],
}

impl Default for LanguageService {
    fn default() -> Self {
        Self::new(&data::LANGUAGES, &data::MINIMAL_PAIRS)
    }
}

impl LanguageService {
    #[must_use]
    pub fn new(languages: &'static [LanguageModule], pairs: &'static [MinimalPair]) -> Self {
        Self { languages, pairs }
    }

    #[must_use]
    pub fn languages(&self) -> &'static [LanguageModule] {
        self.languages
    }

    #[must_use]
    pub fn minimal_pairs(&self) -> &'static [MinimalPair] {
        self.pairs
    }

    #[must_use]
    pub fn dialect_features(&self) -> &'static [&'static str] {
        &data::DIALECT_FEATURES
    }

    /// Case-insensitive lookup by language name.
    ///
    /// # Errors
    ///
    /// Returns `LanguageError::UnknownLanguage` if no module has that name.
    pub fn find(&self, name: &str) -> Result<&'static LanguageModule, LanguageError> {
        let wanted = name.trim();
        self.languages
            .iter()
            .find(|module| module.name.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                tracing::debug!(name, "unknown language");
                LanguageError::UnknownLanguage(name.to_string())
            })
    }

    /// Pick `dialect` of `language`. The dialect name must match exactly.
    ///
    /// # Errors
    ///
    /// Returns `LanguageError::UnknownLanguage` or `LanguageError::UnknownDialect`.
    pub fn select_dialect(
        &self,
        language: &str,
        dialect: &str,
    ) -> Result<DialectSelection, LanguageError> {
        let module = self.find(language)?;
        let Some(dialect) = module.dialects.iter().copied().find(|d| *d == dialect) else {
            return Err(LanguageError::UnknownDialect {
                language: module.name.to_string(),
                dialect: dialect.to_string(),
            });
        };
        tracing::info!(language = module.name, dialect, "dialect selected");
        Ok(DialectSelection {
            language: module,
            dialect,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phono_core::model::Difficulty;

    #[test]
    fn find_ignores_case() {
        let service = LanguageService::default();
        let english = service.find("english").unwrap();
        assert_eq!(english.mastered(), 33);
        assert_eq!(service.find(" SPANISH ").unwrap().mastered(), 10);
        assert_eq!(
            service.find("Klingon").unwrap_err(),
            LanguageError::UnknownLanguage("Klingon".into())
        );
    }

    #[test]
    fn dialect_must_belong_to_language() {
        let service = LanguageService::default();
        let picked = service.select_dialect("French", "Quebecois").unwrap();
        assert_eq!(picked.language.name, "French");
        assert_eq!(picked.dialect, "Quebecois");

        assert_eq!(
            service.select_dialect("French", "Castilian").unwrap_err(),
            LanguageError::UnknownDialect {
                language: "French".into(),
                dialect: "Castilian".into(),
            }
        );
    }

    #[test]
    fn catalog_contents() {
        let service = LanguageService::default();
        assert_eq!(service.languages().len(), 6);
        assert_eq!(service.languages()[5].difficulty, Difficulty::Advanced);
        assert_eq!(service.minimal_pairs()[0].focus, "/ɪ/ vs /iː/");
    }
}
