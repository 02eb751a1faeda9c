use phono_core::model::{Difficulty, LanguageModule};

const DIALECT_PREVIEW: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageCardVm {
    pub name: &'static str,
    pub difficulty_label: String,
    pub difficulty_class: &'static str,
    pub progress_pct: u8,
    pub progress_label: String,
    pub mastered_label: String,
    pub dialect_preview: Vec<&'static str>,
    pub extra_dialects_label: Option<String>,
}

#[must_use]
pub fn map_language_card(module: &LanguageModule) -> LanguageCardVm {
    let extra = module.dialects.len().saturating_sub(DIALECT_PREVIEW);
    LanguageCardVm {
        name: module.name,
        difficulty_label: module.difficulty.to_string(),
        difficulty_class: difficulty_class(module.difficulty),
        progress_pct: module.progress.value(),
        progress_label: format!("{} complete", module.progress),
        mastered_label: format!("{}/{} sounds mastered", module.mastered(), module.sounds),
        dialect_preview: module.dialects.iter().take(DIALECT_PREVIEW).copied().collect(),
        extra_dialects_label: (extra > 0).then(|| format!("+{extra} more")),
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "badge badge--beginner",
        Difficulty::Intermediate => "badge badge--intermediate",
        Difficulty::Advanced => "badge badge--advanced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phono_core::data;

    #[test]
    fn english_card_previews_three_dialects() {
        let vm = map_language_card(&data::LANGUAGES[0]);
        assert_eq!(vm.mastered_label, "33/44 sounds mastered");
        assert_eq!(vm.progress_label, "75% complete");
        assert_eq!(vm.dialect_preview.len(), 3);
        assert_eq!(vm.extra_dialects_label.as_deref(), Some("+3 more"));
        assert_eq!(vm.difficulty_label, "Beginner");
    }

    #[test]
    fn short_dialect_lists_have_no_overflow() {
        let french = data::LANGUAGES.iter().find(|l| l.name == "French").unwrap();
        let vm = map_language_card(french);
        assert_eq!(vm.extra_dialects_label, None);
        assert_eq!(vm.mastered_label, "11/37 sounds mastered");
    }
}
