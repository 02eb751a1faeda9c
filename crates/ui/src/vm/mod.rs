mod converter_vm;
mod explorer_vm;
mod language_vm;
mod profile_vm;
mod quiz_vm;
mod time_fmt;
mod visualizer_vm;

pub use converter_vm::{
    MISSING_CELL, NotationRowVm, WordLookupVm, map_notation_rows, map_word_lookup,
    result_count_label,
};
pub use explorer_vm::{
    QuickStatVm, SymbolDetailVm, SymbolSectionVm, SymbolTileVm, map_quick_stats,
    map_symbol_detail, map_symbol_section,
};
pub use language_vm::{LanguageCardVm, map_language_card};
pub use profile_vm::{
    AchievementVm, ActivityVm, LanguageProgressVm, StatTileVm, group_thousands, level_label,
    map_achievement, map_activity, map_header_stats, map_language_progress,
};
pub use quiz_vm::{
    FeedbackVm, OptionState, PracticeScreen, PracticeTypeCardVm, QuizOptionVm, QuizScreenVm,
    map_practice_types, map_quiz_screen, quiz_error_message, screen_after_advance, summary_banner,
};
pub use time_fmt::format_activity_date;
pub use visualizer_vm::{
    ArticulationPanelVm, ArticulationRowVm, PRONUNCIATION_TIPS, SPEED_STEPS, ViewMode, WAVEFORM_PATH, map_articulation_panel,
    marker_coords, speed_label,
};
