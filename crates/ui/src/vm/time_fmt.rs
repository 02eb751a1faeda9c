use phono_core::model::ActivityEntry;

/// `"Jan 15, 2024"`; unparseable dates are shown as stored.
#[must_use]
pub fn format_activity_date(entry: &ActivityEntry) -> String {
    entry
        .parsed_date()
        .map_or_else(|| entry.date.to_string(), |date| date.format("%b %-d, %Y").to_string())
}
