//! Event cards: the display form of a single record.

use chrono::NaiveDate;

use crate::constants::{MAX_CARD_TAGS, UNKNOWN_DATE};
use crate::event::{EventDate, EventRecord};

/// Icon shown for categories outside the known set.
pub const FALLBACK_ICON: &str = "fas fa-calendar-alt";

/// Font Awesome icon class for a category (display-cased, exact match).
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Culture" => "fas fa-theater-masks",
        "Community" => "fas fa-users",
        "News" => "fas fa-newspaper",
        "Food" => "fas fa-utensils",
        "Entertainment" => "fas fa-music",
        "Business" => "fas fa-briefcase",
        "Manufacturing" => "fas fa-industry",
        "Politics" => "fas fa-landmark",
        "Economy" => "fas fa-chart-line",
        _ => FALLBACK_ICON,
    }
}

/// Format a date like "Jan 5, 2026", independent of the viewer's locale.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// A card built from one record.
///
/// The category key is frozen when the card is built; filtering reads it back
/// from the card instead of going to the dataset again.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCard {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Category as written in the dataset
    pub category: String,
    /// Lower-cased category, the identity used by the category filter
    pub category_key: String,
    pub icon: &'static str,
    /// Raw `event_date` value, kept as a card attribute
    pub event_date: String,
    /// Formatted date, when shown
    pub date_label: Option<String>,
    /// At most [`MAX_CARD_TAGS`] tags
    pub tags: Vec<String>,
}

impl RenderedCard {
    pub fn render(record: &EventRecord, show_date: bool) -> Self {
        let date_label = match record.date() {
            EventDate::On(date) if show_date && record.event_date != UNKNOWN_DATE => {
                Some(format_event_date(date))
            }
            _ => None,
        };

        RenderedCard {
            title: record.title.clone(),
            description: record.description.clone(),
            link: record.link.clone(),
            category: record.category.clone(),
            category_key: record.category_key(),
            icon: category_icon(&record.category),
            event_date: record.event_date.clone(),
            date_label,
            tags: record.tags.iter().take(MAX_CARD_TAGS).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(category: &str, event_date: &str, tags: &[&str]) -> EventRecord {
        EventRecord {
            title: "Harvest Fair".to_string(),
            description: "Local produce".to_string(),
            category: category.to_string(),
            event_date: event_date.to_string(),
            link: "https://example.com/fair".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            found_date: None,
        }
    }

    #[test]
    fn known_categories_have_icons() {
        assert_eq!(category_icon("Food"), "fas fa-utensils");
        assert_eq!(category_icon("Economy"), "fas fa-chart-line");
        assert_eq!(category_icon("Politics"), "fas fa-landmark");
    }

    #[test]
    fn unknown_category_falls_back_to_calendar_icon() {
        let card = RenderedCard::render(&make_record("Sports", "2026-01-05", &[]), true);
        assert_eq!(card.icon, FALLBACK_ICON);
        assert_eq!(card.category, "Sports");
        assert_eq!(card.category_key, "sports");
    }

    #[test]
    fn formats_date_without_locale() {
        let card = RenderedCard::render(&make_record("Food", "2026-01-05", &[]), true);
        assert_eq!(card.date_label.as_deref(), Some("Jan 5, 2026"));

        let card = RenderedCard::render(&make_record("Food", "2025-12-31", &[]), true);
        assert_eq!(card.date_label.as_deref(), Some("Dec 31, 2025"));
    }

    #[test]
    fn date_hidden_when_not_requested_or_unknown() {
        let card = RenderedCard::render(&make_record("Food", "2026-01-05", &[]), false);
        assert_eq!(card.date_label, None);

        let card = RenderedCard::render(&make_record("Food", "unknown", &[]), true);
        assert_eq!(card.date_label, None);
        assert_eq!(card.event_date, "unknown");

        let card = RenderedCard::render(&make_record("Food", "someday", &[]), true);
        assert_eq!(card.date_label, None);
    }

    #[test]
    fn keeps_first_three_tags_in_order() {
        let record = make_record("Food", "unknown", &["a", "b", "c", "d", "e"]);
        let card = RenderedCard::render(&record, true);
        assert_eq!(card.tags, vec!["a", "b", "c"]);

        let card = RenderedCard::render(&make_record("Food", "unknown", &["only"]), true);
        assert_eq!(card.tags, vec!["only"]);
    }

    #[test]
    fn surrounding_whitespace_is_not_stripped() {
        let card = RenderedCard::render(&make_record(" Food", "unknown", &[]), true);
        assert_eq!(card.category, " Food");
        assert_eq!(card.category_key, " food");
        assert_eq!(card.icon, FALLBACK_ICON);
    }

    #[test]
    fn category_key_is_frozen_at_render_time() {
        let mut record = make_record("Culture", "unknown", &[]);
        let card = RenderedCard::render(&record, true);
        record.category = "Politics".to_string();

        assert_eq!(card.category_key, "culture");
        assert_eq!(card.icon, "fas fa-theater-masks");
    }
}
