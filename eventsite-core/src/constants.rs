//! Fixed values shared across the events page.

/// Sentinel `event_date` for events whose date could not be determined.
pub const UNKNOWN_DATE: &str = "unknown";

/// Sentinel filter value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Base path of the per-date archive pages.
pub const ARCHIVE_BASE_PATH: &str = "/events/archive";

/// Number of tags shown on a card.
pub const MAX_CARD_TAGS: usize = 3;
