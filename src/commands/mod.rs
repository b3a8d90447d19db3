pub mod calendar;
pub mod categories;
pub mod events;
pub mod page;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use eventsite_core::event::parse_iso_date;
use eventsite_core::filter::FilterSelection;
use eventsite_core::EventStore;
use tracing::warn;

/// Read the events dataset. A missing or unparseable file behaves as an
/// empty dataset, so every command still produces its empty-state output.
pub async fn load_store(path: &Path) -> Result<EventStore> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "No events dataset found");
            return Ok(EventStore::Missing);
        }
        Err(e) => {
            return Err(e)
                .with_context(|| format!("Failed to read events dataset at {}", path.display()))
        }
    };

    match EventStore::from_json(&content) {
        Ok(store) => Ok(store),
        Err(e) => {
            warn!(path = %path.display(), "Ignoring events dataset: {}", e);
            Ok(EventStore::Missing)
        }
    }
}

/// The viewer's day: `--today` if given, else the local calendar date.
pub fn resolve_today(arg: Option<&str>) -> Result<NaiveDate> {
    match arg {
        Some(s) => parse_iso_date(s)
            .with_context(|| format!("Invalid date format '{}'. Expected YYYY-MM-DD", s)),
        None => Ok(Local::now().date_naive()),
    }
}

/// Category selection from a command-line value. Categories are matched by
/// their lower-cased name.
pub fn selection_from_arg(arg: Option<&str>) -> FilterSelection {
    arg.map(|c| FilterSelection::parse(&c.to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventsite_core::partition::Partition;

    #[tokio::test]
    async fn missing_dataset_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_store(&dir.path().join("events.json")).await.unwrap();
        assert!(matches!(store, EventStore::Missing));
    }

    #[tokio::test]
    async fn unparseable_dataset_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = load_store(&path).await.unwrap();
        assert!(matches!(store, EventStore::Missing));
    }

    #[tokio::test]
    async fn loads_dataset_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{"2025-01-15": [{"title": "Vote", "category": "News", "event_date": "2025-01-15", "link": "https://n", "tags": []}]}"#,
        )
        .unwrap();

        let store = load_store(&path).await.unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let (current, upcoming) = Partition::compute(&store, today).cards();
        assert_eq!(current.len(), 1);
        assert!(upcoming.is_empty());
    }

    #[tokio::test]
    async fn null_dates_keep_the_rest_of_the_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{"2025-01-15": [
                {"title": "Vote", "category": "News", "event_date": "2025-01-15"},
                {"title": "Someday", "category": null, "event_date": null, "tags": null}
            ]}"#,
        )
        .unwrap();

        let store = load_store(&path).await.unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let (current, upcoming) = Partition::compute(&store, today).cards();
        assert_eq!(current.len(), 1);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].title, "Someday");
    }

    #[test]
    fn resolves_today_argument() {
        assert_eq!(
            resolve_today(Some("2025-01-15")).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );
        assert!(resolve_today(Some("15/01/2025")).is_err());
        assert!(resolve_today(None).is_ok());
    }

    #[test]
    fn category_argument_is_lowercased() {
        assert_eq!(
            selection_from_arg(Some("Food")),
            FilterSelection::Category("food".to_string())
        );
        assert_eq!(selection_from_arg(Some("all")), FilterSelection::All);
        assert_eq!(selection_from_arg(None), FilterSelection::All);
    }
}
