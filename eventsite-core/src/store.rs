//! Event dataset storage.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{EventsError, EventsResult};
use crate::event::EventRecord;

/// ISO date key -> records found under that date, in document order.
pub type EventDataset = IndexMap<String, Vec<EventRecord>>;

/// Holds the dataset supplied by the host page.
///
/// The store distinguishes a dataset that is still loading from one that is
/// absent, so callers can show a placeholder instead of "no events".
#[derive(Debug, Clone, Default)]
pub enum EventStore {
    /// Dataset has not arrived yet
    #[default]
    Pending,
    /// No dataset is available; behaves as zero events everywhere
    Missing,
    Ready(EventDataset),
}

impl EventStore {
    pub fn new(dataset: EventDataset) -> Self {
        EventStore::Ready(dataset)
    }

    /// Parse a dataset from its JSON document.
    pub fn from_json(json: &str) -> EventsResult<Self> {
        let dataset: EventDataset =
            serde_json::from_str(json).map_err(|e| EventsError::Dataset(e.to_string()))?;

        debug!(
            dates = dataset.len(),
            events = dataset.values().map(Vec::len).sum::<usize>(),
            "Loaded events dataset"
        );

        Ok(EventStore::Ready(dataset))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, EventStore::Pending)
    }

    pub fn dataset(&self) -> Option<&EventDataset> {
        match self {
            EventStore::Ready(dataset) => Some(dataset),
            _ => None,
        }
    }

    /// Records stored under a date key. Empty when the key or dataset is absent.
    pub fn events_on(&self, key: &str) -> &[EventRecord] {
        self.dataset()
            .and_then(|d| d.get(key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `key` exists in the dataset, regardless of how many records it holds.
    pub fn has_date(&self, key: &str) -> bool {
        self.dataset().is_some_and(|d| d.contains_key(key))
    }

    /// All records in iteration order: date keys first, then records within each key.
    pub fn records(&self) -> impl Iterator<Item = &EventRecord> {
        self.dataset()
            .into_iter()
            .flat_map(|d| d.values())
            .flatten()
    }
}
