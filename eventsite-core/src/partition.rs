//! Splits the dataset into today's events and upcoming events.

use chrono::NaiveDate;
use tracing::debug;

use crate::card::RenderedCard;
use crate::event::{EventDate, EventRecord};
use crate::store::EventStore;

/// Where a single record belongs relative to the viewer's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Dated strictly before today
    Dropped,
    Current,
    /// Dated after today, or undated
    Upcoming,
}

/// Classify one record against `today`, using the record's own `event_date`.
pub fn classify(record: &EventRecord, today: NaiveDate) -> Bucket {
    match record.date() {
        EventDate::Unknown => Bucket::Upcoming,
        EventDate::On(date) if date < today => Bucket::Dropped,
        EventDate::On(date) if date == today => Bucket::Current,
        EventDate::On(_) => Bucket::Upcoming,
    }
}

/// The two display lists, in dataset iteration order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub current: Vec<&'a EventRecord>,
    pub upcoming: Vec<&'a EventRecord>,
    /// Number of stale records left out of both lists
    pub dropped: usize,
}

impl<'a> Partition<'a> {
    /// Partition every record in the store. A store without a dataset yields
    /// two empty lists.
    pub fn compute(store: &'a EventStore, today: NaiveDate) -> Self {
        let mut partition = Partition::default();

        for record in store.records() {
            match classify(record, today) {
                Bucket::Dropped => partition.dropped += 1,
                Bucket::Current => {
                    debug!(title = %record.title, "Today");
                    partition.current.push(record);
                }
                Bucket::Upcoming => {
                    debug!(title = %record.title, date = %record.event_date, "Upcoming");
                    partition.upcoming.push(record);
                }
            }
        }

        partition
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.upcoming.is_empty()
    }

    /// Cards for the current and upcoming lists, dates shown.
    pub fn cards(&self) -> (Vec<RenderedCard>, Vec<RenderedCard>) {
        let render = |records: &[&EventRecord]| -> Vec<RenderedCard> {
            records
                .iter()
                .map(|record| RenderedCard::render(record, true))
                .collect()
        };

        (render(&self.current), render(&self.upcoming))
    }
}
