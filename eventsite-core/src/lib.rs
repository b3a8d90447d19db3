//! Events page logic for eventsite.
//!
//! The crate turns a date-keyed events dataset into the pieces of the site's
//! events page:
//! - `partition` splits records into today's and upcoming events
//! - `card` builds the display form of each record
//! - `filter` derives categories from the cards and tracks the active one
//! - `calendar` computes navigable month grids linking to archive pages
//! - `page` wires all of it to the host page's named elements

pub mod calendar;
pub mod card;
pub mod constants;
pub mod error;
pub mod event;
pub mod filter;
pub mod page;
pub mod partition;
pub mod stats;
pub mod store;

pub use event::{EventDate, EventRecord};
pub use store::{EventDataset, EventStore};
