use anyhow::Result;
use chrono::NaiveDate;
use eventsite_core::filter::{apply_filter, FilterSelection};
use eventsite_core::page::html::EventList;
use eventsite_core::partition::Partition;
use eventsite_core::EventStore;

use crate::render::render_event_list;

pub fn run(store: &EventStore, today: NaiveDate, selection: FilterSelection) -> Result<()> {
    let (current, upcoming) = Partition::compute(store, today).cards();

    let current_visible = apply_filter(&current, &selection);
    let upcoming_visible = apply_filter(&upcoming, &selection);

    println!("{}", render_event_list(EventList::Current, &current, &current_visible));
    println!();
    println!("{}", render_event_list(EventList::Upcoming, &upcoming, &upcoming_visible));

    Ok(())
}
