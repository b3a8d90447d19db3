use anyhow::Result;
use chrono::NaiveDate;
use eventsite_core::filter::CategoryFilter;
use eventsite_core::stats::Stats;
use eventsite_core::partition::Partition;
use eventsite_core::EventStore;

use crate::render::Render;

pub fn run(store: &EventStore, today: NaiveDate) -> Result<()> {
    let (current, upcoming) = Partition::compute(store, today).cards();
    let cards = || current.iter().chain(upcoming.iter());

    let filter = CategoryFilter::from_cards(cards());
    let stats = Stats::collect(cards(), &filter);

    println!("{}", stats.render());
    Ok(())
}
