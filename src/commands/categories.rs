use anyhow::Result;
use chrono::NaiveDate;
use eventsite_core::filter::derive_categories;
use eventsite_core::partition::Partition;
use eventsite_core::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &EventStore, today: NaiveDate) -> Result<()> {
    let (current, upcoming) = Partition::compute(store, today).cards();
    let categories = derive_categories(current.iter().chain(upcoming.iter()));

    if categories.is_empty() {
        println!("{}", "No categories found".dimmed());
        return Ok(());
    }

    for category in &categories {
        println!("{}", category.render());
    }

    Ok(())
}
