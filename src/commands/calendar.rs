use anyhow::Result;
use chrono::NaiveDate;
use eventsite_core::calendar::{CalendarCursor, CalendarView};
use eventsite_core::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    store: &EventStore,
    today: NaiveDate,
    month: Option<&str>,
    next: u32,
    prev: u32,
) -> Result<()> {
    let mut view = match month {
        Some(m) => CalendarView::at(CalendarCursor::parse(m)?),
        None => CalendarView::new(today),
    };

    for _ in 0..next {
        view.next();
    }
    for _ in 0..prev {
        view.previous();
    }

    let grid = view.render(store, today);
    println!("{}", grid.render());

    let event_days: Vec<_> = grid.days().filter(|d| d.has_events).collect();
    if !event_days.is_empty() {
        println!();
        for day in event_days {
            if let Some(href) = day.archive_href() {
                let count = format!("({} events)", day.event_count);
                println!("  {:>2}  {} {}", day.day, href, count.dimmed());
            }
        }
    }

    Ok(())
}
