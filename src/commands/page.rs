use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use eventsite_core::calendar::CalendarCursor;
use eventsite_core::filter::FilterSelection;
use eventsite_core::page::{EventsPage, HtmlDocument, Interaction};
use eventsite_core::EventStore;
use tracing::{info, warn};

/// Build the events page against a complete document and return its HTML.
///
/// `month` and `selection` are applied as the interactions a visitor would
/// make: prev/next clicks until the month is shown, then a filter click.
pub fn build(
    store: EventStore,
    today: NaiveDate,
    month: Option<CalendarCursor>,
    selection: FilterSelection,
    title: &str,
) -> String {
    let mut page = EventsPage::new(store, today);
    let mut doc = HtmlDocument::complete();

    for e in page.init(&mut doc) {
        warn!("{}", e);
    }

    if let Some(target) = month {
        let steps = month_index(target) - month_index(page.calendar().cursor());
        let interaction = if steps < 0 {
            Interaction::PreviousMonth
        } else {
            Interaction::NextMonth
        };
        for _ in 0..steps.unsigned_abs() {
            page.handle(&mut doc, interaction.clone());
        }
    }

    if selection != FilterSelection::All {
        page.handle(&mut doc, Interaction::SelectCategory(selection));
    }

    doc.to_html_page(title)
}

fn month_index(cursor: CalendarCursor) -> i64 {
    i64::from(cursor.year) * 12 + i64::from(cursor.month) - 1
}

pub fn run(
    store: EventStore,
    today: NaiveDate,
    month: Option<&str>,
    selection: FilterSelection,
    title: &str,
    output: Option<&Path>,
) -> Result<()> {
    let month = month.map(CalendarCursor::parse).transpose()?;
    let html = build(store, today, month, selection, title);

    match output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write page to {}", path.display()))?;
            info!(path = %path.display(), "Wrote events page");
            println!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}
