//! Terminal rendering for events page types.
//!
//! Extension traits adding colored output (owo_colors) to eventsite-core types.

use eventsite_core::calendar::{CalendarGrid, DayCell};
use eventsite_core::card::RenderedCard;
use eventsite_core::filter::Category;
use eventsite_core::page::html::EventList;
use eventsite_core::stats::Stats;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for RenderedCard {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let badge = format!("[{}]", self.category);
        let mut header = format!("{} {}", badge.cyan(), self.title.bold());
        if let Some(date) = &self.date_label {
            header.push_str(&format!(" {}", date.dimmed()));
        }
        lines.push(header);

        if !self.description.is_empty() {
            lines.push(format!("   {}", self.description));
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(|t| format!("#{}", t)).collect();
            lines.push(format!("   {}", tags.join(" ").yellow()));
        }
        if !self.link.is_empty() {
            lines.push(format!("   {}", self.link.underline()));
        }

        lines.join("\n")
    }
}

impl Render for Category {
    fn render(&self) -> String {
        format!("{} {}", self.label, format!("({})", self.count).dimmed())
    }
}

impl Render for Stats {
    fn render(&self) -> String {
        format!(
            "{} events, {} categories",
            self.total_events.bold(),
            self.total_categories.bold()
        )
    }
}

impl Render for CalendarGrid {
    fn render(&self) -> String {
        let mut lines = vec![
            format!("{:^27}", self.label).bold().to_string(),
            "Su  Mo  Tu  We  Th  Fr  Sa".dimmed().to_string(),
        ];

        let cells: Vec<String> = self.cells.iter().map(render_day_cell).collect();
        for week in cells.chunks(7) {
            lines.push(week.join(" "));
        }

        lines.join("\n")
    }
}

/// Three-character cell: day number, `*` suffix for days with events.
fn render_day_cell(cell: &DayCell) -> String {
    match cell {
        DayCell::Blank => "   ".to_string(),
        DayCell::Day(day) => {
            let text = if day.has_events {
                format!("{:>2}*", day.day)
            } else {
                format!("{:>2} ", day.day)
            };

            match (day.has_events, day.is_today) {
                (true, true) => text.green().bold().to_string(),
                (true, false) => text.green().to_string(),
                (false, true) => text.bold().to_string(),
                (false, false) => text,
            }
        }
    }
}

/// Render one list with its heading, or its empty-state message.
///
/// Cards hidden by the category filter are skipped without a message.
pub fn render_event_list(list: EventList, cards: &[RenderedCard], visibility: &[bool]) -> String {
    let heading = match list {
        EventList::Current => "Today's Events",
        EventList::Upcoming => "Upcoming Events",
    };

    let mut lines = vec![heading.bold().to_string()];

    if cards.is_empty() {
        lines.push(format!("   {}", list.empty_message().dimmed()));
    } else {
        for (card, visible) in cards.iter().zip(visibility) {
            if *visible {
                lines.push(card.render());
            }
        }
    }

    lines.join("\n")
}
