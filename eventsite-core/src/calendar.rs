//! Month calendar linking to per-date archive pages.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::constants::ARCHIVE_BASE_PATH;
use crate::error::{EventsError, EventsResult};
use crate::event::iso_key;
use crate::store::EventStore;

/// The displayed month. `month` is 1-based (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    pub year: i32,
    pub month: u32,
}

impl CalendarCursor {
    pub fn containing(date: NaiveDate) -> Self {
        CalendarCursor {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> EventsResult<Self> {
        let invalid = || EventsError::InvalidMonth(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(CalendarCursor { year, month })
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            CalendarCursor {
                year: self.year + 1,
                month: 1,
            }
        } else {
            CalendarCursor {
                month: self.month + 1,
                ..self
            }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            CalendarCursor {
                year: self.year - 1,
                month: 12,
            }
        } else {
            CalendarCursor {
                month: self.month - 1,
                ..self
            }
        }
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days: the day before the first of the following month.
    pub fn days_in_month(self) -> u32 {
        self.next()
            .first_day()
            .and_then(|d| d.pred_opt())
            .map_or(0, |d| d.day())
    }

    /// Weekday of day 1, with Sunday = 0.
    pub fn leading_blanks(self) -> u32 {
        self.first_day()
            .map_or(0, |d| d.weekday().num_days_from_sunday())
    }
}

impl fmt::Display for CalendarCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayCell {
    /// Placeholder before day 1
    Blank,
    Day(CalendarDay),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    /// `YYYY-MM-DD`, the dataset key looked up for this day
    pub key: String,
    /// The key exists in the dataset (even with an empty record list)
    pub has_events: bool,
    pub event_count: usize,
    pub is_today: bool,
}

impl CalendarDay {
    /// Archive page link, only for days that have events.
    pub fn archive_href(&self) -> Option<String> {
        self.has_events
            .then(|| format!("{}/{}/", ARCHIVE_BASE_PATH, self.key))
    }
}

/// A rendered month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub cursor: CalendarCursor,
    /// e.g. "January 2026"
    pub label: String,
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.cells.iter().filter_map(|cell| match cell {
            DayCell::Day(day) => Some(day),
            DayCell::Blank => None,
        })
    }

    pub fn days_with_events(&self) -> usize {
        self.days().filter(|d| d.has_events).count()
    }

    pub fn today(&self) -> Option<&CalendarDay> {
        self.days().find(|d| d.is_today)
    }
}

/// Navigable month view. Only the cursor is state; the grid is recomputed on
/// every render.
#[derive(Debug, Clone)]
pub struct CalendarView {
    cursor: CalendarCursor,
}

impl CalendarView {
    /// Start at the month containing `initial` (normally the date at page load).
    pub fn new(initial: NaiveDate) -> Self {
        CalendarView {
            cursor: CalendarCursor::containing(initial),
        }
    }

    pub fn at(cursor: CalendarCursor) -> Self {
        CalendarView { cursor }
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn next(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor = self.cursor.previous();
    }

    /// Build the grid for the displayed month.
    ///
    /// Event days are looked up by dataset key, not by the records' own
    /// `event_date`. `today` is the real current date and is independent of
    /// the cursor.
    pub fn render(&self, store: &EventStore, today: NaiveDate) -> CalendarGrid {
        let cursor = self.cursor;
        let blanks = cursor.leading_blanks();
        let days_in_month = cursor.days_in_month();

        let mut cells: Vec<DayCell> = (0..blanks).map(|_| DayCell::Blank).collect();

        for day in 1..=days_in_month {
            let Some(date) = NaiveDate::from_ymd_opt(cursor.year, cursor.month, day) else {
                continue;
            };
            let key = iso_key(date);

            cells.push(DayCell::Day(CalendarDay {
                day,
                date,
                has_events: store.has_date(&key),
                event_count: store.events_on(&key).len(),
                is_today: date == today,
                key,
            }));
        }

        let grid = CalendarGrid {
            cursor,
            label: month_label(cursor),
            cells,
        };

        debug!(
            month = %cursor,
            first_weekday = blanks,
            days = days_in_month,
            with_events = grid.days_with_events(),
            "Rendered calendar"
        );

        grid
    }
}

/// Full English month name and year, e.g. "January 2026".
pub fn month_label(cursor: CalendarCursor) -> String {
    cursor
        .first_day()
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| cursor.to_string())
}
