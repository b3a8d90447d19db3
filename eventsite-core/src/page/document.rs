//! The page elements the events page reads and writes.

use std::collections::BTreeMap;

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Named elements of the events page, identified by their `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Anchor {
    CurrentEventsList,
    UpcomingEventsList,
    CategoryFilters,
    CalendarMonthYear,
    CalendarDays,
    CalendarPrev,
    CalendarNext,
    TotalEventsCount,
    TotalCategoriesCount,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::CurrentEventsList,
        Anchor::UpcomingEventsList,
        Anchor::CategoryFilters,
        Anchor::CalendarMonthYear,
        Anchor::CalendarDays,
        Anchor::CalendarPrev,
        Anchor::CalendarNext,
        Anchor::TotalEventsCount,
        Anchor::TotalCategoriesCount,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::CurrentEventsList => "current-events-list",
            Anchor::UpcomingEventsList => "upcoming-events-list",
            Anchor::CategoryFilters => "category-filters",
            Anchor::CalendarMonthYear => "calendar-month-year",
            Anchor::CalendarDays => "calendar-days",
            Anchor::CalendarPrev => "calendar-prev",
            Anchor::CalendarNext => "calendar-next",
            Anchor::TotalEventsCount => "total-events-count",
            Anchor::TotalCategoriesCount => "total-categories-count",
        }
    }
}

/// Host page as seen by the events page.
///
/// Writes to an anchor the page does not have are ignored; components check
/// [`Document::has`] first and skip their feature instead.
pub trait Document {
    fn has(&self, anchor: Anchor) -> bool;

    /// Replace the anchor's children with `markup`.
    fn set_html(&mut self, anchor: Anchor, markup: Markup);

    /// Replace the anchor's children with escaped text.
    fn set_text(&mut self, anchor: Anchor, text: &str) {
        self.set_html(anchor, html! { (text) });
    }
}

/// In-memory page holding the inner HTML of each present anchor.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocument {
    anchors: BTreeMap<Anchor, String>,
}

impl HtmlDocument {
    /// A page that has only the given anchors, all empty.
    pub fn with_anchors(anchors: impl IntoIterator<Item = Anchor>) -> Self {
        HtmlDocument {
            anchors: anchors.into_iter().map(|a| (a, String::new())).collect(),
        }
    }

    /// A page with every anchor of the events page.
    pub fn complete() -> Self {
        Self::with_anchors(Anchor::ALL)
    }

    pub fn without(mut self, anchor: Anchor) -> Self {
        self.anchors.remove(&anchor);
        self
    }

    /// Inner HTML of an anchor, if the page has it.
    pub fn content(&self, anchor: Anchor) -> Option<&str> {
        self.anchors.get(&anchor).map(String::as_str)
    }

    fn slot(&self, anchor: Anchor) -> Option<Markup> {
        self.content(anchor).map(|c| PreEscaped(c.to_string()))
    }

    /// Standalone HTML page laying out every present anchor.
    pub fn to_html_page(&self, title: &str) -> String {
        let weekdays = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                }
                body {
                    main.events-page {
                        h1 { (title) }
                        @if self.has(Anchor::TotalEventsCount) || self.has(Anchor::TotalCategoriesCount) {
                            div.events-stats {
                                @if let Some(count) = self.slot(Anchor::TotalEventsCount) {
                                    span #total-events-count { (count) } " events "
                                }
                                @if let Some(count) = self.slot(Anchor::TotalCategoriesCount) {
                                    span #total-categories-count { (count) } " categories"
                                }
                            }
                        }
                        @if let Some(filters) = self.slot(Anchor::CategoryFilters) {
                            nav.category-filters #category-filters { (filters) }
                        }
                        @if let Some(list) = self.slot(Anchor::CurrentEventsList) {
                            section.events-section {
                                h2 { "Today's Events" }
                                div.events-list #current-events-list { (list) }
                            }
                        }
                        @if let Some(list) = self.slot(Anchor::UpcomingEventsList) {
                            section.events-section {
                                h2 { "Upcoming Events" }
                                div.events-list #upcoming-events-list { (list) }
                            }
                        }
                        @if self.has(Anchor::CalendarDays) {
                            section.calendar {
                                div.calendar-header {
                                    @if self.has(Anchor::CalendarPrev) {
                                        button.calendar-nav #calendar-prev aria-label="Previous month" { "‹" }
                                    }
                                    @if let Some(label) = self.slot(Anchor::CalendarMonthYear) {
                                        h3 #calendar-month-year { (label) }
                                    }
                                    @if self.has(Anchor::CalendarNext) {
                                        button.calendar-nav #calendar-next aria-label="Next month" { "›" }
                                    }
                                }
                                div.calendar-weekdays {
                                    @for day in weekdays {
                                        div.calendar-weekday { (day) }
                                    }
                                }
                                div.calendar-days #calendar-days {
                                    @if let Some(days) = self.slot(Anchor::CalendarDays) {
                                        (days)
                                    }
                                }
                            }
                        }
                    }
                }
            }
        };

        markup.into_string()
    }
}

impl Document for HtmlDocument {
    fn has(&self, anchor: Anchor) -> bool {
        self.anchors.contains_key(&anchor)
    }

    fn set_html(&mut self, anchor: Anchor, markup: Markup) {
        if let Some(slot) = self.anchors.get_mut(&anchor) {
            *slot = markup.into_string();
        }
    }
}
