//! The events page: wires the components to the host page.
//!
//! [`EventsPage::init`] renders every feature whose anchors are present and
//! records which controls got handlers. Later clicks arrive through
//! [`EventsPage::handle`]; clicks on controls that were never bound are
//! ignored.

mod document;
pub mod html;

pub use document::{Anchor, Document, HtmlDocument};

use chrono::NaiveDate;
use tracing::{debug, error, info, warn};

use crate::calendar::{CalendarGrid, CalendarView};
use crate::card::RenderedCard;
use crate::error::{EventsError, EventsResult};
use crate::filter::{CategoryFilter, FilterSelection};
use crate::partition::Partition;
use crate::stats::Stats;
use crate::store::EventStore;

use html::EventList;

/// A control that received a handler during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    FilterButtons,
    CalendarPrev,
    CalendarNext,
}

/// User interaction delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    SelectCategory(FilterSelection),
    PreviousMonth,
    NextMonth,
}

impl Interaction {
    fn binding(&self) -> Binding {
        match self {
            Interaction::SelectCategory(_) => Binding::FilterButtons,
            Interaction::PreviousMonth => Binding::CalendarPrev,
            Interaction::NextMonth => Binding::CalendarNext,
        }
    }
}

pub struct EventsPage {
    store: EventStore,
    /// Viewer's local date, fixed at construction
    today: NaiveDate,
    current_cards: Vec<RenderedCard>,
    upcoming_cards: Vec<RenderedCard>,
    filter: CategoryFilter,
    calendar: CalendarView,
    bindings: Vec<Binding>,
}

impl EventsPage {
    pub fn new(store: EventStore, today: NaiveDate) -> Self {
        EventsPage {
            store,
            today,
            current_cards: Vec::new(),
            upcoming_cards: Vec::new(),
            filter: CategoryFilter::default(),
            calendar: CalendarView::new(today),
            bindings: Vec::new(),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn calendar(&self) -> &CalendarView {
        &self.calendar
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// All cards on the page, current list first.
    pub fn cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.current_cards.iter().chain(self.upcoming_cards.iter())
    }

    pub fn stats(&self) -> Stats {
        Stats::collect(self.cards(), &self.filter)
    }

    /// Render every feature the page has anchors for.
    ///
    /// Each step runs independently; the errors of failed steps are returned
    /// after all steps have had their turn.
    pub fn init(&mut self, doc: &mut impl Document) -> Vec<EventsError> {
        self.bindings.clear();
        let mut errors = Vec::new();

        if let Err(e) = self.render_events(doc) {
            error!("Could not render events: {}", e);
            errors.push(e);
        }
        self.init_category_filters(doc);
        self.init_calendar(doc);
        self.update_stats(doc);

        info!(
            current = self.current_cards.len(),
            upcoming = self.upcoming_cards.len(),
            categories = self.filter.categories().len(),
            "Events page initialized"
        );

        errors
    }

    /// Swap in a dataset that finished loading and render the page again.
    pub fn dataset_loaded(&mut self, store: EventStore, doc: &mut impl Document) -> Vec<EventsError> {
        self.store = store;
        self.init(doc)
    }

    /// Dispatch one interaction. Returns whether it was handled.
    pub fn handle(&mut self, doc: &mut impl Document, interaction: Interaction) -> bool {
        if !self.bindings.contains(&interaction.binding()) {
            debug!(?interaction, "Ignoring interaction for unbound control");
            return false;
        }

        match interaction {
            Interaction::SelectCategory(selection) => {
                self.filter.select(selection);
                self.write_lists(doc);
                doc.set_html(Anchor::CategoryFilters, html::filter_buttons(&self.filter.buttons()));
            }
            Interaction::PreviousMonth => {
                self.calendar.previous();
                self.render_calendar(doc);
            }
            Interaction::NextMonth => {
                self.calendar.next();
                self.render_calendar(doc);
            }
        }

        true
    }

    fn render_events(&mut self, doc: &mut impl Document) -> EventsResult<()> {
        self.current_cards.clear();
        self.upcoming_cards.clear();
        self.filter = CategoryFilter::default();

        match &self.store {
            EventStore::Pending => {
                for anchor in [Anchor::CurrentEventsList, Anchor::UpcomingEventsList] {
                    doc.set_html(anchor, html::loading());
                }
                return Ok(());
            }
            EventStore::Missing => {
                warn!("No events data found");
            }
            EventStore::Ready(_) => {
                for anchor in [Anchor::CurrentEventsList, Anchor::UpcomingEventsList] {
                    if !doc.has(anchor) {
                        return Err(EventsError::MissingAnchor(anchor.id()));
                    }
                }
            }
        }

        let partition = Partition::compute(&self.store, self.today);
        debug!(today = %self.today, dropped = partition.dropped, "Partitioned events");

        (self.current_cards, self.upcoming_cards) = partition.cards();

        // Every run starts from "All"
        self.filter = CategoryFilter::from_cards(self.cards());
        self.write_lists(doc);
        Ok(())
    }

    fn write_lists(&self, doc: &mut impl Document) {
        let lists = [
            (Anchor::CurrentEventsList, EventList::Current, &self.current_cards),
            (Anchor::UpcomingEventsList, EventList::Upcoming, &self.upcoming_cards),
        ];

        for (anchor, list, cards) in lists {
            let visibility = self.filter.visibility(cards.iter());
            doc.set_html(anchor, html::event_list(list, cards, &visibility));
        }
    }

    fn init_category_filters(&mut self, doc: &mut impl Document) {
        if self.current_cards.is_empty() && self.upcoming_cards.is_empty() {
            return;
        }
        if !doc.has(Anchor::CategoryFilters) {
            return;
        }

        doc.set_html(Anchor::CategoryFilters, html::filter_buttons(&self.filter.buttons()));
        self.bindings.push(Binding::FilterButtons);
    }

    fn init_calendar(&mut self, doc: &mut impl Document) {
        if doc.has(Anchor::CalendarPrev) {
            self.bindings.push(Binding::CalendarPrev);
        }
        if doc.has(Anchor::CalendarNext) {
            self.bindings.push(Binding::CalendarNext);
        }

        self.render_calendar(doc);
    }

    /// Grid of the displayed month.
    pub fn calendar_grid(&self) -> CalendarGrid {
        self.calendar.render(&self.store, self.today)
    }

    fn render_calendar(&self, doc: &mut impl Document) {
        if !doc.has(Anchor::CalendarMonthYear) || !doc.has(Anchor::CalendarDays) {
            debug!("Calendar elements not found");
            return;
        }

        let grid = self.calendar_grid();
        doc.set_text(Anchor::CalendarMonthYear, &grid.label);
        doc.set_html(Anchor::CalendarDays, html::calendar_days(&grid));
    }

    fn update_stats(&self, doc: &mut impl Document) {
        let stats = self.stats();
        doc.set_text(Anchor::TotalEventsCount, &stats.total_events.to_string());
        doc.set_text(Anchor::TotalCategoriesCount, &stats.total_categories.to_string());
    }
}
