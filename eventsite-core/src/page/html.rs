//! Markup written into the page anchors.

use maud::{Markup, html};

use crate::calendar::{CalendarGrid, DayCell};
use crate::card::RenderedCard;
use crate::filter::FilterButton;

/// Which of the two event lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventList {
    Current,
    Upcoming,
}

impl EventList {
    fn empty_icon(self) -> &'static str {
        match self {
            EventList::Current => "calendar-times",
            EventList::Upcoming => "calendar-check",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            EventList::Current => "No events found for today",
            EventList::Upcoming => "No upcoming events at this time",
        }
    }
}

pub fn event_card(card: &RenderedCard, visible: bool) -> Markup {
    html! {
        article.event-card.card.hover-lift
            data-category=(card.category_key)
            data-event-date=(card.event_date)
            style=[(!visible).then_some("display: none")]
        {
            div."event-card__icon-wrapper" {
                div class={ "event-card__icon " (card.category_key) } {
                    i class=(card.icon) {}
                }
            }
            div."event-card__content" {
                div."event-card__header" {
                    span.event-category.badge.badge-primary {
                        i.fas.fa-tag {}
                        " " (card.category)
                    }
                    @if let Some(date) = &card.date_label {
                        span.event-date {
                            i.far.fa-calendar {}
                            " " (date)
                        }
                    }
                }
                h3."event-card__title" {
                    a href=(card.link) target="_blank" rel="noopener noreferrer" { (card.title) }
                }
                p."event-card__description" { (card.description) }
                div."event-card__footer" {
                    @if !card.tags.is_empty() {
                        div.event-tags {
                            @for tag in &card.tags {
                                span.event-tag { (tag) }
                            }
                        }
                    }
                    a.event-link-btn href=(card.link) target="_blank" rel="noopener noreferrer" aria-label="Read more" {
                        i.fas.fa-external-link-alt {}
                        " Read More"
                    }
                }
            }
        }
    }
}

/// Cards of one list, or its empty-state message when there are none.
pub fn event_list(list: EventList, cards: &[RenderedCard], visibility: &[bool]) -> Markup {
    if cards.is_empty() {
        return no_events(list);
    }

    html! {
        @for (card, visible) in cards.iter().zip(visibility.iter().copied().chain(std::iter::repeat(true))) {
            (event_card(card, visible))
        }
    }
}

pub fn no_events(list: EventList) -> Markup {
    html! {
        div.no-events-message {
            i class={ "fas fa-" (list.empty_icon()) } {}
            p { (list.empty_message()) }
        }
    }
}

pub fn loading() -> Markup {
    html! {
        div.events-loading {
            i.fas.fa-spinner.fa-spin {}
            p { "Loading events…" }
        }
    }
}

pub fn filter_buttons(buttons: &[FilterButton]) -> Markup {
    html! {
        @for button in buttons {
            button.filter-btn.active[button.active] data-category=(button.selection.as_str()) {
                i.fas.fa-tag {}
                " " (button.label)
            }
        }
    }
}

pub fn calendar_days(grid: &CalendarGrid) -> Markup {
    html! {
        @for cell in &grid.cells {
            @match cell {
                DayCell::Blank => {
                    div.calendar-day.empty {}
                }
                DayCell::Day(day) => {
                    div.calendar-day.has-events[day.has_events].today[day.is_today]
                        title=[day.has_events.then(|| format!("{} events", day.event_count))]
                    {
                        @if let Some(href) = day.archive_href() {
                            a href=(href) { (day.day) }
                        } @else {
                            (day.day)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarCursor, CalendarView};
    use crate::event::EventRecord;
    use crate::filter::CategoryFilter;
    use crate::store::{EventDataset, EventStore};
    use chrono::NaiveDate;

    fn make_record() -> EventRecord {
        EventRecord {
            title: "Fish & Chips <Night>".to_string(),
            description: "Bring friends".to_string(),
            category: "Food".to_string(),
            event_date: "2026-01-05".to_string(),
            link: "https://example.com/fish".to_string(),
            tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            found_date: None,
        }
    }

    #[test]
    fn card_markup_escapes_and_isolates_links() {
        let card = RenderedCard::render(&make_record(), true);
        let html = event_card(&card, true).into_string();

        assert!(html.contains("Fish &amp; Chips &lt;Night&gt;"));
        assert!(html.contains(r#"data-category="food""#));
        assert!(html.contains(r#"data-event-date="2026-01-05""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("Jan 5, 2026"));
        assert!(html.contains("fas fa-utensils"));
        assert_eq!(html.matches(r#"class="event-tag""#).count(), 3);
        assert!(!html.contains("display: none"));
    }

    #[test]
    fn hidden_card_is_not_displayed() {
        let card = RenderedCard::render(&make_record(), true);
        let html = event_card(&card, false).into_string();
        assert!(html.contains(r#"style="display: none""#));
    }

    #[test]
    fn card_without_tags_has_no_tag_list() {
        let mut record = make_record();
        record.tags.clear();
        let html = event_card(&RenderedCard::render(&record, true), true).into_string();
        assert!(!html.contains("event-tags"));
    }

    #[test]
    fn empty_list_shows_message() {
        let html = event_list(EventList::Upcoming, &[], &[]).into_string();
        assert!(html.contains("No upcoming events at this time"));
        assert!(html.contains("fa-calendar-check"));

        let html = event_list(EventList::Current, &[], &[]).into_string();
        assert!(html.contains("No events found for today"));
    }

    #[test]
    fn active_filter_button_has_active_class() {
        let cards = vec![RenderedCard::render(&make_record(), true)];
        let filter = CategoryFilter::from_cards(&cards);
        let html = filter_buttons(&filter.buttons()).into_string();

        assert_eq!(html.matches("filter-btn active").count(), 1);
        let active = html.find("filter-btn active").unwrap();
        let all = html.find(r#"data-category="all""#).unwrap();
        let food = html.find(r#"data-category="food""#).unwrap();
        assert!(active < all && all < food);
    }

    #[test]
    fn calendar_days_link_event_days() {
        let mut dataset = EventDataset::new();
        dataset.insert("2026-01-05".to_string(), vec![make_record(), make_record()]);
        let store = EventStore::new(dataset);
        let today = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        let grid = CalendarView::at(CalendarCursor { year: 2026, month: 1 }).render(&store, today);

        let html = calendar_days(&grid).into_string();
        assert!(html.contains(r#"<a href="/events/archive/2026-01-05/">5</a>"#));
        assert!(html.contains(r#"title="2 events""#));
        assert!(html.contains(r#"class="calendar-day today">7<"#));
        // 1 January 2026 is a Thursday
        assert_eq!(html.matches("calendar-day empty").count(), 4);
    }
}
