//! Event and category counts for the stats panel.

use crate::card::RenderedCard;
use crate::filter::CategoryFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_events: usize,
    pub total_categories: usize,
}

impl Stats {
    pub fn collect<'a>(
        cards: impl IntoIterator<Item = &'a RenderedCard>,
        filter: &CategoryFilter,
    ) -> Self {
        Stats {
            total_events: cards.into_iter().count(),
            total_categories: filter.categories().len(),
        }
    }
}
