//! Category filter over rendered cards.

use std::fmt;

use tracing::debug;

use crate::card::RenderedCard;
use crate::constants::ALL_CATEGORIES;

/// The single active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterSelection {
    #[default]
    All,
    /// Category key, matched exactly against each card's key
    Category(String),
}

impl FilterSelection {
    /// `"all"` selects everything; any other value selects that category key.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            FilterSelection::All
        } else {
            FilterSelection::Category(value.to_string())
        }
    }

    /// Value written to the button's `data-category` attribute.
    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL_CATEGORIES,
            FilterSelection::Category(key) => key,
        }
    }

    pub fn matches(&self, card: &RenderedCard) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Category(key) => card.category_key == *key,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category observed on the rendered cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: String,
    /// Display text of the first card seen with this key
    pub label: String,
    pub count: usize,
}

/// One button of the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub selection: FilterSelection,
    pub label: String,
    pub active: bool,
}

/// Derived categories plus the active selection.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    categories: Vec<Category>,
    active: FilterSelection,
}

impl CategoryFilter {
    /// Build a filter from the cards currently on the page, with "all" active.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a RenderedCard>) -> Self {
        CategoryFilter {
            categories: derive_categories(cards),
            active: FilterSelection::All,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active(&self) -> &FilterSelection {
        &self.active
    }

    /// Replace the active selection. Selecting a category that no card has is
    /// allowed and simply hides everything.
    pub fn select(&mut self, selection: FilterSelection) {
        debug!(category = %selection, "Filter selected");
        self.active = selection;
    }

    /// Visibility of each card under the active selection, in card order.
    pub fn visibility<'a>(&self, cards: impl IntoIterator<Item = &'a RenderedCard>) -> Vec<bool> {
        apply_filter(cards, &self.active)
    }

    /// "all" first, then one button per category; exactly one is active.
    pub fn buttons(&self) -> Vec<FilterButton> {
        let all = FilterButton {
            selection: FilterSelection::All,
            label: "All".to_string(),
            active: self.active == FilterSelection::All,
        };

        std::iter::once(all)
            .chain(self.categories.iter().map(|category| {
                let selection = FilterSelection::Category(category.key.clone());
                FilterButton {
                    active: self.active == selection,
                    selection,
                    label: category.label.clone(),
                }
            }))
            .collect()
    }
}

/// Distinct category keys of the cards, sorted by key. The "all" sentinel is
/// never a category.
pub fn derive_categories<'a>(cards: impl IntoIterator<Item = &'a RenderedCard>) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for card in cards {
        if card.category_key == ALL_CATEGORIES {
            continue;
        }
        match categories.iter_mut().find(|c| c.key == card.category_key) {
            Some(existing) => existing.count += 1,
            None => categories.push(Category {
                key: card.category_key.clone(),
                label: card.category.clone(),
                count: 1,
            }),
        }
    }

    categories.sort_by(|a, b| a.key.cmp(&b.key));
    categories
}

/// Visibility of each card for `selection`.
pub fn apply_filter<'a>(
    cards: impl IntoIterator<Item = &'a RenderedCard>,
    selection: &FilterSelection,
) -> Vec<bool> {
    cards.into_iter().map(|card| selection.matches(card)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRecord;

    fn make_card(title: &str, category: &str) -> RenderedCard {
        let record = EventRecord {
            title: title.to_string(),
            description: String::new(),
            category: category.to_string(),
            event_date: "unknown".to_string(),
            link: String::new(),
            tags: vec![],
            found_date: None,
        };
        RenderedCard::render(&record, true)
    }

    fn sample_cards() -> Vec<RenderedCard> {
        vec![
            make_card("a", "News"),
            make_card("b", "Food"),
            make_card("c", "news"),
            make_card("d", "Culture"),
        ]
    }

    #[test]
    fn derives_sorted_distinct_categories() {
        let cards = sample_cards();
        let keys: Vec<_> = derive_categories(&cards).into_iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["culture", "food", "news"]);
    }

    #[test]
    fn category_label_comes_from_first_card() {
        let cards = sample_cards();
        let categories = derive_categories(&cards);
        let news = categories.iter().find(|c| c.key == "news").unwrap();
        assert_eq!(news.label, "News");
        assert_eq!(news.count, 2);
    }

    #[test]
    fn all_is_never_a_derived_category() {
        let cards = vec![make_card("a", "All"), make_card("b", "Food")];
        let keys: Vec<_> = derive_categories(&cards).into_iter().map(|c| c.key).collect();
        assert_eq!(keys, vec!["food"]);
    }

    #[test]
    fn all_shows_every_card() {
        let cards = sample_cards();
        assert_eq!(apply_filter(&cards, &FilterSelection::All), vec![true; 4]);
    }

    #[test]
    fn category_shows_only_exact_key_matches() {
        let cards = sample_cards();
        let visible = apply_filter(&cards, &FilterSelection::Category("news".to_string()));
        assert_eq!(visible, vec![true, false, true, false]);

        // Keys are lower-cased at render time, so the display casing never matches
        let visible = apply_filter(&cards, &FilterSelection::Category("News".to_string()));
        assert_eq!(visible, vec![false; 4]);
    }

    #[test]
    fn unmatched_category_hides_everything() {
        let cards = sample_cards();
        let mut filter = CategoryFilter::from_cards(&cards);
        filter.select(FilterSelection::Category("sports".to_string()));
        assert!(filter.visibility(&cards).iter().all(|v| !v));
    }

    #[test]
    fn selecting_all_restores_visibility() {
        let cards = sample_cards();
        let mut filter = CategoryFilter::from_cards(&cards);

        filter.select(FilterSelection::Category("food".to_string()));
        assert_eq!(filter.visibility(&cards), vec![false, true, false, false]);

        filter.select(FilterSelection::All);
        assert_eq!(filter.visibility(&cards), vec![true; 4]);
    }

    #[test]
    fn exactly_one_button_is_active() {
        let cards = sample_cards();
        let mut filter = CategoryFilter::from_cards(&cards);

        let buttons = filter.buttons();
        assert_eq!(buttons[0].selection, FilterSelection::All);
        assert_eq!(buttons.iter().filter(|b| b.active).count(), 1);
        assert!(buttons[0].active);

        filter.select(FilterSelection::Category("food".to_string()));
        let buttons = filter.buttons();
        let active: Vec<_> = buttons.iter().filter(|b| b.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Food");
    }

    #[test]
    fn parses_sentinel() {
        assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
        assert_eq!(
            FilterSelection::parse("food"),
            FilterSelection::Category("food".to_string())
        );
        assert_eq!(FilterSelection::All.to_string(), "all");
    }
}
