//! View state and the presentation models derived from it.
//!
//! Everything here is a pure function of its input so a UI only has to
//! map these values onto elements.

use crate::item::LoadedItem;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shown in place of a missing or empty item name.
pub const NAME_PLACEHOLDER: &str = "[No Name]";

/// Shown when a load returned zero items.
pub const NO_ITEMS_NOTICE: &str = "[No items found]";

/// The most recent load result held by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    /// No load performed yet, or cleared.
    #[default]
    Unset,
    /// Items from the last successful load. May be empty.
    Loaded(Vec<LoadedItem>),
}

impl ViewState {
    /// Whether nothing has been loaded.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Derives what the form should display for this state.
    #[must_use]
    pub fn render(&self) -> Rendered {
        match self {
            Self::Unset => Rendered::Nothing,
            Self::Loaded(items) if items.is_empty() => Rendered::NoItems,
            Self::Loaded(items) => {
                let mut seen = HashSet::new();
                Rendered::Cards(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let key = match ItemKey::for_item(item, index) {
                                ItemKey::Id(id) if !seen.insert(id.clone()) => {
                                    ItemKey::Index(index)
                                }
                                key => key,
                            };
                            KeyedCard {
                                key,
                                card: ItemCard::from_item(item),
                            }
                        })
                        .collect(),
                )
            }
        }
    }
}

/// Display output of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Rendered {
    #[default]
    Nothing,
    NoItems,
    Cards(Vec<KeyedCard>),
}

/// Identity of a card within a rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Id(String),
    Index(usize),
}

impl ItemKey {
    /// Uses the item's id, falling back to its position when the id is
    /// absent or blank. Repeated ids are resolved by [`ViewState::render`].
    #[must_use]
    pub fn for_item(item: &LoadedItem, index: usize) -> Self {
        match &item.id {
            Some(id) if !id.is_blank() => Self::Id(id.to_string()),
            _ => Self::Index(index),
        }
    }
}

/// A card paired with its list key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedCard {
    pub key: ItemKey,
    pub card: ItemCard,
}

/// Presentation model of one loaded item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub type_label: String,
    pub name: CardName,
    pub id: String,
    pub created: Option<String>,
    pub last_modified: Option<String>,
}

/// The name line of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardName {
    Named(String),
    Placeholder,
}

impl CardName {
    /// Text to display on the name line.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Placeholder => NAME_PLACEHOLDER,
        }
    }

    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

impl ItemCard {
    #[must_use]
    pub fn from_item(item: &LoadedItem) -> Self {
        let name = match item.name.as_deref() {
            Some(name) if !name.is_empty() => CardName::Named(name.to_string()),
            _ => CardName::Placeholder,
        };

        Self {
            type_label: item.item_type.clone(),
            name,
            id: item.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            created: non_empty(item.creation_time.as_deref()),
            last_modified: non_empty(item.last_modified_time.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn cards(rendered: Rendered) -> Vec<KeyedCard> {
        match rendered {
            Rendered::Cards(cards) => cards,
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn unset_renders_nothing() {
        assert_eq!(ViewState::Unset.render(), Rendered::Nothing);
    }

    #[test]
    fn empty_load_renders_notice() {
        assert_eq!(ViewState::Loaded(vec![]).render(), Rendered::NoItems);
    }

    #[test]
    fn one_card_per_item_with_placeholder_for_empty_name() {
        let state = ViewState::Loaded(vec![
            LoadedItem::new("Task", "1").with_name("A"),
            LoadedItem::new("Task", "2").with_name(""),
        ]);
        let cards = cards(state.render());

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].card.name, CardName::Named("A".to_string()));
        assert!(cards[1].card.name.is_placeholder());
        assert_eq!(cards[1].card.name.text(), NAME_PLACEHOLDER);
        assert_eq!(cards[1].key, ItemKey::Id("2".to_string()));
    }

    #[test]
    fn missing_timestamps_are_omitted() {
        let card = ItemCard::from_item(&LoadedItem::new("Page", "p1"));
        assert_eq!(card.created, None);
        assert_eq!(card.last_modified, None);
    }

    #[test]
    fn present_timestamps_are_shown() {
        let item = LoadedItem::new("Page", "p1").with_times("2024-01-01", "2024-01-02");
        let card = ItemCard::from_item(&item);
        assert_eq!(card.created.as_deref(), Some("2024-01-01"));
        assert_eq!(card.last_modified.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn empty_timestamp_treated_as_absent() {
        let mut item = LoadedItem::new("Page", "p1");
        item.creation_time = Some(String::new());
        assert_eq!(ItemCard::from_item(&item).created, None);
    }

    #[test]
    fn key_falls_back_to_index() {
        let mut no_id = LoadedItem::new("Row", "x");
        no_id.id = None;
        let mut blank = LoadedItem::new("Row", "");
        blank.id = Some(ItemId::Text(String::new()));

        let cards = cards(ViewState::Loaded(vec![no_id, blank]).render());
        assert_eq!(cards[0].key, ItemKey::Index(0));
        assert_eq!(cards[1].key, ItemKey::Index(1));
        assert_eq!(cards[0].card.id, "");
    }

    #[test]
    fn repeated_ids_get_distinct_keys() {
        let state = ViewState::Loaded(vec![
            LoadedItem::new("Row", "a"),
            LoadedItem::new("Row", "a"),
            LoadedItem::new("Row", "b"),
            LoadedItem::new("Row", "a"),
        ]);
        let cards = cards(state.render());
        let keys: Vec<_> = cards.iter().map(|c| c.key.clone()).collect();

        assert_eq!(
            keys,
            vec![
                ItemKey::Id("a".to_string()),
                ItemKey::Index(1),
                ItemKey::Id("b".to_string()),
                ItemKey::Index(3),
            ]
        );
        assert_eq!(cards[1].card.id, "a");
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn text_and_numeric_ids_with_same_digits_stay_distinct() {
        let text: LoadedItem = serde_json::from_str(r#"{"type":"Row","id":"7"}"#).expect("decode");
        let number: LoadedItem = serde_json::from_str(r#"{"type":"Row","id":7}"#).expect("decode");
        let keys: Vec<_> = cards(ViewState::Loaded(vec![text, number]).render())
            .into_iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, vec![ItemKey::Id("7".to_string()), ItemKey::Index(1)]);
    }

    #[test]
    fn card_keeps_type_label() {
        let card = ItemCard::from_item(&LoadedItem::new("Deal", "9"));
        assert_eq!(card.type_label, "Deal");
        assert_eq!(card.id, "9");
    }
}
