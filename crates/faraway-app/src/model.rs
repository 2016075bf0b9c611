// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

use crate::ids::*;

pub const DEFAULT_QUANTITY: u32 = 1;
pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100;

const SEED_ITEMS: [(&str, u32); 2] = [("Passports", 2), ("Socks", 12)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Input,
    Description,
    Packed,
}

impl SortOrder {
    pub const ALL: [Self; 3] = [Self::Input, Self::Description, Self::Packed];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Description => "description",
            Self::Packed => "packed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "input" => Some(Self::Input),
            "description" => Some(Self::Description),
            "packed" => Some(Self::Packed),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "Sort by input order",
            Self::Description => "Sort by description",
            Self::Packed => "Sort by packed status",
        }
    }

    pub fn next(self) -> Self {
        let current = Self::ALL
            .iter()
            .position(|order| *order == self)
            .unwrap_or(0);
        Self::ALL[(current + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackingStats {
    pub total: usize,
    pub packed: usize,
    pub all_packed: bool,
}

impl PackingStats {
    /// Share of packed items in percent, `None` for an empty list.
    pub fn percent_packed(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.packed as f64 / self.total as f64 * 100.0)
    }
}

/// Ordered packing list plus the counter that hands out item ids.
///
/// Every operation borrows the current list and returns a fresh one, so a
/// holder swaps the whole value in after each user action. Ids come from
/// `next_id`, which only ever grows: removing or clearing items never makes
/// an id available again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingList {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for PackingList {
    fn default() -> Self {
        Self::new()
    }
}

impl PackingList {
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: ItemId::new(1),
        }
    }

    pub fn seeded() -> Self {
        SEED_ITEMS
            .iter()
            .fold(Self::new(), |list, (description, quantity)| {
                list.add(*description, *quantity)
            })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub const fn next_id(&self) -> ItemId {
        self.next_id
    }

    pub fn add(&self, description: impl Into<String>, quantity: u32) -> Self {
        let mut items = self.items.clone();
        items.push(Item {
            id: self.next_id,
            description: description.into(),
            quantity,
            packed: false,
        });
        Self {
            items,
            next_id: self.next_id.next(),
        }
    }

    pub fn toggle(&self, id: ItemId) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item {
                        packed: !item.packed,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Self {
            items,
            next_id: self.next_id,
        }
    }

    pub fn remove(&self, id: ItemId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self {
            items,
            next_id: self.next_id,
        }
    }

    pub fn clear(&self) -> Self {
        Self {
            items: Vec::new(),
            next_id: self.next_id,
        }
    }

    pub fn reorder(&self, order: SortOrder) -> Self {
        let mut items = self.items.clone();
        // `sort_by` is stable, which the packed grouping relies on.
        match order {
            SortOrder::Input => items.sort_by_key(|item| item.id),
            SortOrder::Description => {
                items.sort_by(|left, right| {
                    compare_descriptions(&left.description, &right.description)
                });
            }
            SortOrder::Packed => items.sort_by_key(|item| item.packed),
        }
        Self {
            items,
            next_id: self.next_id,
        }
    }

    /// Reorders by a criterion name; unknown names leave the order as is.
    pub fn reorder_by(&self, criterion: &str) -> Self {
        match SortOrder::parse(criterion) {
            Some(order) => self.reorder(order),
            None => self.clone(),
        }
    }

    pub fn stats(&self) -> PackingStats {
        let total = self.items.len();
        let packed = self.items.iter().filter(|item| item.packed).count();
        PackingStats {
            total,
            packed,
            all_packed: total > 0 && packed == total,
        }
    }
}

thread_local! {
    static DESCRIPTION_COLLATOR: Option<Collator> = description_collator();
}

fn description_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(error) => {
            warn!(%error, "root collator unavailable, sorting descriptions by code point");
            None
        }
    }
}

/// Root-locale collation at tertiary strength: accents and case only break
/// ties, and lowercase sorts before uppercase.
pub fn compare_descriptions(left: &str, right: &str) -> Ordering {
    DESCRIPTION_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(left, right),
        None => left.cmp(right),
    })
}
