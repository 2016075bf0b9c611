// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use faraway_app::{ItemId, MAX_QUANTITY, PackingList};
use std::path::PathBuf;

const CLOTHING: [&str; 12] = [
    "Socks",
    "T-shirts",
    "Underwear",
    "Rain jacket",
    "Sweater",
    "Shorts",
    "Jeans",
    "Swimsuit",
    "Pajamas",
    "Sun hat",
    "Gloves",
    "Scarf",
];

const TOILETRIES: [&str; 10] = [
    "Toothbrush",
    "Toothpaste",
    "Sunscreen",
    "Shampoo",
    "Deodorant",
    "Razor",
    "Lip balm",
    "Hairbrush",
    "Contact lenses",
    "Insect repellent",
];

const DOCUMENTS: [&str; 8] = [
    "Passports",
    "Boarding passes",
    "Travel insurance",
    "Hotel confirmation",
    "Driver's license",
    "Visa",
    "Vaccination card",
    "Emergency contacts",
];

const GEAR: [&str; 12] = [
    "Phone charger",
    "Power adapter",
    "Headphones",
    "Camera",
    "Power bank",
    "Water bottle",
    "Sunglasses",
    "Umbrella",
    "Daypack",
    "Travel pillow",
    "Guidebook",
    "Snacks",
];

const CATEGORIES: [&[&str]; 4] = [&CLOTHING, &TOILETRIES, &DOCUMENTS, &GEAR];

#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
        if state == 0 {
            state = 0xA409_3822_299F_31D0;
        }
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);

        let mut x = self.state;
        x ^= x >> 13;
        x ^= x << 7;
        x ^= x >> 17;
        x
    }

    fn int_n(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        (self.next_u64() % (n as u64)) as usize
    }

    fn bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeItem {
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

/// Seeded generator for packing-list fixtures. The same seed always yields
/// the same items.
#[derive(Debug, Clone)]
pub struct TripFaker {
    rng: DeterministicRng,
    seed: u64,
}

impl TripFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            seed: normalized,
        }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub fn description(&mut self) -> String {
        let category = CATEGORIES[self.rng.int_n(CATEGORIES.len())];
        self.pick(category).to_owned()
    }

    pub fn quantity(&mut self) -> u32 {
        // Most trips need a handful of anything; keep the long tail rare.
        if self.rng.int_n(10) == 0 {
            return 1 + self.rng.int_n(MAX_QUANTITY as usize) as u32;
        }
        1 + self.rng.int_n(6) as u32
    }

    pub fn item(&mut self) -> FakeItem {
        FakeItem {
            description: self.description(),
            quantity: self.quantity(),
            packed: self.rng.bool(),
        }
    }

    /// Builds a list of `count` items through the public list operations.
    pub fn packing_list(&mut self, count: usize) -> PackingList {
        (0..count).fold(PackingList::new(), |list, _| {
            let item = self.item();
            let id = list.next_id();
            let list = list.add(item.description, item.quantity);
            if item.packed { list.toggle(id) } else { list }
        })
    }

    fn pick<'a>(&mut self, values: &'a [&'a str]) -> &'a str {
        values[self.rng.int_n(values.len())]
    }
}

/// Items named `a`, `b`, ... `z`, `aa`, `ab`, ... packed according to `flags`.
pub fn list_with_packed(flags: &[bool]) -> PackingList {
    flags
        .iter()
        .enumerate()
        .fold(PackingList::new(), |list, (index, packed)| {
            let id = list.next_id();
            let list = list.add(letter_name(index), 1);
            if *packed { list.toggle(id) } else { list }
        })
}

fn letter_name(index: usize) -> String {
    let mut name = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        remaining -= 1;
        name.push(b'a' + (remaining % 26) as u8);
        remaining /= 26;
    }
    name.iter().rev().map(|byte| char::from(*byte)).collect()
}

pub fn item_ids(list: &PackingList) -> Vec<ItemId> {
    list.items().iter().map(|item| item.id).collect()
}

pub fn descriptions(list: &PackingList) -> Vec<String> {
    list.items()
        .iter()
        .map(|item| item.description.clone())
        .collect()
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let config_path = dir.path().join("config.toml");
    Ok((dir, config_path))
}

pub fn all_descriptions() -> Vec<&'static str> {
    CATEGORIES.iter().flat_map(|values| values.iter().copied()).collect()
}
