// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use gridedit_app::{Field, Record, RecordKey, RecordPatch, RowStore, RowTemplate};
use std::path::PathBuf;

const FIRST_NAMES: [&str; 16] = [
    "Avery", "Jordan", "Taylor", "Riley", "Morgan", "Casey", "Alex", "Quinn", "Parker", "Drew",
    "Kai", "Elliot", "Robin", "Cameron", "Hayden", "Rowan",
];
const LAST_NAMES: [&str; 12] = [
    "Nguyen", "Tran", "Le", "Pham", "Walker", "Martin", "Hill", "Evans", "Lopez", "Gray", "Ward",
    "Young",
];
const STREET_NAMES: [&str; 12] = [
    "Cedar", "Maple", "Oak", "Pine", "Willow", "Elm", "Birch", "Juniper", "Sunset", "Ridge",
    "Valley", "Lakeview",
];
const CITIES: [&str; 8] = [
    "Sông Cầu", "Tuy Hòa", "Quy Nhơn", "Nha Trang", "Austin", "Denver", "Madison", "Boise",
];

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
}

/// One user action against the row store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOp {
    Add,
    Delete(RecordKey),
    Save(RecordKey, RecordPatch),
}

impl RowOp {
    pub fn apply(&self, store: &mut RowStore) -> gridedit_app::RowEvent {
        match self {
            Self::Add => store.add(),
            Self::Delete(key) => store.delete(key),
            Self::Save(key, patch) => store.save(key, patch),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordFaker {
    rng: DeterministicRng,
    next_text_key: u64,
}

impl RecordFaker {
    pub fn new(seed: u64) -> Self {
        let normalized = if seed == 0 { 1 } else { seed };
        Self {
            rng: DeterministicRng::new(normalized),
            next_text_key: 1,
        }
    }

    pub fn int_n(&mut self, n: usize) -> usize {
        self.rng.int_n(n)
    }

    pub fn name(&mut self) -> String {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        format!("{first} {last}")
    }

    pub fn age(&mut self) -> String {
        (18 + self.int_n(60)).to_string()
    }

    pub fn address(&mut self) -> String {
        let number = 100 + self.int_n(9_900);
        let street = self.pick(&STREET_NAMES);
        let city = self.pick(&CITIES);
        format!("{number} {street} St, {city}")
    }

    /// A seed-style record with the next unused text key.
    pub fn record(&mut self) -> Record {
        let key = RecordKey::text(self.next_text_key.to_string());
        self.next_text_key += 1;
        let name = self.name();
        let age = self.age();
        let address = self.address();
        Record::new(key, name, age, address)
    }

    pub fn records(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.record()).collect()
    }

    /// A name patch; roughly one in five is empty so callers can exercise
    /// the required rule.
    pub fn name_patch(&mut self) -> Result<RecordPatch> {
        let value = if self.int_n(5) == 0 {
            String::new()
        } else {
            self.name()
        };
        RecordPatch::new().with(Field::Name, value)
    }

    /// Picks Add, Delete or Save against the keys currently in `store`.
    /// Deletes and saves sometimes target a key that is not present.
    pub fn op_for(&mut self, store: &RowStore) -> Result<RowOp> {
        let target = if store.is_empty() || self.int_n(6) == 0 {
            RecordKey::text(format!("absent-{}", self.int_n(1_000)))
        } else {
            store.records()[self.int_n(store.len())].key.clone()
        };
        let op = match self.int_n(3) {
            0 => RowOp::Add,
            1 => RowOp::Delete(target),
            _ => RowOp::Save(target, RecordPatch::new().with(Field::Name, self.name())?),
        };
        Ok(op)
    }

    fn pick<'a>(&mut self, values: &'a [&'a str]) -> &'a str {
        values[self.int_n(values.len())]
    }
}

/// Two-row store from the grid walkthrough: keys "1"/"2", count 2.
pub fn scenario_store() -> Result<RowStore> {
    RowStore::with_seed(
        vec![
            Record::new("1", "A", "22", "X"),
            Record::new("2", "B", "22", "Y"),
        ],
        RowTemplate::default(),
    )
    .context("build scenario store")
}

pub fn seeded_store(seed: u64, rows: usize) -> Result<RowStore> {
    let mut faker = RecordFaker::new(seed);
    RowStore::with_seed(faker.records(rows), RowTemplate::default()).context("build seeded store")
}

pub fn temp_config_path() -> Result<(tempfile::TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create temp dir")?;
    let path = dir.path().join("config.toml");
    Ok((dir, path))
}

#[cfg(test)]
mod tests {
    use super::{RecordFaker, RowOp, scenario_store, seeded_store};
    use anyhow::Result;
    use gridedit_app::{Field, RecordKey};
    use std::collections::BTreeSet;

    #[test]
    fn new_deterministic_seed() {
        let mut left = RecordFaker::new(42);
        let mut right = RecordFaker::new(42);
        assert_eq!(left.record(), right.record());
    }

    #[test]
    fn zero_seed_is_normalized() {
        let mut zero = RecordFaker::new(0);
        let mut one = RecordFaker::new(1);
        assert_eq!(zero.name(), one.name());
    }

    #[test]
    fn records_have_unique_text_keys_and_filled_fields() {
        let mut faker = RecordFaker::new(7);
        let records = faker.records(25);
        let keys = records
            .iter()
            .map(|record| record.key.clone())
            .collect::<BTreeSet<_>>();
        assert_eq!(keys.len(), 25);
        for record in &records {
            assert!(record.key.as_serial().is_none());
            assert!(!record.name.is_empty());
            assert!(!record.age.is_empty());
            assert!(!record.address.is_empty());
        }
    }

    #[test]
    fn name_patch_only_touches_name() -> Result<()> {
        let mut faker = RecordFaker::new(3);
        for _ in 0..20 {
            let patch = faker.name_patch()?;
            assert!(patch.get(Field::Name).is_some());
            assert_eq!(patch.iter().count(), 1);
        }
        Ok(())
    }

    #[test]
    fn scenario_store_matches_walkthrough() -> Result<()> {
        let store = scenario_store()?;
        assert_eq!(store.len(), 2);
        assert_eq!(store.count(), 2);
        assert_eq!(store.records()[0].key, RecordKey::text("1"));
        Ok(())
    }

    #[test]
    fn seeded_store_counts_seed_rows() -> Result<()> {
        let store = seeded_store(11, 6)?;
        assert_eq!(store.len(), 6);
        assert_eq!(store.count(), 6);
        Ok(())
    }

    #[test]
    fn ops_apply_without_panicking() -> Result<()> {
        let mut faker = RecordFaker::new(99);
        let mut store = seeded_store(99, 3)?;
        for _ in 0..200 {
            let op = faker.op_for(&store)?;
            let count_before = store.count();
            op.apply(&mut store);
            assert!(store.count() >= count_before);
            if op == RowOp::Add {
                assert_eq!(store.count(), count_before + 1);
            }
        }
        Ok(())
    }
}
