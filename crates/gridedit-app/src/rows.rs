// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::ids::RecordKey;
use crate::model::{Record, RecordPatch};

pub const DEFAULT_NAME_PREFIX: &str = "Quốc";
pub const DEFAULT_ADDRESS_PREFIX: &str = "Sông Cầu";
pub const DEFAULT_AGE: &str = "22";

/// Shape of the rows minted by [`RowStore::add`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowTemplate {
    pub name_prefix: String,
    pub address_prefix: String,
    pub age: String,
}

impl Default for RowTemplate {
    fn default() -> Self {
        Self {
            name_prefix: DEFAULT_NAME_PREFIX.to_owned(),
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_owned(),
            age: DEFAULT_AGE.to_owned(),
        }
    }
}

impl RowTemplate {
    /// Name is one-based, address is zero-based; both read the counter
    /// before it is bumped.
    pub fn synthesize(&self, count: u64) -> Record {
        Record {
            key: RecordKey::serial(count),
            name: format!("{} {}", self.name_prefix, count + 1),
            age: self.age.clone(),
            address: format!("{} {}", self.address_prefix, count),
        }
    }
}

pub fn default_seed_records() -> Vec<Record> {
    vec![
        Record::new(
            "1",
            format!("{DEFAULT_NAME_PREFIX} 1"),
            DEFAULT_AGE,
            DEFAULT_ADDRESS_PREFIX,
        ),
        Record::new(
            "2",
            format!("{DEFAULT_NAME_PREFIX} 2"),
            DEFAULT_AGE,
            format!("{DEFAULT_ADDRESS_PREFIX} 1"),
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    Added(Record),
    Deleted(Record),
    Saved { before: Record, after: Record },
    Missing(RecordKey),
}

impl RowEvent {
    pub fn status_message(&self) -> String {
        match self {
            Self::Added(record) => format!("added {}", record.name),
            Self::Deleted(record) => format!("deleted {}", record.name),
            Self::Saved { after, .. } => format!("saved {}", after.name),
            Self::Missing(key) => format!("row {key} not found; nothing changed"),
        }
    }

    pub const fn changed_rows(&self) -> bool {
        !matches!(self, Self::Missing(_))
    }
}

/// Authoritative ordered rows for the grid. Add, Delete and Save are the
/// only mutators; each replaces the sequence wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowStore {
    records: Vec<Record>,
    count: u64,
    #[serde(skip)]
    template: RowTemplate,
}

impl Default for RowStore {
    fn default() -> Self {
        Self {
            records: default_seed_records(),
            count: 2,
            template: RowTemplate::default(),
        }
    }
}

impl RowStore {
    /// Builds a store from seed rows. The counter starts at the seed count,
    /// or past the largest serial seed key when that is higher.
    pub fn with_seed(records: Vec<Record>, template: RowTemplate) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if matches!(&record.key, RecordKey::Text(text) if text.trim().is_empty()) {
                bail!("seed row {:?} has an empty key", record.name);
            }
            if !seen.insert(record.key.clone()) {
                bail!(
                    "seed key {} appears more than once -- give each seed row a unique key",
                    record.key
                );
            }
        }

        let past_serial = records
            .iter()
            .filter_map(|record| record.key.as_serial())
            .max()
            .map_or(0, |max| max.saturating_add(1));
        let count = (records.len() as u64).max(past_serial);

        Ok(Self {
            records,
            count,
            template,
        })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub fn position(&self, key: &RecordKey) -> Option<usize> {
        self.records.iter().position(|record| record.key == *key)
    }

    pub fn get(&self, key: &RecordKey) -> Option<&Record> {
        self.records.iter().find(|record| record.key == *key)
    }

    pub fn add(&mut self) -> RowEvent {
        let record = self.template.synthesize(self.count);
        let mut next = self.records.clone();
        next.push(record.clone());
        self.records = next;
        self.count += 1;
        tracing::debug!(key = %record.key, count = self.count, "row added");
        RowEvent::Added(record)
    }

    pub fn delete(&mut self, key: &RecordKey) -> RowEvent {
        let Some(index) = self.position(key) else {
            tracing::warn!(%key, "delete skipped: no row with key");
            return RowEvent::Missing(key.clone());
        };
        let removed = self.records[index].clone();
        self.records = self
            .records
            .iter()
            .filter(|record| record.key != *key)
            .cloned()
            .collect();
        tracing::debug!(%key, rows = self.records.len(), "row deleted");
        RowEvent::Deleted(removed)
    }

    pub fn save(&mut self, key: &RecordKey, patch: &RecordPatch) -> RowEvent {
        let Some(index) = self.position(key) else {
            tracing::warn!(%key, "save skipped: no row with key");
            return RowEvent::Missing(key.clone());
        };
        let before = self.records[index].clone();
        let after = before.merged(patch);
        let mut next = self.records.clone();
        next[index] = after.clone();
        self.records = next;
        tracing::debug!(%key, "row saved");
        RowEvent::Saved { before, after }
    }
}

#[cfg(test)]
mod tests {
    use super::{RowEvent, RowStore, RowTemplate, default_seed_records};
    use crate::{Field, Record, RecordKey, RecordPatch};
    use anyhow::Result;

    fn scenario_store() -> Result<RowStore> {
        RowStore::with_seed(
            vec![
                Record::new("1", "A", "22", "X"),
                Record::new("2", "B", "22", "Y"),
            ],
            RowTemplate::default(),
        )
    }

    #[test]
    fn default_store_matches_seed_rows() {
        let store = RowStore::default();
        assert_eq!(store.records(), default_seed_records().as_slice());
        assert_eq!(store.count(), 2);
        assert_eq!(store.records()[1].address, "Sông Cầu 1");
    }

    #[test]
    fn add_reads_counter_before_bumping_it() -> Result<()> {
        let mut store = scenario_store()?;
        let event = store.add();
        let expected = Record::new(2_u64, "Quốc 3", "22", "Sông Cầu 2");
        assert_eq!(event, RowEvent::Added(expected.clone()));
        assert_eq!(store.count(), 3);
        assert_eq!(store.records().last(), Some(&expected));
        Ok(())
    }

    #[test]
    fn add_mints_key_distinct_from_text_seed_key() -> Result<()> {
        let mut store = scenario_store()?;
        store.add();
        assert!(store.get(&RecordKey::text("2")).is_some());
        assert!(store.get(&RecordKey::serial(2)).is_some());
        assert_eq!(store.len(), 3);
        Ok(())
    }

    #[test]
    fn delete_missing_key_is_reported_and_changes_nothing() -> Result<()> {
        let mut store = scenario_store()?;
        let before = store.clone();
        let event = store.delete(&RecordKey::text("nope"));
        assert_eq!(event, RowEvent::Missing(RecordKey::text("nope")));
        assert!(!event.changed_rows());
        assert_eq!(store, before);
        Ok(())
    }

    #[test]
    fn delete_does_not_rewind_counter() -> Result<()> {
        let mut store = scenario_store()?;
        store.add();
        store.delete(&RecordKey::serial(2));
        let event = store.add();
        let RowEvent::Added(record) = event else {
            panic!("expected added event");
        };
        assert_eq!(record.key, RecordKey::serial(3));
        Ok(())
    }

    #[test]
    fn save_missing_key_is_reported() -> Result<()> {
        let mut store = scenario_store()?;
        let before = store.clone();
        let patch = RecordPatch::new().with(Field::Name, "Z")?;
        let event = store.save(&RecordKey::serial(99), &patch);
        assert_eq!(event, RowEvent::Missing(RecordKey::serial(99)));
        assert_eq!(store, before);
        Ok(())
    }

    #[test]
    fn save_replaces_record_at_its_index() -> Result<()> {
        let mut store = scenario_store()?;
        let patch = RecordPatch::new().with(Field::Name, "A2")?;
        let event = store.save(&RecordKey::text("1"), &patch);
        assert_eq!(
            event,
            RowEvent::Saved {
                before: Record::new("1", "A", "22", "X"),
                after: Record::new("1", "A2", "22", "X"),
            }
        );
        assert_eq!(store.position(&RecordKey::text("1")), Some(0));
        assert_eq!(store.records()[1], Record::new("2", "B", "22", "Y"));
        Ok(())
    }

    #[test]
    fn seed_rejects_duplicate_keys() {
        let error = RowStore::with_seed(
            vec![
                Record::new("1", "A", "22", "X"),
                Record::new("1", "B", "22", "Y"),
            ],
            RowTemplate::default(),
        )
        .expect_err("duplicate keys should fail");
        assert!(error.to_string().contains("appears more than once"));
    }

    #[test]
    fn seed_rejects_blank_text_key() {
        let error = RowStore::with_seed(
            vec![Record::new(" ", "A", "22", "X")],
            RowTemplate::default(),
        )
        .expect_err("blank key should fail");
        assert!(error.to_string().contains("empty key"));
    }

    #[test]
    fn seed_counter_skips_past_serial_keys() -> Result<()> {
        let mut store = RowStore::with_seed(
            vec![Record::new(5_u64, "A", "22", "X")],
            RowTemplate::default(),
        )?;
        assert_eq!(store.count(), 6);
        let RowEvent::Added(record) = store.add() else {
            panic!("expected added event");
        };
        assert_eq!(record.key, RecordKey::serial(6));
        Ok(())
    }

    #[test]
    fn status_messages_name_the_row() {
        let record = Record::new("1", "A", "22", "X");
        assert_eq!(RowEvent::Added(record.clone()).status_message(), "added A");
        assert_eq!(RowEvent::Deleted(record).status_message(), "deleted A");
        assert_eq!(
            RowEvent::Missing(RecordKey::text("9")).status_message(),
            "row 9 not found; nothing changed"
        );
    }
}
