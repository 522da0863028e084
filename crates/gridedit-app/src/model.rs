// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ids::RecordKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Age,
    Address,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Age, Self::Address];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Address => "address",
        }
    }

    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: RecordKey,
    pub name: String,
    pub age: String,
    pub address: String,
}

impl Record {
    pub fn new(
        key: impl Into<RecordKey>,
        name: impl Into<String>,
        age: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            age: age.into(),
            address: address.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Address => &self.address,
        }
    }

    /// Field-wise merge: values in `patch` win, everything else is kept.
    pub fn merged(&self, patch: &RecordPatch) -> Self {
        let mut next = self.clone();
        for (field, value) in patch.iter() {
            match field {
                Field::Name => next.name = value.to_owned(),
                Field::Age => next.age = value.to_owned(),
                Field::Address => next.address = value.to_owned(),
            }
        }
        next
    }
}

/// New values for editable fields only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    values: BTreeMap<Field, String>,
}

impl RecordPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Result<Self> {
        self.set(field, value)?;
        Ok(self)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        if !field.is_editable() {
            bail!("column {} is read-only", field.as_str());
        }
        self.values.insert(field, value.into());
        Ok(())
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Data(Field),
    Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub kind: ColumnKind,
    pub width_percent: Option<u16>,
}

impl Column {
    pub const fn field(self) -> Option<Field> {
        match self.kind {
            ColumnKind::Data(field) => Some(field),
            ColumnKind::Operation => None,
        }
    }

    pub const fn is_editable(self) -> bool {
        match self.kind {
            ColumnKind::Data(field) => field.is_editable(),
            ColumnKind::Operation => false,
        }
    }
}

pub const COLUMNS: [Column; 4] = [
    Column {
        title: "name",
        kind: ColumnKind::Data(Field::Name),
        width_percent: Some(30),
    },
    Column {
        title: "age",
        kind: ColumnKind::Data(Field::Age),
        width_percent: None,
    },
    Column {
        title: "address",
        kind: ColumnKind::Data(Field::Address),
        width_percent: None,
    },
    Column {
        title: "operation",
        kind: ColumnKind::Operation,
        width_percent: None,
    },
];

pub fn column_for_field(field: Field) -> Option<Column> {
    COLUMNS
        .iter()
        .copied()
        .find(|column| column.field() == Some(field))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Nav,
    Edit,
    ConfirmDelete(RecordKey),
}

#[cfg(test)]
mod tests {
    use super::{COLUMNS, ColumnKind, Field, Record, RecordPatch, column_for_field};
    use crate::RecordKey;

    #[test]
    fn only_name_is_editable() {
        assert!(Field::Name.is_editable());
        assert!(!Field::Age.is_editable());
        assert!(!Field::Address.is_editable());
        let editable = COLUMNS
            .iter()
            .filter(|column| column.is_editable())
            .map(|column| column.title)
            .collect::<Vec<_>>();
        assert_eq!(editable, vec!["name"]);
    }

    #[test]
    fn patch_rejects_read_only_fields() {
        let error = RecordPatch::new()
            .with(Field::Address, "Elsewhere")
            .expect_err("address is read-only");
        assert!(error.to_string().contains("address is read-only"));
    }

    #[test]
    fn merged_keeps_unpatched_fields() -> anyhow::Result<()> {
        let record = Record::new("2", "B", "22", "Y");
        let patch = RecordPatch::new().with(Field::Name, "B2")?;
        let merged = record.merged(&patch);
        assert_eq!(merged, Record::new("2", "B2", "22", "Y"));
        assert_eq!(merged.key, RecordKey::text("2"));
        Ok(())
    }

    #[test]
    fn every_field_has_a_column() {
        for field in Field::ALL {
            let column = column_for_field(field).expect("data column");
            assert_eq!(column.title, field.as_str());
        }
    }

    #[test]
    fn operation_column_has_no_field() {
        let last = COLUMNS[COLUMNS.len() - 1];
        assert_eq!(last.kind, ColumnKind::Operation);
        assert_eq!(last.field(), None);
        assert_eq!(column_for_field(Field::Age).map(|c| c.title), Some("age"));
    }
}
