// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a row. Seed rows carry text keys; rows minted by
/// [`crate::RowStore::add`] carry serial keys. The two kinds never compare
/// equal, so `Serial(2)` and `Text("2")` can live side by side.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Serial(u64),
    Text(String),
}

impl RecordKey {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub const fn serial(value: u64) -> Self {
        Self::Serial(value)
    }

    pub const fn as_serial(&self) -> Option<u64> {
        match self {
            Self::Serial(value) => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serial(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<u64> for RecordKey {
    fn from(value: u64) -> Self {
        Self::Serial(value)
    }
}

impl From<&str> for RecordKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
