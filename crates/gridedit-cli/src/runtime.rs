// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use gridedit_app::{Record, RecordKey, RecordPatch, RowEvent, RowStore};

/// Lends the in-memory row store to the grid.
pub struct StoreRuntime<'a> {
    store: &'a mut RowStore,
}

impl<'a> StoreRuntime<'a> {
    pub fn new(store: &'a mut RowStore) -> Self {
        Self { store }
    }
}

fn log_event(event: &RowEvent) {
    match event {
        RowEvent::Added(record) => {
            tracing::info!(key = %record.key, name = %record.name, "row added");
        }
        RowEvent::Deleted(record) => {
            tracing::info!(key = %record.key, name = %record.name, "row deleted");
        }
        RowEvent::Saved { before, after } => {
            tracing::info!(key = %after.key, from = %before.name, to = %after.name, "row saved");
        }
        RowEvent::Missing(key) => {
            tracing::warn!(%key, "row not found");
        }
    }
}

impl gridedit_tui::AppRuntime for StoreRuntime<'_> {
    fn load_rows(&mut self) -> Result<Vec<Record>> {
        Ok(self.store.records().to_vec())
    }

    fn add_row(&mut self) -> Result<RowEvent> {
        let event = self.store.add();
        log_event(&event);
        Ok(event)
    }

    fn delete_row(&mut self, key: &RecordKey) -> Result<RowEvent> {
        let event = self.store.delete(key);
        log_event(&event);
        Ok(event)
    }

    fn save_row(&mut self, key: &RecordKey, patch: &RecordPatch) -> Result<RowEvent> {
        let event = self.store.save(key, patch);
        log_event(&event);
        Ok(event)
    }
}
