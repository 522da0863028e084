// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::forms::{FieldForm, ValidationError};
use crate::ids::RecordKey;
use crate::model::{Field, Record, RecordPatch};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub key: RecordKey,
    pub field: Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Enter,
    Blur,
}

impl CommitTrigger {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enter => "enter",
            Self::Blur => "blur",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellMode {
    Display,
    Editing(FieldForm),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Commit on a cell that was not editing; nothing to save.
    Idle,
    Rejected(ValidationError),
    /// Cell is back in display mode; hand the patch to the row store.
    Accepted(RecordPatch),
}

/// Display/Editing state machine for one editable cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCell {
    id: CellId,
    mode: CellMode,
}

impl EditCell {
    pub fn new(key: RecordKey, field: Field) -> Self {
        Self {
            id: CellId { key, field },
            mode: CellMode::Display,
        }
    }

    pub fn id(&self) -> &CellId {
        &self.id
    }

    pub fn mode(&self) -> &CellMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CellMode::Editing(_))
    }

    /// Display -> Editing, seeding the input from the record. Returns false
    /// when the record is not this cell's row or the cell is already editing.
    pub fn begin_edit(&mut self, record: &Record) -> bool {
        if record.key != self.id.key || self.is_editing() {
            return false;
        }
        let field = self.id.field;
        self.mode = CellMode::Editing(FieldForm::for_field(field, record.value(field)));
        true
    }

    pub fn input(&self) -> Option<&str> {
        match &self.mode {
            CellMode::Editing(form) => form.field_value(self.id.field),
            CellMode::Display => None,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let field = self.id.field;
        if let CellMode::Editing(form) = &mut self.mode {
            form.field_value_mut(field).push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        let field = self.id.field;
        if let CellMode::Editing(form) = &mut self.mode {
            form.field_value_mut(field).pop();
        }
    }

    pub fn clear_input(&mut self) {
        let field = self.id.field;
        if let CellMode::Editing(form) = &mut self.mode {
            form.field_value_mut(field).clear();
        }
    }

    /// Enter and blur share this path. A rejected commit leaves the cell
    /// editing; an accepted one returns it to display.
    pub fn commit(&mut self, trigger: CommitTrigger) -> CommitOutcome {
        let CellMode::Editing(form) = &self.mode else {
            return CommitOutcome::Idle;
        };
        match form.validate_fields() {
            Ok(patch) => {
                self.mode = CellMode::Display;
                CommitOutcome::Accepted(patch)
            }
            Err(error) => {
                tracing::warn!(
                    key = %self.id.key,
                    field = self.id.field.as_str(),
                    trigger = trigger.as_str(),
                    %error,
                    "save failed"
                );
                CommitOutcome::Rejected(error)
            }
        }
    }
}
