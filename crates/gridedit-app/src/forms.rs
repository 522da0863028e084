// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::collections::BTreeMap;

use crate::model::{Field, RecordPatch, column_for_field};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    Required { message: String },
}

impl FieldRule {
    /// `"{title} is required"`, titled by the field's column header.
    pub fn required_for(field: Field) -> Self {
        let title = column_for_field(field).map_or(field.as_str(), |column| column.title);
        Self::Required {
            message: format!("{title} is required"),
        }
    }

    fn check(&self, value: &str) -> Option<&str> {
        match self {
            Self::Required { message } if value.is_empty() => Some(message),
            Self::Required { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages = self
            .errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Editing handle for one row: the in-progress input values plus the rules
/// they must pass before the row store sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldForm {
    values: BTreeMap<Field, String>,
    rules: BTreeMap<Field, Vec<FieldRule>>,
}

impl FieldForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form bound to one editable field with the required rule attached.
    pub fn for_field(field: Field, initial: impl Into<String>) -> Self {
        let mut form = Self::new();
        form.register(field, FieldRule::required_for(field));
        form.set_field_value(field, initial);
        form
    }

    pub fn register(&mut self, field: Field, rule: FieldRule) {
        self.rules.entry(field).or_default().push(rule);
        self.values.entry(field).or_default();
    }

    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn field_value(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn field_value_mut(&mut self, field: Field) -> &mut String {
        self.values.entry(field).or_default()
    }

    /// Current values as a patch, or every rule violation found.
    pub fn validate_fields(&self) -> ValidationResult<RecordPatch> {
        let mut errors = Vec::new();
        for (field, rules) in &self.rules {
            let value = self.field_value(*field).unwrap_or_default();
            errors.extend(rules.iter().filter_map(|rule| {
                rule.check(value).map(|message| FieldError {
                    field: *field,
                    message: message.to_owned(),
                })
            }));
        }
        if !errors.is_empty() {
            return Err(ValidationError { errors });
        }

        let mut patch = RecordPatch::new();
        for (field, value) in &self.values {
            if let Err(error) = patch.set(*field, value.clone()) {
                return Err(ValidationError {
                    errors: vec![FieldError {
                        field: *field,
                        message: error.to_string(),
                    }],
                });
            }
        }
        Ok(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldForm, FieldRule};
    use crate::Field;

    #[test]
    fn required_rule_uses_column_title() {
        assert_eq!(
            FieldRule::required_for(Field::Name),
            FieldRule::Required {
                message: "name is required".to_owned(),
            }
        );
    }

    #[test]
    fn empty_value_is_rejected() {
        let form = FieldForm::for_field(Field::Name, "");
        let error = form.validate_fields().expect_err("empty name should fail");
        assert_eq!(error.message_for(Field::Name), Some("name is required"));
        assert_eq!(error.to_string(), "name is required");
    }

    #[test]
    fn whitespace_value_counts_as_present() {
        let form = FieldForm::for_field(Field::Name, "   ");
        let patch = form.validate_fields().expect("spaces are a value");
        assert_eq!(patch.get(Field::Name), Some("   "));
    }

    #[test]
    fn valid_value_becomes_patch() {
        let form = FieldForm::for_field(Field::Name, "Quốc 9");
        let patch = form.validate_fields().expect("valid name");
        assert_eq!(patch.get(Field::Name), Some("Quốc 9"));
        assert_eq!(patch.get(Field::Age), None);
    }

    #[test]
    fn read_only_fields_cannot_leak_into_patch() {
        let mut form = FieldForm::new();
        form.set_field_value(Field::Age, "30");
        let error = form.validate_fields().expect_err("age is read-only");
        assert_eq!(error.errors[0].field, Field::Age);
        assert!(error.to_string().contains("read-only"));
    }

    #[test]
    fn field_value_mut_edits_in_place() {
        let mut form = FieldForm::for_field(Field::Name, "Quốc");
        form.field_value_mut(Field::Name).push_str(" 1");
        assert_eq!(form.field_value(Field::Name), Some("Quốc 1"));
    }
}
