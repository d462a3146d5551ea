//! Field-level validation primitives.
//!
//! Rulesets are plain values implementing [`Validator`]; an entity kind owns
//! exactly one and calls it from its constructors and mutators. Nothing here
//! holds global state.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Validation messages grouped by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one message for `field`, keeping insertion order per field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), EntityValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError(self))
        }
    }
}

/// An entity failed its validation pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Entity Validation Error")]
pub struct EntityValidationError(FieldErrors);

impl EntityValidationError {
    pub fn errors(&self) -> &FieldErrors {
        &self.0
    }

    pub fn into_errors(self) -> FieldErrors {
        self.0
    }
}

/// A pure validation ruleset for `T`.
pub trait Validator<T: ?Sized> {
    fn validate(&self, candidate: &T) -> FieldErrors;
}

/// Record `"{field} should not be empty"` when `value` is blank.
pub fn required(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.add(field, format!("{field} should not be empty"));
    }
}

/// Record a length violation when `value` has more than `max` characters.
pub fn max_length(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("{field} must be shorter than or equal to {max} characters"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn messages_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        errors.add("code", "third");

        assert_eq!(
            errors.get("name"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["code", "name"]);

        let err = errors.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Entity Validation Error");
        assert_eq!(err.errors().get("code"), Some(&["third".to_string()][..]));
    }

    #[test]
    fn required_flags_blank_values_only() {
        let mut errors = FieldErrors::new();
        required(&mut errors, "name", "");
        required(&mut errors, "title", "x");

        assert_eq!(
            errors.get("name"),
            Some(&["name should not be empty".to_string()][..])
        );
        assert!(errors.get("title").is_none());
    }

    #[test]
    fn max_length_counts_characters() {
        let mut errors = FieldErrors::new();
        max_length(&mut errors, "name", &"é".repeat(3), 3);
        assert!(errors.is_empty());

        max_length(&mut errors, "name", "abcd", 3);
        assert_eq!(
            errors.get("name"),
            Some(&["name must be shorter than or equal to 3 characters".to_string()][..])
        );
    }

    #[test]
    fn serializes_as_field_map() {
        let mut errors = FieldErrors::new();
        errors.add("name", "name should not be empty");

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "name": ["name should not be empty"] })
        );
    }
}
