//! Identity value objects.

use core::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::InvalidUuidError;
use crate::value_object::ValueObject;

/// Canonical (hyphenated) UUID length: `8-4-4-4-12`.
const CANONICAL_LEN: usize = 36;

/// Identifier value object wrapping a UUID string in canonical form.
///
/// Upper, lower and mixed case hex digits are all accepted. The wrapped string
/// is kept exactly as supplied and equality is plain string equality, so the
/// upper and lower case spellings of one UUID are different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Uuid(String);

impl Uuid {
    /// Build an identifier, generating a random v4 UUID when `value` is `None`.
    ///
    /// Both paths go through the same validation before the value exists.
    pub fn new(value: Option<String>) -> Result<Self, InvalidUuidError> {
        let value = value.unwrap_or_else(Self::random);
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Fresh random identifier.
    ///
    /// Runs the same validation as [`Uuid::new`]; a rejected candidate is
    /// discarded and another one drawn.
    pub fn generate() -> Self {
        loop {
            let value = Self::random();
            if Self::validate(&value).is_ok() {
                return Self(value);
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn random() -> String {
        uuid::Uuid::new_v4().hyphenated().to_string()
    }

    fn validate(value: &str) -> Result<(), InvalidUuidError> {
        // `try_parse` also accepts the simple, braced and urn forms.
        if value.len() != CANONICAL_LEN || uuid::Uuid::try_parse(value).is_err() {
            return Err(InvalidUuidError::new(value));
        }
        Ok(())
    }
}

impl ValueObject for Uuid {}

impl Default for Uuid {
    fn default() -> Self {
        Self::generate()
    }
}

impl core::fmt::Display for Uuid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Uuid {
    type Err = InvalidUuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Some(s.to_string()))
    }
}

impl TryFrom<String> for Uuid {
    type Error = InvalidUuidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(Some(value))
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Self {
        Self(value.hyphenated().to_string())
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(Some(raw)).map_err(serde::de::Error::custom)
    }
}
