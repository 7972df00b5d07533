//! Field identifiers

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

use crate::FieldError;

/// Unique field identifier
///
/// Freshly created fields get a v4 UUID; identifiers read back from a store
/// may be any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldId(String);

impl FieldId {
    /// Generate a fresh identifier
    #[inline]
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier
    ///
    /// # Errors
    /// Returns [`FieldError::InvalidFieldId`] if `id` is empty or blank
    pub fn new(id: impl Into<String>) -> Result<Self, FieldError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(FieldError::InvalidFieldId(id));
        }
        Ok(Self(id))
    }

    /// Get identifier string
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::generate()
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FieldId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FieldId {
    type Error = FieldError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<FieldId> for String {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique() {
        let ids: HashSet<_> = (0..256).map(|_| FieldId::generate()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn generated_id_is_uuid() {
        let id = FieldId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn blank_id_rejected() {
        assert!(matches!(FieldId::new(""), Err(FieldError::InvalidFieldId(_))));
        assert!(" ".parse::<FieldId>().is_err());
    }

    #[test]
    fn plain_string_ids_accepted() {
        let id: FieldId = "7".parse().unwrap();
        assert_eq!(id.to_string(), "7");
        assert_eq!(serde_json::to_value(&id).unwrap(), "7");
    }

    #[test]
    fn blank_id_rejected_on_deserialize() {
        assert!(serde_json::from_str::<FieldId>("\"\"").is_err());
        assert_eq!(serde_json::from_str::<FieldId>("\"a1\"").unwrap().as_str(), "a1");
    }
}
