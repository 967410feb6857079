//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier of a scoring record on the backend.
///
/// Assigned by the server when a test is started; the client treats it as
/// opaque and never parses or synthesizes one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(String);

impl TestId {
    /// Wraps a server-issued identifier.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the identifier is empty or whitespace
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::empty_field("test_id"));
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_opaque_strings() {
        let id = TestId::new("t1").unwrap();
        assert_eq!(id.as_str(), "t1");

        // Server happens to issue UUIDs, but the client must not care.
        let id = TestId::new("3f0a2c1e-9d6b-4a8f-b3c5-1f2e3d4c5b6a").unwrap();
        assert_eq!(id.to_string(), "3f0a2c1e-9d6b-4a8f-b3c5-1f2e3d4c5b6a");
    }

    #[test]
    fn test_id_rejects_empty() {
        assert!(TestId::new("").is_err());
        assert!(TestId::new("   ").is_err());
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = TestId::new("t1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t1\"");
    }
}
