//! Durable record identification.
//!
//! Every persisted record (game, player, board space) is keyed by a
//! `RecordId` handed out by the [`Store`](crate::store::Store). The engine
//! never invents record ids itself; it only remembers the ones the store
//! returned so it can issue targeted updates later.
//!
//! ## Usage
//!
//! ```
//! use trilha::core::RecordId;
//!
//! let id = RecordId::new(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(format!("{}", id), "#7");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a persisted record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Create a record ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The ID following this one. Used by stores that allocate sequentially.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_basics() {
        let id = RecordId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(id.next(), RecordId(4));
        assert_eq!(format!("{}", id), "#3");
    }

    #[test]
    fn test_record_id_ordering() {
        assert!(RecordId(1) < RecordId(2));
    }

    #[test]
    fn test_record_id_serialization() {
        let id = RecordId(42);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RecordId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
