//! The uniform surface shared by every record type.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Audit timestamps carried by every record.
///
/// Both are populated by the store; values supplied by a client are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    /// Set once when the record is first stored.
    pub created_at: Option<DateTime<Utc>>,

    /// Refreshed on every successful mutation.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Audit {
    /// Stamps both timestamps for a freshly inserted record.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.created_at = Some(now);
        self.updated_at = Some(now);
    }

    /// Keeps the original creation time and refreshes the modification time.
    pub fn stamp_updated(&mut self, created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        self.created_at = created_at.or(Some(now));
        self.updated_at = Some(now);
    }

    /// Drops any client-supplied timestamps.
    pub fn clear(&mut self) {
        *self = Audit::default();
    }
}

/// A persisted record type with a store-assigned identifier.
pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Typed identifier of this record type.
    type Id: Copy
        + Eq
        + Ord
        + Hash
        + Debug
        + Display
        + From<i64>
        + Into<i64>
        + Send
        + Sync
        + 'static;

    /// Human-readable record type name, used in messages and metrics.
    const NAME: &'static str;

    /// Returns the identifier, or `None` before the record is stored.
    fn id(&self) -> Option<Self::Id>;

    /// Overwrites the identifier.
    fn set_id(&mut self, id: Self::Id);

    /// Removes the identifier so the record is treated as new.
    fn clear_id(&mut self);

    /// Returns the audit timestamps.
    fn audit(&self) -> &Audit;

    /// Returns the audit timestamps mutably.
    fn audit_mut(&mut self) -> &mut Audit;
}

/// Implements [`Entity`] for a record struct with an `Option<Id>` field and
/// an `audit` field.
macro_rules! impl_entity {
    ($entity:ty, $id:ty, $field:ident, $name:literal) => {
        impl $crate::entity::Entity for $entity {
            type Id = $id;

            const NAME: &'static str = $name;

            fn id(&self) -> Option<$id> {
                self.$field
            }

            fn set_id(&mut self, id: $id) {
                self.$field = Some(id);
            }

            fn clear_id(&mut self) {
                self.$field = None;
            }

            fn audit(&self) -> &$crate::entity::Audit {
                &self.audit
            }

            fn audit_mut(&mut self) -> &mut $crate::entity::Audit {
                &mut self.audit
            }
        }
    };
}

pub(crate) use impl_entity;

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn stamp_created_sets_both_timestamps() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let mut audit = Audit::default();
        audit.stamp_created(now);
        assert_eq!(audit.created_at, Some(now));
        assert_eq!(audit.updated_at, Some(now));
    }

    #[test]
    fn stamp_updated_keeps_creation_time() {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let mut audit = Audit {
            created_at: Some(later),
            updated_at: None,
        };
        audit.stamp_updated(Some(created), later);
        assert_eq!(audit.created_at, Some(created));
        assert_eq!(audit.updated_at, Some(later));
    }

    #[test]
    fn audit_serializes_camel_case() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let mut audit = Audit::default();
        audit.stamp_created(now);
        let json = serde_json::to_value(audit).unwrap();
        assert_eq!(json["createdAt"], "2025-01-02T03:04:05Z");
        assert_eq!(json["updatedAt"], "2025-01-02T03:04:05Z");
    }
}
