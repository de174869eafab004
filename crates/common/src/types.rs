use serde::{Deserialize, Serialize};

/// Declares a surrogate record identifier.
///
/// Each identifier wraps the `i64` assigned by the store so that ids of
/// different record types cannot be mixed up.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an identifier from its raw value.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw value.
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifier of an owner record.
    OwnerId
);
record_id!(
    /// Identifier of a property record.
    PropertyId
);
record_id!(
    /// Identifier of a tenant record.
    TenantId
);
record_id!(
    /// Identifier of an agent record.
    AgentId
);
record_id!(
    /// Identifier of a lease record.
    LeaseId
);
record_id!(
    /// Identifier of a payment record.
    PaymentId
);
record_id!(
    /// Identifier of a maintenance request record.
    MaintenanceRequestId
);
