//! Closed value domains for record status and classification fields.
//!
//! Every enum serializes as SCREAMING_SNAKE_CASE, both on the wire and in
//! the database.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a stored or supplied name matches no variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire name of the variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

value_enum! {
    /// Kind of building or lot.
    PropertyType, "property type" {
        Apartment => "APARTMENT",
        House => "HOUSE",
        Condo => "CONDO",
        Townhouse => "TOWNHOUSE",
        Commercial => "COMMERCIAL",
        Land => "LAND",
    }
}

value_enum! {
    /// Market status of a property.
    #[derive(Default)]
    PropertyStatus, "property status" {
        #[default]
        Available => "AVAILABLE",
        Rented => "RENTED",
        Sold => "SOLD",
        UnderMaintenance => "UNDER_MAINTENANCE",
    }
}

value_enum! {
    /// Lifecycle status of a lease.
    #[derive(Default)]
    LeaseStatus, "lease status" {
        #[default]
        Pending => "PENDING",
        Active => "ACTIVE",
        Expired => "EXPIRED",
        Terminated => "TERMINATED",
    }
}

value_enum! {
    /// Progress of a maintenance request.
    #[derive(Default)]
    MaintenanceStatus, "maintenance status" {
        #[default]
        Open => "OPEN",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_serde() {
        for status in MaintenanceStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
        for kind in PropertyType::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }

    #[test]
    fn multi_word_variants_use_underscores() {
        assert_eq!(PropertyStatus::UnderMaintenance.as_str(), "UNDER_MAINTENANCE");
        let parsed: MaintenanceStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(parsed, MaintenanceStatus::InProgress);
    }

    #[test]
    fn from_str_round_trips_every_variant() {
        for status in LeaseStatus::ALL {
            assert_eq!(status.as_str().parse::<LeaseStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "MANSION".parse::<PropertyType>().unwrap_err();
        assert_eq!(err.kind, "property type");
        assert_eq!(err.to_string(), "unknown property type 'MANSION'");
        assert!(serde_json::from_str::<LeaseStatus>("\"active\"").is_err());
    }

    #[test]
    fn defaults_match_initial_states() {
        assert_eq!(PropertyStatus::default(), PropertyStatus::Available);
        assert_eq!(LeaseStatus::default(), LeaseStatus::Pending);
        assert_eq!(MaintenanceStatus::default(), MaintenanceStatus::Open);
    }
}
