//! Shared value types: typed record identifiers and exact currency amounts.

pub mod money;
pub mod types;

pub use money::{Money, MoneyParseError};
pub use types::{
    AgentId, LeaseId, MaintenanceRequestId, OwnerId, PaymentId, PropertyId, TenantId,
};
