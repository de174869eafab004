//! Entity model for the property management system.
//!
//! Seven record types: owners, properties, tenants, agents, leases, payments
//! and maintenance requests. Records refer to each other by id only; inverse
//! sides of a relation are resolved by the store, never stored back on the
//! parent.

pub mod agent;
pub mod entity;
pub mod enums;
pub mod lease;
pub mod maintenance;
pub mod owner;
pub mod payment;
pub mod property;
pub mod tenant;

pub use agent::Agent;
pub use common::{
    AgentId, LeaseId, MaintenanceRequestId, Money, OwnerId, PaymentId, PropertyId, TenantId,
};
pub use entity::{Audit, Entity};
pub use enums::{LeaseStatus, MaintenanceStatus, ParseEnumError, PropertyStatus, PropertyType};
pub use lease::Lease;
pub use maintenance::MaintenanceRequest;
pub use owner::Owner;
pub use payment::Payment;
pub use property::Property;
pub use tenant::Tenant;
