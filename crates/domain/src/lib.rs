//! Domain layer for the property management records.
//!
//! This crate provides:
//! - `CrudService`, the list/get/create/update/delete contract shared by every
//!   record type, with per-type aliases such as `OwnerService`
//! - `Validate`, the boundary checks applied before a record is written
//! - relationship queries resolving the inverse side of each relation

pub mod error;
pub mod relations;
pub mod service;
pub mod validation;

pub use error::{DomainError, Result};
pub use service::{
    AgentService, CrudService, LeaseService, MaintenanceRequestService, OwnerService,
    PaymentService, PropertyService, TenantService,
};
pub use validation::Validate;
