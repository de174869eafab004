//! Tenants renting properties.

use common::TenantId;
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};

/// A person holding zero or more leases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub tenant_id: Option<TenantId>,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all tenants.
    pub email: String,
    pub phone_number: String,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Tenant {
    /// Creates an unsaved tenant.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            audit: Audit::default(),
        }
    }
}

impl_entity!(Tenant, TenantId, tenant_id, "Tenant");
