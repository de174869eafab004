//! Maintenance requests raised against a property.

use chrono::NaiveDate;
use common::{MaintenanceRequestId, PropertyId, TenantId};
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};
use crate::enums::MaintenanceStatus;

/// A repair or upkeep request for a property, optionally raised by a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub request_id: Option<MaintenanceRequestId>,
    pub property_id: PropertyId,
    pub tenant_id: Option<TenantId>,
    pub reported_date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub status: MaintenanceStatus,
    pub completed_date: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl MaintenanceRequest {
    /// Creates an unsaved, open request.
    pub fn new(
        property_id: PropertyId,
        reported_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            request_id: None,
            property_id,
            tenant_id: None,
            reported_date,
            description: description.into(),
            status: MaintenanceStatus::default(),
            completed_date: None,
            notes: None,
            audit: Audit::default(),
        }
    }

    pub fn reported_by(mut self, tenant_id: TenantId) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }
}

impl_entity!(
    MaintenanceRequest,
    MaintenanceRequestId,
    request_id,
    "MaintenanceRequest"
);
