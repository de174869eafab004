//! Leases binding a tenant to a property.

use chrono::NaiveDate;
use common::{LeaseId, Money, PropertyId, TenantId};
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};
use crate::enums::LeaseStatus;

/// A rental agreement between one tenant and one property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub lease_id: Option<LeaseId>,
    pub property_id: PropertyId,
    pub tenant_id: TenantId,
    pub start_date: NaiveDate,
    /// Expected on or after `start_date`.
    pub end_date: NaiveDate,
    pub monthly_rent: Money,
    pub security_deposit: Option<Money>,
    #[serde(default)]
    pub status: LeaseStatus,
    pub lease_document_url: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Lease {
    /// Creates an unsaved, pending lease.
    pub fn new(
        property_id: PropertyId,
        tenant_id: TenantId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: Money,
    ) -> Self {
        Self {
            lease_id: None,
            property_id,
            tenant_id,
            start_date,
            end_date,
            monthly_rent,
            security_deposit: None,
            status: LeaseStatus::default(),
            lease_document_url: None,
            audit: Audit::default(),
        }
    }
}

impl_entity!(Lease, LeaseId, lease_id, "Lease");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_decimal_rent_and_default_status() {
        let lease: Lease = serde_json::from_value(serde_json::json!({
            "propertyId": 1,
            "tenantId": 2,
            "startDate": "2025-01-01",
            "endDate": "2025-12-31",
            "monthlyRent": 1250.50,
            "securityDeposit": "2500"
        }))
        .unwrap();

        assert_eq!(lease.monthly_rent, Money::from_cents(125_050));
        assert_eq!(lease.security_deposit, Some(Money::from_units(2500)));
        assert_eq!(lease.status, LeaseStatus::Pending);
        assert_eq!(lease.lease_document_url, None);
    }
}
