//! Rent payments recorded against a lease.

use chrono::NaiveDate;
use common::{LeaseId, Money, PaymentId};
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};

/// A single payment made under a lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: Option<PaymentId>,
    pub lease_id: LeaseId,
    pub payment_date: NaiveDate,
    pub amount: Money,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Payment {
    /// Creates an unsaved payment.
    pub fn new(lease_id: LeaseId, payment_date: NaiveDate, amount: Money) -> Self {
        Self {
            payment_id: None,
            lease_id,
            payment_date,
            amount,
            payment_method: None,
            notes: None,
            audit: Audit::default(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.payment_method = Some(method.into());
        self
    }
}

impl_entity!(Payment, PaymentId, payment_id, "Payment");
