//! Property owners.

use common::OwnerId;
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};

/// A person owning zero or more properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub owner_id: Option<OwnerId>,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all owners.
    pub email: String,
    pub phone_number: Option<String>,
    pub mailing_address: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Owner {
    /// Creates an unsaved owner with the required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            owner_id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: None,
            mailing_address: None,
            audit: Audit::default(),
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_mailing_address(mut self, mailing_address: impl Into<String>) -> Self {
        self.mailing_address = Some(mailing_address.into());
        self
    }
}

impl_entity!(Owner, OwnerId, owner_id, "Owner");
