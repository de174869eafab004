//! Properties and their management links.

use common::{AgentId, OwnerId, PropertyId};
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};
use crate::enums::{PropertyStatus, PropertyType};

/// A rentable property.
///
/// `owner_id` may be unset. `managing_agent_ids` is the owning side of the
/// property/agent many-to-many relation: saving a property replaces its full
/// set of agent links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub property_id: Option<PropertyId>,
    pub owner_id: Option<OwnerId>,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub property_type: PropertyType,
    #[serde(default)]
    pub status: PropertyStatus,
    pub size_sqft: Option<f64>,
    pub num_bedrooms: Option<i32>,
    pub num_bathrooms: Option<i32>,
    pub year_built: Option<i32>,
    pub description: Option<String>,
    #[serde(default)]
    pub managing_agent_ids: Vec<AgentId>,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Property {
    /// Creates an unsaved, ownerless property with the required address fields.
    pub fn new(
        address_line1: impl Into<String>,
        city: impl Into<String>,
        state_province: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        property_type: PropertyType,
    ) -> Self {
        Self {
            property_id: None,
            owner_id: None,
            address_line1: address_line1.into(),
            address_line2: None,
            city: city.into(),
            state_province: state_province.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            property_type,
            status: PropertyStatus::default(),
            size_sqft: None,
            num_bedrooms: None,
            num_bathrooms: None,
            year_built: None,
            description: None,
            managing_agent_ids: Vec::new(),
            audit: Audit::default(),
        }
    }

    pub fn with_owner(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn with_agents(mut self, agent_ids: impl IntoIterator<Item = AgentId>) -> Self {
        self.managing_agent_ids = agent_ids.into_iter().collect();
        self
    }

    pub fn with_rooms(mut self, bedrooms: i32, bathrooms: i32) -> Self {
        self.num_bedrooms = Some(bedrooms);
        self.num_bathrooms = Some(bathrooms);
        self
    }
}

impl_entity!(Property, PropertyId, property_id, "Property");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_agents_default_when_omitted() {
        let property: Property = serde_json::from_value(serde_json::json!({
            "addressLine1": "100 Test Ave",
            "city": "Test City",
            "stateProvince": "TC",
            "postalCode": "12345",
            "country": "USA",
            "propertyType": "APARTMENT"
        }))
        .unwrap();

        assert_eq!(property.status, PropertyStatus::Available);
        assert!(property.managing_agent_ids.is_empty());
        assert_eq!(property.owner_id, None);
    }

    #[test]
    fn field_names_are_camel_case() {
        let property = Property::new(
            "1 Main St",
            "Springfield",
            "IL",
            "62701",
            "USA",
            PropertyType::House,
        )
        .with_owner(OwnerId::new(3))
        .with_agents([AgentId::new(2)]);

        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["addressLine1"], "1 Main St");
        assert_eq!(json["stateProvince"], "IL");
        assert_eq!(json["propertyType"], "HOUSE");
        assert_eq!(json["ownerId"], 3);
        assert_eq!(json["managingAgentIds"], serde_json::json!([2]));
    }
}
