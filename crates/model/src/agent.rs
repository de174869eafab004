//! Agents managing properties.

use chrono::NaiveDate;
use common::AgentId;
use serde::{Deserialize, Serialize};

use crate::entity::{Audit, impl_entity};

/// A letting agent.
///
/// The properties an agent manages are held on the property side as links;
/// an agent record carries no list of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub agent_id: Option<AgentId>,
    pub first_name: String,
    pub last_name: String,
    /// Unique across all agents.
    pub email: String,
    pub phone_number: String,
    pub hire_date: NaiveDate,
    #[serde(flatten)]
    pub audit: Audit,
}

impl Agent {
    /// Creates an unsaved agent.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        hire_date: NaiveDate,
    ) -> Self {
        Self {
            agent_id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            hire_date,
            audit: Audit::default(),
        }
    }
}

impl_entity!(Agent, AgentId, agent_id, "Agent");
