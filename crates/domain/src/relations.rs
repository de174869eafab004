//! Relationship queries resolving the inverse side of each relation.
//!
//! Each query fails with `NotFound` when the parent record is missing rather
//! than returning an empty list.

use model::{
    Agent, AgentId, Lease, LeaseId, MaintenanceRequest, Owner, OwnerId, Payment, Property,
    PropertyId, Tenant, TenantId,
};
use store::{RelationStore, Repository};

use crate::error::Result;
use crate::service::CrudService;

impl<S> CrudService<S, Owner>
where
    S: Repository<Owner> + RelationStore,
{
    /// Properties owned by the owner.
    #[tracing::instrument(skip(self))]
    pub async fn properties(&self, id: OwnerId) -> Result<Vec<Property>> {
        self.ensure_exists(id).await?;
        Ok(self.store().properties_of_owner(id).await?)
    }
}

impl<S> CrudService<S, Agent>
where
    S: Repository<Agent> + RelationStore,
{
    /// Properties the agent manages.
    #[tracing::instrument(skip(self))]
    pub async fn properties(&self, id: AgentId) -> Result<Vec<Property>> {
        self.ensure_exists(id).await?;
        Ok(self.store().properties_of_agent(id).await?)
    }
}

impl<S> CrudService<S, Tenant>
where
    S: Repository<Tenant> + RelationStore,
{
    #[tracing::instrument(skip(self))]
    pub async fn leases(&self, id: TenantId) -> Result<Vec<Lease>> {
        self.ensure_exists(id).await?;
        Ok(self.store().leases_of_tenant(id).await?)
    }
}

impl<S> CrudService<S, Property>
where
    S: Repository<Property> + RelationStore,
{
    #[tracing::instrument(skip(self))]
    pub async fn leases(&self, id: PropertyId) -> Result<Vec<Lease>> {
        self.ensure_exists(id).await?;
        Ok(self.store().leases_of_property(id).await?)
    }

    #[tracing::instrument(skip(self))]
    pub async fn maintenance_requests(&self, id: PropertyId) -> Result<Vec<MaintenanceRequest>> {
        self.ensure_exists(id).await?;
        Ok(self.store().maintenance_requests_of_property(id).await?)
    }
}

impl<S> CrudService<S, Lease>
where
    S: Repository<Lease> + RelationStore,
{
    #[tracing::instrument(skip(self))]
    pub async fn payments(&self, id: LeaseId) -> Result<Vec<Payment>> {
        self.ensure_exists(id).await?;
        Ok(self.store().payments_of_lease(id).await?)
    }
}
