use async_trait::async_trait;
use model::{
    Agent, AgentId, Entity, Lease, LeaseId, MaintenanceRequest, Owner, OwnerId, Payment, Property,
    PropertyId, Tenant, TenantId,
};

use crate::Result;

/// Uniform persistence contract for one record type.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Returns every stored record ordered by ascending id.
    async fn find_all(&self) -> Result<Vec<E>>;

    /// Returns the record with the given id, if any.
    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>>;

    /// Returns whether a record with the given id exists.
    async fn exists_by_id(&self, id: E::Id) -> Result<bool>;

    /// Inserts the record when it has no id, replaces the stored record
    /// otherwise.
    ///
    /// On insert a fresh id is assigned and both audit timestamps are set.
    /// On replace the stored creation time is kept and the modification time
    /// is refreshed. Replacing an id that is not stored returns
    /// [`StoreError::NotFound`](crate::StoreError::NotFound).
    async fn save(&self, record: E) -> Result<E>;

    /// Deletes the record and everything that cascades from it.
    ///
    /// Deleting an id that is not stored is a no-op.
    async fn delete_by_id(&self, id: E::Id) -> Result<()>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<u64>;
}

/// Inverse sides of the record relations.
#[async_trait]
pub trait RelationStore: Send + Sync {
    async fn properties_of_owner(&self, owner_id: OwnerId) -> Result<Vec<Property>>;

    /// Properties whose managing agents include the given agent.
    async fn properties_of_agent(&self, agent_id: AgentId) -> Result<Vec<Property>>;

    async fn leases_of_property(&self, property_id: PropertyId) -> Result<Vec<Lease>>;

    async fn leases_of_tenant(&self, tenant_id: TenantId) -> Result<Vec<Lease>>;

    async fn payments_of_lease(&self, lease_id: LeaseId) -> Result<Vec<Payment>>;

    async fn maintenance_requests_of_property(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<MaintenanceRequest>>;
}

/// A complete backing store for every record type.
pub trait Store:
    Repository<Owner>
    + Repository<Property>
    + Repository<Tenant>
    + Repository<Agent>
    + Repository<Lease>
    + Repository<Payment>
    + Repository<MaintenanceRequest>
    + RelationStore
    + Clone
    + 'static
{
}

impl<T> Store for T where
    T: Repository<Owner>
        + Repository<Property>
        + Repository<Tenant>
        + Repository<Agent>
        + Repository<Lease>
        + Repository<Payment>
        + Repository<MaintenanceRequest>
        + RelationStore
        + Clone
        + 'static
{
}
