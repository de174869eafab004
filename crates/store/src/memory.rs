use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use model::{
    Agent, AgentId, Entity, Lease, LeaseId, MaintenanceRequest, MaintenanceRequestId, Owner,
    OwnerId, Payment, PaymentId, Property, PropertyId, Tenant, TenantId,
};
use tokio::sync::RwLock;

use crate::{RelationStore, Repository, Result, StoreError};

/// In-memory store implementation for testing and local runs.
///
/// Enforces the same uniqueness, reference and cascade rules as the
/// PostgreSQL schema, and reports violations under the same constraint
/// names.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every record and resets the id sequences.
    pub async fn clear(&self) {
        *self.tables.write().await = Tables::default();
    }
}

#[derive(Debug, Default)]
struct Tables {
    owners: BTreeMap<OwnerId, Owner>,
    properties: BTreeMap<PropertyId, Property>,
    tenants: BTreeMap<TenantId, Tenant>,
    agents: BTreeMap<AgentId, Agent>,
    leases: BTreeMap<LeaseId, Lease>,
    payments: BTreeMap<PaymentId, Payment>,
    maintenance_requests: BTreeMap<MaintenanceRequestId, MaintenanceRequest>,
    property_agents: BTreeSet<(PropertyId, AgentId)>,
    sequences: HashMap<&'static str, i64>,
}

/// Per-record-type access to [`Tables`] plus the rules the schema would
/// enforce for that table.
trait MemoryTable: Entity {
    fn table(tables: &Tables) -> &BTreeMap<Self::Id, Self>;

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<Self::Id, Self>;

    /// Checks unique and foreign-key constraints before a write.
    fn check_constraints(&self, _tables: &Tables) -> Result<()> {
        Ok(())
    }

    /// Removes or detaches the rows that depend on `id`.
    fn cascade_delete(_id: Self::Id, _tables: &mut Tables) {}

    /// Moves relation data out of the record into side tables.
    fn store_relations(&mut self, _id: Self::Id, _tables: &mut Tables) {}

    /// Fills relation data back into a record read from its table.
    fn load_relations(&mut self, _tables: &Tables) {}
}

impl Tables {
    fn next_id<E: MemoryTable>(&mut self) -> E::Id {
        let next = self.sequences.entry(E::NAME).or_insert(0);
        *next += 1;
        E::Id::from(*next)
    }

    fn load<E: MemoryTable>(&self, record: &E) -> E {
        let mut record = record.clone();
        record.load_relations(self);
        record
    }

    fn find_all<E: MemoryTable>(&self) -> Vec<E> {
        E::table(self).values().map(|r| self.load(r)).collect()
    }

    fn find<E: MemoryTable>(&self, id: E::Id) -> Option<E> {
        E::table(self).get(&id).map(|r| self.load(r))
    }

    fn save<E: MemoryTable>(&mut self, mut record: E, now: DateTime<Utc>) -> Result<E> {
        let stored_created_at = match record.id() {
            Some(id) => Some(
                E::table(self)
                    .get(&id)
                    .map(|stored| stored.audit().created_at)
                    .ok_or_else(|| StoreError::not_found(E::NAME, id))?,
            ),
            None => None,
        };

        record.check_constraints(self)?;

        let id = match (record.id(), stored_created_at) {
            (Some(id), Some(created_at)) => {
                record.audit_mut().stamp_updated(created_at, now);
                id
            }
            _ => {
                let id = self.next_id::<E>();
                record.set_id(id);
                record.audit_mut().stamp_created(now);
                id
            }
        };

        record.store_relations(id, self);
        E::table_mut(self).insert(id, record);
        self.find::<E>(id).ok_or_else(|| StoreError::not_found(E::NAME, id))
    }

    fn delete<E: MemoryTable>(&mut self, id: E::Id) {
        if E::table(self).contains_key(&id) {
            E::cascade_delete(id, self);
            E::table_mut(self).remove(&id);
        }
    }

    fn email_taken<E: MemoryTable>(
        &self,
        record: &E,
        email: &str,
        email_of: impl Fn(&E) -> &str,
    ) -> bool {
        E::table(self)
            .iter()
            .any(|(id, other)| Some(*id) != record.id() && email_of(other) == email)
    }
}

fn duplicate_email(constraint: &str, email: &str) -> StoreError {
    StoreError::constraint(constraint, format!("Key (email)=({email}) already exists."))
}

fn missing_reference(
    constraint: &str,
    column: &str,
    id: impl std::fmt::Display,
    table: &str,
) -> StoreError {
    StoreError::constraint(
        constraint,
        format!("Key ({column})=({id}) is not present in table \"{table}\"."),
    )
}

impl MemoryTable for Owner {
    fn table(tables: &Tables) -> &BTreeMap<OwnerId, Owner> {
        &tables.owners
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<OwnerId, Owner> {
        &mut tables.owners
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if tables.email_taken(self, &self.email, |o| o.email.as_str()) {
            return Err(duplicate_email("owners_email_key", &self.email));
        }
        Ok(())
    }

    fn cascade_delete(id: OwnerId, tables: &mut Tables) {
        let owned: Vec<PropertyId> = tables
            .properties
            .iter()
            .filter(|(_, p)| p.owner_id == Some(id))
            .map(|(pid, _)| *pid)
            .collect();
        for property_id in owned {
            tables.delete::<Property>(property_id);
        }
    }
}

impl MemoryTable for Property {
    fn table(tables: &Tables) -> &BTreeMap<PropertyId, Property> {
        &tables.properties
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<PropertyId, Property> {
        &mut tables.properties
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if let Some(owner_id) = self.owner_id
            && !tables.owners.contains_key(&owner_id)
        {
            return Err(missing_reference(
                "properties_owner_id_fkey",
                "owner_id",
                owner_id,
                "owners",
            ));
        }
        if let Some(agent_id) = self
            .managing_agent_ids
            .iter()
            .find(|a| !tables.agents.contains_key(*a))
        {
            return Err(missing_reference(
                "property_agents_agent_id_fkey",
                "agent_id",
                agent_id,
                "agents",
            ));
        }
        Ok(())
    }

    fn cascade_delete(id: PropertyId, tables: &mut Tables) {
        let leases: Vec<LeaseId> = tables
            .leases
            .iter()
            .filter(|(_, l)| l.property_id == id)
            .map(|(lid, _)| *lid)
            .collect();
        for lease_id in leases {
            tables.delete::<Lease>(lease_id);
        }
        tables.maintenance_requests.retain(|_, m| m.property_id != id);
        tables.property_agents.retain(|(p, _)| *p != id);
    }

    fn store_relations(&mut self, id: PropertyId, tables: &mut Tables) {
        tables.property_agents.retain(|(p, _)| *p != id);
        for agent_id in self.managing_agent_ids.drain(..) {
            tables.property_agents.insert((id, agent_id));
        }
    }

    fn load_relations(&mut self, tables: &Tables) {
        self.managing_agent_ids = match self.property_id {
            Some(id) => tables
                .property_agents
                .range((id, AgentId::new(i64::MIN))..=(id, AgentId::new(i64::MAX)))
                .map(|(_, a)| *a)
                .collect(),
            None => Vec::new(),
        };
    }
}

impl MemoryTable for Tenant {
    fn table(tables: &Tables) -> &BTreeMap<TenantId, Tenant> {
        &tables.tenants
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<TenantId, Tenant> {
        &mut tables.tenants
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if tables.email_taken(self, &self.email, |t| t.email.as_str()) {
            return Err(duplicate_email("tenants_email_key", &self.email));
        }
        Ok(())
    }

    fn cascade_delete(id: TenantId, tables: &mut Tables) {
        let leases: Vec<LeaseId> = tables
            .leases
            .iter()
            .filter(|(_, l)| l.tenant_id == id)
            .map(|(lid, _)| *lid)
            .collect();
        for lease_id in leases {
            tables.delete::<Lease>(lease_id);
        }
        for request in tables.maintenance_requests.values_mut() {
            if request.tenant_id == Some(id) {
                request.tenant_id = None;
            }
        }
    }
}

impl MemoryTable for Agent {
    fn table(tables: &Tables) -> &BTreeMap<AgentId, Agent> {
        &tables.agents
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<AgentId, Agent> {
        &mut tables.agents
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if tables.email_taken(self, &self.email, |a| a.email.as_str()) {
            return Err(duplicate_email("agents_email_key", &self.email));
        }
        Ok(())
    }

    fn cascade_delete(id: AgentId, tables: &mut Tables) {
        tables.property_agents.retain(|(_, a)| *a != id);
    }
}

impl MemoryTable for Lease {
    fn table(tables: &Tables) -> &BTreeMap<LeaseId, Lease> {
        &tables.leases
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<LeaseId, Lease> {
        &mut tables.leases
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if !tables.properties.contains_key(&self.property_id) {
            return Err(missing_reference(
                "leases_property_id_fkey",
                "property_id",
                self.property_id,
                "properties",
            ));
        }
        if !tables.tenants.contains_key(&self.tenant_id) {
            return Err(missing_reference(
                "leases_tenant_id_fkey",
                "tenant_id",
                self.tenant_id,
                "tenants",
            ));
        }
        Ok(())
    }

    fn cascade_delete(id: LeaseId, tables: &mut Tables) {
        tables.payments.retain(|_, p| p.lease_id != id);
    }
}

impl MemoryTable for Payment {
    fn table(tables: &Tables) -> &BTreeMap<PaymentId, Payment> {
        &tables.payments
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<PaymentId, Payment> {
        &mut tables.payments
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if !tables.leases.contains_key(&self.lease_id) {
            return Err(missing_reference(
                "payments_lease_id_fkey",
                "lease_id",
                self.lease_id,
                "leases",
            ));
        }
        Ok(())
    }
}

impl MemoryTable for MaintenanceRequest {
    fn table(tables: &Tables) -> &BTreeMap<MaintenanceRequestId, MaintenanceRequest> {
        &tables.maintenance_requests
    }

    fn table_mut(tables: &mut Tables) -> &mut BTreeMap<MaintenanceRequestId, MaintenanceRequest> {
        &mut tables.maintenance_requests
    }

    fn check_constraints(&self, tables: &Tables) -> Result<()> {
        if !tables.properties.contains_key(&self.property_id) {
            return Err(missing_reference(
                "maintenance_requests_property_id_fkey",
                "property_id",
                self.property_id,
                "properties",
            ));
        }
        if let Some(tenant_id) = self.tenant_id
            && !tables.tenants.contains_key(&tenant_id)
        {
            return Err(missing_reference(
                "maintenance_requests_tenant_id_fkey",
                "tenant_id",
                tenant_id,
                "tenants",
            ));
        }
        Ok(())
    }
}

macro_rules! memory_repository {
    ($($entity:ty),+ $(,)?) => {$(
        #[async_trait]
        impl Repository<$entity> for InMemoryStore {
            async fn find_all(&self) -> Result<Vec<$entity>> {
                Ok(self.tables.read().await.find_all())
            }

            async fn find_by_id(&self, id: <$entity as Entity>::Id) -> Result<Option<$entity>> {
                Ok(self.tables.read().await.find(id))
            }

            async fn exists_by_id(&self, id: <$entity as Entity>::Id) -> Result<bool> {
                Ok(<$entity as MemoryTable>::table(&*self.tables.read().await).contains_key(&id))
            }

            async fn save(&self, record: $entity) -> Result<$entity> {
                self.tables.write().await.save(record, Utc::now())
            }

            async fn delete_by_id(&self, id: <$entity as Entity>::Id) -> Result<()> {
                self.tables.write().await.delete::<$entity>(id);
                Ok(())
            }

            async fn count(&self) -> Result<u64> {
                Ok(<$entity as MemoryTable>::table(&*self.tables.read().await).len() as u64)
            }
        }
    )+};
}

memory_repository!(Owner, Property, Tenant, Agent, Lease, Payment, MaintenanceRequest);

#[async_trait]
impl RelationStore for InMemoryStore {
    async fn properties_of_owner(&self, owner_id: OwnerId) -> Result<Vec<Property>> {
        let tables = self.tables.read().await;
        Ok(tables
            .properties
            .values()
            .filter(|p| p.owner_id == Some(owner_id))
            .map(|p| tables.load(p))
            .collect())
    }

    async fn properties_of_agent(&self, agent_id: AgentId) -> Result<Vec<Property>> {
        let tables = self.tables.read().await;
        Ok(tables
            .property_agents
            .iter()
            .filter(|(_, a)| *a == agent_id)
            .filter_map(|(p, _)| tables.find::<Property>(*p))
            .collect())
    }

    async fn leases_of_property(&self, property_id: PropertyId) -> Result<Vec<Lease>> {
        let tables = self.tables.read().await;
        Ok(tables
            .leases
            .values()
            .filter(|l| l.property_id == property_id)
            .cloned()
            .collect())
    }

    async fn leases_of_tenant(&self, tenant_id: TenantId) -> Result<Vec<Lease>> {
        let tables = self.tables.read().await;
        Ok(tables
            .leases
            .values()
            .filter(|l| l.tenant_id == tenant_id)
            .cloned()
            .collect())
    }

    async fn payments_of_lease(&self, lease_id: LeaseId) -> Result<Vec<Payment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .payments
            .values()
            .filter(|p| p.lease_id == lease_id)
            .cloned()
            .collect())
    }

    async fn maintenance_requests_of_property(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<MaintenanceRequest>> {
        let tables = self.tables.read().await;
        Ok(tables
            .maintenance_requests
            .values()
            .filter(|m| m.property_id == property_id)
            .cloned()
            .collect())
    }
}
