//! CRUD service shared by every record type.

use std::marker::PhantomData;

use model::{Agent, Entity, Lease, MaintenanceRequest, Owner, Payment, Property, Tenant};
use store::Repository;

use crate::error::{DomainError, Result};
use crate::validation::Validate;

/// Service for managing one record type.
///
/// Existence checks, id forcing and validation happen here; uniqueness,
/// references and cascades are left to the store.
pub struct CrudService<S, E> {
    store: S,
    _entity: PhantomData<fn() -> E>,
}

pub type OwnerService<S> = CrudService<S, Owner>;
pub type PropertyService<S> = CrudService<S, Property>;
pub type TenantService<S> = CrudService<S, Tenant>;
pub type AgentService<S> = CrudService<S, Agent>;
pub type LeaseService<S> = CrudService<S, Lease>;
pub type PaymentService<S> = CrudService<S, Payment>;
pub type MaintenanceRequestService<S> = CrudService<S, MaintenanceRequest>;

impl<S: Clone, E> Clone for CrudService<S, E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<S, E> CrudService<S, E>
where
    S: Repository<E>,
    E: Entity + Validate,
{
    /// Creates a new service over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every record, ordered by id.
    #[tracing::instrument(skip(self), fields(entity = E::NAME))]
    pub async fn list(&self) -> Result<Vec<E>> {
        Ok(self.store.find_all().await?)
    }

    /// Returns the record with the given id.
    #[tracing::instrument(skip(self), fields(entity = E::NAME))]
    pub async fn get(&self, id: E::Id) -> Result<E> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(E::NAME, id))
    }

    /// Stores a new record.
    ///
    /// Any client-supplied id or timestamps are discarded; the returned record
    /// carries the generated ones.
    #[tracing::instrument(skip(self, payload), fields(entity = E::NAME))]
    pub async fn create(&self, mut payload: E) -> Result<E> {
        payload.clear_id();
        payload.audit_mut().clear();
        payload.validate()?;

        let created = self.store.save(payload).await?;
        metrics::counter!("records_created_total", "entity" => E::NAME).increment(1);
        tracing::debug!(id = ?created.id(), "record created");
        Ok(created)
    }

    /// Replaces the record with the given id by `payload`.
    ///
    /// The path id wins over any id carried in the payload. This is a full
    /// replacement; fields missing from the payload are not merged.
    #[tracing::instrument(skip(self, payload), fields(entity = E::NAME))]
    pub async fn update(&self, id: E::Id, mut payload: E) -> Result<E> {
        self.ensure_exists(id).await?;

        payload.set_id(id);
        payload.audit_mut().clear();
        payload.validate()?;

        let updated = self.store.save(payload).await?;
        metrics::counter!("records_updated_total", "entity" => E::NAME).increment(1);
        Ok(updated)
    }

    /// Deletes the record with the given id and everything it owns.
    #[tracing::instrument(skip(self), fields(entity = E::NAME))]
    pub async fn delete(&self, id: E::Id) -> Result<()> {
        self.ensure_exists(id).await?;

        self.store.delete_by_id(id).await?;
        metrics::counter!("records_deleted_total", "entity" => E::NAME).increment(1);
        Ok(())
    }

    /// Returns the number of stored records.
    pub async fn count(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }

    pub(crate) async fn ensure_exists(&self, id: E::Id) -> Result<()> {
        if !self.store.exists_by_id(id).await? {
            return Err(DomainError::not_found(E::NAME, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use model::{Audit, Money, OwnerId, PropertyId, PropertyType, TenantId};
    use store::{InMemoryStore, StoreError};

    use super::*;

    fn owners() -> OwnerService<InMemoryStore> {
        CrudService::new(InMemoryStore::new())
    }

    #[tokio::test]
    async fn create_ignores_client_id_and_timestamps() {
        let service = owners();
        let stale = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let mut payload = Owner::new("Ann", "Lee", "ann@example.com");
        payload.owner_id = Some(OwnerId::new(500));
        payload.audit = Audit {
            created_at: Some(stale),
            updated_at: None,
        };

        let created = service.create(payload).await.unwrap();

        assert_eq!(created.owner_id, Some(OwnerId::new(1)));
        assert_ne!(created.audit.created_at, Some(stale));
        assert!(created.audit.updated_at.is_some());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let err = owners().get(OwnerId::new(99999)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Owner", id: 99999 }));
    }

    #[tokio::test]
    async fn update_forces_path_id() {
        let service = owners();
        let first = service
            .create(Owner::new("Ann", "Lee", "ann@example.com"))
            .await
            .unwrap();
        let second = service
            .create(Owner::new("Bob", "Ray", "bob@example.com"))
            .await
            .unwrap();

        let mut payload = Owner::new("Annie", "Lee", "ann@example.com");
        payload.owner_id = second.owner_id;
        let updated = service.update(first.owner_id.unwrap(), payload).await.unwrap();

        assert_eq!(updated.owner_id, first.owner_id);
        assert_eq!(updated.audit.created_at, first.audit.created_at);
        let untouched = service.get(second.owner_id.unwrap()).await.unwrap();
        assert_eq!(untouched.first_name, "Bob");
    }

    #[tokio::test]
    async fn update_missing_is_not_found_and_writes_nothing() {
        let service = owners();
        let err = service
            .update(OwnerId::new(7), Owner::new("Ann", "Lee", "ann@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_writing() {
        let service = owners();
        let err = service
            .create(Owner::new("", "Lee", "ann@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidArgument(_)));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn duplicate_email_surfaces_store_constraint() {
        let service = owners();
        service
            .create(Owner::new("Ann", "Lee", "ann@example.com"))
            .await
            .unwrap();
        let err = service
            .create(Owner::new("Other", "Person", "ann@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Store(StoreError::ConstraintViolation { .. })
        ));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let err = owners().delete(OwnerId::new(3)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn lease_dates_are_checked_on_create() {
        let leases: LeaseService<_> = CrudService::new(InMemoryStore::new());
        let lease = Lease::new(
            PropertyId::new(1),
            TenantId::new(1),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            Money::from_units(900),
        );

        let err = leases.create(lease).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn services_share_one_store() {
        let store = InMemoryStore::new();
        let owners: OwnerService<_> = CrudService::new(store.clone());
        let properties: PropertyService<_> = CrudService::new(store);

        let owner = owners
            .create(Owner::new("Ann", "Lee", "ann@example.com"))
            .await
            .unwrap();
        let property = properties
            .create(
                Property::new("1 Main St", "Springfield", "IL", "62701", "USA", PropertyType::Land)
                    .with_owner(owner.owner_id.unwrap()),
            )
            .await
            .unwrap();

        owners.delete(owner.owner_id.unwrap()).await.unwrap();
        let err = properties.get(property.property_id.unwrap()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
