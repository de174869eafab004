//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container and need Docker.
//! Run with:
//!
//! ```bash
//! cargo test -p store --test postgres_integration -- --ignored --test-threads=1
//! ```

use std::sync::Arc;

use chrono::NaiveDate;
use model::{
    Agent, Lease, MaintenanceRequest, Money, Owner, OwnerId, Payment, Property, PropertyType,
    Tenant,
};
use serial_test::serial;
use sqlx::PgPool;
use store::{PostgresStore, RelationStore, Repository, StoreError};
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            let temp_pool = PgPool::connect(&connection_string).await.unwrap();
            PostgresStore::new(temp_pool.clone())
                .run_migrations()
                .await
                .unwrap();
            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and cleared tables
async fn get_test_store() -> PostgresStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query(
        "TRUNCATE TABLE payments, leases, maintenance_requests, property_agents, properties, \
         agents, tenants, owners RESTART IDENTITY",
    )
    .execute(&pool)
    .await
    .unwrap();

    PostgresStore::new(pool)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn house() -> Property {
    Property::new("1 Main St", "Springfield", "IL", "62701", "USA", PropertyType::House)
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn create_and_read_back() {
    let store = get_test_store().await;

    let saved = store
        .save(Tenant::new("Jane", "Smith", "jane.smith@example.com", "555-5678"))
        .await
        .unwrap();
    assert!(saved.tenant_id.is_some());
    assert!(saved.audit.created_at.is_some());

    let found: Tenant = store
        .find_by_id(saved.tenant_id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.email, "jane.smith@example.com");
    assert_eq!(found.audit.created_at, saved.audit.created_at);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn replace_keeps_created_at() {
    let store = get_test_store().await;
    let saved = store
        .save(Owner::new("Ann", "Lee", "ann@example.com"))
        .await
        .unwrap();

    let mut changed = saved.clone();
    changed.last_name = "Leigh".to_string();
    let replaced = store.save(changed).await.unwrap();

    assert_eq!(replaced.owner_id, saved.owner_id);
    assert_eq!(replaced.last_name, "Leigh");
    assert_eq!(replaced.audit.created_at, saved.audit.created_at);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn replace_of_missing_row_is_not_found() {
    let store = get_test_store().await;
    let mut ghost = Owner::new("No", "One", "ghost@example.com");
    ghost.owner_id = Some(OwnerId::new(4242));

    let err = store.save(ghost).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id: 4242, .. }));
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn duplicate_email_reports_constraint() {
    let store = get_test_store().await;
    store
        .save(Owner::new("Ann", "Lee", "ann@example.com"))
        .await
        .unwrap();

    let err = store
        .save(Owner::new("Other", "Ann", "ann@example.com"))
        .await
        .unwrap_err();
    match err {
        StoreError::ConstraintViolation { constraint, message } => {
            assert_eq!(constraint, "owners_email_key");
            assert!(message.contains("ann@example.com"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn agent_links_are_replaced_on_save() {
    let store = get_test_store().await;
    let a = store
        .save(Agent::new("A", "One", "a@example.com", "555", date(2020, 1, 1)))
        .await
        .unwrap()
        .agent_id
        .unwrap();
    let b = store
        .save(Agent::new("B", "Two", "b@example.com", "555", date(2021, 1, 1)))
        .await
        .unwrap()
        .agent_id
        .unwrap();

    let saved = store.save(house().with_agents([b, a])).await.unwrap();
    assert_eq!(saved.managing_agent_ids, vec![a, b]);

    let mut relinked = saved.clone();
    relinked.managing_agent_ids = vec![b];
    let relinked = store.save(relinked).await.unwrap();
    assert_eq!(relinked.managing_agent_ids, vec![b]);
    assert!(store.properties_of_agent(a).await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn owner_delete_cascades() {
    let store = get_test_store().await;
    let owner = store
        .save(Owner::new("Ann", "Lee", "ann@example.com"))
        .await
        .unwrap();
    let property = store
        .save(house().with_owner(owner.owner_id.unwrap()))
        .await
        .unwrap();
    let tenant = store
        .save(Tenant::new("Jane", "Smith", "jane@example.com", "555"))
        .await
        .unwrap();
    let lease = store
        .save(Lease::new(
            property.property_id.unwrap(),
            tenant.tenant_id.unwrap(),
            date(2025, 1, 1),
            date(2025, 12, 31),
            Money::from_cents(150_050),
        ))
        .await
        .unwrap();
    assert_eq!(lease.monthly_rent, Money::from_cents(150_050));
    store
        .save(Payment::new(lease.lease_id.unwrap(), date(2025, 1, 1), Money::from_units(1500)))
        .await
        .unwrap();
    store
        .save(
            MaintenanceRequest::new(property.property_id.unwrap(), date(2025, 2, 1), "Boiler")
                .reported_by(tenant.tenant_id.unwrap()),
        )
        .await
        .unwrap();

    Repository::<Owner>::delete_by_id(&store, owner.owner_id.unwrap())
        .await
        .unwrap();

    assert_eq!(Repository::<Property>::count(&store).await.unwrap(), 0);
    assert_eq!(Repository::<Lease>::count(&store).await.unwrap(), 0);
    assert_eq!(Repository::<Payment>::count(&store).await.unwrap(), 0);
    assert_eq!(Repository::<MaintenanceRequest>::count(&store).await.unwrap(), 0);
    assert_eq!(Repository::<Tenant>::count(&store).await.unwrap(), 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires Docker"]
async fn tenant_delete_detaches_maintenance_requests() {
    let store = get_test_store().await;
    let property = store.save(house()).await.unwrap();
    let tenant = store
        .save(Tenant::new("Jane", "Smith", "jane@example.com", "555"))
        .await
        .unwrap();
    let request = store
        .save(
            MaintenanceRequest::new(property.property_id.unwrap(), date(2025, 2, 1), "Boiler")
                .reported_by(tenant.tenant_id.unwrap()),
        )
        .await
        .unwrap();

    Repository::<Tenant>::delete_by_id(&store, tenant.tenant_id.unwrap())
        .await
        .unwrap();

    let request: MaintenanceRequest = store
        .find_by_id(request.request_id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(request.tenant_id, None);
}
