//! Demo data for a fresh store.

use chrono::NaiveDate;
use domain::{CrudService, DomainError, Result, Validate};
use model::{
    Agent, Entity, Lease, LeaseStatus, MaintenanceRequest, MaintenanceStatus, Money, Owner,
    Payment, Property, PropertyStatus, PropertyType, Tenant,
};
use store::{Repository, Store};

/// Number of records inserted per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub owners: usize,
    pub agents: usize,
    pub tenants: usize,
    pub properties: usize,
    pub leases: usize,
    pub payments: usize,
    pub maintenance_requests: usize,
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::invalid(format!("invalid date {year}-{month}-{day}")))
}

async fn insert<S, E>(store: &S, record: E) -> Result<E::Id>
where
    S: Repository<E> + Clone,
    E: Entity + Validate,
{
    let created = CrudService::<S, E>::new(store.clone()).create(record).await?;
    created
        .id()
        .ok_or_else(|| DomainError::invalid(format!("{} was stored without an id", E::NAME)))
}

/// Inserts a small, fixed data set through the regular services.
///
/// Does nothing and returns `None` when the store already holds owners.
pub async fn seed_demo_data<S: Store>(store: &S) -> Result<Option<SeedSummary>> {
    let existing = Repository::<Owner>::count(store).await?;
    if existing > 0 {
        tracing::info!(owners = existing, "store already populated, skipping demo data");
        return Ok(None);
    }

    let mut summary = SeedSummary::default();

    let alice = insert(
        store,
        Owner::new("Alice", "Johnson", "alice.johnson@example.com")
            .with_phone_number("555-0101")
            .with_mailing_address("12 Harbor Rd, Portland, OR 97201"),
    )
    .await?;
    let robert = insert(
        store,
        Owner::new("Robert", "Chen", "robert.chen@example.com").with_phone_number("555-0102"),
    )
    .await?;
    summary.owners = 2;

    let maria = insert(
        store,
        Agent::new(
            "Maria",
            "Garcia",
            "maria.garcia@example.com",
            "555-0201",
            date(2019, 3, 15)?,
        ),
    )
    .await?;
    let david = insert(
        store,
        Agent::new(
            "David",
            "Miller",
            "david.miller@example.com",
            "555-0202",
            date(2021, 9, 1)?,
        ),
    )
    .await?;
    summary.agents = 2;

    let emma = insert(
        store,
        Tenant::new("Emma", "Wilson", "emma.wilson@example.com", "555-0301"),
    )
    .await?;
    let james = insert(
        store,
        Tenant::new("James", "Brown", "james.brown@example.com", "555-0302"),
    )
    .await?;
    summary.tenants = 2;

    let mut loft = Property::new(
        "100 Pearl St",
        "Portland",
        "OR",
        "97209",
        "USA",
        PropertyType::Apartment,
    )
    .with_owner(alice)
    .with_agents([maria])
    .with_rooms(2, 1);
    loft.address_line2 = Some("Unit 4B".to_string());
    loft.status = PropertyStatus::Rented;
    loft.size_sqft = Some(950.0);
    loft.year_built = Some(2008);
    let loft = insert(store, loft).await?;

    let mut house = Property::new(
        "48 Elm St",
        "Springfield",
        "IL",
        "62704",
        "USA",
        PropertyType::House,
    )
    .with_owner(robert)
    .with_agents([maria, david])
    .with_rooms(4, 3);
    house.status = PropertyStatus::Rented;
    house.size_sqft = Some(2400.0);
    house.year_built = Some(1962);
    house.description = Some("Detached house with garden and garage".to_string());
    let house = insert(store, house).await?;

    let mut lot = Property::new(
        "Route 9, Parcel 17",
        "Springfield",
        "IL",
        "62711",
        "USA",
        PropertyType::Land,
    )
    .with_owner(robert);
    lot.description = Some("Vacant lot zoned residential".to_string());
    insert(store, lot).await?;
    summary.properties = 3;

    let mut loft_lease = Lease::new(
        loft,
        emma,
        date(2025, 1, 1)?,
        date(2025, 12, 31)?,
        Money::from_units(1850),
    );
    loft_lease.security_deposit = Some(Money::from_units(1850));
    loft_lease.status = LeaseStatus::Active;
    let loft_lease = insert(store, loft_lease).await?;

    let mut house_lease = Lease::new(
        house,
        james,
        date(2024, 6, 1)?,
        date(2026, 5, 31)?,
        Money::from_cents(272_550),
    );
    house_lease.security_deposit = Some(Money::from_units(3000));
    house_lease.status = LeaseStatus::Active;
    let house_lease = insert(store, house_lease).await?;
    summary.leases = 2;

    for month in 1..=3 {
        insert(
            store,
            Payment::new(loft_lease, date(2025, month, 1)?, Money::from_units(1850))
                .with_method("BANK_TRANSFER"),
        )
        .await?;
        summary.payments += 1;
    }
    insert(
        store,
        Payment::new(house_lease, date(2025, 1, 3)?, Money::from_cents(272_550))
            .with_method("CHECK"),
    )
    .await?;
    summary.payments += 1;

    insert(
        store,
        MaintenanceRequest::new(loft, date(2025, 2, 10)?, "Kitchen faucet leaking")
            .reported_by(emma),
    )
    .await?;
    let mut heating = MaintenanceRequest::new(house, date(2025, 1, 20)?, "No heat upstairs")
        .reported_by(james);
    heating.status = MaintenanceStatus::Completed;
    heating.completed_date = Some(date(2025, 1, 22)?);
    heating.notes = Some("Replaced thermostat".to_string());
    insert(store, heating).await?;
    summary.maintenance_requests = 2;

    tracing::info!(?summary, "demo data inserted");
    Ok(Some(summary))
}
