use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use model::{Lease, Money, Owner, Property, PropertyType, Tenant};
use store::{InMemoryStore, Repository};

fn house() -> Property {
    Property::new("1 Main St", "Springfield", "IL", "62701", "USA", PropertyType::House)
}

async fn seed_owners(store: &InMemoryStore, count: usize) {
    for i in 0..count {
        store
            .save(Owner::new("Owner", format!("No{i}"), format!("owner{i}@example.com")))
            .await
            .unwrap();
    }
}

fn bench_save_owner(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("store/save_owner", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryStore::new();
                store
                    .save(Owner::new("Ann", "Lee", "ann@example.com"))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_find_all_owners_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryStore::new();
    rt.block_on(seed_owners(&store, 1000));

    c.bench_function("store/find_all_owners_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let owners: Vec<Owner> = store.find_all().await.unwrap();
                assert_eq!(owners.len(), 1000);
            });
        });
    });
}

fn bench_unique_email_check_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryStore::new();
    rt.block_on(seed_owners(&store, 1000));

    c.bench_function("store/rejected_duplicate_email_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let result = store
                    .save(Owner::new("Dup", "Owner", "owner500@example.com"))
                    .await;
                assert!(result.is_err());
            });
        });
    });
}

fn bench_cascade_delete_owner(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();

    c.bench_function("store/cascade_delete_owner_10_properties", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = InMemoryStore::new();
                let owner = store
                    .save(Owner::new("Ann", "Lee", "ann@example.com"))
                    .await
                    .unwrap();
                let tenant = store
                    .save(Tenant::new("Jane", "Smith", "jane@example.com", "555"))
                    .await
                    .unwrap();
                for _ in 0..10 {
                    let property = store
                        .save(house().with_owner(owner.owner_id.unwrap()))
                        .await
                        .unwrap();
                    store
                        .save(Lease::new(
                            property.property_id.unwrap(),
                            tenant.tenant_id.unwrap(),
                            start,
                            end,
                            Money::from_units(1200),
                        ))
                        .await
                        .unwrap();
                }
                Repository::<Owner>::delete_by_id(&store, owner.owner_id.unwrap())
                    .await
                    .unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_save_owner,
    bench_find_all_owners_1000,
    bench_unique_email_check_1000,
    bench_cascade_delete_owner
);
criterion_main!(benches);
