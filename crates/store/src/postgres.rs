use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use model::{
    Agent, AgentId, Audit, Entity, Lease, LeaseId, MaintenanceRequest, MaintenanceRequestId, Money,
    Owner, OwnerId, ParseEnumError, Payment, PaymentId, Property, PropertyId, Tenant, TenantId,
};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgPool, Row};

use crate::{RelationStore, Repository, Result, StoreError};

/// PostgreSQL-backed store implementation.
///
/// Uniqueness, references and cascades are enforced by the schema in
/// `migrations/`.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new PostgreSQL store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    async fn select_all<E: PgRecord>(&self) -> Result<Vec<E>> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", E::TABLE, E::ID_COLUMN);
        self.fetch_records(&sql, None).await
    }

    async fn select_by_id<E: PgRecord>(&self, id: E::Id) -> Result<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);
        let records = self.fetch_records(&sql, Some(id.into())).await?;
        Ok(records.into_iter().next())
    }

    async fn find_where<E: PgRecord>(&self, column: &str, value: i64) -> Result<Vec<E>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {column} = $1 ORDER BY {}",
            E::TABLE,
            E::ID_COLUMN
        );
        self.fetch_records(&sql, Some(value)).await
    }

    async fn fetch_records<E: PgRecord>(&self, sql: &str, param: Option<i64>) -> Result<Vec<E>> {
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query(sql);
        if let Some(value) = param {
            query = query.bind(value);
        }
        let rows = query.fetch_all(&mut *conn).await?;
        let mut records = rows.iter().map(E::from_row).collect::<Result<Vec<_>>>()?;
        E::attach_relations(&mut records, &mut conn).await?;
        Ok(records)
    }

    async fn record_exists<E: PgRecord>(&self, id: E::Id) -> Result<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
            E::TABLE,
            E::ID_COLUMN
        );
        let id: i64 = id.into();
        let exists: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn save_record<E: PgRecord>(&self, record: E) -> Result<E> {
        let mut tx = self.pool.begin().await?;

        let saved = match record.id() {
            None => record.insert(&mut tx).await?,
            Some(id) => record
                .update(id, &mut tx)
                .await?
                .ok_or_else(|| StoreError::not_found(E::NAME, id))?,
        };
        let id = saved
            .id()
            .ok_or_else(|| StoreError::InvalidData(format!("{} row without id", E::NAME)))?;
        record.write_relations(id, &mut tx).await?;

        let mut saved = vec![saved];
        E::attach_relations(&mut saved, &mut tx).await?;
        tx.commit().await?;

        saved.pop().ok_or_else(|| StoreError::not_found(E::NAME, id))
    }

    async fn delete_record<E: PgRecord>(&self, id: E::Id) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE {} = $1", E::TABLE, E::ID_COLUMN);
        let id: i64 = id.into();
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        tracing::debug!(table = E::TABLE, %id, rows = result.rows_affected(), "deleted");
        Ok(())
    }

    async fn count_records<E: PgRecord>(&self) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count.max(0) as u64)
    }
}

/// Row mapping and statements for one table.
#[async_trait]
trait PgRecord: Entity {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;

    fn from_row(row: &PgRow) -> Result<Self>;

    /// Inserts the record, letting the database assign id and timestamps.
    async fn insert(&self, conn: &mut PgConnection) -> Result<Self>;

    /// Replaces the stored row; `None` when no row has the id.
    async fn update(&self, id: Self::Id, conn: &mut PgConnection) -> Result<Option<Self>>;

    /// Rewrites side-table rows owned by the record.
    async fn write_relations(&self, _id: Self::Id, _conn: &mut PgConnection) -> Result<()> {
        Ok(())
    }

    /// Loads side-table rows into freshly read records.
    async fn attach_relations(_records: &mut [Self], _conn: &mut PgConnection) -> Result<()> {
        Ok(())
    }
}

fn audit(row: &PgRow) -> Result<Audit> {
    Ok(Audit {
        created_at: Some(row.try_get("created_at")?),
        updated_at: Some(row.try_get("updated_at")?),
    })
}

fn parse_enum<T>(row: &PgRow, column: &str) -> Result<T>
where
    T: FromStr<Err = ParseEnumError>,
{
    let value: String = row.try_get(column)?;
    value
        .parse()
        .map_err(|e: ParseEnumError| StoreError::InvalidData(e.to_string()))
}

#[async_trait]
impl PgRecord for Owner {
    const TABLE: &'static str = "owners";
    const ID_COLUMN: &'static str = "owner_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(Owner {
            owner_id: Some(OwnerId::new(row.try_get("owner_id")?)),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            mailing_address: row.try_get("mailing_address")?,
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO owners (first_name, last_name, email, phone_number, mailing_address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(&self.mailing_address)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(&self, id: OwnerId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE owners
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                mailing_address = $6, updated_at = now()
            WHERE owner_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(&self.mailing_address)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl PgRecord for Property {
    const TABLE: &'static str = "properties";
    const ID_COLUMN: &'static str = "property_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(Property {
            property_id: Some(PropertyId::new(row.try_get("property_id")?)),
            owner_id: row.try_get::<Option<i64>, _>("owner_id")?.map(OwnerId::new),
            address_line1: row.try_get("address_line1")?,
            address_line2: row.try_get("address_line2")?,
            city: row.try_get("city")?,
            state_province: row.try_get("state_province")?,
            postal_code: row.try_get("postal_code")?,
            country: row.try_get("country")?,
            property_type: parse_enum(row, "property_type")?,
            status: parse_enum(row, "status")?,
            size_sqft: row.try_get("size_sqft")?,
            num_bedrooms: row.try_get("num_bedrooms")?,
            num_bathrooms: row.try_get("num_bathrooms")?,
            year_built: row.try_get("year_built")?,
            description: row.try_get("description")?,
            managing_agent_ids: Vec::new(),
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO properties (
                owner_id, address_line1, address_line2, city, state_province, postal_code,
                country, property_type, status, size_sqft, num_bedrooms, num_bathrooms,
                year_built, description
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(self.owner_id.map(i64::from))
        .bind(&self.address_line1)
        .bind(&self.address_line2)
        .bind(&self.city)
        .bind(&self.state_province)
        .bind(&self.postal_code)
        .bind(&self.country)
        .bind(self.property_type.as_str())
        .bind(self.status.as_str())
        .bind(self.size_sqft)
        .bind(self.num_bedrooms)
        .bind(self.num_bathrooms)
        .bind(self.year_built)
        .bind(&self.description)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(&self, id: PropertyId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE properties
            SET owner_id = $2, address_line1 = $3, address_line2 = $4, city = $5,
                state_province = $6, postal_code = $7, country = $8, property_type = $9,
                status = $10, size_sqft = $11, num_bedrooms = $12, num_bathrooms = $13,
                year_built = $14, description = $15, updated_at = now()
            WHERE property_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(self.owner_id.map(i64::from))
        .bind(&self.address_line1)
        .bind(&self.address_line2)
        .bind(&self.city)
        .bind(&self.state_province)
        .bind(&self.postal_code)
        .bind(&self.country)
        .bind(self.property_type.as_str())
        .bind(self.status.as_str())
        .bind(self.size_sqft)
        .bind(self.num_bedrooms)
        .bind(self.num_bathrooms)
        .bind(self.year_built)
        .bind(&self.description)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }

    async fn write_relations(&self, id: PropertyId, conn: &mut PgConnection) -> Result<()> {
        sqlx::query("DELETE FROM property_agents WHERE property_id = $1")
            .bind(id.as_i64())
            .execute(&mut *conn)
            .await?;

        let mut agent_ids: Vec<i64> = self.managing_agent_ids.iter().map(|a| a.as_i64()).collect();
        agent_ids.sort_unstable();
        agent_ids.dedup();
        if agent_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            "INSERT INTO property_agents (property_id, agent_id) SELECT $1, UNNEST($2::bigint[])",
        )
        .bind(id.as_i64())
        .bind(&agent_ids)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    async fn attach_relations(records: &mut [Self], conn: &mut PgConnection) -> Result<()> {
        let ids: Vec<i64> = records
            .iter()
            .filter_map(|p| p.property_id)
            .map(i64::from)
            .collect();
        if ids.is_empty() {
            return Ok(());
        }

        let rows = sqlx::query(
            r#"
            SELECT property_id, agent_id FROM property_agents
            WHERE property_id = ANY($1)
            ORDER BY property_id, agent_id
            "#,
        )
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await?;

        let mut links: HashMap<i64, Vec<AgentId>> = HashMap::new();
        for row in &rows {
            let property_id: i64 = row.try_get("property_id")?;
            let agent_id: i64 = row.try_get("agent_id")?;
            links
                .entry(property_id)
                .or_default()
                .push(AgentId::new(agent_id));
        }
        for property in records.iter_mut() {
            if let Some(id) = property.property_id {
                property.managing_agent_ids = links.remove(&id.as_i64()).unwrap_or_default();
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PgRecord for Tenant {
    const TABLE: &'static str = "tenants";
    const ID_COLUMN: &'static str = "tenant_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(Tenant {
            tenant_id: Some(TenantId::new(row.try_get("tenant_id")?)),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO tenants (first_name, last_name, email, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(&self, id: TenantId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE tenants
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                updated_at = now()
            WHERE tenant_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl PgRecord for Agent {
    const TABLE: &'static str = "agents";
    const ID_COLUMN: &'static str = "agent_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(Agent {
            agent_id: Some(AgentId::new(row.try_get("agent_id")?)),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            hire_date: row.try_get("hire_date")?,
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO agents (first_name, last_name, email, phone_number, hire_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(self.hire_date)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(&self, id: AgentId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE agents
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                hire_date = $6, updated_at = now()
            WHERE agent_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(self.hire_date)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl PgRecord for Lease {
    const TABLE: &'static str = "leases";
    const ID_COLUMN: &'static str = "lease_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(Lease {
            lease_id: Some(LeaseId::new(row.try_get("lease_id")?)),
            property_id: PropertyId::new(row.try_get("property_id")?),
            tenant_id: TenantId::new(row.try_get("tenant_id")?),
            start_date: row.try_get("start_date")?,
            end_date: row.try_get("end_date")?,
            monthly_rent: Money::from_cents(row.try_get("monthly_rent_cents")?),
            security_deposit: row
                .try_get::<Option<i64>, _>("security_deposit_cents")?
                .map(Money::from_cents),
            status: parse_enum(row, "status")?,
            lease_document_url: row.try_get("lease_document_url")?,
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO leases (
                property_id, tenant_id, start_date, end_date, monthly_rent_cents,
                security_deposit_cents, status, lease_document_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(self.property_id.as_i64())
        .bind(self.tenant_id.as_i64())
        .bind(self.start_date)
        .bind(self.end_date)
        .bind(self.monthly_rent.cents())
        .bind(self.security_deposit.map(|m| m.cents()))
        .bind(self.status.as_str())
        .bind(&self.lease_document_url)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(&self, id: LeaseId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE leases
            SET property_id = $2, tenant_id = $3, start_date = $4, end_date = $5,
                monthly_rent_cents = $6, security_deposit_cents = $7, status = $8,
                lease_document_url = $9, updated_at = now()
            WHERE lease_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(self.property_id.as_i64())
        .bind(self.tenant_id.as_i64())
        .bind(self.start_date)
        .bind(self.end_date)
        .bind(self.monthly_rent.cents())
        .bind(self.security_deposit.map(|m| m.cents()))
        .bind(self.status.as_str())
        .bind(&self.lease_document_url)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl PgRecord for Payment {
    const TABLE: &'static str = "payments";
    const ID_COLUMN: &'static str = "payment_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(Payment {
            payment_id: Some(PaymentId::new(row.try_get("payment_id")?)),
            lease_id: LeaseId::new(row.try_get("lease_id")?),
            payment_date: row.try_get("payment_date")?,
            amount: Money::from_cents(row.try_get("amount_cents")?),
            payment_method: row.try_get("payment_method")?,
            notes: row.try_get("notes")?,
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO payments (lease_id, payment_date, amount_cents, payment_method, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(self.lease_id.as_i64())
        .bind(self.payment_date)
        .bind(self.amount.cents())
        .bind(&self.payment_method)
        .bind(&self.notes)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(&self, id: PaymentId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE payments
            SET lease_id = $2, payment_date = $3, amount_cents = $4, payment_method = $5,
                notes = $6, updated_at = now()
            WHERE payment_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(self.lease_id.as_i64())
        .bind(self.payment_date)
        .bind(self.amount.cents())
        .bind(&self.payment_method)
        .bind(&self.notes)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }
}

#[async_trait]
impl PgRecord for MaintenanceRequest {
    const TABLE: &'static str = "maintenance_requests";
    const ID_COLUMN: &'static str = "request_id";

    fn from_row(row: &PgRow) -> Result<Self> {
        Ok(MaintenanceRequest {
            request_id: Some(MaintenanceRequestId::new(row.try_get("request_id")?)),
            property_id: PropertyId::new(row.try_get("property_id")?),
            tenant_id: row
                .try_get::<Option<i64>, _>("tenant_id")?
                .map(TenantId::new),
            reported_date: row.try_get("reported_date")?,
            description: row.try_get("description")?,
            status: parse_enum(row, "status")?,
            completed_date: row.try_get("completed_date")?,
            notes: row.try_get("notes")?,
            audit: audit(row)?,
        })
    }

    async fn insert(&self, conn: &mut PgConnection) -> Result<Self> {
        let row = sqlx::query(
            r#"
            INSERT INTO maintenance_requests (
                property_id, tenant_id, reported_date, description, status, completed_date, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(self.property_id.as_i64())
        .bind(self.tenant_id.map(i64::from))
        .bind(self.reported_date)
        .bind(&self.description)
        .bind(self.status.as_str())
        .bind(self.completed_date)
        .bind(&self.notes)
        .fetch_one(conn)
        .await?;
        Self::from_row(&row)
    }

    async fn update(
        &self,
        id: MaintenanceRequestId,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        let row = sqlx::query(
            r#"
            UPDATE maintenance_requests
            SET property_id = $2, tenant_id = $3, reported_date = $4, description = $5,
                status = $6, completed_date = $7, notes = $8, updated_at = now()
            WHERE request_id = $1
            RETURNING *
            "#,
        )
        .bind(id.as_i64())
        .bind(self.property_id.as_i64())
        .bind(self.tenant_id.map(i64::from))
        .bind(self.reported_date)
        .bind(&self.description)
        .bind(self.status.as_str())
        .bind(self.completed_date)
        .bind(&self.notes)
        .fetch_optional(conn)
        .await?;
        row.as_ref().map(Self::from_row).transpose()
    }
}

macro_rules! postgres_repository {
    ($($entity:ty),+ $(,)?) => {$(
        #[async_trait]
        impl Repository<$entity> for PostgresStore {
            async fn find_all(&self) -> Result<Vec<$entity>> {
                self.select_all::<$entity>().await
            }

            async fn find_by_id(&self, id: <$entity as Entity>::Id) -> Result<Option<$entity>> {
                self.select_by_id::<$entity>(id).await
            }

            async fn exists_by_id(&self, id: <$entity as Entity>::Id) -> Result<bool> {
                self.record_exists::<$entity>(id).await
            }

            async fn save(&self, record: $entity) -> Result<$entity> {
                self.save_record::<$entity>(record).await
            }

            async fn delete_by_id(&self, id: <$entity as Entity>::Id) -> Result<()> {
                self.delete_record::<$entity>(id).await
            }

            async fn count(&self) -> Result<u64> {
                self.count_records::<$entity>().await
            }
        }
    )+};
}

postgres_repository!(Owner, Property, Tenant, Agent, Lease, Payment, MaintenanceRequest);

#[async_trait]
impl RelationStore for PostgresStore {
    async fn properties_of_owner(&self, owner_id: OwnerId) -> Result<Vec<Property>> {
        self.find_where("owner_id", owner_id.as_i64()).await
    }

    async fn properties_of_agent(&self, agent_id: AgentId) -> Result<Vec<Property>> {
        self.fetch_records(
            r#"
            SELECT p.* FROM properties p
            JOIN property_agents pa ON pa.property_id = p.property_id
            WHERE pa.agent_id = $1
            ORDER BY p.property_id
            "#,
            Some(agent_id.as_i64()),
        )
        .await
    }

    async fn leases_of_property(&self, property_id: PropertyId) -> Result<Vec<Lease>> {
        self.find_where("property_id", property_id.as_i64()).await
    }

    async fn leases_of_tenant(&self, tenant_id: TenantId) -> Result<Vec<Lease>> {
        self.find_where("tenant_id", tenant_id.as_i64()).await
    }

    async fn payments_of_lease(&self, lease_id: LeaseId) -> Result<Vec<Payment>> {
        self.find_where("lease_id", lease_id.as_i64()).await
    }

    async fn maintenance_requests_of_property(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<MaintenanceRequest>> {
        self.find_where("property_id", property_id.as_i64()).await
    }
}
