//! Persistence for the property management records.
//!
//! [`Repository`] is the uniform per-record-type contract and
//! [`RelationStore`] resolves the inverse side of relations. Two
//! implementations are provided: [`InMemoryStore`] for tests and local runs,
//! and [`PostgresStore`] backed by a connection pool.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use repository::{RelationStore, Repository, Store};
