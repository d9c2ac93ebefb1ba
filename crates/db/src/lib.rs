//! In-memory storage for the farm-management application.
//!
//! The process-lifetime "database" is a [`Database`] holding one [`Table`]
//! per entity. Handlers never touch tables directly: each entity has a
//! zero-sized repository in [`repositories`] whose async methods take
//! `&DbPool` as the first argument.

use std::sync::Arc;
use std::time::Duration;

use agri_core::types::RecordId;

pub mod models;
pub mod repositories;
pub mod table;

use models::animal::Animal;
use models::crop::Crop;
use models::equipment::Equipment;
use models::finance::FinanceRecord;
use models::user::User;
use table::Table;

/// Shared handle to the in-memory database. Cheap to clone.
pub type DbPool = Arc<Database>;

/// How long [`health_check`] waits for each table lock.
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(1);

/// Errors raised by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A record with the same id already exists in the table.
    #[error("Duplicate id {id} in table {table}")]
    Duplicate { table: &'static str, id: RecordId },

    /// A secondary unique constraint rejected the insert.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: &'static str },

    /// A table could not be reached within the health-check window.
    #[error("Table {0} is unavailable")]
    Unavailable(&'static str),
}

/// Every table the application uses.
#[derive(Default)]
pub struct Database {
    pub(crate) crops: Table<Crop>,
    pub(crate) livestock: Table<Animal>,
    pub(crate) equipment: Table<Equipment>,
    pub(crate) finance: Table<FinanceRecord>,
    pub(crate) users: Table<User>,
}

/// Create an empty database.
pub fn create_pool() -> DbPool {
    Arc::new(Database::default())
}

/// Verify that every table lock can be acquired.
pub async fn health_check(pool: &DbPool) -> Result<(), DbError> {
    ping_table(&pool.crops).await?;
    ping_table(&pool.livestock).await?;
    ping_table(&pool.equipment).await?;
    ping_table(&pool.finance).await?;
    ping_table(&pool.users).await?;
    Ok(())
}

async fn ping_table<T: table::Record>(table: &Table<T>) -> Result<(), DbError> {
    tokio::time::timeout(HEALTH_CHECK_TIMEOUT, table.len())
        .await
        .map(|_| ())
        .map_err(|_| DbError::Unavailable(T::TABLE))
}
