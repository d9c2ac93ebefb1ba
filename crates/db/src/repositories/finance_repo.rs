//! Repository for the `finance` table.

use agri_core::finance::{summarize, FinanceSummary};
use agri_core::types::RecordId;
use chrono::Utc;

use crate::models::finance::{CreateFinanceRecord, FinanceRecord, UpdateFinanceRecord};
use crate::repositories::contains_ci;
use crate::{DbError, DbPool};

/// Provides CRUD operations and the summary for finance records.
pub struct FinanceRepo;

impl FinanceRepo {
    /// Insert a new record stamped with the current time.
    pub async fn create(
        pool: &DbPool,
        input: &CreateFinanceRecord,
    ) -> Result<FinanceRecord, DbError> {
        let record = FinanceRecord {
            id: input.id,
            kind: input.kind.clone(),
            amount: input.amount,
            description: input.description.clone(),
            recorded_at: Utc::now(),
        };
        pool.finance.insert(record).await
    }

    /// List all records in insertion order.
    pub async fn list(pool: &DbPool) -> Vec<FinanceRecord> {
        pool.finance.all().await
    }

    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Option<FinanceRecord> {
        pool.finance.get(id).await
    }

    /// Records whose kind contains `kind`, ignoring case.
    pub async fn find_by_kind(pool: &DbPool, kind: &str) -> Vec<FinanceRecord> {
        pool.finance.filter(|r| contains_ci(&r.kind, kind)).await
    }

    /// Update a record. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: RecordId,
        input: &UpdateFinanceRecord,
    ) -> Option<FinanceRecord> {
        pool.finance
            .modify(id, |record| {
                if let Some(kind) = &input.kind {
                    record.kind = kind.clone();
                }
                if let Some(amount) = input.amount {
                    record.amount = amount;
                }
                if input.description.is_some() {
                    record.description = input.description.clone();
                }
            })
            .await
    }

    /// Delete a record by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: RecordId) -> bool {
        pool.finance.remove(id).await
    }

    /// Totals over every record currently stored.
    pub async fn summary(pool: &DbPool) -> FinanceSummary {
        let records = pool.finance.all().await;
        summarize(
            records.iter().map(|r| (r.kind.as_str(), r.amount)),
            Utc::now(),
        )
    }
}
