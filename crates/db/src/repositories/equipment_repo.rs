//! Repository for the `equipment` table.

use agri_core::types::{RecordId, Timestamp};

use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use crate::repositories::contains_ci;
use crate::{DbError, DbPool};

/// Provides CRUD operations and usage tracking for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert new equipment, returning the stored row.
    ///
    /// Fails with [`DbError::Duplicate`] if the id is already taken.
    pub async fn create(pool: &DbPool, input: &CreateEquipment) -> Result<Equipment, DbError> {
        let equipment = Equipment {
            id: input.id,
            name: input.name.clone(),
            kind: input.kind.clone(),
            status: input.status,
            usage_hours: 0.0,
            maintenance_schedule: Vec::new(),
        };
        pool.equipment.insert(equipment).await
    }

    /// List all equipment in insertion order.
    pub async fn list(pool: &DbPool) -> Vec<Equipment> {
        pool.equipment.all().await
    }

    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Option<Equipment> {
        pool.equipment.get(id).await
    }

    /// Equipment whose name contains `name`, ignoring case.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Vec<Equipment> {
        pool.equipment.filter(|e| contains_ci(&e.name, name)).await
    }

    /// Equipment whose kind equals `kind`, ignoring case.
    pub async fn find_by_kind(pool: &DbPool, kind: &str) -> Vec<Equipment> {
        let kind = kind.to_lowercase();
        pool.equipment
            .filter(|e| e.kind.to_lowercase() == kind)
            .await
    }

    /// Update equipment. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: RecordId,
        input: &UpdateEquipment,
    ) -> Option<Equipment> {
        pool.equipment
            .modify(id, |equipment| {
                if let Some(name) = &input.name {
                    equipment.name = name.clone();
                }
                if let Some(kind) = &input.kind {
                    equipment.kind = kind.clone();
                }
                if let Some(status) = input.status {
                    equipment.status = status;
                }
            })
            .await
    }

    /// Add `hours` of usage. Non-positive (or NaN) values are ignored.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn track_usage(pool: &DbPool, id: RecordId, hours: f64) -> Option<Equipment> {
        pool.equipment
            .modify(id, |equipment| {
                if hours > 0.0 {
                    equipment.usage_hours += hours;
                }
            })
            .await
    }

    /// Append a maintenance date to the schedule.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn schedule_maintenance(
        pool: &DbPool,
        id: RecordId,
        at: Timestamp,
    ) -> Option<Equipment> {
        pool.equipment
            .modify(id, |equipment| equipment.maintenance_schedule.push(at))
            .await
    }

    /// Delete equipment by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: RecordId) -> bool {
        pool.equipment.remove(id).await
    }
}
