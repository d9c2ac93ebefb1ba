//! Repository for the `crops` table.

use agri_core::types::RecordId;

use crate::models::crop::{CreateCrop, Crop, UpdateCrop};
use crate::repositories::contains_ci;
use crate::{DbError, DbPool};

/// Provides CRUD operations for crops.
pub struct CropRepo;

impl CropRepo {
    /// Insert a new crop, returning the stored row.
    pub async fn create(pool: &DbPool, input: &CreateCrop) -> Result<Crop, DbError> {
        let crop = Crop {
            id: input.id,
            name: input.name.clone(),
            kind: input.kind.clone(),
            variety: input.variety.clone(),
            area: input.area,
            yield_amount: input.yield_amount,
        };
        pool.crops.insert(crop).await
    }

    /// List all crops in insertion order.
    pub async fn list(pool: &DbPool) -> Vec<Crop> {
        pool.crops.all().await
    }

    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Option<Crop> {
        pool.crops.get(id).await
    }

    /// Crops whose name contains `name`, ignoring case.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Vec<Crop> {
        pool.crops.filter(|c| contains_ci(&c.name, name)).await
    }

    /// Crops whose variety contains `variety`, ignoring case.
    pub async fn find_by_variety(pool: &DbPool, variety: &str) -> Vec<Crop> {
        pool.crops.filter(|c| contains_ci(&c.variety, variety)).await
    }

    /// Update a crop. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &DbPool, id: RecordId, input: &UpdateCrop) -> Option<Crop> {
        pool.crops
            .modify(id, |crop| {
                if let Some(name) = &input.name {
                    crop.name = name.clone();
                }
                if let Some(kind) = &input.kind {
                    crop.kind = kind.clone();
                }
                if let Some(variety) = &input.variety {
                    crop.variety = variety.clone();
                }
                if let Some(area) = input.area {
                    crop.area = area;
                }
                if let Some(yield_amount) = input.yield_amount {
                    crop.yield_amount = yield_amount;
                }
            })
            .await
    }

    /// Delete a crop by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: RecordId) -> bool {
        pool.crops.remove(id).await
    }
}
