//! Repository for the `livestock` table.

use agri_core::types::RecordId;

use crate::models::animal::{Animal, CreateAnimal, UpdateAnimal};
use crate::repositories::contains_ci;
use crate::{DbError, DbPool};

/// Provides CRUD operations for livestock.
pub struct LivestockRepo;

impl LivestockRepo {
    /// Insert a new livestock entry, returning the stored row.
    pub async fn create(pool: &DbPool, input: &CreateAnimal) -> Result<Animal, DbError> {
        let animal = Animal {
            id: input.id,
            kind: input.kind.clone(),
            name: input.name.clone(),
            breed: input.breed.clone(),
            age: input.age,
            health_status: input.health_status.clone(),
            head_count: input.head_count,
        };
        pool.livestock.insert(animal).await
    }

    /// List all livestock in insertion order.
    pub async fn list(pool: &DbPool) -> Vec<Animal> {
        pool.livestock.all().await
    }

    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Option<Animal> {
        pool.livestock.get(id).await
    }

    /// Entries whose kind contains `kind`, ignoring case.
    pub async fn find_by_kind(pool: &DbPool, kind: &str) -> Vec<Animal> {
        pool.livestock.filter(|a| contains_ci(&a.kind, kind)).await
    }

    /// Entries whose name contains `name`, ignoring case.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Vec<Animal> {
        pool.livestock.filter(|a| contains_ci(&a.name, name)).await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(pool: &DbPool, id: RecordId, input: &UpdateAnimal) -> Option<Animal> {
        pool.livestock
            .modify(id, |animal| {
                if let Some(kind) = &input.kind {
                    animal.kind = kind.clone();
                }
                if let Some(name) = &input.name {
                    animal.name = name.clone();
                }
                if input.breed.is_some() {
                    animal.breed = input.breed.clone();
                }
                if input.age.is_some() {
                    animal.age = input.age;
                }
                if input.health_status.is_some() {
                    animal.health_status = input.health_status.clone();
                }
                if let Some(head_count) = input.head_count {
                    animal.head_count = head_count;
                }
            })
            .await
    }

    /// Delete an entry by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: RecordId) -> bool {
        pool.livestock.remove(id).await
    }
}
