//! Repository for the `users` table.

use agri_core::types::RecordId;
use chrono::Utc;

use crate::models::user::{CreateUser, User};
use crate::{DbError, DbPool};

/// Unique constraint enforced on `users.email`.
pub const UQ_USERS_EMAIL: &str = "uq_users_email";

/// Provides insert and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a fresh id, returning the created row.
    ///
    /// Fails with [`DbError::UniqueViolation`] when the email (exact match)
    /// is already registered.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, DbError> {
        let user = User {
            id: RecordId::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        pool.users
            .insert_checked(user, |users| {
                if users.iter().any(|u| u.email == input.email) {
                    return Err(DbError::UniqueViolation {
                        constraint: UQ_USERS_EMAIL,
                    });
                }
                Ok(())
            })
            .await
    }

    pub async fn find_by_id(pool: &DbPool, id: RecordId) -> Option<User> {
        pool.users.get(id).await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Option<User> {
        pool.users.find(|u| u.email == email).await
    }

    /// List all users in registration order.
    pub async fn list(pool: &DbPool) -> Vec<User> {
        pool.users.all().await
    }
}
