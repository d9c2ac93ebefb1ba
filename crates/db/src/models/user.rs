//! User entity model and DTOs.

use agri_core::types::{RecordId, Timestamp};
use serde::Deserialize;

use crate::table::Record;

/// Full user row.
///
/// Contains the password hash -- NEVER serialize this to responses.
#[derive(Debug, Clone)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

impl Record for User {
    const TABLE: &'static str = "users";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// DTO for creating a new user. The id and creation time are assigned on insert.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
