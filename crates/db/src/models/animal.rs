//! Livestock entity model and DTOs.

use agri_core::types::RecordId;
use serde::{Deserialize, Serialize};

use crate::table::Record;

/// One livestock entry: a named animal or a herd of the same kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: RecordId,
    /// Species or category (e.g. "Vache").
    pub kind: String,
    pub name: String,
    pub breed: Option<String>,
    /// Age in years.
    pub age: Option<u32>,
    pub health_status: Option<String>,
    pub head_count: u32,
}

impl Record for Animal {
    const TABLE: &'static str = "livestock";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// DTO for creating a livestock entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimal {
    pub id: RecordId,
    pub kind: String,
    pub name: String,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub health_status: Option<String>,
    pub head_count: u32,
}

/// DTO for updating a livestock entry. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAnimal {
    pub kind: Option<String>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<u32>,
    pub health_status: Option<String>,
    pub head_count: Option<u32>,
}
