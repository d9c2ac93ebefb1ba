//! Crop entity model and DTOs.

use agri_core::types::RecordId;
use serde::{Deserialize, Serialize};

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    pub id: RecordId,
    pub name: String,
    /// Crop category as typed into the form (e.g. "Cereal").
    pub kind: String,
    pub variety: String,
    /// Planted area in hectares.
    pub area: f64,
    #[serde(rename = "yield")]
    pub yield_amount: f64,
}

impl Record for Crop {
    const TABLE: &'static str = "crops";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// DTO for creating a crop.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCrop {
    pub id: RecordId,
    pub name: String,
    pub kind: String,
    pub variety: String,
    pub area: f64,
    pub yield_amount: f64,
}

/// DTO for updating a crop. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCrop {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub variety: Option<String>,
    pub area: Option<f64>,
    pub yield_amount: Option<f64>,
}
