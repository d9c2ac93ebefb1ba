//! Finance record model and DTOs.

use agri_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::table::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub id: RecordId,
    /// Free text; `income` and `expense` are recognised by the summary.
    pub kind: String,
    pub amount: f64,
    pub description: Option<String>,
    pub recorded_at: Timestamp,
}

impl Record for FinanceRecord {
    const TABLE: &'static str = "finance";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// DTO for creating a finance record. `recorded_at` is stamped on insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFinanceRecord {
    pub id: RecordId,
    pub kind: String,
    pub amount: f64,
    pub description: Option<String>,
}

/// DTO for updating a finance record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFinanceRecord {
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
}
