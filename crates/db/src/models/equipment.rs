//! Equipment entity model and DTOs.

use agri_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::table::Record;

/// Operational state of a piece of equipment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    #[default]
    Available,
    InUse,
    Maintenance,
    Broken,
}

impl EquipmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::InUse => "in_use",
            Self::Maintenance => "maintenance",
            Self::Broken => "broken",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: RecordId,
    pub name: String,
    pub kind: String,
    pub status: EquipmentStatus,
    pub usage_hours: f64,
    /// Planned maintenance dates, in the order they were scheduled.
    pub maintenance_schedule: Vec<Timestamp>,
}

impl Record for Equipment {
    const TABLE: &'static str = "equipment";

    fn id(&self) -> RecordId {
        self.id
    }
}

/// DTO for creating equipment. New equipment starts with zero usage hours
/// and an empty maintenance schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipment {
    pub id: RecordId,
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub status: EquipmentStatus,
}

/// DTO for updating equipment. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub status: Option<EquipmentStatus>,
}
