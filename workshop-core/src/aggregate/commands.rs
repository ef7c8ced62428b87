use serde::{Deserialize, Serialize};

use crate::models::SparePartInput;

/// Every edit an operator can make to an open order.
///
/// Numeric fields carry the raw text from the form; coercion happens when
/// the command is applied.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
pub enum OrderCommand {
    /// Select a catalog task by name
    AddTask { name: String },

    /// Deselect a task
    RemoveTask { name: String },

    /// Change a selected task's quantity
    SetQuantity { name: String, raw: String },

    /// Replace a selected task's remarks
    SetRemarks { name: String, text: String },

    SetVehicleNumber { text: String },

    AddSparePart(SparePartInput),

    /// Remove every spare part with this name
    RemoveSparePart { name: String },

    /// Remove the spare part at this position
    RemoveSparePartAt { index: usize },

    SetSparePartQuantity { index: usize, raw: String },
}

impl OrderCommand {
    pub fn add_task(name: impl Into<String>) -> Self {
        Self::AddTask { name: name.into() }
    }

    pub fn remove_task(name: impl Into<String>) -> Self {
        Self::RemoveTask { name: name.into() }
    }

    pub fn set_quantity(
        name: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        Self::SetQuantity {
            name: name.into(),
            raw: raw.into(),
        }
    }

    pub fn set_remarks(
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::SetRemarks {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Short name used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddTask { .. } => "add_task",
            Self::RemoveTask { .. } => "remove_task",
            Self::SetQuantity { .. } => "set_quantity",
            Self::SetRemarks { .. } => "set_remarks",
            Self::SetVehicleNumber { .. } => "set_vehicle_number",
            Self::AddSparePart(_) => "add_spare_part",
            Self::RemoveSparePart { .. } => "remove_spare_part",
            Self::RemoveSparePartAt { .. } => "remove_spare_part_at",
            Self::SetSparePartQuantity { .. } => "set_spare_part_quantity",
        }
    }
}
