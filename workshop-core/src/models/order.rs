use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{clamp_price, parse_quantity};
use crate::models::{CatalogTask, SparePart, SparePartInput};

/// Opaque order identifier: the creation time in epoch milliseconds.
pub type OrderId = i64;

/// A catalog task the operator added to an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTask {
    pub task: CatalogTask,
    pub quantity: u32,
    pub remarks: String,
}

impl SelectedTask {
    pub fn new(task: CatalogTask) -> Self {
        Self {
            task,
            quantity: crate::input::DEFAULT_QUANTITY,
            remarks: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.task.name
    }

    /// Unrounded `price × quantity`, saturating at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.task.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Vehicle number for display. Only an empty number reads "Not specified";
/// whatever the operator typed is shown as is.
pub fn vehicle_label(vehicle_number: &str) -> &str {
    if vehicle_number.is_empty() {
        "Not specified"
    } else {
        vehicle_number
    }
}

/// One vehicle-service record.
///
/// Every mutator is lenient: unknown names and out-of-range indices are
/// no-ops, malformed numbers fall back to defaults. The returned `bool`
/// (or count) reports whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub vehicle_number: String,
    pub selected_tasks: Vec<SelectedTask>,
    pub spare_parts: Vec<SparePart>,
    pub created_date: DateTime<Utc>,
}

impl Order {
    /// Creates an empty order stamped with `created_date`; the id is
    /// derived from the same instant.
    pub fn new(created_date: DateTime<Utc>) -> Self {
        Self::with_id(created_date.timestamp_millis(), created_date)
    }

    pub fn with_id(
        id: OrderId,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            vehicle_number: String::new(),
            selected_tasks: Vec::new(),
            spare_parts: Vec::new(),
            created_date,
        }
    }

    pub fn selected_task(
        &self,
        name: &str,
    ) -> Option<&SelectedTask> {
        self.selected_tasks.iter().find(|t| t.name() == name)
    }

    pub fn is_selected(
        &self,
        name: &str,
    ) -> bool {
        self.selected_task(name).is_some()
    }

    fn selected_task_mut(
        &mut self,
        name: &str,
    ) -> Option<&mut SelectedTask> {
        self.selected_tasks.iter_mut().find(|t| t.name() == name)
    }

    /// Appends `task` with quantity 1 and empty remarks unless a task with
    /// the same name is already selected.
    pub fn add_task(
        &mut self,
        task: &CatalogTask,
    ) -> bool {
        if self.is_selected(&task.name) {
            return false;
        }
        self.selected_tasks.push(SelectedTask::new(task.clone()));
        true
    }

    pub fn remove_task(
        &mut self,
        name: &str,
    ) -> bool {
        let before = self.selected_tasks.len();
        self.selected_tasks.retain(|t| t.name() != name);
        self.selected_tasks.len() != before
    }

    pub fn set_quantity(
        &mut self,
        name: &str,
        raw: &str,
    ) -> bool {
        match self.selected_task_mut(name) {
            Some(task) => {
                task.quantity = parse_quantity(raw);
                true
            }
            None => false,
        }
    }

    /// Replaces remarks verbatim.
    pub fn set_remarks(
        &mut self,
        name: &str,
        text: &str,
    ) -> bool {
        match self.selected_task_mut(name) {
            Some(task) => {
                task.remarks = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_vehicle_number(
        &mut self,
        text: &str,
    ) {
        self.vehicle_number = text.to_string();
    }

    pub fn vehicle_label(&self) -> &str {
        vehicle_label(&self.vehicle_number)
    }

    /// Appends a spare part. Blank names are rejected; the name is stored
    /// trimmed.
    pub fn add_spare_part(
        &mut self,
        input: SparePartInput,
    ) -> bool {
        let name = input.name.trim();
        if name.is_empty() {
            tracing::debug!("ignoring spare part with blank name");
            return false;
        }
        let unit_price = clamp_price(input.unit_price.unwrap_or(SparePart::DEFAULT_UNIT_PRICE));
        self.spare_parts.push(SparePart {
            name: name.to_string(),
            quantity: parse_quantity(&input.quantity),
            unit_price,
        });
        true
    }

    /// Removes every spare part called `name` and returns how many went.
    pub fn remove_spare_part(
        &mut self,
        name: &str,
    ) -> usize {
        let before = self.spare_parts.len();
        self.spare_parts.retain(|p| p.name != name);
        before - self.spare_parts.len()
    }

    pub fn remove_spare_part_at(
        &mut self,
        index: usize,
    ) -> Option<SparePart> {
        (index < self.spare_parts.len()).then(|| self.spare_parts.remove(index))
    }

    pub fn set_spare_part_quantity(
        &mut self,
        index: usize,
        raw: &str,
    ) -> bool {
        match self.spare_parts.get_mut(index) {
            Some(part) => {
                part.quantity = parse_quantity(raw);
                true
            }
            None => false,
        }
    }
}
