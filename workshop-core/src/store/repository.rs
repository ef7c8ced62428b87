use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::OrderTotals;
use crate::models::{Order, OrderId, vehicle_label};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("order {0} not found")]
    NotFound(OrderId),
}

/// Whether [`OrderRepository::save`] replaced an existing order or
/// appended a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Inserted,
    Replaced,
}

/// One row of the service list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub vehicle_number: String,
    pub tasks_total: Decimal,
    pub spare_parts_total: Decimal,
    pub grand_total: Decimal,
    pub created_date: DateTime<Utc>,
}

impl OrderSummary {
    pub fn of(order: &Order) -> Self {
        let totals = OrderTotals::of(order);
        Self {
            id: order.id,
            vehicle_number: order.vehicle_number.clone(),
            tasks_total: totals.tasks,
            spare_parts_total: totals.spare_parts,
            grand_total: totals.grand,
            created_date: order.created_date,
        }
    }

    pub fn vehicle_label(&self) -> &str {
        vehicle_label(&self.vehicle_number)
    }
}

/// The list of orders owned by the application.
pub trait OrderRepository {
    /// Creates an empty order stamped `now`, stores it, and returns a copy.
    fn create_order(
        &mut self,
        now: DateTime<Utc>,
    ) -> Order;

    fn get(
        &self,
        id: OrderId,
    ) -> Result<Order, RepositoryError>;

    /// Upserts by id: replaces a stored order with the same id, otherwise
    /// appends.
    fn save(
        &mut self,
        order: Order,
    ) -> SaveOutcome;

    /// All orders in insertion order.
    fn list(&self) -> Vec<&Order>;

    fn summaries(&self) -> Vec<OrderSummary> {
        self.list().into_iter().map(OrderSummary::of).collect()
    }
}
