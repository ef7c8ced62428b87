use chrono::{DateTime, Utc};

use super::repository::{OrderRepository, RepositoryError, SaveOutcome};
use crate::models::{Order, OrderId};

/// Process-memory order list. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Vec<Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// First free id at or after `candidate`.
    fn unique_id(
        &self,
        candidate: OrderId,
    ) -> OrderId {
        let mut id = candidate;
        while self.orders.iter().any(|o| o.id == id) {
            id += 1;
        }
        id
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn create_order(
        &mut self,
        now: DateTime<Utc>,
    ) -> Order {
        let id = self.unique_id(now.timestamp_millis());
        let order = Order::with_id(id, now);
        self.orders.push(order.clone());
        tracing::info!(order = id, "created order");
        order
    }

    fn get(
        &self,
        id: OrderId,
    ) -> Result<Order, RepositoryError> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn save(
        &mut self,
        order: Order,
    ) -> SaveOutcome {
        let id = order.id;
        let outcome = match self.orders.iter_mut().find(|o| o.id == id) {
            Some(existing) => {
                *existing = order;
                SaveOutcome::Replaced
            }
            None => {
                self.orders.push(order);
                SaveOutcome::Inserted
            }
        };
        tracing::info!(order = id, ?outcome, "saved order");
        outcome
    }

    fn list(&self) -> Vec<&Order> {
        self.orders.iter().collect()
    }
}
