//! JSON representation of orders.

use thiserror::Error;

use crate::models::Order;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid order JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn to_json(order: &Order) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(order)?)
}

pub fn from_json(json: &str) -> Result<Order, StorageError> {
    Ok(serde_json::from_str(json)?)
}
