pub mod aggregate;
pub mod calculations;
pub mod catalog;
pub mod input;
pub mod models;
pub mod session;
pub mod store;

pub use aggregate::{OrderCommand, apply};
pub use catalog::{Catalog, CatalogError, TaskFilter};
pub use models::*;
pub use session::{ServiceSession, SessionCommand, SessionSummary, View};
pub use store::{InMemoryOrderRepository, OrderRepository, OrderSummary, RepositoryError};
