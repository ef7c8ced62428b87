pub mod memory;
pub mod repository;
pub mod storage;

pub use memory::InMemoryOrderRepository;
pub use repository::{OrderRepository, OrderSummary, RepositoryError, SaveOutcome};
pub use storage::StorageError;
