mod order;
mod spare_part;
mod task;

pub use order::{Order, OrderId, SelectedTask, vehicle_label};
pub use spare_part::{SparePart, SparePartInput};
pub use task::{CatalogTask, CategoryId, TaskType, Unit};
