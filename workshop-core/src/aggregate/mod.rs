//! The order aggregate: a closed command type and a pure transition
//! function over [`Order`].

mod commands;

pub use commands::OrderCommand;

use crate::catalog::Catalog;
use crate::models::Order;

/// Applies one command and returns the updated order.
///
/// Never fails. Task names are resolved through `catalog`; names it does
/// not know, like names not present in the order, leave the order as is.
pub fn apply(
    mut order: Order,
    catalog: &Catalog,
    command: OrderCommand,
) -> Order {
    let kind = command.kind();
    let changed = match command {
        OrderCommand::AddTask { name } => match catalog.task(&name) {
            Some(task) => order.add_task(task),
            None => {
                tracing::debug!(task = %name, "task not in catalog");
                false
            }
        },
        OrderCommand::RemoveTask { name } => order.remove_task(&name),
        OrderCommand::SetQuantity { name, raw } => order.set_quantity(&name, &raw),
        OrderCommand::SetRemarks { name, text } => order.set_remarks(&name, &text),
        OrderCommand::SetVehicleNumber { text } => {
            order.set_vehicle_number(&text);
            true
        }
        OrderCommand::AddSparePart(input) => order.add_spare_part(input),
        OrderCommand::RemoveSparePart { name } => order.remove_spare_part(&name) > 0,
        OrderCommand::RemoveSparePartAt { index } => order.remove_spare_part_at(index).is_some(),
        OrderCommand::SetSparePartQuantity { index, raw } => {
            order.set_spare_part_quantity(index, &raw)
        }
    };

    tracing::debug!(order = order.id, command = kind, changed, "applied order command");
    order
}
