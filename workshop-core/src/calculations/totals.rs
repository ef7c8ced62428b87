//! Order totals.
//!
//! Each total is the exact decimal sum of `price × quantity` rounded once
//! to cents; the grand total adds the two rounded totals and rounds again.
//! Sums saturate at `Decimal::MAX` rather than overflow.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{format_money, round_half_up};
use crate::models::{Order, SelectedTask, SparePart};

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Sum of `price × quantity` over the selected tasks.
pub fn calculate_tasks_total(order: &Order) -> Decimal {
    round_half_up(saturating_sum(order.selected_tasks.iter().map(SelectedTask::subtotal)))
}

/// Sum of `unit_price × quantity` over the spare parts.
pub fn calculate_spare_parts_total(order: &Order) -> Decimal {
    round_half_up(saturating_sum(order.spare_parts.iter().map(SparePart::subtotal)))
}

pub fn calculate_grand_total(order: &Order) -> Decimal {
    round_half_up(calculate_tasks_total(order).saturating_add(calculate_spare_parts_total(order)))
}

/// All three totals of one order, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub tasks: Decimal,
    pub spare_parts: Decimal,
    pub grand: Decimal,
}

impl OrderTotals {
    pub fn of(order: &Order) -> Self {
        let tasks = calculate_tasks_total(order);
        let spare_parts = calculate_spare_parts_total(order);
        Self {
            tasks,
            spare_parts,
            grand: round_half_up(tasks.saturating_add(spare_parts)),
        }
    }
}

impl fmt::Display for OrderTotals {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Workmanship:  ${}", format_money(self.tasks))?;
        writeln!(f, "Spare parts:  ${}", format_money(self.spare_parts))?;
        write!(f, "Total:        ${}", format_money(self.grand))
    }
}
