//! Derived values of an order: money totals and category badges.

pub mod badges;
pub mod common;
pub mod totals;

pub use badges::{CategoryBadges, category_badge_counts};
pub use totals::{OrderTotals, calculate_grand_total, calculate_spare_parts_total, calculate_tasks_total};
