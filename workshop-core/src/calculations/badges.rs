//! Per-category counts of selected tasks.
//!
//! Badges are always recomputed from the order's selected tasks; they are
//! never maintained as independent counters.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{CategoryId, Order};

/// Count of selected tasks per catalog category, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBadges {
    counts: Vec<(CategoryId, usize)>,
}

impl CategoryBadges {
    /// Count for `category`; 0 for categories the catalog does not know.
    pub fn count(
        &self,
        category: &str,
    ) -> usize {
        self.counts
            .iter()
            .find(|(id, _)| id.as_str() == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryId, usize)> {
        self.counts.iter().map(|(id, n)| (id, *n))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Recomputes badges from scratch for every category in `catalog`.
pub fn category_badge_counts(
    catalog: &Catalog,
    order: &Order,
) -> CategoryBadges {
    let counts = catalog
        .categories()
        .iter()
        .map(|category| {
            let n = order
                .selected_tasks
                .iter()
                .filter(|t| &t.task.category == category)
                .count();
            (category.clone(), n)
        })
        .collect();

    CategoryBadges { counts }
}
