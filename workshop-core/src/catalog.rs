//! The static task catalog.
//!
//! Built once at startup and shared read-only with every editing session.
//! Lookups by task name go through an index built in [`Catalog::new`].

use std::collections::HashMap;

use rust_decimal_macros::dec;
use thiserror::Error;

use crate::models::{CatalogTask, CategoryId, TaskType, Unit};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate task name '{0}' in catalog")]
    DuplicateTask(String),
}

/// Which catalog tasks the entry view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Type(TaskType),
}

impl TaskFilter {
    pub fn matches(
        &self,
        task: &CatalogTask,
    ) -> bool {
        match self {
            Self::All => true,
            Self::Type(task_type) => task.task_type == *task_type,
        }
    }

    /// Parses `all` or a task type code.
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(Self::All)
        } else {
            TaskType::parse(s).map(Self::Type)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Type(task_type) => task_type.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    tasks: Vec<CatalogTask>,
    index: HashMap<String, usize>,
    categories: Vec<CategoryId>,
}

impl Catalog {
    /// Builds a catalog, preserving task order. Categories are ordered by
    /// first appearance.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateTask`] if two tasks share a name.
    pub fn new(tasks: Vec<CatalogTask>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(tasks.len());
        let mut categories: Vec<CategoryId> = Vec::new();

        for (position, task) in tasks.iter().enumerate() {
            if index.insert(task.name.clone(), position).is_some() {
                return Err(CatalogError::DuplicateTask(task.name.clone()));
            }
            if !categories.contains(&task.category) {
                categories.push(task.category.clone());
            }
        }

        Ok(Self {
            tasks,
            index,
            categories,
        })
    }

    /// The stock workshop catalog.
    pub fn builtin() -> Self {
        let tasks = vec![
            CatalogTask::new("Check Oil Level", TaskType::Maintenance, dec!(35), Unit::Jobs, "engine"),
            CatalogTask::new("Inspect Belts", TaskType::Inspection, dec!(22.5), Unit::Jobs, "engine"),
            CatalogTask::new("Refill Tank", TaskType::Maintenance, dec!(17.5), Unit::Jobs, "fuel"),
            CatalogTask::new("Replace Filter", TaskType::Repair, dec!(75), Unit::Jobs, "fuel"),
            CatalogTask::new("Refill Engine Oil", TaskType::Refill, dec!(5), Unit::Litres, "refill"),
            CatalogTask::new("Refill Gear Oil", TaskType::Refill, dec!(10), Unit::Litres, "refill"),
        ];
        Self::new(tasks).unwrap_or_else(|e| unreachable!("builtin catalog is valid: {e}"))
    }

    pub fn task(
        &self,
        name: &str,
    ) -> Option<&CatalogTask> {
        self.index.get(name).map(|&i| &self.tasks[i])
    }

    pub fn category_of(
        &self,
        name: &str,
    ) -> Option<&CategoryId> {
        self.task(name).map(|t| &t.category)
    }

    pub fn tasks(&self) -> &[CatalogTask] {
        &self.tasks
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn tasks_in<'a>(
        &'a self,
        category: &'a CategoryId,
    ) -> impl Iterator<Item = &'a CatalogTask> + 'a {
        self.tasks.iter().filter(move |t| &t.category == category)
    }

    /// Distinct task types in catalog order.
    pub fn task_types(&self) -> Vec<TaskType> {
        let mut types = Vec::new();
        for task in &self.tasks {
            if !types.contains(&task.task_type) {
                types.push(task.task_type);
            }
        }
        types
    }

    pub fn filtered(
        &self,
        filter: TaskFilter,
    ) -> impl Iterator<Item = &CatalogTask> + '_ {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn builtin_catalog_indexes_every_task() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 6);
        let task = catalog.task("Replace Filter").unwrap();
        assert_eq!(task.price, dec!(75));
        assert_eq!(task.category.as_str(), "fuel");
        assert!(catalog.task("Wash Car").is_none());
    }

    #[test]
    fn categories_follow_first_appearance() {
        let catalog = Catalog::builtin();

        let ids: Vec<_> = catalog.categories().iter().map(CategoryId::as_str).collect();
        assert_eq!(ids, vec!["engine", "fuel", "refill"]);
    }

    #[test]
    fn category_of_resolves_by_name() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.category_of("Refill Tank").map(CategoryId::as_str), Some("fuel"));
        assert_eq!(catalog.category_of("Unknown"), None);
    }

    #[test]
    fn tasks_in_returns_category_members() {
        let catalog = Catalog::builtin();
        let engine = CategoryId::from("engine");

        let names: Vec<_> = catalog.tasks_in(&engine).map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Check Oil Level", "Inspect Belts"]);
    }

    #[test]
    fn duplicate_task_names_are_rejected() {
        let task = CatalogTask::new("Check Oil Level", TaskType::Maintenance, dec!(35), Unit::Jobs, "engine");

        let result = Catalog::new(vec![task.clone(), task]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateTask("Check Oil Level".to_string())
        );
    }

    #[test]
    fn task_types_are_distinct_in_catalog_order() {
        let catalog = Catalog::builtin();

        assert_eq!(
            catalog.task_types(),
            vec![
                TaskType::Maintenance,
                TaskType::Inspection,
                TaskType::Repair,
                TaskType::Refill
            ]
        );
    }

    #[test]
    fn filtered_by_type_hides_other_tasks() {
        let catalog = Catalog::builtin();

        let names: Vec<_> = catalog
            .filtered(TaskFilter::Type(TaskType::Refill))
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Refill Engine Oil", "Refill Gear Oil"]);
        assert_eq!(catalog.filtered(TaskFilter::All).count(), 6);
    }

    #[test]
    fn task_filter_parse() {
        assert_eq!(TaskFilter::parse("ALL"), Some(TaskFilter::All));
        assert_eq!(TaskFilter::parse("repair"), Some(TaskFilter::Type(TaskType::Repair)));
        assert_eq!(TaskFilter::parse("paint"), None);
    }
}
