use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of work a catalog task represents. Drives the task-type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Maintenance,
    Inspection,
    Repair,
    Refill,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Inspection => "inspection",
            Self::Repair => "repair",
            Self::Refill => "refill",
        }
    }

    /// Case-insensitive parse of the lowercase code.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maintenance" => Some(Self::Maintenance),
            "inspection" => Some(Self::Inspection),
            "repair" => Some(Self::Repair),
            "refill" => Some(Self::Refill),
            _ => None,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit a task quantity is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Jobs,
    Litres,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Litres => "litres",
        }
    }

    /// Capitalised label used as a column/field heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Jobs => "Jobs",
            Self::Litres => "Litres",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jobs" => Some(Self::Jobs),
            "litres" => Some(Self::Litres),
            _ => None,
        }
    }
}

/// Identifier of a catalog category (e.g. `engine`, `fuel`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the static task catalog. `name` is the unique key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTask {
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub price: Decimal,
    pub unit: Unit,
    pub category: CategoryId,
}

impl CatalogTask {
    pub fn new(
        name: impl Into<String>,
        task_type: TaskType,
        price: Decimal,
        unit: Unit,
        category: impl Into<CategoryId>,
    ) -> Self {
        Self {
            name: name.into(),
            task_type,
            price,
            unit,
            category: category.into(),
        }
    }
}
