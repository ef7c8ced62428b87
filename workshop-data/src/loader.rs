//! CSV loader for the task catalog.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column     | Type    | Notes                                              |
//! |------------|---------|----------------------------------------------------|
//! | `category` | string  | Category id, e.g. `engine`                         |
//! | `name`     | string  | Unique task name                                   |
//! | `type`     | string  | One of `maintenance`, `inspection`, `repair`, `refill` |
//! | `price`    | decimal | Price per unit, `0` to `1000000000`                |
//! | `unit`     | string  | `jobs` or `litres`                                 |
//!
//! ```csv
//! category,name,type,price,unit
//! engine,Check Oil Level,maintenance,35.00,jobs
//! refill,Refill Gear Oil,refill,10.00,litres
//! ```

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use workshop_core::{Catalog, CatalogError, CatalogTask, TaskType, Unit, input::MAX_UNIT_PRICE};

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognised task type '{value}' on row {row}")]
    InvalidTaskType { value: String, row: usize },

    #[error("unrecognised unit '{value}' on row {row}")]
    InvalidUnit { value: String, row: usize },

    #[error("negative price {price} for '{name}' on row {row}")]
    NegativePrice {
        name: String,
        price: Decimal,
        row: usize,
    },

    #[error("price {price} for '{name}' on row {row} exceeds {max}", max = MAX_UNIT_PRICE)]
    PriceTooLarge {
        name: String,
        price: Decimal,
        row: usize,
    },

    #[error("row {0} has a blank task name")]
    BlankName(usize),

    #[error("catalog is empty")]
    Empty,

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<csv::Error> for CatalogLoadError {
    fn from(err: csv::Error) -> Self {
        CatalogLoadError::CsvParse(err.to_string())
    }
}

/// A single row of the catalog CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogRecord {
    pub category: String,
    pub name: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub price: Decimal,
    pub unit: String,
}

impl CatalogRecord {
    /// Converts the row into a task; `row` is 1-based for messages.
    fn into_task(
        self,
        row: usize,
    ) -> Result<CatalogTask, CatalogLoadError> {
        if self.name.trim().is_empty() {
            return Err(CatalogLoadError::BlankName(row));
        }
        let task_type =
            TaskType::parse(&self.task_type).ok_or_else(|| CatalogLoadError::InvalidTaskType {
                value: self.task_type.clone(),
                row,
            })?;
        let unit = Unit::parse(&self.unit).ok_or_else(|| CatalogLoadError::InvalidUnit {
            value: self.unit.clone(),
            row,
        })?;
        if self.price.is_sign_negative() {
            return Err(CatalogLoadError::NegativePrice {
                name: self.name,
                price: self.price,
                row,
            });
        }
        if self.price > MAX_UNIT_PRICE {
            return Err(CatalogLoadError::PriceTooLarge {
                name: self.name,
                price: self.price,
                row,
            });
        }

        Ok(CatalogTask::new(
            self.name.trim(),
            task_type,
            self.price,
            unit,
            self.category.trim(),
        ))
    }
}

/// Reads a [`Catalog`] from CSV. The catalog is loaded once at startup;
/// any bad row rejects the whole file.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse raw records. The reader can be a file or a byte slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, CatalogLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: CatalogRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Convert parsed records into a catalog, preserving row order.
    pub fn build(records: Vec<CatalogRecord>) -> Result<Catalog, CatalogLoadError> {
        if records.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        let tasks = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| record.into_task(idx + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::new(tasks)?)
    }

    pub fn load<R: Read>(reader: R) -> Result<Catalog, CatalogLoadError> {
        Self::build(Self::parse(reader)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Catalog, CatalogLoadError> {
        let file = std::fs::File::open(path).map_err(|source| CatalogLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::load(file)?;
        tracing::info!(path = %path.display(), tasks = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}
