//! Data layer for the salary CSV files.
//!
//! Handles the record/region models and loading the generated tables from
//! the local data directory.

mod models;
mod storage;

pub use models::{Dataset, ParseRegionError, Region, SalaryRecord};
pub use storage::{Storage, DISTRICT_DETAIL_STATE};
