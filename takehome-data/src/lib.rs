//! CSV-backed reference tables for the take-home pay calculators.
//!
//! Premium bracket tables and National Health Insurance parameters can be
//! replaced at runtime from CSV files. Anything not supplied falls back to
//! the built-in 2025 tables in `takehome-core`.

mod loader;
mod tables;

pub use loader::{
    NhiParamsLoader, NhiParamsRecord, NhiParamsTable, PremiumBracketLoader, PremiumBracketRecord,
    PremiumTables, TableLoadError, validate_brackets,
};
pub use tables::{CsvTables, TablesConfig};
