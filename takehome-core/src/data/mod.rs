//! Reference data consumed by the calculators.
//!
//! The calculators never own tables. They borrow them through
//! [`PremiumTableRepository`], which is implemented by the compiled-in
//! [`BuiltinTables`] here and by CSV-backed tables in `takehome-data`.

pub mod builtin;
pub mod repository;

pub use builtin::{BuiltinTables, LONG_TERM_CARE_RATE, builtin_tables, health_brackets};
pub use repository::{PremiumTableRepository, RepositoryError};
