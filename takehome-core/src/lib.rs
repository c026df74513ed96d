pub mod calculations;
pub mod data;
pub mod models;

pub use calculations::{TakeHomeCalculator, TakeHomeError, calculate_taxes};
pub use data::{BuiltinTables, PremiumTableRepository, RepositoryError, builtin_tables};
pub use models::*;
