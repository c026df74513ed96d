//! Command-line front end for the take-home pay calculator.
//!
//! The binary lives in `main.rs`; the pieces it is built from are exposed
//! here so they can be tested and reused.

pub mod input_loader;
pub mod logging;
pub mod report;
pub mod state;
pub mod utils;
