//! Data model for the sales cleaning pipeline.
//!
//! - **table**: the in-memory `Table` of named columns over ordered rows,
//!   and the typed `Value` cell with its explicit `Missing` marker
//! - **error**: the shared `CleanError` type and `Result` alias

pub mod error;
pub mod table;

pub use error::{CleanError, Result};
pub use table::{Table, Value};
