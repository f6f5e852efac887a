//! CSV ingestion and output for the sales cleaning pipeline.
//!
//! File I/O happens exactly twice per run: the raw table is read once at the
//! start and the cleaned table is written once at the end. Cell text is kept
//! verbatim on read; the cleaning stages own all trimming and parsing.

pub mod csv_table;

pub use csv_table::{read_sales_table, write_sales_table};
