//! Cleaning stages for the raw sales table.
//!
//! Six stages run in a fixed order; later stages assume earlier
//! normalization already happened:
//!
//! 1. **columns**: standardize column names
//! 2. **category**: canonicalize the category vocabulary
//! 3. **dates**: parse `date_sold`, drop unparseable rows
//! 4. **missing**: tidy product names, coerce numerics, drop missing numerics
//! 5. **validate**: drop non-positive price/qty rows
//! 6. **dedupe**: remove exact duplicate rows
//!
//! The **stage** module holds the `CleaningStage` trait and the pipeline
//! executor; **normalization** holds the shared text/numeric/date helpers.

pub mod category;
pub mod columns;
pub mod dates;
pub mod dedupe;
pub mod missing;
pub mod normalization;
pub mod stage;
pub mod validate;

pub use category::{CategoryNormalizer, canonical_category};
pub use columns::{ColumnNormalizer, normalize_column_name};
pub use dates::DateNormalizer;
pub use dedupe::Deduplicator;
pub use missing::MissingValueHandler;
pub use stage::{CleaningPipeline, CleaningStage, StageReport, build_default_pipeline};
pub use validate::RowValidator;
