//! Normalization helpers shared by the cleaning stages.
//!
//! - **text**: whitespace collapsing, quote stripping, title-casing
//! - **numeric**: best-effort string-to-number coercion
//! - **datetime**: permissive free-form date parsing

pub mod datetime;
pub mod numeric;
pub mod text;

pub use datetime::parse_date;
pub use numeric::{parse_f64, parse_i64};
pub use text::{collapse_whitespace, strip_quotes, title_case};
