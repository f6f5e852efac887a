use sales_model::{Result, Table, Value};

use crate::normalization::text::{collapse_whitespace, strip_quotes};
use crate::stage::CleaningStage;

/// Substring checks in priority order; first match wins.
const CANONICAL: &[(&str, &str)] = &[
    ("office", "office"),
    ("electronic", "electronics"),
    ("kitchen", "kitchen"),
    ("fitness", "fitness"),
];

/// Merges near-duplicate category spellings into a fixed canonical
/// vocabulary. Tables without a `category` column pass through unchanged.
pub struct CategoryNormalizer;

/// Clean one raw category value and map it onto the canonical vocabulary.
///
/// Non-matching values keep their cleaned lowercase form.
pub fn canonical_category(raw: &str) -> String {
    let cleaned = collapse_whitespace(strip_quotes(raw)).to_lowercase();
    for (needle, canonical) in CANONICAL {
        if cleaned.contains(needle) {
            return (*canonical).to_string();
        }
    }
    cleaned
}

impl CleaningStage for CategoryNormalizer {
    fn apply(&self, table: &Table) -> Result<Table> {
        let Some(index) = table.column_index("category") else {
            return Ok(table.clone());
        };
        // Missing categories are converted to their literal text token first,
        // so they are matched and kept like any other value.
        Ok(table.map_column(index, |value| {
            Value::Text(canonical_category(&value.to_text()))
        }))
    }

    fn stage_name(&self) -> &'static str {
        "category_normalizer"
    }
}
