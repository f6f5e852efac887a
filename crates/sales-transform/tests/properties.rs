//! Property tests for the normalization rules.

use proptest::prelude::*;
use sales_transform::{canonical_category, normalize_column_name};

proptest! {
    /// Applying the column normalizer twice yields the same result as
    /// applying it once.
    #[test]
    fn column_normalization_is_idempotent(name in ".{0,40}") {
        let once = normalize_column_name(&name);
        prop_assert_eq!(normalize_column_name(&once), once.clone());
    }

    /// Any value containing "office" (case-insensitive, with arbitrary
    /// surrounding whitespace and quotes) canonicalizes to `office`.
    #[test]
    fn office_categories_collapse(
        lead in "[ '\"]{0,3}",
        prefix in "[a-z ]{0,8}",
        core in "[oO][fF][fF][iI][cC][eE]",
        suffix in "[a-z ]{0,8}",
        trail in "[ '\"]{0,3}",
    ) {
        let raw = format!("{lead}{prefix}{core}{suffix}{trail}");
        prop_assert_eq!(canonical_category(&raw), "office");
    }

    /// "electronic" canonicalizes to `electronics`; the padding alphabet
    /// cannot form a higher-priority needle.
    #[test]
    fn electronic_categories_collapse(
        prefix in "[bcdfg ]{0,6}",
        core in "[eE][lL][eE][cC][tT][rR][oO][nN][iI][cC]",
        suffix in "[bcdfg ]{0,6}",
    ) {
        let raw = format!("{prefix}{core}{suffix}");
        prop_assert_eq!(canonical_category(&raw), "electronics");
    }
}
