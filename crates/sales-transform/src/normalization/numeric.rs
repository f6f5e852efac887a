//! Numeric coercion helpers.

/// Parses a string as f64, returning None for empty, invalid, or
/// non-finite values. `"inf"` and `"NaN"` text counts as unparseable data
/// here, not as a number.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimals() {
        assert_eq!(parse_f64("150"), Some(150.0));
        assert_eq!(parse_f64(" 10.5 "), Some(10.5));
        assert_eq!(parse_f64("-10"), Some(-10.0));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("abc"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("inf"), None);
    }

    #[test]
    fn parses_integers() {
        assert_eq!(parse_i64("2"), Some(2));
        assert_eq!(parse_i64(" -3 "), Some(-3));
        assert_eq!(parse_i64("2.0"), None);
        assert_eq!(parse_i64(""), None);
    }
}
