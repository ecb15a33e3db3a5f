//! Header cleanup for source CSV files.

/// Normalizes a CSV header: trims surrounding whitespace, lower-cases it and
/// replaces every remaining space with an underscore.
///
/// `"District"` becomes `"district"` and `" Offence Type "` becomes
/// `"offence_type"`.
#[must_use]
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Parses an infringement count cell.
///
/// Accepts plain non-negative integers and integral decimals such as
/// `"12.0"`, which spreadsheet exports commonly produce. Returns `None` for
/// anything else, including empty cells.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
pub fn parse_count(value: &str) -> Option<u64> {
    let value = value.trim();
    if let Ok(count) = value.parse::<u64>() {
        return Some(count);
    }

    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u64::MAX as f64 {
        return Some(float as u64);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_cases_header() {
        assert_eq!(normalize_column_name("District"), "district");
        assert_eq!(normalize_column_name("COUNT"), "count");
    }

    #[test]
    fn trims_then_replaces_spaces() {
        assert_eq!(normalize_column_name("  Offence Type "), "offence_type");
    }

    #[test]
    fn replaces_every_space() {
        assert_eq!(normalize_column_name("Start  Date"), "start__date");
    }

    #[test]
    fn leaves_clean_header_alone() {
        assert_eq!(normalize_column_name("district"), "district");
    }

    #[test]
    fn parses_integer_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count(" 7 "), Some(7));
        assert_eq!(parse_count("0"), Some(0));
    }

    #[test]
    fn parses_integral_decimal_count() {
        assert_eq!(parse_count("12.0"), Some(12));
    }

    #[test]
    fn rejects_fractional_count() {
        assert_eq!(parse_count("1.5"), None);
    }

    #[test]
    fn rejects_negative_count() {
        assert_eq!(parse_count("-3"), None);
        assert_eq!(parse_count("-3.0"), None);
    }

    #[test]
    fn rejects_non_numeric_count() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("many"), None);
        assert_eq!(parse_count("NaN"), None);
        assert_eq!(parse_count("inf"), None);
    }
}
