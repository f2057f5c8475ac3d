// src/core/num.rs

/// Parse a display value like "1,234.5%" for sort comparisons.
/// Empty, "-", a bare "%" and anything non-numeric give None, never zero.
/// The stored display string is left alone; this is comparator-only.
pub fn parse_num(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|&c| c != ',' && c != '%').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || cleaned == "-" {
        return None;
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_percent() {
        assert_eq!(parse_num("1,234.5%"), Some(1234.5));
        assert_eq!(parse_num("3,08,481"), Some(308481.0));
        assert_eq!(parse_num(" 12.4 "), Some(12.4));
        assert_eq!(parse_num("-8.6%"), Some(-8.6));
    }

    #[test]
    fn missing_values_are_none_not_zero() {
        assert_eq!(parse_num(""), None);
        assert_eq!(parse_num("-"), None);
        assert_eq!(parse_num("%"), None);
        assert_eq!(parse_num(" "), None);
        assert_eq!(parse_num("n/a"), None);
    }
}
