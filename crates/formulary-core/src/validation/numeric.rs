//! Positive whole number checks.

/// Check whether the trimmed input is a whole number of at least 1.
///
/// Only ASCII digits are allowed, leading zeros included. There is no upper
/// bound; use [`parse_positive_whole_number`] to get a value.
pub fn is_positive_whole_number(input: &str) -> bool {
    let trimmed = input.trim();
    !trimmed.is_empty()
        && trimmed.bytes().all(|b| b.is_ascii_digit())
        && trimmed.bytes().any(|b| b != b'0')
}

/// Parse a positive whole number, or `None` if it is not one or overflows `u64`.
pub fn parse_positive_whole_number(input: &str) -> Option<u64> {
    if !is_positive_whole_number(input) {
        return None;
    }
    input.trim().parse().ok()
}

/// Read a stored JSON number as a positive whole number.
///
/// Integral floats such as `500.0` or `1e1` count as whole numbers; their
/// plain decimal form has no fractional part.
pub fn positive_whole_json_number(number: &serde_json::Number) -> Option<u64> {
    if let Some(value) = number.as_u64() {
        return (value >= 1).then_some(value);
    }
    let value = number.as_f64()?;
    // 2^64 and above do not fit
    if value.fract() == 0.0 && value >= 1.0 && value < u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Number;

    #[test]
    fn test_accepts_positive_numbers() {
        assert!(is_positive_whole_number("1"));
        assert!(is_positive_whole_number("500"));
        assert!(is_positive_whole_number(" 30 "));
        assert!(is_positive_whole_number("007"));
    }

    #[test]
    fn test_json_numbers_accept_integral_floats() {
        let float = |v: f64| Number::from_f64(v).unwrap();

        assert_eq!(positive_whole_json_number(&Number::from(30u64)), Some(30));
        assert_eq!(positive_whole_json_number(&float(500.0)), Some(500));
        assert_eq!(positive_whole_json_number(&float(1e1)), Some(10));
        assert_eq!(positive_whole_json_number(&Number::from(0u64)), None);
        assert_eq!(positive_whole_json_number(&Number::from(-3i64)), None);
        assert_eq!(positive_whole_json_number(&float(1.5)), None);
        assert_eq!(positive_whole_json_number(&float(0.0)), None);
        assert_eq!(positive_whole_json_number(&float(1e20)), None);
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        assert!(!is_positive_whole_number("0"));
        assert!(!is_positive_whole_number("000"));
        assert!(!is_positive_whole_number("-5"));
        assert!(!is_positive_whole_number("12a"));
        assert!(!is_positive_whole_number("1.5"));
        assert!(!is_positive_whole_number("1 000"));
        assert!(!is_positive_whole_number(""));
        assert!(!is_positive_whole_number("   "));
    }

    #[test]
    fn test_no_upper_bound() {
        let huge = "99999999999999999999999999";
        assert!(is_positive_whole_number(huge));
        // Too large to hold, even though it is a valid answer shape
        assert_eq!(parse_positive_whole_number(huge), None);
    }

    #[test]
    fn test_parse_leading_zeros() {
        assert_eq!(parse_positive_whole_number("0042"), Some(42));
        assert_eq!(parse_positive_whole_number(" 10 "), Some(10));
        assert_eq!(parse_positive_whole_number("0"), None);
    }

    proptest! {
        #[test]
        fn prop_digit_strings_at_least_one_are_valid(n in 1u64..=u64::MAX) {
            prop_assert!(is_positive_whole_number(&n.to_string()));
            prop_assert_eq!(parse_positive_whole_number(&n.to_string()), Some(n));
        }

        #[test]
        fn prop_non_digit_character_is_invalid(
            prefix in "[0-9]{0,5}",
            bad in "[^0-9\\s]",
            suffix in "[0-9]{0,5}",
        ) {
            let input = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(!is_positive_whole_number(&input));
        }
    }
}
