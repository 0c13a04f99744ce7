//! Lenient integer coercion for host-supplied values

use serde_json::Value;

/// Parse a value as an integer the way a lenient `parseInt` would.
///
/// Numbers are truncated toward zero. Strings may carry leading whitespace,
/// a sign, and anything after the leading decimal digits (`"20.5"` is 20,
/// `"12px"` is 12). Null, booleans, arrays and objects do not parse.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            if number.as_u64().is_some() {
                return Some(i64::MAX);
            }
            // `as` saturates on overflow
            number
                .as_f64()
                .filter(|float| float.is_finite())
                .map(|float| float.trunc() as i64)
        }
        Value::String(text) => parse_integer_str(text),
        _ => None,
    }
}

fn parse_integer_str(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude = unsigned[..digits_end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce a value to a positive integer.
///
/// Takes the absolute value of whatever parses. A failed parse or a zero
/// falls back to `default`, so `None` keeps "unset" apart from "zero".
pub fn coerce_positive(value: &Value, default: Option<usize>) -> Option<usize> {
    match parse_integer(value) {
        None | Some(0) => default,
        Some(int) => Some(usize::try_from(int.unsigned_abs()).unwrap_or(usize::MAX)),
    }
}

/// A page count must parse to a strictly positive integer
pub fn is_valid_page_count(value: &Value) -> bool {
    parse_integer(value).is_some_and(|count| count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_integer_numbers() {
        assert_eq!(parse_integer(&json!(20)), Some(20));
        assert_eq!(parse_integer(&json!(20.5)), Some(20));
        assert_eq!(parse_integer(&json!(20.9)), Some(20));
        assert_eq!(parse_integer(&json!(-20)), Some(-20));
        assert_eq!(parse_integer(&json!(-0.7)), Some(0));
    }

    #[test]
    fn test_parse_integer_strings() {
        assert_eq!(parse_integer(&json!("20")), Some(20));
        assert_eq!(parse_integer(&json!("20.5")), Some(20));
        assert_eq!(parse_integer(&json!("  7 pages")), Some(7));
        assert_eq!(parse_integer(&json!("-3")), Some(-3));
        assert_eq!(parse_integer(&json!("+4")), Some(4));
        assert_eq!(parse_integer(&json!("nghi")), None);
        assert_eq!(parse_integer(&json!("")), None);
        assert_eq!(parse_integer(&json!("-")), None);
    }

    #[test]
    fn test_parse_integer_other_values() {
        assert_eq!(parse_integer(&Value::Null), None);
        assert_eq!(parse_integer(&json!(true)), None);
        assert_eq!(parse_integer(&json!([5])), None);
        assert_eq!(parse_integer(&json!({"value": 5})), None);
    }

    #[test]
    fn test_coerce_positive() {
        assert_eq!(coerce_positive(&json!(20), None), Some(20));
        assert_eq!(coerce_positive(&json!("20.5"), None), Some(20));
        assert_eq!(coerce_positive(&json!(-20), None), Some(20));

        assert_eq!(coerce_positive(&Value::Null, Some(0)), Some(0));
        assert_eq!(coerce_positive(&json!("nghi"), Some(0)), Some(0));
        assert_eq!(coerce_positive(&json!(0), Some(1)), Some(1));
        assert_eq!(coerce_positive(&json!(0), None), None);
        assert_eq!(coerce_positive(&Value::Null, None), None);
    }

    #[test]
    fn test_page_count_validation() {
        assert!(!is_valid_page_count(&Value::Null));
        assert!(!is_valid_page_count(&json!(0)));
        assert!(!is_valid_page_count(&json!("nghi")));
        assert!(!is_valid_page_count(&json!(-5)));
        assert!(!is_valid_page_count(&json!("")));
        assert!(is_valid_page_count(&json!(5)));
        assert!(is_valid_page_count(&json!("5")));
    }
}
