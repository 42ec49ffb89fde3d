//! Lenient parsing of numeric form fields.

/// Parses a decimal field, treating empty, malformed or non-finite input as zero.
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Parses the leading integer of a form field (`"12.7"` reads as 12).
///
/// Fields with no leading digits, out-of-range values and zero all fall back
/// to `default`.
pub fn parse_count(raw: &str, default: i64) -> i64 {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['-', '+']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    match raw[..sign_len + digits_len].parse::<i64>() {
        Ok(0) | Err(_) => default,
        Ok(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_count, parse_number};

    #[test]
    fn malformed_numbers_read_as_zero() {
        assert_eq!(parse_number(" 12.5 "), 12.5);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("abc"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
    }

    #[test]
    fn counts_fall_back_to_default() {
        assert_eq!(parse_count("4", 1), 4);
        assert_eq!(parse_count("four", 1), 1);
        assert_eq!(parse_count("0", 100), 100);
        assert_eq!(parse_count("-0", 1), 1);
    }

    #[test]
    fn counts_read_the_leading_integer() {
        assert_eq!(parse_count(" 12.7", 1), 12);
        assert_eq!(parse_count("-5px", 0), -5);
        assert_eq!(parse_count("+", 7), 7);
        assert_eq!(parse_count("99999999999999999999", 3), 3);
    }
}
