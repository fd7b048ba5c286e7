use regex::Regex;
use std::sync::OnceLock;

fn get_regex(re: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    re.get_or_init(|| Regex::new(pattern).expect("Invalid regex pattern defined in code"))
}

/// Parses the leading integer of `value`, ignoring trailing junk.
///
/// `"8"` and `"8.5"` both yield 8. Anything without a leading integer yields 0.
#[must_use]
pub fn lenient_int(value: &str) -> i32 {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = get_regex(&RE, r"^\s*([+-]?\d+)");

    re.captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Parses the leading decimal literal of `value`, or 0.0.
#[must_use]
pub fn lenient_float(value: &str) -> f64 {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = get_regex(
        &RE,
        r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)",
    );

    re.captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Extracts the leading four-digit year of a free-form date such as
/// `2019-05-30` or `2019`.
#[must_use]
pub fn leading_year(value: &str) -> Option<i32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = get_regex(&RE, r"^\s*(\d{4})(?:\D|$)");

    re.captures(value)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("8"), 8);
        assert_eq!(lenient_int(" 10 "), 10);
        assert_eq!(lenient_int("8.5"), 8);
        assert_eq!(lenient_int("-3"), -3);
        assert_eq!(lenient_int("142 min"), 142);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int("99999999999"), 0);
    }

    #[test]
    fn test_lenient_float() {
        assert!((lenient_float("8.5") - 8.5).abs() < f64::EPSILON);
        assert!((lenient_float("7.2/10") - 7.2).abs() < f64::EPSILON);
        assert!((lenient_float(".5") - 0.5).abs() < f64::EPSILON);
        assert!((lenient_float("7") - 7.0).abs() < f64::EPSILON);
        assert!(lenient_float("n/a").abs() < f64::EPSILON);
        assert!(lenient_float("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_leading_year() {
        assert_eq!(leading_year("2019-05-30"), Some(2019));
        assert_eq!(leading_year("1999"), Some(1999));
        assert_eq!(leading_year(" 2001/01/01"), Some(2001));
        assert_eq!(leading_year("20190"), None);
        assert_eq!(leading_year("May 2019"), None);
        assert_eq!(leading_year(""), None);
    }
}
