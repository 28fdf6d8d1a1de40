/// Caller-side input sanitization
///
/// The conversion core performs no fraction-length limiting of its own;
/// consumer surfaces clamp input to two fractional digits before calling
/// it, the same way the original input form truncated typing past the
/// cents position.
use lazy_static::lazy_static;
use regex::Regex;

use crate::config::constants::MAX_FRACTION_DIGITS;

lazy_static! {
    /// Anything typed after the allowed fractional digits
    static ref EXCESS_FRACTION_REGEX: Regex =
        Regex::new(&format!(r"(\.[0-9]{{{}}}).+$", MAX_FRACTION_DIGITS)).unwrap();
}

/// Truncates input to at most `MAX_FRACTION_DIGITS` fractional digits.
pub fn clamp_fraction_digits(input: &str) -> String {
    EXCESS_FRACTION_REGEX.replace(input, "$1").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_unchanged() {
        assert_eq!(clamp_fraction_digits("123456"), "123456");
    }

    #[test]
    fn test_two_fraction_digits_unchanged() {
        assert_eq!(clamp_fraction_digits("1.23"), "1.23");
    }

    #[test]
    fn test_excess_fraction_digits_truncated() {
        assert_eq!(clamp_fraction_digits("1.2345"), "1.23");
        assert_eq!(clamp_fraction_digits("0.999"), "0.99");
    }

    #[test]
    fn test_single_fraction_digit_unchanged() {
        assert_eq!(clamp_fraction_digits("1.5"), "1.5");
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(clamp_fraction_digits(""), "");
    }

    #[test]
    fn test_invalid_input_passes_through() {
        // Validation belongs to the core; the clamp only truncates
        assert_eq!(clamp_fraction_digits("abc"), "abc");
    }
}
