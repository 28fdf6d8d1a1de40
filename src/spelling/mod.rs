/// Number-to-English spelling
///
/// This module tree is the conversion core: pure functions that turn a
/// numeric string into its lowercase English spelling. Integers spell
/// plainly ("123" → "one hundred twenty three"); decimals spell as
/// currency ("1.5" → "one dollar and fifty cents").
///
/// The grammar is table-driven: `tables` holds the fixed word lists,
/// `triad` spells one three-digit group, `integer` assembles chunked
/// groups with scale words, and `currency` adds qualifier nouns and
/// pluralization. `decimal` keeps all arithmetic in exact
/// arbitrary-precision form.
use lazy_static::lazy_static;
use regex::Regex;

pub mod chunking;
pub mod currency;
pub mod decimal;
pub mod integer;
pub mod tables;
pub mod triad;

pub use currency::float_to_english;
pub use decimal::DecimalNumber;
pub use integer::int_to_english;
pub use tables::Qualifiers;
pub use triad::spell_triad;

use crate::error::Result;

lazy_static! {
    /// A decimal point followed only by zeros at the end of the input:
    /// "5.00" behaves as the integer "5".
    static ref TRAILING_ZERO_FRACTION_REGEX: Regex = Regex::new(r"\.0+$").unwrap();
}

/// Spells a numeric string in English, reading decimals as dollar/cent
/// currency amounts.
///
/// The empty string maps to the empty string; any zero-valued input maps
/// to "zero"; invalid input fails with `SpellError::InvalidNumber` and
/// magnitudes past the scale-word table with `SpellError::MagnitudeOverflow`.
pub fn number_to_english(input: &str) -> Result<String> {
    number_to_english_with(input, &Qualifiers::default())
}

/// Like [`number_to_english`] but with caller-supplied currency qualifiers.
pub fn number_to_english_with(input: &str, qualifiers: &Qualifiers) -> Result<String> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let sanitized = TRAILING_ZERO_FRACTION_REGEX.replace(input, "");

    let number = DecimalNumber::parse(&sanitized)?;

    if number.is_zero() {
        return Ok("zero".to_string());
    }

    if number.is_integer() {
        int_to_english(number.whole_digits())
    } else {
        float_to_english(&number, qualifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellError;

    #[test]
    fn test_empty_input_passes_through() {
        assert_eq!(number_to_english("").unwrap(), "");
    }

    #[test]
    fn test_zero_spells_zero() {
        assert_eq!(number_to_english("0").unwrap(), "zero");
    }

    #[test]
    fn test_zero_valued_inputs_spell_zero() {
        assert_eq!(number_to_english("000").unwrap(), "zero");
        assert_eq!(number_to_english("0.00").unwrap(), "zero");
        assert_eq!(number_to_english("0.0").unwrap(), "zero");
    }

    #[test]
    fn test_trailing_zero_fraction_stripped() {
        assert_eq!(
            number_to_english("5.00").unwrap(),
            number_to_english("5").unwrap()
        );
        assert_eq!(number_to_english("5.0").unwrap(), "five");
        assert_eq!(number_to_english("120.000").unwrap(), "one hundred twenty");
    }

    #[test]
    fn test_integer_routing() {
        assert_eq!(
            number_to_english("123").unwrap(),
            "one hundred twenty three"
        );
        assert_eq!(number_to_english("1000").unwrap(), "one thousand");
    }

    #[test]
    fn test_currency_routing() {
        assert_eq!(
            number_to_english("1.5").unwrap(),
            "one dollar and fifty cents"
        );
    }

    #[test]
    fn test_custom_qualifiers() {
        let qualifiers = Qualifiers::new("pound", "penny");
        assert_eq!(
            number_to_english_with("3.25", &qualifiers).unwrap(),
            "three pounds and twenty five pennys"
        );
    }

    #[test]
    fn test_invalid_input_rejected() {
        assert!(matches!(
            number_to_english("abc"),
            Err(SpellError::InvalidNumber(_))
        ));
        assert!(matches!(
            number_to_english("1.2.3"),
            Err(SpellError::InvalidNumber(_))
        ));
        assert!(matches!(
            number_to_english("-5"),
            Err(SpellError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_overflow_surfaces() {
        let huge = "9".repeat(46);
        assert!(matches!(
            number_to_english(&huge),
            Err(SpellError::MagnitudeOverflow { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let a = number_to_english("987654321").unwrap();
        let b = number_to_english("987654321").unwrap();
        assert_eq!(a, b);
    }
}
