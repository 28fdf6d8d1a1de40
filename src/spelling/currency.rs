/// Currency spelling for decimal inputs
///
/// A decimal number is read as an amount of currency: the whole part and
/// the fractional part are spelled independently and joined with qualifier
/// nouns ("dollar"/"cent" by default). A single fractional digit is read
/// as tenths of the unit, so "1.5" spells as fifty cents, not five.
use bigdecimal::{BigDecimal, One};
use std::str::FromStr;

use crate::error::{Result, SpellError};
use crate::spelling::decimal::DecimalNumber;
use crate::spelling::integer::int_to_english;
use crate::spelling::tables::Qualifiers;

/// Spells a decimal number as a currency phrase.
///
/// An empty whole-part spelling (whole value zero) suppresses the whole
/// phrase and its qualifier entirely; likewise for the fractional side.
/// When both sides are zero the phrase is "zero <qualifier>s".
pub fn float_to_english(number: &DecimalNumber, qualifiers: &Qualifiers) -> Result<String> {
    let whole_digits = number.whole_digits();
    let fraction_digits = number.fraction_digits().unwrap_or("0");

    let whole_value = digits_value(whole_digits)?;
    let fraction_value = digits_value(fraction_digits)?;

    // Tenths-as-cents: exactly one nonzero fractional digit is scaled by
    // ten so ".5" reads as fifty cents.
    let scaled_value = if fraction_digits.len() == 1 && fraction_digits != "0" {
        fraction_value * BigDecimal::from(10)
    } else {
        fraction_value
    };
    let scaled_digits = scaled_value.to_string();

    let whole_words = int_to_english(whole_digits)?;
    let fraction_words = int_to_english(&scaled_digits)?;

    let phrase = match (whole_words.is_empty(), fraction_words.is_empty()) {
        (true, true) => format!("zero {}s", qualifiers.whole),
        (false, true) => format!(
            "{} {}",
            whole_words,
            pluralize(&qualifiers.whole, &whole_value)
        ),
        (true, false) => format!(
            "{} {}",
            fraction_words,
            pluralize(&qualifiers.fraction, &scaled_value)
        ),
        (false, false) => format!(
            "{} {} and {} {}",
            whole_words,
            pluralize(&qualifiers.whole, &whole_value),
            fraction_words,
            pluralize(&qualifiers.fraction, &scaled_value)
        ),
    };

    Ok(phrase)
}

/// A qualifier is singular exactly when its value is one.
fn pluralize(word: &str, value: &BigDecimal) -> String {
    if value.is_one() {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

fn digits_value(digits: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(digits).map_err(|_| SpellError::InvalidNumber(digits.to_string()))
}
