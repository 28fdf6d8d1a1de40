/// Arbitrary-precision decimal adapter
///
/// Wraps a validated numeric string together with its parsed `BigDecimal`
/// so spelling code can split digits exactly while comparisons and scaling
/// stay in exact decimal arithmetic. A native float would lose precision
/// on large inputs, which is exactly the territory this converter works in.
use bigdecimal::{BigDecimal, Zero};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

use crate::error::{Result, SpellError};

lazy_static! {
    /// Plain non-negative decimal notation: digits, optionally a point and
    /// more digits. No sign, no exponent, no separators.
    static ref PLAIN_DECIMAL_REGEX: Regex = Regex::new(r"^[0-9]+(\.[0-9]+)?$").unwrap();
}

/// A non-negative decimal number carried as its exact digit text plus the
/// parsed arbitrary-precision value.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalNumber {
    text: String,
    value: BigDecimal,
}

impl DecimalNumber {
    /// Parses plain decimal notation into a `DecimalNumber`.
    ///
    /// Rejects anything outside `[0-9]+(\.[0-9]+)?` — signs, exponents,
    /// thousands separators, and multiple decimal points all fail with
    /// `SpellError::InvalidNumber`.
    pub fn parse(input: &str) -> Result<Self> {
        if !PLAIN_DECIMAL_REGEX.is_match(input) {
            return Err(SpellError::InvalidNumber(input.to_string()));
        }

        let value = BigDecimal::from_str(input)
            .map_err(|_| SpellError::InvalidNumber(input.to_string()))?;

        Ok(Self {
            text: input.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &BigDecimal {
        &self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// True when the digit text carries no decimal point.
    pub fn is_integer(&self) -> bool {
        !self.text.contains('.')
    }

    /// The digit string left of the decimal point.
    pub fn whole_digits(&self) -> &str {
        match self.text.split_once('.') {
            Some((whole, _)) => whole,
            None => &self.text,
        }
    }

    /// The digit string right of the decimal point, if any.
    pub fn fraction_digits(&self) -> Option<&str> {
        self.text.split_once('.').map(|(_, fraction)| fraction)
    }
}
