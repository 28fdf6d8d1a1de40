use crate::error::{Result, SpellError};
use crate::spelling::chunking::chunk_digits;
use crate::spelling::tables::{MAX_SUPPORTED_DIGITS, SCALE_WORDS};
use crate::spelling::triad::spell_triad;

/// Spells a non-negative integer given as its decimal digit string.
///
/// Returns the empty string for zero — the top-level entry decides when
/// zero is rendered as the word "zero". Leading zeros are ignored, so
/// chunk strings like "007" spell the same as "7".
///
/// Numbers wider than the scale-word table (more than 45 significant
/// digits) fail with `SpellError::MagnitudeOverflow` rather than being
/// spelled with a missing scale word.
pub fn int_to_english(digits: &str) -> Result<String> {
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(String::new());
    }

    let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();

    match values.len() {
        1 => Ok(spell_triad(0, 0, values[0])),
        2 => Ok(spell_triad(0, values[0], values[1])),
        3 => Ok(spell_triad(values[0], values[1], values[2])),
        _ => spell_chunked(digits),
    }
}

/// Spells an integer of more than three digits chunk by chunk, attaching
/// the scale word for each chunk's position and skipping zero chunks.
fn spell_chunked(digits: &str) -> Result<String> {
    if digits.len() > MAX_SUPPORTED_DIGITS {
        return Err(SpellError::MagnitudeOverflow {
            digits: digits.len(),
        });
    }

    let chunks = chunk_digits(digits);

    let mut parts: Vec<String> = Vec::new();

    for (i, chunk) in chunks.iter().enumerate() {
        let position = chunks.len() - 1 - i;
        let words = int_to_english(chunk)?;
        if words.is_empty() {
            continue;
        }

        let scale = SCALE_WORDS[position];
        if scale.is_empty() {
            parts.push(words);
        } else {
            parts.push(format!("{} {}", words, scale));
        }
    }

    Ok(parts.join(" "))
}
