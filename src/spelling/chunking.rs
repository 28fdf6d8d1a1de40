/// Digit chunking for scale-word attribution
///
/// An integer's digit string is split into groups of up to three digits,
/// working from the right, so each group lines up with a scale word
/// (thousand, million, ...). The most significant group may be shorter.

/// Digits per chunk; one chunk spells as one hundreds/tens/units triad.
pub const CHUNK_SIZE: usize = 3;

/// Splits a digit string into chunks, most significant chunk first.
///
/// The input must be non-empty ASCII digits. Leading zeros are kept; the
/// caller decides how zero chunks are rendered.
pub fn chunk_digits(digits: &str) -> Vec<&str> {
    debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));

    let mut chunks = Vec::with_capacity(digits.len().div_ceil(CHUNK_SIZE));
    let mut rest = digits;

    let head = digits.len() % CHUNK_SIZE;
    if head > 0 {
        chunks.push(&rest[..head]);
        rest = &rest[head..];
    }

    while !rest.is_empty() {
        chunks.push(&rest[..CHUNK_SIZE]);
        rest = &rest[CHUNK_SIZE..];
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk() {
        assert_eq!(chunk_digits("7"), vec!["7"]);
        assert_eq!(chunk_digits("42"), vec!["42"]);
        assert_eq!(chunk_digits("123"), vec!["123"]);
    }

    #[test]
    fn test_short_leading_chunk() {
        assert_eq!(chunk_digits("1234"), vec!["1", "234"]);
        assert_eq!(chunk_digits("12345"), vec!["12", "345"]);
    }

    #[test]
    fn test_exact_multiple_of_three() {
        assert_eq!(chunk_digits("123456"), vec!["123", "456"]);
        assert_eq!(chunk_digits("123456789"), vec!["123", "456", "789"]);
    }

    #[test]
    fn test_zero_chunks_preserved() {
        assert_eq!(chunk_digits("1000000"), vec!["1", "000", "000"]);
        assert_eq!(chunk_digits("1000001"), vec!["1", "000", "001"]);
    }

    #[test]
    fn test_chunk_count_for_large_input() {
        let digits = "9".repeat(45);
        assert_eq!(chunk_digits(&digits).len(), 15);

        let digits = "9".repeat(46);
        assert_eq!(chunk_digits(&digits).len(), 16);
    }
}
