use crate::spelling::tables::{TENS, UNITS};

/// Spells one three-digit group (hundreds, tens, units).
///
/// Returns the trimmed English words for `hundreds*100 + tens*10 + units`
/// with no scale word attached. The all-zero triad spells as the empty
/// string so zero chunks disappear from assembled numbers.
///
/// Every word is a direct table lookup; the teens row of `UNITS` covers
/// 10-19 and `TENS` covers every tens multiple.
pub fn spell_triad(hundreds: u8, tens: u8, units: u8) -> String {
    debug_assert!(hundreds < 10 && tens < 10 && units < 10);

    match (hundreds, tens) {
        (0, 0) => UNITS[units as usize].to_string(),
        (0, 1) => UNITS[10 + units as usize].to_string(),
        (0, _) => format!("{} {}", TENS[tens as usize], spell_triad(0, 0, units))
            .trim()
            .to_string(),
        (_, _) => format!(
            "{} hundred {}",
            UNITS[hundreds as usize],
            spell_triad(0, tens, units)
        )
        .trim()
        .to_string(),
    }
}
