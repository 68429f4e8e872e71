//! Assemble the three PIN variants from a code sequence

use super::mapping::SpecialCharMapping;
use super::padding::{alphabet_block, extract_classes, repeat_to_length};

/// Digit used when the code sequence has no digits
pub const DEFAULT_DIGIT: char = '9';

/// The three PIN variants derived from one code sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pins {
    /// Exactly 4 digits
    pub pin4: String,
    /// Exactly 6 digits
    pub pin6: String,
    /// 4..=6 letters + one symbol + `pin4`
    pub alphanumeric: String,
}

/// Compose `pin4`, `pin6` and the alphanumeric PIN
///
/// The symbol between letters and digits is looked up from the first digit of
/// `pin4`.
pub fn compose_pins<S: AsRef<str>>(codes: &[S], special_chars: &SpecialCharMapping) -> Pins {
    let (digits, letters) = extract_classes(codes);

    let pin4 = repeat_to_length(&digits, 4, DEFAULT_DIGIT);
    let pin6 = repeat_to_length(&digits, 6, DEFAULT_DIGIT);

    let first_digit = pin4.chars().next().unwrap_or(DEFAULT_DIGIT);
    let special = special_chars.symbol_for(first_digit);

    let mut alphanumeric = alphabet_block(&letters);
    alphanumeric.push(special);
    alphanumeric.push_str(&pin4);

    Pins {
        pin4,
        pin6,
        alphanumeric,
    }
}
