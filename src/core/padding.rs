//! Digit/letter extraction and length normalization

/// Letter used when there are no letters at all, and for right padding
pub const FILLER_LETTER: char = 'z';

/// Bounds of the alphabet block in the alphanumeric PIN
pub const ALPHABET_MIN: usize = 4;
pub const ALPHABET_MAX: usize = 6;

/// Split concatenated codes into ordered digit and letter sequences
///
/// Anything that is neither (there should be nothing else in a validated
/// table) is ignored.
pub fn extract_classes<S: AsRef<str>>(codes: &[S]) -> (Vec<char>, Vec<char>) {
    let mut digits = Vec::new();
    let mut letters = Vec::new();

    for c in codes.iter().flat_map(|code| code.as_ref().chars()) {
        if c.is_ascii_digit() {
            digits.push(c);
        } else if c.is_alphabetic() {
            letters.push(c);
        }
    }

    (digits, letters)
}

/// Repeat `values` from the start until it covers `length`, then cut to exactly `length`
///
/// An empty sequence yields `length` copies of `default`.
///
/// # Examples
/// ```
/// use pinscript::core::padding::repeat_to_length;
///
/// assert_eq!(repeat_to_length(&['3'], 4, '9'), "3333");
/// assert_eq!(repeat_to_length(&['3', '7'], 4, '9'), "3737");
/// assert_eq!(repeat_to_length(&[], 4, '9'), "9999");
/// ```
pub fn repeat_to_length(values: &[char], length: usize, default: char) -> String {
    if values.is_empty() {
        return std::iter::repeat(default).take(length).collect();
    }
    values.iter().copied().cycle().take(length).collect()
}

/// Build the 4..=6 letter block of the alphanumeric PIN
///
/// The letters are repeated whole (ceiling of 4 / len times) and then cut to
/// at most 6, so a two-letter input gives 4 letters, three letters give 6,
/// and five give 5.
pub fn alphabet_block(letters: &[char]) -> String {
    if letters.is_empty() {
        return std::iter::repeat(FILLER_LETTER).take(ALPHABET_MIN).collect();
    }

    let repeats = ALPHABET_MIN.div_ceil(letters.len());
    let mut block: String = letters
        .iter()
        .copied()
        .cycle()
        .take(letters.len() * repeats)
        .take(ALPHABET_MAX)
        .collect();

    while block.chars().count() < ALPHABET_MIN {
        block.push(FILLER_LETTER);
    }
    block
}
