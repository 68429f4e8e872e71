//! Embedded character code tables
//!
//! Vowels carry `A0`..`O9`, consonants cycle their digit `1..9,0` per varga.
//! Values repeat across keys (ଙ/ଣ -> N5, ଞ/ନ -> N0); downstream PINs depend
//! on these exact values.

#[rustfmt::skip]
pub const ODIA: &[(&str, &str)] = &[
    ("ଅ", "A0"), ("ଆ", "A1"), ("ଇ", "I2"), ("ଈ", "I3"), ("ଉ", "U4"),
    ("ଊ", "U5"), ("ଋ", "R6"), ("ଏ", "E7"), ("ଐ", "E8"), ("ଓ", "O9"),
    ("କ", "K1"), ("ଖ", "K2"), ("ଗ", "G3"), ("ଘ", "G4"), ("ଙ", "N5"),
    ("ଚ", "C6"), ("ଛ", "C7"), ("ଜ", "J8"), ("ଝ", "J9"), ("ଞ", "N0"),
    ("ଟ", "T1"), ("ଠ", "T2"), ("ଡ", "D3"), ("ଢ", "D4"), ("ଣ", "N5"),
    ("ତ", "T6"), ("ଥ", "T7"), ("ଦ", "D8"), ("ଧ", "D9"), ("ନ", "N0"),
    ("ପ", "P1"), ("ଫ", "P2"), ("ବ", "B3"), ("ଭ", "B4"), ("ମ", "M5"),
    ("ଯ", "Y6"), ("ର", "R7"), ("ଲ", "L8"), ("ଶ", "S9"), ("ଷ", "S0"), ("ସ", "S1"),
    ("ହ", "H2"), ("ଳ", "L3"), ("କ୍ଷ", "KX4"), ("ଜ୍ଞ", "JN5"),
];

#[rustfmt::skip]
pub const TELUGU: &[(&str, &str)] = &[
    ("అ", "A0"), ("ఆ", "A1"), ("ఇ", "I2"), ("ఈ", "I3"), ("ఉ", "U4"),
    ("క", "K1"), ("ఖ", "K2"), ("గ", "G3"), ("ఘ", "G4"), ("ఙ", "N5"),
    ("చ", "C6"), ("ఛ", "C7"), ("జ", "J8"), ("ఝ", "J9"), ("ఞ", "N0"),
];

#[rustfmt::skip]
pub const TAMIL: &[(&str, &str)] = &[
    ("அ", "A0"), ("ஆ", "A1"), ("இ", "I2"), ("ஈ", "I3"), ("உ", "U4"),
    ("க", "K1"), ("ங", "N5"), ("ச", "C6"), ("ஞ", "N0"),
];

#[rustfmt::skip]
pub const MALAYALAM: &[(&str, &str)] = &[
    ("അ", "A0"), ("ആ", "A1"), ("ഇ", "I2"), ("ഈ", "I3"), ("ഉ", "U4"),
    ("ക", "K1"), ("ഖ", "K2"), ("ഗ", "G3"), ("ഘ", "G4"), ("ങ", "N5"),
    ("ച", "C6"), ("ഛ", "C7"), ("ജ", "J8"), ("ഝ", "J9"), ("ഞ", "N0"),
];

/// Digit -> symbol for the alphanumeric PIN. Not injective: 0/6, 1/7, 2/8, 3/9 share symbols.
#[rustfmt::skip]
pub const SPECIAL_CHARS: [(char, char); 10] = [
    ('0', '@'), ('1', '#'), ('2', '%'), ('3', '&'), ('4', '*'),
    ('5', '$'), ('6', '@'), ('7', '#'), ('8', '%'), ('9', '&'),
];
