//! Romanized text -> native script transliteration
//!
//! The generator only needs one thing from transliteration: given lowercase
//! ITRANS input and a target script, return text in that script. The
//! [`Transliterator`] trait is that seam; [`ItransTransliterator`] is the
//! production implementation backed by `vidyut-lipi`.

use vidyut_lipi::{Lipika, Scheme};

/// Native scripts a language identifier can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Odia,
    Telugu,
    Tamil,
    Malayalam,
    Bengali,
    Devanagari,
    Kannada,
    Gujarati,
    Gurmukhi,
}

impl Script {
    pub const ALL: [Script; 9] = [
        Script::Odia,
        Script::Telugu,
        Script::Tamil,
        Script::Malayalam,
        Script::Bengali,
        Script::Devanagari,
        Script::Kannada,
        Script::Gujarati,
        Script::Gurmukhi,
    ];

    /// Resolve a language identifier (case-insensitive, common aliases accepted)
    pub fn from_language(language: &str) -> Option<Script> {
        match language.trim().to_lowercase().as_str() {
            "odia" | "oriya" => Some(Script::Odia),
            "telugu" => Some(Script::Telugu),
            "tamil" => Some(Script::Tamil),
            "malayalam" => Some(Script::Malayalam),
            "bengali" | "bangla" => Some(Script::Bengali),
            "devanagari" | "hindi" | "sanskrit" | "marathi" => Some(Script::Devanagari),
            "kannada" => Some(Script::Kannada),
            "gujarati" => Some(Script::Gujarati),
            "gurmukhi" | "punjabi" => Some(Script::Gurmukhi),
            _ => None,
        }
    }

    /// Canonical identifier; also the stem of the table file
    pub fn language(self) -> &'static str {
        match self {
            Script::Odia => "odia",
            Script::Telugu => "telugu",
            Script::Tamil => "tamil",
            Script::Malayalam => "malayalam",
            Script::Bengali => "bengali",
            Script::Devanagari => "devanagari",
            Script::Kannada => "kannada",
            Script::Gujarati => "gujarati",
            Script::Gurmukhi => "gurmukhi",
        }
    }

    fn scheme(self) -> Scheme {
        match self {
            Script::Odia => Scheme::Odia,
            Script::Telugu => Scheme::Telugu,
            Script::Tamil => Scheme::Tamil,
            Script::Malayalam => Scheme::Malayalam,
            Script::Bengali => Scheme::Bengali,
            Script::Devanagari => Scheme::Devanagari,
            Script::Kannada => Scheme::Kannada,
            Script::Gujarati => Scheme::Gujarati,
            Script::Gurmukhi => Scheme::Gurmukhi,
        }
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.language())
    }
}

/// Converts romanized input into a native script
pub trait Transliterator {
    fn transliterate(&self, text: &str, script: Script) -> String;
}

/// ITRANS -> native script via `vidyut-lipi`
///
/// Input is lowercased first; ITRANS distinguishes `a`/`A`, but callers type
/// names in arbitrary case and expect the same PIN.
#[derive(Debug, Default, Clone, Copy)]
pub struct ItransTransliterator;

impl Transliterator for ItransTransliterator {
    fn transliterate(&self, text: &str, script: Script) -> String {
        let mut lipika = Lipika::new();
        lipika.transliterate(&text.to_lowercase(), Scheme::Itrans, script.scheme())
    }
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn transliterate(&self, text: &str, script: Script) -> String {
        (**self).transliterate(text, script)
    }
}
