//! Romanized text -> PINs pipeline
//!
//! transliterate -> map to codes -> extract/pad -> compose. Every stage is a
//! pure function of its input and the injected tables, so the same text and
//! language always produce the same [`GenerationResult`].

use serde::{Deserialize, Serialize};

use super::composer::compose_pins;
use super::mapper::map_to_values;
use super::mapping::{LanguageMapping, MappingProvider, SpecialCharMapping};
use crate::error::PinError;
use crate::script::{ItransTransliterator, Script, Transliterator};

/// Output of one generation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GenerationResult {
    /// Input text exactly as given
    pub input: String,
    /// Transliterated native script text
    pub script_text: String,
    #[serde(rename = "4-digit PIN")]
    pub pin4: String,
    #[serde(rename = "6-digit PIN")]
    pub pin6: String,
    #[serde(rename = "alphanumeric PIN")]
    pub alphanumeric_pin: String,
}

/// PIN generator bound to one language
#[derive(Debug, Clone)]
pub struct PinGenerator<T = ItransTransliterator> {
    script: Script,
    mapping: LanguageMapping,
    special_chars: SpecialCharMapping,
    transliterator: T,
}

impl PinGenerator<ItransTransliterator> {
    /// Generator for `language` using ITRANS transliteration
    ///
    /// The language is resolved to a script before anything else, so an
    /// unknown language fails with `UnsupportedLanguage` without touching
    /// the provider.
    pub fn new(language: &str, provider: &dyn MappingProvider) -> Result<Self, PinError> {
        Self::with_transliterator(language, provider, ItransTransliterator)
    }
}

impl<T: Transliterator> PinGenerator<T> {
    pub fn with_transliterator(
        language: &str,
        provider: &dyn MappingProvider,
        transliterator: T,
    ) -> Result<Self, PinError> {
        let script = Script::from_language(language)
            .ok_or_else(|| PinError::UnsupportedLanguage(language.to_string()))?;
        let mapping = provider.load(script.language())?;
        log::debug!(
            "generator ready: language={} entries={}",
            script,
            mapping.len()
        );

        Ok(Self {
            script,
            mapping,
            special_chars: SpecialCharMapping::default(),
            transliterator,
        })
    }

    /// Replace the digit -> symbol table
    pub fn with_special_chars(mut self, special_chars: SpecialCharMapping) -> Self {
        self.special_chars = special_chars;
        self
    }

    pub fn language(&self) -> &'static str {
        self.script.language()
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn transliterate(&self, text: &str) -> String {
        self.transliterator.transliterate(text, self.script)
    }

    pub fn map_to_values(&self, script_text: &str) -> Vec<String> {
        map_to_values(script_text, &self.mapping)
    }

    /// Run the full pipeline on `text`
    pub fn generate(&self, text: &str) -> GenerationResult {
        let script_text = self.transliterate(text);
        let codes = self.map_to_values(&script_text);
        log::debug!("{:?} -> {:?} -> {:?}", text, script_text, codes);

        let pins = compose_pins(&codes, &self.special_chars);

        GenerationResult {
            input: text.to_string(),
            script_text,
            pin4: pins.pin4,
            pin6: pins.pin6,
            alphanumeric_pin: pins.alphanumeric,
        }
    }
}

/// One-shot generation: resolve `language`, load its table, run the pipeline
pub fn generate(
    text: &str,
    language: &str,
    provider: &dyn MappingProvider,
) -> Result<GenerationResult, PinError> {
    Ok(PinGenerator::new(language, provider)?.generate(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mapping::EmbeddedMappings;
    use std::cell::Cell;

    /// Returns a fixed string and counts calls
    struct FixedTransliterator {
        output: &'static str,
        calls: Cell<usize>,
    }

    impl FixedTransliterator {
        fn new(output: &'static str) -> Self {
            Self {
                output,
                calls: Cell::new(0),
            }
        }
    }

    impl Transliterator for FixedTransliterator {
        fn transliterate(&self, _text: &str, _script: Script) -> String {
            self.calls.set(self.calls.get() + 1);
            self.output.to_string()
        }
    }

    /// Provider that records whether it was asked for anything
    struct RecordingProvider {
        asked: Cell<bool>,
    }

    impl MappingProvider for RecordingProvider {
        fn load(&self, language: &str) -> Result<LanguageMapping, PinError> {
            self.asked.set(true);
            EmbeddedMappings.load(language)
        }

        fn languages(&self) -> Vec<String> {
            EmbeddedMappings.languages()
        }
    }

    #[test]
    fn test_unsupported_language_before_load() {
        let provider = RecordingProvider {
            asked: Cell::new(false),
        };
        let err = PinGenerator::new("klingon", &provider).unwrap_err();
        assert!(matches!(err, PinError::UnsupportedLanguage(ref l) if l == "klingon"));
        assert!(!provider.asked.get());
    }

    #[test]
    fn test_generate_with_fixed_script() {
        let t = FixedTransliterator::new("କ");
        let generator = PinGenerator::with_transliterator("odia", &EmbeddedMappings, &t).unwrap();
        let result = generator.generate("ka");

        assert_eq!(result.input, "ka");
        assert_eq!(result.script_text, "କ");
        assert_eq!(result.pin4, "1111");
        assert_eq!(result.pin6, "111111");
        assert_eq!(result.alphanumeric_pin, "KKKK#1111");
        assert_eq!(t.calls.get(), 1);
    }

    #[test]
    fn test_empty_script_text_defaults() {
        let t = FixedTransliterator::new("");
        let generator = PinGenerator::with_transliterator("tamil", &EmbeddedMappings, t).unwrap();
        let result = generator.generate("");

        assert_eq!(result.pin4, "9999");
        assert_eq!(result.pin6, "999999");
        assert_eq!(result.alphanumeric_pin, "zzzz&9999");
    }

    #[test]
    fn test_special_chars_override() {
        let t = FixedTransliterator::new("ക");
        let generator = PinGenerator::with_transliterator("malayalam", &EmbeddedMappings, t)
            .unwrap()
            .with_special_chars(SpecialCharMapping::new([('1', '!')]));
        assert_eq!(generator.generate("ka").alphanumeric_pin, "KKKK!1111");
    }

    #[test]
    fn test_result_json_keys() {
        let t = FixedTransliterator::new("କ");
        let generator = PinGenerator::with_transliterator("odia", &EmbeddedMappings, t).unwrap();
        let json = serde_json::to_value(generator.generate("ka")).unwrap();

        assert_eq!(json["input"], "ka");
        assert_eq!(json["script_text"], "କ");
        assert_eq!(json["4-digit PIN"], "1111");
        assert_eq!(json["6-digit PIN"], "111111");
        assert_eq!(json["alphanumeric PIN"], "KKKK#1111");
    }

    #[test]
    fn test_language_is_canonicalized() {
        let generator = PinGenerator::new("Oriya", &EmbeddedMappings).unwrap();
        assert_eq!(generator.language(), "odia");
        assert_eq!(generator.script(), Script::Odia);
    }
}
