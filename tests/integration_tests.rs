//! Integration tests - end-to-end PIN generation

use std::path::PathBuf;

use pinscript::core::{EmbeddedMappings, FileMappings, MappingProvider, SpecialCharMapping};
use pinscript::{generate, PinError, PinGenerator, Script, Transliterator};

const LANGUAGES: [&str; 4] = ["odia", "telugu", "tamil", "malayalam"];
const INPUTS: [&str; 8] = ["", "ka", "rama", "Krishna", "amma", "hello world", "123", "ga cha ja"];

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("mappings")
}

/// Ignores the input and returns a fixed script string
struct Fixed(&'static str);

impl Transliterator for Fixed {
    fn transliterate(&self, _text: &str, _script: Script) -> String {
        self.0.to_string()
    }
}

#[test]
fn test_deterministic() {
    for language in LANGUAGES {
        for input in INPUTS {
            let first = generate(input, language, &EmbeddedMappings).unwrap();
            let second = generate(input, language, &EmbeddedMappings).unwrap();
            assert_eq!(first, second, "{} / {:?}", language, input);
        }
    }
}

#[test]
fn test_length_invariants() {
    for language in LANGUAGES {
        for input in INPUTS {
            let result = generate(input, language, &EmbeddedMappings).unwrap();
            assert_eq!(result.pin4.len(), 4);
            assert_eq!(result.pin6.len(), 6);
            assert!(result.pin4.chars().all(|c| c.is_ascii_digit()));
            assert!(result.pin6.chars().all(|c| c.is_ascii_digit()));

            let alnum_len = result.alphanumeric_pin.chars().count();
            assert!((9..=11).contains(&alnum_len), "{:?}", result);
            assert!(result.alphanumeric_pin.ends_with(&result.pin4));
        }
    }
}

#[test]
fn test_empty_input_defaults() {
    for language in LANGUAGES {
        let result = generate("", language, &EmbeddedMappings).unwrap();
        assert_eq!(result.pin4, "9999");
        assert_eq!(result.pin6, "999999");
        assert_eq!(result.alphanumeric_pin, "zzzz&9999");
    }
}

#[test]
fn test_unsupported_language() {
    let err = generate("ka", "klingon", &EmbeddedMappings).unwrap_err();
    assert!(matches!(err, PinError::UnsupportedLanguage(_)));
}

#[test]
fn test_single_consonant_scenario() {
    // କ -> K1: digits [1], letters [K]
    let generator =
        PinGenerator::with_transliterator("odia", &EmbeddedMappings, Fixed("କ")).unwrap();
    let result = generator.generate("ka");
    assert_eq!(result.pin4, "1111");
    assert_eq!(result.pin6, "111111");
    assert_eq!(result.alphanumeric_pin, "KKKK#1111");
}

#[test]
fn test_conjunct_cluster() {
    // କ୍ଷ maps as one unit (KX4) rather than କ + ଷ
    let generator =
        PinGenerator::with_transliterator("odia", &EmbeddedMappings, Fixed("କ୍ଷମ")).unwrap();
    let result = generator.generate("kShama");
    assert_eq!(result.pin4, "4545");
    assert_eq!(result.pin6, "454545");
    assert_eq!(result.alphanumeric_pin, "KXMKXM*4545");
}

#[test]
fn test_real_transliteration() {
    let result = generate("rama", "odia", &EmbeddedMappings).unwrap();
    assert_eq!(result.script_text, "ରମ");
    assert_eq!(result.pin4, "7575");
    assert_eq!(result.pin6, "757575");
    assert_eq!(result.alphanumeric_pin, "RMRM#7575");

    // case-folded before transliteration
    let upper = generate("RAMA", "odia", &EmbeddedMappings).unwrap();
    assert_eq!(upper.pin4, result.pin4);
    assert_eq!(upper.input, "RAMA");
}

#[test]
fn test_file_tables_match_embedded() {
    let files = FileMappings::new(data_dir());
    for language in LANGUAGES {
        assert_eq!(
            files.load(language).unwrap(),
            EmbeddedMappings.load(language).unwrap()
        );
    }
}

#[test]
fn test_file_only_languages() {
    let files = FileMappings::new(data_dir());
    assert!(files.languages().contains(&"devanagari".to_string()));
    assert!(files.languages().contains(&"bengali".to_string()));

    let result = generate("rama", "hindi", &files).unwrap();
    assert_eq!(result.script_text, "रम");
    assert_eq!(result.alphanumeric_pin, "RMRM#7575");

    let err = generate("rama", "hindi", &EmbeddedMappings).unwrap_err();
    assert!(matches!(err, PinError::MappingLoadFailure { .. }));
}

#[test]
fn test_generators_are_independent() {
    let odia = PinGenerator::with_transliterator("odia", &EmbeddedMappings, Fixed("କ")).unwrap();
    let custom = PinGenerator::with_transliterator("odia", &EmbeddedMappings, Fixed("କ"))
        .unwrap()
        .with_special_chars(SpecialCharMapping::new([('1', '~')]));

    assert_eq!(odia.generate("ka").alphanumeric_pin, "KKKK#1111");
    assert_eq!(custom.generate("ka").alphanumeric_pin, "KKKK~1111");
}
