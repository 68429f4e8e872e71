//! Language code tables and the providers that load them
//!
//! A [`LanguageMapping`] is immutable once built. Providers hand out fresh
//! copies, so generators for different languages never share mutable state.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::tables;
use crate::error::PinError;
use crate::script::Script;

/// Script character (or cluster) -> code table for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMapping {
    language: String,
    codes: HashMap<String, String>,
    /// Longest key in chars; 1 when the table has no clusters
    max_key_chars: usize,
}

impl LanguageMapping {
    /// Build a table, validating every entry
    ///
    /// Single-character keys need a 2-character code; cluster keys (conjuncts
    /// such as `କ୍ଷ`) may carry up to 3. Codes are ASCII letters and digits.
    pub fn new<K, V, I>(language: impl Into<String>, entries: I) -> Result<Self, PinError>
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let language = language.into();
        let mut codes = HashMap::new();
        let mut max_key_chars = 1;

        for (key, code) in entries {
            let key = key.into();
            let code = code.into();
            let key_chars = key.chars().count();

            if key_chars == 0 {
                return Err(PinError::load_failure(&language, "empty key"));
            }
            let code_len = code.chars().count();
            let len_ok = if key_chars == 1 {
                code_len == 2
            } else {
                (2..=3).contains(&code_len)
            };
            if !len_ok || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(PinError::load_failure(
                    &language,
                    format!("invalid code {:?} for {:?}", code, key),
                ));
            }

            max_key_chars = max_key_chars.max(key_chars);
            codes.insert(key, code);
        }

        Ok(Self {
            language,
            codes,
            max_key_chars,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.codes.get(key).map(String::as_str)
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Digit -> symbol table used for the alphanumeric PIN's separator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialCharMapping {
    symbols: HashMap<char, char>,
}

impl SpecialCharMapping {
    /// Fallback when a digit has no entry
    pub const FALLBACK: char = '@';

    pub fn new(symbols: impl IntoIterator<Item = (char, char)>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    pub fn symbol_for(&self, digit: char) -> char {
        self.symbols.get(&digit).copied().unwrap_or(Self::FALLBACK)
    }
}

impl Default for SpecialCharMapping {
    fn default() -> Self {
        Self::new(tables::SPECIAL_CHARS)
    }
}

/// Source of language tables
pub trait MappingProvider {
    /// Load the table for `language`. Fails with `MappingLoadFailure` when
    /// the provider has nothing usable for it.
    fn load(&self, language: &str) -> Result<LanguageMapping, PinError>;

    /// Languages this provider can serve
    fn languages(&self) -> Vec<String>;
}

impl<P: MappingProvider + ?Sized> MappingProvider for Box<P> {
    fn load(&self, language: &str) -> Result<LanguageMapping, PinError> {
        (**self).load(language)
    }

    fn languages(&self) -> Vec<String> {
        (**self).languages()
    }
}

/// Tables compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedMappings;

impl EmbeddedMappings {
    fn table(script: Script) -> Option<&'static [(&'static str, &'static str)]> {
        match script {
            Script::Odia => Some(tables::ODIA),
            Script::Telugu => Some(tables::TELUGU),
            Script::Tamil => Some(tables::TAMIL),
            Script::Malayalam => Some(tables::MALAYALAM),
            _ => None,
        }
    }
}

impl MappingProvider for EmbeddedMappings {
    fn load(&self, language: &str) -> Result<LanguageMapping, PinError> {
        let script = Script::from_language(language)
            .ok_or_else(|| PinError::UnsupportedLanguage(language.to_string()))?;
        let table = Self::table(script)
            .ok_or_else(|| PinError::load_failure(script.language(), "no embedded table"))?;
        LanguageMapping::new(script.language(), table.iter().copied())
    }

    fn languages(&self) -> Vec<String> {
        Script::ALL
            .iter()
            .filter(|s| Self::table(**s).is_some())
            .map(|s| s.language().to_string())
            .collect()
    }
}

/// Tables read from `<dir>/<language>.json`
///
/// # File format
/// ```json
/// { "କ": "K1", "ଖ": "K2", "କ୍ଷ": "KX4" }
/// ```
#[derive(Debug, Clone)]
pub struct FileMappings {
    dir: PathBuf,
}

impl FileMappings {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{}.json", language))
    }
}

impl MappingProvider for FileMappings {
    fn load(&self, language: &str) -> Result<LanguageMapping, PinError> {
        let script = Script::from_language(language)
            .ok_or_else(|| PinError::UnsupportedLanguage(language.to_string()))?;
        let language = script.language();
        let path = self.path_for(language);

        let file = File::open(&path)
            .map_err(|e| PinError::load_failure(language, format!("{}: {}", path.display(), e)))?;
        let entries: HashMap<String, String> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| PinError::load_failure(language, format!("{}: {}", path.display(), e)))?;

        log::debug!("loaded {} entries from {}", entries.len(), path.display());
        LanguageMapping::new(language, entries)
    }

    fn languages(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut languages: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_string))
            .filter(|stem| Script::from_language(stem).is_some())
            .collect();
        languages.sort();
        languages
    }
}

/// Which provider the configuration selects
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MappingSource {
    #[default]
    Embedded,
    Files,
}

impl MappingSource {
    pub fn provider(self, dir: &Path) -> Box<dyn MappingProvider + Send + Sync> {
        match self {
            MappingSource::Embedded => Box::new(EmbeddedMappings),
            MappingSource::Files => Box::new(FileMappings::new(dir)),
        }
    }
}

impl std::str::FromStr for MappingSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "embedded" => Ok(MappingSource::Embedded),
            "files" | "file" => Ok(MappingSource::Files),
            other => Err(format!("unknown mapping source: {} (expected embedded|files)", other)),
        }
    }
}
