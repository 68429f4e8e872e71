//! Error kinds surfaced by the generator

/// Errors raised before any PIN is produced.
///
/// Unrecognized script characters and empty input are not errors; they are
/// handled by dropping and defaulting.
#[derive(Debug)]
pub enum PinError {
    /// No script is known for the requested language.
    UnsupportedLanguage(String),
    /// The language's table is missing or malformed.
    MappingLoadFailure { language: String, reason: String },
}

impl PinError {
    pub fn load_failure(language: impl Into<String>, reason: impl Into<String>) -> Self {
        PinError::MappingLoadFailure {
            language: language.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for PinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PinError::UnsupportedLanguage(language) => {
                write!(f, "Unsupported language: {}", language)
            }
            PinError::MappingLoadFailure { language, reason } => {
                write!(f, "Unsupported language: {} ({})", language, reason)
            }
        }
    }
}

impl std::error::Error for PinError {}
