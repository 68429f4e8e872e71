//! Single-endpoint web service
//!
//! `POST /generate` with `{"text": "...", "language": "..."}` returns the
//! generation result as JSON. Routing lives in [`handle`], a pure function of
//! method, path and body, so [`server`] only moves bytes.

pub mod server;

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::json;

use crate::core::{MappingProvider, PinGenerator};
use crate::error::PinError;
use crate::script::Script;

pub use server::serve;

/// Paths accepted for generation
pub const ROUTES: [&str; 2] = ["/generate", "/generate_pin"];

/// Request body
#[derive(Deserialize, Debug)]
pub struct PinRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Generators for every language the provider offered at startup
///
/// Tables are read once in [`ServiceState::load`]; later changes to the
/// provider's files do not affect a running service.
pub struct ServiceState {
    generators: HashMap<&'static str, PinGenerator>,
    default_language: String,
}

impl ServiceState {
    pub fn load(provider: &dyn MappingProvider, default_language: impl Into<String>) -> Self {
        let mut generators = HashMap::new();
        for language in provider.languages() {
            match PinGenerator::new(&language, provider) {
                Ok(generator) => {
                    generators.insert(generator.language(), generator);
                }
                Err(e) => log::warn!("skipping {}: {}", language, e),
            }
        }

        let state = Self {
            generators,
            default_language: default_language.into(),
        };
        log::info!("loaded tables: {}", state.languages().join(", "));
        state
    }

    /// Canonical names of the loaded languages, sorted
    pub fn languages(&self) -> Vec<&'static str> {
        let mut languages: Vec<&'static str> = self.generators.keys().copied().collect();
        languages.sort_unstable();
        languages
    }

    fn generator(&self, language: &str) -> Result<&PinGenerator, PinError> {
        let script = Script::from_language(language)
            .ok_or_else(|| PinError::UnsupportedLanguage(language.to_string()))?;
        self.generators
            .get(script.language())
            .ok_or_else(|| PinError::load_failure(script.language(), "no table loaded"))
    }
}

/// Status code and JSON body to send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn json(status: u16, value: serde_json::Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, json!({ "error": message.into() }))
    }

    fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

/// Route one request
pub fn handle(method: &str, path: &str, body: &str, state: &ServiceState) -> Reply {
    let path = path.split('?').next().unwrap_or(path);
    if !ROUTES.contains(&path) {
        return Reply::error(404, format!("no route for {}", path));
    }

    match method.to_uppercase().as_str() {
        "OPTIONS" => Reply::empty(204),
        "POST" => generate(body, state),
        other => Reply::error(405, format!("method {} not allowed", other)),
    }
}

fn generate(body: &str, state: &ServiceState) -> Reply {
    let request: PinRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            log::warn!("rejected malformed request: {}", e);
            return Reply::error(400, format!("invalid request body: {}", e));
        }
    };
    let language = request
        .language
        .as_deref()
        .unwrap_or(&state.default_language);

    let generator = match state.generator(language) {
        Ok(generator) => generator,
        Err(e) => {
            log::warn!("rejected request: {}", e);
            return Reply::error(400, e.to_string());
        }
    };

    match serde_json::to_value(generator.generate(&request.text)) {
        Ok(value) => Reply::json(200, value),
        Err(e) => Reply::error(500, e.to_string()),
    }
}
