pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod script;
pub mod web;

pub use crate::core::{generate, GenerationResult, PinGenerator};
pub use crate::error::PinError;
pub use crate::script::{ItransTransliterator, Script, Transliterator};
