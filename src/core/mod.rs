//! PIN generation core
//!
//! Native script text is mapped to 2-character codes through a per-language
//! table; the digits and letters of those codes are padded or cut to fixed
//! lengths and assembled into three PIN variants.

pub mod composer;
pub mod generator;
pub mod mapper;
pub mod mapping;
pub mod padding;
mod tables;

pub use composer::{compose_pins, Pins};
pub use generator::{generate, GenerationResult, PinGenerator};
pub use mapper::map_to_values;
pub use mapping::{
    EmbeddedMappings, FileMappings, LanguageMapping, MappingProvider, MappingSource,
    SpecialCharMapping,
};
