use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::PinConfig;
use crate::core::MappingSource;

#[derive(Parser, Debug)]
#[command(
    name = "pinscript",
    version,
    about = "Derive deterministic PINs from romanized text via Indic scripts"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $PINSCRIPT_CONFIG or ~/.config/pinscript/config.json)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, short, global = true, help = "Language, e.g. odia, telugu, tamil, malayalam")]
    pub language: Option<String>,
    #[arg(long, global = true, help = "Table source: embedded or files")]
    pub mapping_source: Option<MappingSource>,
    #[arg(long, global = true, help = "Directory of <language>.json tables")]
    pub mapping_dir: Option<PathBuf>,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for a language, then for texts until EOF or a blank line
    Interactive,
    /// Generate PINs for one text
    Generate { text: String },
    /// List languages the active table source can serve
    Languages,
    /// Run the HTTP endpoint
    Serve {
        #[arg(long)]
        addr: Option<String>,
    },
}

impl Cli {
    /// Fold command-line overrides into the loaded config
    pub fn apply_overrides(&self, mut config: PinConfig) -> PinConfig {
        if let Some(language) = &self.language {
            config.default_language = language.clone();
        }
        if let Some(source) = self.mapping_source {
            config.mapping_source = source;
        }
        if let Some(dir) = &self.mapping_dir {
            config.mapping_dir = dir.clone();
        }
        if let Some(Commands::Serve { addr: Some(addr) }) = &self.command {
            config.listen_addr = addr.clone();
        }
        config
    }
}
