//! pinscript - romanized text -> Indic script -> PIN

use std::io::{self, BufRead, Write};

use clap::Parser;
use pinscript::cli::{Cli, Commands};
use pinscript::config::{config_path, load_config_from, PinConfig};
use pinscript::core::{GenerationResult, MappingProvider, PinGenerator};
use pinscript::web::{serve, ServiceState};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

fn main() {
    // warn and above unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let path = cli.config.clone().unwrap_or_else(config_path);
    let config = cli.apply_overrides(load_config_from(&path));
    log::debug!("config from {}: {:?}", path.display(), config);

    if let Err(e) = run(&cli, config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: PinConfig) -> Result<(), BoxError> {
    let provider = config.mapping_source.provider(&config.mapping_dir);

    match &cli.command {
        None | Some(Commands::Interactive) => {
            interactive(&*provider, &config, cli.language.is_some(), cli.json)
        }
        Some(Commands::Generate { text }) => {
            let generator = PinGenerator::new(&config.default_language, &*provider)?;
            print_result(&generator.generate(text), cli.json)
        }
        Some(Commands::Languages) => {
            let languages = provider.languages();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&languages)?);
            } else {
                for language in languages {
                    println!("{}", language);
                }
            }
            Ok(())
        }
        Some(Commands::Serve { .. }) => {
            let state = ServiceState::load(&*provider, config.default_language);
            serve(&config.listen_addr, state)
        }
    }
}

fn interactive(
    provider: &dyn MappingProvider,
    config: &PinConfig,
    language_given: bool,
    json: bool,
) -> Result<(), BoxError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let language = if language_given {
        config.default_language.clone()
    } else {
        match prompt("Choose language: ", &mut lines)? {
            Some(choice) if !choice.trim().is_empty() => choice.trim().to_string(),
            _ => config.default_language.clone(),
        }
    };
    let generator = PinGenerator::new(&language, provider)?;

    while let Some(text) = prompt("Enter text: ", &mut lines)? {
        if text.is_empty() {
            break;
        }
        print_result(&generator.generate(&text), json)?;
    }
    Ok(())
}

/// Print `message` and read one line, without its line terminator
fn prompt(
    message: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    lines.next().transpose()
}

fn print_result(result: &GenerationResult, json: bool) -> Result<(), BoxError> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("Input: {} → Script: {}", result.input, result.script_text);
        println!("4-digit PIN: {}", result.pin4);
        println!("6-digit PIN: {}", result.pin6);
        println!("Alphanumeric PIN: {}", result.alphanumeric_pin);
    }
    Ok(())
}
