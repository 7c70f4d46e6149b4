use std::fs;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info, warn};

use proxy_model::models::ProxyRecord;
use proxy_model::settings::update_settings_from_file;
use proxy_model::{MemoryStore, ProxyInput, ProxyRegistry, Settings};

/// Validate a proxy link or dictionary and print the canonical record
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file (YAML or TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Proxy link, e.g. ss://aes-256-cfb:pass@1.2.3.4:8388
    #[arg(short, long, value_name = "URI", conflicts_with = "input")]
    uri: Option<String>,

    /// Name for the proxy given with --uri
    #[arg(short, long, value_name = "NAME", requires = "uri")]
    name: Option<String>,

    /// YAML or JSON file holding a proxy dictionary
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,
}

fn read_input(args: &Args) -> Result<ProxyInput, Box<dyn std::error::Error>> {
    if let Some(uri) = &args.uri {
        return Ok(ProxyInput::Uri {
            uri: uri.clone(),
            name: args.name.clone(),
        });
    }
    match &args.input {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
            Ok(ProxyInput::from_value(&value))
        }
        None => Err("either --uri or --input is required".into()),
    }
}

/// Seed a registry with the rule sets and proxies listed in the settings
fn seed_registry(settings: &Settings) -> ProxyRegistry {
    let registry = ProxyRegistry::new(MemoryStore::new());
    for rule_set in &settings.rule_sets {
        registry.add_rule_set(rule_set.clone());
    }
    for dict in &settings.proxies {
        if let Err(e) = registry.add(&ProxyInput::from(dict.clone())) {
            warn!("Skipping configured proxy: {}", e);
        }
    }
    registry
}

fn print_record(record: &ProxyRecord) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(record)?);
    let uri = record.uri();
    if !uri.is_empty() {
        println!("{}", uri);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.config {
        if let Err(e) = update_settings_from_file(path) {
            eprintln!("Error: failed to load settings from {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    }
    let settings = Settings::current();

    env_logger::init_from_env(Env::default().default_filter_or(settings.log_level.as_str()));
    if !settings.pref_path.is_empty() {
        info!("Loaded settings from {}", settings.pref_path);
    }

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let registry = seed_registry(&settings);
    info!(
        "Seeded {} proxies and {} rule sets",
        registry.len(),
        settings.rule_sets.len()
    );

    match registry.add(&input) {
        Ok(record) => match print_record(&record) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to serialize record: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
