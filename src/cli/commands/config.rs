//! Config command handler

use super::fail;
use crate::args::ConfigSubcommand;
use grade_advisor::config::Config;
use grade_advisor::info;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            update(config, |c| c.set(&key, &value));
            println!("✓ Set {key} = {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            update(config, |c| c.unset(&key, defaults));
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    println!("# {}\n", Config::get_config_file_path().display());
    print!("{config}");
}

fn show_key(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => fail(&format!("✗ Unknown config key: '{key}'")),
    }
}

/// Apply an in-memory change and persist it
fn update(config: &mut Config, change: impl FnOnce(&mut Config) -> Result<(), String>) {
    if let Err(e) = change(config) {
        fail(&format!("✗ {e}"));
    }
    if let Err(e) = config.save() {
        fail(&format!("✗ Failed to save config: {e}"));
    }
    info!("Config saved to {}", Config::get_config_file_path().display());
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            fail(&format!("✗ Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
