//! Configuration commands.

use clap::Subcommand;
use companion_core::{Config, CoreError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the full configuration
    List,
    /// Get a value by dot-separated key (e.g. chat.reply_delay_ms)
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a value by dot-separated key
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },
    /// Print the configuration file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), CoreError> {
    match action {
        ConfigAction::List => {
            let config = Config::load()?;
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| CoreError::Custom(e.to_string()))?;
            println!("{rendered}");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => println!("Unknown key: {key}"),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
