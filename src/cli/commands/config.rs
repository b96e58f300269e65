use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};

use crate::config::PostfilterConfig;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration
    Show {
        /// Output format: json, toml
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
    /// Get configuration value
    Get { key: String },
}

pub fn execute(args: ConfigArgs, custom_config: Option<&str>) -> Result<()> {
    let config = PostfilterConfig::load(custom_config)?;

    match args.command {
        ConfigCommand::Show { format } => {
            let merged = config.get_full_config()?;
            let rendered = match format.to_lowercase().as_str() {
                "json" => serde_json::to_string_pretty(&merged)?,
                "toml" => toml::to_string_pretty(&merged)?,
                _ => return Err(anyhow!("Unsupported format: {}. Use json or toml", format)),
            };
            println!("{}", rendered.trim_end());
        }
        ConfigCommand::Get { key } => {
            let value = config
                .get_section(&key)
                .map_err(|_| anyhow!("Configuration key '{}' not found", key))?;

            match value {
                serde_json::Value::Object(_) => println!("{}", serde_json::to_string_pretty(&value)?),
                serde_json::Value::Array(items) => {
                    for item in items {
                        match item {
                            serde_json::Value::String(s) => println!("{}", s),
                            other => println!("{}", other),
                        }
                    }
                }
                serde_json::Value::String(s) => println!("{}", s),
                other => println!("{}", other),
            }
        }
    }

    Ok(())
}
