//! Config command - manage the bcard configuration file.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use bcard_core::models::config::BcardConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,

    /// Print the default config file path
    Path,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.action {
        ConfigAction::Init { force } => {
            let path = default_config_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            BcardConfig::default().save(&path)?;
            println!(
                "{} Wrote default config to {}",
                style("✓").green(),
                path.display()
            );
        }
        ConfigAction::Show => {
            let path = default_config_path();
            let config = if path.exists() {
                BcardConfig::from_file(&path)?
            } else {
                BcardConfig::default()
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", default_config_path().display());
        }
    }

    Ok(())
}

/// Default config location: `<user config dir>/bcard/config.json`.
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bcard")
        .join("config.json")
}
