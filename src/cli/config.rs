//! `classradar config` subcommands

use anyhow::Result;
use clap::Subcommand;

use crate::config::{config_path, load_config, save_config, Config};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file if none exists
    Init,
}

pub async fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommands::Init => run_init(),
    }
}

fn run_show() -> Result<()> {
    let mut config = Config::load()?;
    if config.todoist.token.is_some() {
        config.todoist.token = Some("********".to_string());
    }
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn run_init() -> Result<()> {
    let path = config_path()?;
    if load_config()?.is_some() {
        println!("Config already exists at {}", path.display());
        return Ok(());
    }

    save_config(&Config::default())?;
    println!("Created {}", path.display());
    println!("Add your Todoist token under [todoist] to push tasks.");
    Ok(())
}
