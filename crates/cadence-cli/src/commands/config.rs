//! Config command - inspect and edit the CLI configuration.

use anyhow::Result;

use crate::cli::ConfigAction;
use crate::config::Config;

/// Execute the config command.
pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }

        ConfigAction::Path => {
            println!("{}", Config::path().display());
        }

        ConfigAction::SetDatabase { path } => {
            let mut config = Config::load()?;
            config.database = Some(path.clone());
            config.save()?;
            println!("Default database set to {}", path.display());
        }
    }

    Ok(())
}
