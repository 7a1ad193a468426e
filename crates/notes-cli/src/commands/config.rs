use std::path::Path;

use notes_core::config::{ClientConfig, ConfigFile};
use notes_core::util::normalize_base_url;

use crate::cli::ConfigCommands;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, api_url: Option<String>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Show => {
            let config = ClientConfig::resolve(api_url)?;
            println!("{} ({})", config.api_base_url, config.source);
            Ok(())
        }
        ConfigCommands::SetUrl { url } => {
            let path = ConfigFile::default_path()?;
            let saved = save_api_url(&path, &url)?;
            println!("{saved}");
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Validate `url` and persist it to the config file at `path`, keeping other settings
pub fn save_api_url(path: &Path, url: &str) -> Result<String, CliError> {
    let normalized = normalize_base_url(url).map_err(CliError::Config)?;
    let mut config = ConfigFile::load_from_path(path)?;
    config.api_base_url = Some(normalized.clone());
    config.save_to_path(path)?;
    Ok(normalized)
}
