use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, ConfigError, Environment};
use log::{info, trace};

use super::defaults::ExplorerConfig;
use super::network::Network;

pub const ENV_PREFIX: &str = "OLT";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

/// Loads the explorer configuration from `path`, layered with `OLT_*`
/// environment variables. A default file is written first if none exists.
pub fn load_configuration(path: &Path, cli_network: Option<Network>) -> Result<ExplorerConfig> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let mut cfg = Config::builder()
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
        .build()
        .context("Could not build initial config")?;

    if let Some(network) = cli_network {
        let key = format!("{}.network", ExplorerConfig::KEY);
        trace!("Set override: ({key}, {network})");
        cfg = Config::builder()
            .add_source(cfg)
            .set_override(key.as_str(), network.as_str())
            .context("Could not override config property")?
            .build()
            .context("Could not build final config")?;
    }

    match cfg.get::<ExplorerConfig>(ExplorerConfig::KEY) {
        Ok(explorer) => Ok(explorer),
        Err(ConfigError::NotFound(_)) => Ok(ExplorerConfig::default()),
        Err(e) => Err(e).context("Invalid explorer configuration"),
    }
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
