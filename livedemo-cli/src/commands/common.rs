//! Shared build arguments: config file, catalog, wrapper and attribute flags.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use livedemo_core::config::CONFIG_FILE_NAME;
use livedemo_core::{load_config_at, BuildConfig, FsCatalog};
use livedemo_extension::LiveDemoExtension;

/// Options shared by every command that reads the content catalog.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Build config file. Defaults to ./livedemo.yaml when it exists.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Content catalog root (overrides `catalog` in the config).
    #[arg(long, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Wrapper template (overrides `wrapper` in the config).
    #[arg(long, value_name = "FILE")]
    pub wrapper: Option<PathBuf>,

    /// Document attribute, repeatable.
    #[arg(long = "attr", short = 'a', value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub attrs: Vec<(String, String)>,
}

impl BuildArgs {
    /// Config file merged with command-line overrides.
    pub fn resolve(&self) -> Result<BuildConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_at(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    load_config_at(default).context("failed to load ./livedemo.yaml")?
                } else {
                    BuildConfig::default()
                }
            }
        };

        if let Some(catalog) = &self.catalog {
            config.catalog = catalog.clone();
        }
        if let Some(wrapper) = &self.wrapper {
            config.wrapper = Some(wrapper.clone());
        }
        for (name, value) in &self.attrs {
            config.attributes.insert(name, value);
        }

        if config.catalog.as_os_str().is_empty() {
            bail!("no content catalog configured; pass --catalog or set `catalog` in {CONFIG_FILE_NAME}");
        }
        Ok(config)
    }

    /// Register the liveDemo extension for `config`.
    pub fn extension(&self, config: &BuildConfig) -> Result<LiveDemoExtension<FsCatalog>> {
        let catalog = FsCatalog::new(&config.catalog);
        match &config.wrapper {
            Some(path) => LiveDemoExtension::register(catalog, path)
                .with_context(|| format!("failed to load wrapper template '{}'", path.display())),
            None => LiveDemoExtension::register_bundled(catalog)
                .context("failed to parse bundled wrapper template"),
        }
    }
}

/// Parse `NAME=VALUE`.
pub fn parse_key_value(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}
