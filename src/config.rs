use serde::Deserialize;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use anyhow::{Context, Result};
use log::debug;
use std::fs;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_true")]
    pub allow_command: bool,
    #[serde(default = "default_true")]
    pub overwrite: bool,
    #[serde(default)]
    pub legacy_exit_status: bool,
    #[serde(default)]
    pub applications_dir: Option<PathBuf>,
}

fn default_true() -> bool { true }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            allow_command: true,
            overwrite: true,
            legacy_exit_status: false,
            applications_dir: None,
        }
    }
}

/// Effective options for one run, config file merged with CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub allow_command: bool,
    pub overwrite: bool,
    pub applications_dir: PathBuf,
}

pub fn default_config_path() -> PathBuf {
    let proj_dirs = ProjectDirs::from("org", "mkdesktop", "mkdesktop");
    if let Some(dirs) = &proj_dirs {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("config.toml")
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    debug!("Loading config from {:?}", path);
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
