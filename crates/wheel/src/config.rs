use directories::ProjectDirs;
use plutchik::{Color, Locale};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Set when the dataset is keyed by this locale's display names.
    #[serde(default)]
    pub locale: Option<Locale>,
    #[serde(default = "default_disabled_color")]
    pub disabled_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            locale: None,
            disabled_color: default_disabled_color(),
        }
    }
}

fn default_catalog() -> PathBuf {
    PathBuf::from("data/emotions-en.json")
}

fn default_disabled_color() -> Color {
    Color::new(0xD3, 0xD3, 0xD3)
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "plutchik", "wheel").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn build<S>(file: S, env: config::Environment) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let s = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    build(
        config::File::from(config_path).required(false),
        config::Environment::with_prefix("WHEEL"),
    )
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default settings: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
