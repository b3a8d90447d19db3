use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Events dataset written by the site's fetch pipeline
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Title used for the standalone page
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset: default_dataset(),
            page_title: default_page_title(),
        }
    }
}

fn default_dataset() -> String {
    "_data/events.json".to_string()
}

fn default_page_title() -> String {
    "Events".to_string()
}

impl Config {
    /// Dataset path with `~` expanded
    pub fn dataset_path(&self) -> PathBuf {
        expand_path(&self.dataset)
    }
}

/// Get the config directory path (~/.config/eventsite)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("eventsite");
    Ok(config_dir)
}

/// Get the config file path (~/.config/eventsite/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/eventsite/config.toml, falling back to defaults
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.dataset, "_data/events.json");
        assert_eq!(config.page_title, "Events");
    }

    #[test]
    fn reads_dataset_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dataset = \"site/_data/events.json\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.dataset_path(), PathBuf::from("site/_data/events.json"));
        assert_eq!(config.page_title, "Events");
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "dataset = [").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn expands_home_directory() {
        let expanded = expand_path("~/site/events.json");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("site/events.json"));
        }
        assert_eq!(expand_path("relative.json"), PathBuf::from("relative.json"));
    }
}
