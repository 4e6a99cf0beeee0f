use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigClock {
    System,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigAreaHours {
    None,
    Tasks,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) clock: Option<ConfigClock>,
    #[serde(default)]
    pub(crate) area_hours: Option<ConfigAreaHours>,
    #[serde(default)]
    pub(crate) default_area: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

/// Result of config discovery. Problems are reported once logging is up.
#[derive(Debug, Default)]
pub(crate) struct ConfigLoad {
    pub(crate) config: Config,
    pub(crate) path: Option<PathBuf>,
    pub(crate) problems: Vec<String>,
}

impl Config {
    /// Parse one file; used for an explicit --config path
    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str::<Config>(&content).map_err(|e| AppError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// First parseable file among the default locations, else defaults
    pub(crate) fn discover() -> ConfigLoad {
        Self::discover_in(&Self::get_config_paths())
    }

    fn discover_in(paths: &[PathBuf]) -> ConfigLoad {
        let mut problems = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from(path) {
                Ok(config) => {
                    return ConfigLoad {
                        config,
                        path: Some(path.clone()),
                        problems,
                    };
                }
                Err(e) => problems.push(e.to_string()),
            }
        }

        ConfigLoad {
            problems,
            ..ConfigLoad::default()
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/worksched/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("worksched").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/worksched/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("worksched").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.worksched.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".worksched.toml"));
        }

        paths
    }
}
