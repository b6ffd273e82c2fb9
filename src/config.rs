use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::RttPlotError;
use crate::perf_log::ExtractOptions;
use crate::plot::PlotConfig;

const CONFIG_DIR_NAME: &str = "rttplot";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub extract: ExtractOptions,
    pub plot: PlotConfig,
}

impl AppConfig {
    /// Per-user config file location, if the platform has a config directory
    pub fn local_config_path() -> Option<PathBuf> {
        Some(
            dirs::config_dir()?
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    }

    /// Loads the explicit config file if one is given, otherwise the per-user
    /// file when it exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, RttPlotError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::local_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, RttPlotError> {
        let file = File::open(path).map_err(|e| RttPlotError::ConfigIOError {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = serde_json::from_reader(file).map_err(|e| RttPlotError::ConfigParseError {
            path: path.display().to_string(),
            source: e,
        })?;
        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
