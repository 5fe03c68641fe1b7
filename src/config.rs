use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::detector::{DropDetector, DropMethod, DEFAULT_THRESHOLD};

/// Defaults applied when the command line leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub method: DropMethod,
    pub threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: DropMethod::Min,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl Config {
    pub fn detector(&self, method: Option<DropMethod>, threshold: Option<f64>) -> DropDetector {
        DropDetector::new(
            method.unwrap_or(self.method),
            threshold.unwrap_or(self.threshold),
        )
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("attention_drop.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("ignoring config {}: {}", self.path.display(), e);
                Config::default()
            }
        }
    }
}
