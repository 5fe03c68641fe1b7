use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        Self::config_path_under(std::env::var("HOME").ok())
    }

    fn config_path_under(home: Option<String>) -> Option<PathBuf> {
        match home {
            Some(home) if !home.is_empty() => {
                let config_dir = PathBuf::from(home)
                    .join(".config")
                    .join("attention-drop");
                Some(config_dir.join("config.json"))
            }
            _ => ProjectDirs::from("", "", "attention-drop")
                .map(|proj_dirs| proj_dirs.config_dir().join("config.json")),
        }
    }
}
