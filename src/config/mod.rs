use std::path::{Path, PathBuf};

use crate::errors::{PodcatcherError, PodcatcherResult};

const DEFAULT_DOWNLOADER: &str = "aria2c";
const DOWNLOADER_INPUT_FILE: &str = "aria2_input";
const CACHE_DB_FILE: &str = "cache.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub registry_path: PathBuf,
    pub cache_db_path: PathBuf,
    pub download_root: PathBuf,
    pub downloader_program: String,
    pub downloader_input_path: PathBuf,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// `~/.config/podcatcher/urls` on Linux
    pub fn default_registry_path() -> PodcatcherResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            PodcatcherError::Config("Unable to resolve the user config directory".to_string())
        })?;
        Ok(base.join("podcatcher").join("urls"))
    }

    /// Load configuration; `registry_override` (from `--config`) wins over the environment
    pub fn load(registry_override: Option<PathBuf>) -> PodcatcherResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let registry_path = match registry_override {
            Some(path) => path,
            None => match std::env::var_os("PODCATCHER_CONFIG") {
                Some(path) => PathBuf::from(path),
                None => Self::default_registry_path()?,
            },
        };
        let registry_path = absolute(&registry_path)?;
        let registry_dir = registry_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let cache_db_path = std::env::var_os("PODCATCHER_CACHE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|| registry_dir.join(CACHE_DB_FILE));

        let download_root = match std::env::var_os("PODCATCHER_DOWNLOAD_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir()
                .map(|home| home.join("Podcasts"))
                .ok_or_else(|| {
                    PodcatcherError::Config(
                        "Unable to resolve the home directory, set PODCATCHER_DOWNLOAD_DIR"
                            .to_string(),
                    )
                })?,
        };

        let downloader_program = std::env::var("PODCATCHER_ARIA2C")
            .unwrap_or_else(|_| DEFAULT_DOWNLOADER.to_string());

        Ok(Self {
            downloader_input_path: registry_dir.join(DOWNLOADER_INPUT_FILE),
            registry_path,
            cache_db_path,
            download_root,
            downloader_program,
        })
    }
}

fn absolute(path: &Path) -> PodcatcherResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_path_ends_with_podcatcher_urls() {
        let path = Config::default_registry_path().unwrap();
        assert!(path.ends_with("podcatcher/urls"));
    }

    #[test]
    fn test_registry_override_derives_sibling_paths() {
        let dir = tempfile::TempDir::new().unwrap();
        let registry = dir.path().join("urls");

        let config = Config::load(Some(registry.clone())).unwrap();

        assert_eq!(config.registry_path, registry);
        assert_eq!(config.downloader_input_path, dir.path().join("aria2_input"));
    }

    #[test]
    fn test_relative_registry_path_made_absolute() {
        let config = Config::load(Some(PathBuf::from("podcasts/urls"))).unwrap();
        assert!(config.registry_path.is_absolute());
        assert!(config.registry_path.ends_with("podcasts/urls"));
    }
}
