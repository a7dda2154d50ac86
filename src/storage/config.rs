use super::Result;
use crate::core::matcher::SearchMode;
use crate::core::pager::PagerOptions;
use crate::display::surface::RegionSelectors;
use crate::error::{AppError, ConfigError, StorageError};
use crate::utils::validation::{validate_page_size, validate_selector};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_clamp_pages() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub search_mode: SearchMode,
    #[serde(default = "default_clamp_pages")]
    pub clamp_pages: bool,
    #[serde(default)]
    pub regions: RegionSelectors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_mode: SearchMode::Literal,
            clamp_pages: true,
            regions: RegionSelectors::default(),
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!(
                "No configuration at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|err| StorageError::ConfigParseError {
            message: format!("{}: {}", config_path.display(), err),
        })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|err| StorageError::ConfigSaveFailed {
                message: err.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `<config_dir>/roster-pager/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("roster-pager").join("config.toml"))
    }

    /// Set one key from its textual form.
    pub fn set_value(&mut self, key: &str, value: &str) -> crate::Result<()> {
        let invalid = |reason: String| -> AppError {
            ConfigError::InvalidValue {
                field: key.to_string(),
                value: value.to_string(),
                reason,
            }
            .into()
        };

        match key {
            "page_size" => {
                let page_size = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|err| invalid(err.to_string()))?;
                validate_page_size(page_size)?;
                self.page_size = page_size;
            }
            "search_mode" => {
                self.search_mode = value.parse::<SearchMode>().map_err(invalid)?;
            }
            "clamp_pages" => {
                self.clamp_pages = value
                    .trim()
                    .parse::<bool>()
                    .map_err(|err| invalid(err.to_string()))?;
            }
            "regions.list" | "regions.pagination" | "regions.search" => {
                validate_selector(value)?;
                let selector = value.trim().to_string();
                match key {
                    "regions.list" => self.regions.list = selector,
                    "regions.pagination" => self.regions.pagination = selector,
                    _ => self.regions.search = selector,
                }
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    pub fn pager_options(&self) -> PagerOptions {
        PagerOptions::new()
            .with_page_size(self.page_size)
            .with_search_mode(self.search_mode)
            .with_clamp_pages(self.clamp_pages)
    }
}
