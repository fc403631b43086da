use crate::error::ConfigError;
use crate::model::Fold;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Viewer configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub book: BookConfig,
    #[serde(default)]
    pub fold: Fold,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Width of the sidebar (in pixels)
    pub sidebar_width: f32,
}

/// Which book the viewer shows and where it pretends to serve it from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookConfig {
    /// Origin pages are addressed under, e.g. "https://book.example.org/"
    pub base_url: String,
    /// Page opened on startup, relative to the book root
    pub start_page: String,
    /// Optional TOML table of contents replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toc_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig {
                mode: "dark".to_string(),
            },
            panel: PanelConfig {
                sidebar_width: 300.0,
            },
            book: BookConfig {
                base_url: "https://book.example.org/".to_string(),
                start_page: "".to_string(),
                toc_file: None,
            },
            fold: Fold::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tocbox")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if it is missing or broken
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            Config::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
            }
        }
        Ok(())
    }

    /// Prefix that turns book-relative links into links valid from `page`.
    pub fn path_to_root(page: &str) -> String {
        "../".repeat(page.matches('/').count())
    }

    /// Absolute address of a book-relative page.
    pub fn page_url(&self, page: &str) -> String {
        format!("{}/{}", self.book.base_url.trim_end_matches('/'), page)
    }

    pub fn dark_mode(&self) -> bool {
        self.theme.mode != "light"
    }
}
