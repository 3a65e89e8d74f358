use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Viewer settings: how the rendered page looks.
///
/// Every field is optional in the file; missing fields take their default
/// and out-of-range values are clamped on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Body font size in pixels.
    pub font_size: u32,
    /// `None` follows the host's colour scheme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// Content column width in pixels, 0 for no limit.
    pub max_width: u32,
    /// Show line numbers beside code blocks.
    pub line_numbers: bool,
    /// Nesting depth past which content renders literally.
    pub max_nesting: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: Self::DEFAULT_FONT_SIZE,
            dark_mode: None,
            max_width: Self::DEFAULT_MAX_WIDTH,
            line_numbers: false,
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

impl Settings {
    pub const DEFAULT_FONT_SIZE: u32 = 19;
    pub const DEFAULT_MAX_WIDTH: u32 = 960;
    pub const DEFAULT_MAX_NESTING: usize = 100;

    pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 9..=30;
    pub const MAX_WIDTH_RANGE: RangeInclusive<u32> = 400..=9999;
    pub const MAX_NESTING_RANGE: RangeInclusive<usize> = 1..=1000;

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let settings: Settings =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(settings.clamped()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mdview");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Pulls every field into its valid range.
    ///
    /// A max width below the minimum is raised to it, except 0 which means
    /// no limit.
    pub fn clamped(mut self) -> Self {
        self.font_size = clamp(self.font_size, &Self::FONT_SIZE_RANGE);
        if self.max_width != 0 {
            self.max_width = clamp(self.max_width, &Self::MAX_WIDTH_RANGE);
        }
        self.max_nesting = clamp(self.max_nesting, &Self::MAX_NESTING_RANGE);
        self
    }

    /// Zooms the font in or out by `delta` pixels, staying in range.
    pub fn font_size_step(&mut self, delta: i32) {
        let stepped = self.font_size.saturating_add_signed(delta);
        self.font_size = clamp(stepped, &Self::FONT_SIZE_RANGE);
    }

    /// Flips the theme. Following the host counts as light.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = Some(!self.dark_mode.unwrap_or(false));
    }
}

fn clamp<T: Ord + Copy>(value: T, range: &RangeInclusive<T>) -> T {
    value.clamp(*range.start(), *range.end())
}
