// File: ./src/config.rs
use crate::frame::Placement;
use crate::paths::AppPaths;
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub behavior: Behavior,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub always_on_top: bool,
    pub placement: Placement,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 180.0,
            height: 240.0,
            always_on_top: true,
            placement: Placement::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub entry_height: f32,
    pub row_height: f32,
    pub font_size: f32,
    pub menu_width: f32,
    pub menu_item_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            entry_height: 24.0,
            row_height: 18.0,
            font_size: 13.0,
            menu_width: 80.0,
            menu_item_height: 22.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    /// How long toggling stays off after a delete.
    pub rearm_delay_ms: u64,
    pub double_click_ms: u64,
    pub double_click_distance: f32,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            rearm_delay_ms: 100,
            double_click_ms: 500,
            double_click_distance: 4.0,
        }
    }
}

impl Behavior {
    pub fn rearm_delay(&self) -> Duration {
        Duration::from_millis(self.rearm_delay_ms)
    }

    pub fn double_click_interval(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads `explicit` when given, otherwise the per-user config file if one
    /// exists, otherwise falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match AppPaths::config_file() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }
}
