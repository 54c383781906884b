// File: crates/plotter/src/config.rs
// Summary: TOML-backed settings for inputs, render size/theme and scheduler intervals.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use plot_core::{theme, ContainerSize, Theme};
use serde::Deserialize;

use crate::inputs::Inputs;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Logical width of each graph.
    pub width: f64,
    /// Logical height of each graph.
    pub height: f64,
    pub device_pixel_ratio: f64,
    pub theme: String,
    /// Overrides the theme's function line color (`blue`, `#0af`, ...).
    pub function_color: Option<String>,
    /// Overrides the theme's integral line color.
    pub integral_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            device_pixel_ratio: 1.0,
            theme: "light".to_string(),
            function_color: None,
            integral_color: None,
        }
    }
}

impl RenderConfig {
    pub fn container(&self) -> ContainerSize {
        ContainerSize::new(self.width, self.height).with_ratio(self.device_pixel_ratio)
    }

    /// The configured theme with any color overrides applied.
    pub fn theme(&self) -> Result<Theme> {
        let mut t = theme::find(&self.theme).with_context(|| format!("unknown theme '{}'", self.theme))?;
        if let Some(c) = &self.function_color {
            t.function_line = theme::parse_color(c).with_context(|| format!("bad function color '{c}'"))?;
        }
        if let Some(c) = &self.integral_color {
            t.integral_line = theme::parse_color(c).with_context(|| format!("bad integral color '{c}'"))?;
        }
        Ok(t)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    pub recompute_ms: u64,
    pub render_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self { Self { recompute_ms: 1000, render_ms: 15 } }
}

impl ScheduleConfig {
    pub fn recompute_interval(&self) -> Duration { Duration::from_millis(self.recompute_ms.max(1)) }
    pub fn render_interval(&self) -> Duration { Duration::from_millis(self.render_ms.max(1)) }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub inputs: Inputs,
    pub render: RenderConfig,
    pub schedule: ScheduleConfig,
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("invalid config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config '{}'", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in '{}'", path.display()))
    }
}
