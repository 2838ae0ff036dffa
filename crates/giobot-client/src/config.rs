//! Client configuration, loaded from YAML.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use giobot_input::KeyBindings;
use giobot_view::{ColorParseError, Rgba, Theme, Viewport};
use serde::{Deserialize, Serialize};

/// Commented template written by `giobot init`. Parses to [`ClientConfig::default`].
pub const DEFAULT_CONFIG_YAML: &str = r##"# giobot client configuration

# Fixed polling cadence of the tick loop.
tick_interval_ms: 100

# Window geometry in pixels; the map is drawn inside the border.
viewport:
  width: 800.0
  height: 800.0
  border: 25.0

# Map size assumed until the first snapshot arrives.
grid:
  cols: 18
  rows: 18

keys:
  left: a
  right: d
  up: w
  down: s
  cancel: space
  toggle_split: e
  quit: q

theme:
  fog: "#444444"
  neutral: "#888888"
  background: "#FFFFFF"
  text: "#FFFFFF"
  grid: "#888888"
  palette:
    - "#E12727"
    - "#0529FA"
    - "#306901"
    - "#5E196D"
    - "#2D6B6B"
    - "#183400"
    - "#EF9628"
    - "#601111"
"##;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Tick loop cadence in milliseconds
    pub tick_interval_ms: u64,

    /// Window geometry
    pub viewport: ViewportConfig,

    /// Initial map size (before any snapshot)
    pub grid: GridConfig,

    /// Key bindings
    pub keys: KeyBindings,

    /// Colors, as `#RRGGBB` strings
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
    pub border: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            border: 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cols: 18, rows: 18 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub fog: String,
    pub neutral: String,
    pub background: String,
    pub text: String,
    pub grid: String,
    pub palette: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            fog: theme.fog.to_string(),
            neutral: theme.neutral.to_string(),
            background: theme.background.to_string(),
            text: theme.text.to_string(),
            grid: theme.grid.to_string(),
            palette: theme.palette.iter().map(Rgba::to_string).collect(),
        }
    }
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Result<Theme, ConfigError> {
        let parse = |field: &'static str, value: &str| {
            Rgba::from_hex(value).map_err(|source| ConfigError::Color { field, source })
        };
        Ok(Theme {
            fog: parse("fog", &self.fog)?,
            neutral: parse("neutral", &self.neutral)?,
            background: parse("background", &self.background)?,
            text: parse("text", &self.text)?,
            grid: parse("grid", &self.grid)?,
            palette: self
                .palette
                .iter()
                .map(|c| parse("palette", c))
                .collect::<Result<_, _>>()?,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            viewport: ViewportConfig::default(),
            grid: GridConfig::default(),
            keys: KeyBindings::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("tick_interval_ms must be greater than zero")]
    ZeroInterval,
    #[error("viewport {width}x{height} with border {border} leaves no room for the map")]
    ViewportTooSmall { width: f64, height: f64, border: f64 },
    #[error("grid must have at least one row and one column (got {cols}x{rows})")]
    EmptyGrid { cols: usize, rows: usize },
    #[error("invalid theme color for `{field}`")]
    Color {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },
    #[error("key `{0}` is bound to more than one action")]
    KeyConflict(String),
}

impl ClientConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        let ViewportConfig {
            width,
            height,
            border,
        } = self.viewport;
        if border < 0.0 || width - 2.0 * border <= 0.0 || height - 2.0 * border <= 0.0 {
            return Err(ConfigError::ViewportTooSmall {
                width,
                height,
                border,
            });
        }
        if self.grid.cols == 0 || self.grid.rows == 0 {
            return Err(ConfigError::EmptyGrid {
                cols: self.grid.cols,
                rows: self.grid.rows,
            });
        }
        if let Some(key) = self.keys.conflicts().into_iter().next() {
            return Err(ConfigError::KeyConflict(key));
        }
        self.theme.to_theme()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.viewport.width,
            self.viewport.height,
            self.viewport.border,
            self.grid.cols,
            self.grid.rows,
        )
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        self.theme.to_theme()
    }
}
