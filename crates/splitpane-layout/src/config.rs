#![forbid(unsafe_code)]

//! Construction-time configuration for split-pane instances.
//!
//! [`SplitpaneConfig`] carries every default the engine falls back to. It is
//! passed explicitly to each instance and read only at construction; later
//! changes do not affect instances that already exist.
//!
//! # Loading
//!
//! ```toml
//! # splitpane.toml
//! handle = 8
//! min_height = 120
//!
//! [cursor]
//! vertical = "ns-resize"
//! ```
//!
//! ```rust,ignore
//! let config = SplitpaneConfig::from_toml_file("splitpane.toml")?;
//! let config = SplitpaneConfig::from_json_str(json)?;
//! ```
//!
//! Missing keys keep their defaults. [`ConfigOverrides`] replaces individual
//! keys of an existing config.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;

/// Default divider thickness in pixels.
pub const DEFAULT_HANDLE: f64 = 5.0;
/// Default minimum height of the top pane in a vertical split.
pub const DEFAULT_MIN_HEIGHT: f64 = 100.0;
/// Default minimum width of the left pane in a horizontal split.
pub const DEFAULT_MIN_WIDTH: f64 = 100.0;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitpaneConfig {
    /// Skip wiring viewport resizes to instances during activation.
    pub disable: bool,
    /// Divider thickness used when the rendered divider has no usable size.
    pub handle: f64,
    /// Minimum first-pane height (vertical splits).
    pub min_height: f64,
    /// Minimum first-pane width (horizontal splits).
    pub min_width: f64,
    /// Positioning templates per orientation.
    pub templates: LayoutTemplates,
    /// Divider cursor used when the rendered divider reports `auto`.
    pub cursor: CursorDefaults,
}

impl Default for SplitpaneConfig {
    fn default() -> Self {
        Self {
            disable: false,
            handle: DEFAULT_HANDLE,
            min_height: DEFAULT_MIN_HEIGHT,
            min_width: DEFAULT_MIN_WIDTH,
            templates: LayoutTemplates::default(),
            cursor: CursorDefaults::default(),
        }
    }
}

/// Template triple for each orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTemplates {
    pub vertical: RegionTemplates,
    pub horizontal: RegionTemplates,
}

impl LayoutTemplates {
    /// Templates for `orientation`.
    #[must_use]
    pub const fn for_orientation(&self, orientation: Orientation) -> &RegionTemplates {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }
}

impl Default for LayoutTemplates {
    fn default() -> Self {
        Self {
            vertical: RegionTemplates::vertical(),
            horizontal: RegionTemplates::horizontal(),
        }
    }
}

/// Positioning templates for the first pane, the divider, and the second
/// pane.
///
/// Placeholders: `{ratio}`, `{supplement}`, `{handle}`, `{half}`, `{cursor}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionTemplates {
    pub first: String,
    pub divider: String,
    pub second: String,
}

impl RegionTemplates {
    /// Built-in top/bottom templates.
    #[must_use]
    pub fn vertical() -> Self {
        Self {
            first: "left:0; right:0; top:0; height: {ratio}%; padding-bottom: {half}px".into(),
            divider: "left:0; right:0; top:{ratio}%; width: 100%; margin-top: -{half}px; \
                      height: {handle}px; cursor: {cursor}; z-index: 1"
                .into(),
            second: "left:0; right:0; bottom:0; height: {supplement}%; padding-top: {half}px"
                .into(),
        }
    }

    /// Built-in left/right templates.
    #[must_use]
    pub fn horizontal() -> Self {
        Self {
            first: "top:0; bottom:0; left:0; width: {ratio}%; padding-right: {half}px".into(),
            divider: "top:0; bottom:0; left:{ratio}%; margin-left: -{half}px; \
                      width: {handle}px; cursor: {cursor}; z-index: 1"
                .into(),
            second: "top:0; bottom:0; right:0; width: {supplement}%; padding-left: {half}px"
                .into(),
        }
    }
}

/// Divider cursor per orientation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorDefaults {
    pub vertical: String,
    pub horizontal: String,
}

impl CursorDefaults {
    /// Cursor for `orientation`.
    #[must_use]
    pub fn for_orientation(&self, orientation: Orientation) -> &str {
        match orientation {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }
}

impl Default for CursorDefaults {
    fn default() -> Self {
        Self {
            vertical: "row-resize".into(),
            horizontal: "col-resize".into(),
        }
    }
}

impl SplitpaneConfig {
    /// Minimum first-pane extent for `orientation`.
    #[must_use]
    pub const fn min_extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Vertical => self.min_height,
            Orientation::Horizontal => self.min_width,
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.into_validated()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.into_validated()
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Validate all parameters are within acceptable ranges.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in [
            ("handle", self.handle),
            ("min_height", self.min_height),
            ("min_width", self.min_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!("{name} must be a finite non-negative number, got {value}"));
            }
        }

        for (name, cursor) in [
            ("cursor.vertical", &self.cursor.vertical),
            ("cursor.horizontal", &self.cursor.horizontal),
        ] {
            if cursor.trim().is_empty() {
                errors.push(format!("{name} must not be empty"));
            }
        }

        errors
    }

    fn into_validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Apply per-key overrides, returning the updated config.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        overrides.apply(&mut self);
        self
    }
}

/// Per-key replacement of [`SplitpaneConfig`] fields.
///
/// Only keys that are `Some` replace the target's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub disable: Option<bool>,
    pub handle: Option<f64>,
    pub min_height: Option<f64>,
    pub min_width: Option<f64>,
    pub templates: Option<LayoutTemplates>,
    pub cursor: Option<CursorDefaults>,
}

impl ConfigOverrides {
    /// Write every provided key into `config`.
    pub fn apply(self, config: &mut SplitpaneConfig) {
        if let Some(disable) = self.disable {
            config.disable = disable;
        }
        if let Some(handle) = self.handle {
            config.handle = handle;
        }
        if let Some(min_height) = self.min_height {
            config.min_height = min_height;
        }
        if let Some(min_width) = self.min_width {
            config.min_width = min_width;
        }
        if let Some(templates) = self.templates {
            config.templates = templates;
        }
        if let Some(cursor) = self.cursor {
            config.cursor = cursor;
        }
    }
}

/// Errors from loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read.
    Io(std::io::Error),
    /// TOML did not parse into the config schema.
    Toml(toml::de::Error),
    /// JSON did not parse into the config schema.
    Json(serde_json::Error),
    /// Parsed values failed [`SplitpaneConfig::validate`].
    Invalid(Vec<String>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Toml(err) => write!(f, "invalid TOML config: {err}"),
            Self::Json(err) => write!(f, "invalid JSON config: {err}"),
            Self::Invalid(errors) => write!(f, "invalid config: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Toml(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}
