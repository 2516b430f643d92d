//! Construction-time configuration of the widget.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::resolve_time_zone;
use crate::resize::{ColumnResizeController, ResizeBounds};
use crate::upload::{UploadConfig, UploadRules, validate_url};

/// How the content pane lays out entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            other => Err(ConfigError::InvalidLayout(other.to_string())),
        }
    }
}

impl TryFrom<String> for Layout {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.as_str().to_string()
    }
}

/// A CSS length given either as a CSS string (`"600px"`, `"100%"`) or as a
/// number of pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssLength {
    Pixels(f64),
    Css(String),
}

impl CssLength {
    pub fn to_css(&self) -> String {
        match self {
            Self::Pixels(px) => format!("{px}px"),
            Self::Css(value) => value.clone(),
        }
    }
}

impl From<&str> for CssLength {
    fn from(value: &str) -> Self {
        Self::Css(value.to_string())
    }
}

/// Everything the caller configures up front.
///
/// Field names follow the widget's camelCase surface when (de)serialized.
/// Missing fields take the documented defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FileManagerConfig {
    pub upload_config: UploadConfig,
    pub layout: Layout,
    pub initial_path: String,
    pub enable_file_preview: bool,
    /// URL prefix for previews; empty disables remote previews.
    pub file_preview_path: String,
    /// Comma-separated extensions (`".png, .jpg"`); empty accepts all.
    pub accepted_file_types: String,
    /// Upload size limit in bytes; `None` is unlimited.
    pub max_file_size: Option<u64>,
    pub height: CssLength,
    pub width: CssLength,
    pub primary_color: String,
    pub font_family: String,
    pub min_percent: f64,
    pub max_percent: f64,
    pub default_primary_percent: f64,
    /// IANA zone used for displayed dates.
    pub time_zone: String,
}

impl Default for FileManagerConfig {
    fn default() -> Self {
        Self {
            upload_config: UploadConfig::default(),
            layout: Layout::Grid,
            initial_path: String::new(),
            enable_file_preview: true,
            file_preview_path: String::new(),
            accepted_file_types: String::new(),
            max_file_size: Some(1_000_000),
            height: CssLength::from("600px"),
            width: CssLength::from("100%"),
            primary_color: "#6155b4".to_string(),
            font_family: "Nunito Sans, sans-serif".to_string(),
            min_percent: 20.0,
            max_percent: 80.0,
            default_primary_percent: 20.0,
            time_zone: "UTC".to_string(),
        }
    }
}

impl FileManagerConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every construction-time constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ResizeBounds::new(self.min_percent, self.max_percent)?;
        self.upload_config.validate()?;
        if !self.file_preview_path.is_empty() {
            validate_url(&self.file_preview_path)?;
        }
        resolve_time_zone(&self.time_zone)?;
        Ok(())
    }

    /// A resize controller for these bounds.
    pub fn resize_controller(&self) -> Result<ColumnResizeController, ConfigError> {
        ColumnResizeController::new(
            self.min_percent,
            self.max_percent,
            self.default_primary_percent,
        )
    }

    pub fn upload_rules(&self) -> UploadRules {
        UploadRules::new(&self.accepted_file_types, self.max_file_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::UploadMethod;

    #[test]
    fn test_layout_parse() {
        assert_eq!("grid".parse::<Layout>(), Ok(Layout::Grid));
        assert_eq!("list".parse::<Layout>(), Ok(Layout::List));
        assert_eq!(
            "tiles".parse::<Layout>(),
            Err(ConfigError::InvalidLayout("tiles".to_string()))
        );
        assert_eq!(Layout::Grid.toggled(), Layout::List);
    }

    #[test]
    fn test_css_length() {
        assert_eq!(CssLength::Pixels(600.0).to_css(), "600px");
        assert_eq!(CssLength::from("100%").to_css(), "100%");
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = FileManagerConfig::default();
        assert!(config.validate().is_ok());
        let controller = config.resize_controller().unwrap();
        assert_eq!(controller.split().primary_percent(), 20.0);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = FileManagerConfig::from_json(
            r#"{"layout": "list", "height": 480, "uploadConfig": {"url": "https://example.com/up", "method": "PUT"}}"#,
        )
        .unwrap();
        assert_eq!(config.layout, Layout::List);
        assert_eq!(config.height, CssLength::Pixels(480.0));
        assert_eq!(config.width, CssLength::from("100%"));
        assert_eq!(config.upload_config.method, UploadMethod::Put);
        assert!(config.upload_config.headers.is_empty());
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            FileManagerConfig::from_json(r#"{"layout": "tiles"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            FileManagerConfig::from_json(r#"{"uploadConfig": {"url": "/u", "method": "PATCH"}}"#),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            FileManagerConfig::from_json(r#"{"minPercent": 80, "maxPercent": 20}"#),
            Err(ConfigError::InvalidBounds { min: 80.0, max: 20.0 })
        );
        assert_eq!(
            FileManagerConfig::from_json(r#"{"timeZone": "Atlantis/Capital"}"#),
            Err(ConfigError::InvalidTimeZone("Atlantis/Capital".to_string()))
        );
    }
}
