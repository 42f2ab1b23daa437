//! Host page configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller attaches to whatever page supplies the expected element ids.
//! Pages that use different ids (or a different endpoint) embed a JSON blob:
//!
//! ```html
//! <script type="application/json" id="predict-config">
//!   { "endpoint": "/api/predict", "elements": { "file_input": "picker" } }
//! </script>
//! ```
//!
//! Every field is optional; missing fields fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use thiserror::Error;

/// Id of the optional `<script>` element carrying a JSON [`PageConfig`].
pub const CONFIG_ELEMENT_ID: &str = "predict-config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Element ids the controller binds to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub file_input: String,
    pub file_name: String,
    pub upload_form: String,
    pub loading: String,
    pub result: String,
    pub prediction_text: String,
    pub image_preview: String,
    pub preview_img: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            file_input: "file-input".to_owned(),
            file_name: "file-name".to_owned(),
            upload_form: "upload-form".to_owned(),
            loading: "loading".to_owned(),
            result: "result".to_owned(),
            prediction_text: "prediction-text".to_owned(),
            image_preview: "image-preview".to_owned(),
            preview_img: "preview-img".to_owned(),
        }
    }
}

/// Minimum level for console logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub fn as_level(self) -> log::Level {
        match self {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Full controller configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Path (or absolute URL) the form is posted to.
    pub endpoint: String,
    /// CSS class toggled to show/hide regions.
    pub hidden_class: String,
    pub log_level: LogLevel,
    pub elements: ElementIds,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            endpoint: "/predict".to_owned(),
            hidden_class: "hidden".to_owned(),
            log_level: LogLevel::default(),
            elements: ElementIds::default(),
        }
    }
}

impl PageConfig {
    /// Parse a config blob. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the blob is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}
