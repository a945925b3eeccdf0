//! Error types for slider construction.
//!
//! Only mounting can fail. Once a [`crate::widget::Slider`] exists, DOM
//! problems are logged and skipped rather than surfaced.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

/// A container's `data-slider-config` could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Why a container could not be turned into a slider.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    #[error("no track element found in slider container")]
    MissingTrack,
    #[error("invalid slider config: {0}")]
    Config(#[from] ConfigError),
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SliderError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
