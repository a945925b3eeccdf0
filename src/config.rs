//! Per-instance slider configuration.
//!
//! Each container may carry a JSON object in its `data-slider-config`
//! attribute. Keys are camelCase and all optional; anything omitted falls
//! back to the defaults in [`crate::consts`].
//!
//! ```html
//! <div class="card-slider" data-slider-config='{"navigation":"indexed","edgePolicy":"wrap"}'>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_STEP_PX, DRAG_MULTIPLIER, EDGE_TOLERANCE_PX, FALLBACK_GAP_PX, RESIZE_DEBOUNCE_MS, SCROLL_DEBOUNCE_MS,
    SETTLE_MS,
};
use crate::error::ConfigError;

/// How the track is moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    /// Continuous offset driven by native `scrollLeft` and smooth scrolling.
    #[default]
    Scroll,
    /// Discrete current-item index rendered as a `translateX` transform.
    Indexed,
}

/// What a step past either end does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// Stepping past an end is a no-op.
    #[default]
    Clamp,
    /// Advancing at the end returns to the start; retreating at the start
    /// jumps to the last position.
    Wrap,
}

/// Tunables for one slider instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SliderConfig {
    pub navigation: Navigation,
    pub edge_policy: EdgePolicy,
    /// Settle delay after an accepted step, in milliseconds.
    pub settle_ms: u32,
    pub resize_debounce_ms: u32,
    pub scroll_debounce_ms: u32,
    pub edge_tolerance_px: f64,
    pub drag_multiplier: f64,
    /// Gap used when the track's computed `gap` cannot be parsed.
    pub fallback_gap_px: f64,
    /// Step distance before the first item is measured, or when there are no items.
    pub default_step_px: f64,
    /// Whether arrow keys navigate while the pointer hovers the container.
    pub keyboard: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            navigation: Navigation::default(),
            edge_policy: EdgePolicy::default(),
            settle_ms: SETTLE_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
            edge_tolerance_px: EDGE_TOLERANCE_PX,
            drag_multiplier: DRAG_MULTIPLIER,
            fallback_gap_px: FALLBACK_GAP_PX,
            default_step_px: DEFAULT_STEP_PX,
            keyboard: true,
        }
    }
}

impl SliderConfig {
    /// Parse and validate a config from the contents of a data attribute.
    ///
    /// Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and
    /// [`ConfigError::Invalid`] when a value fails [`SliderConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config for a container from its optional attribute value.
    ///
    /// # Errors
    ///
    /// Same as [`SliderConfig::from_json`].
    pub fn from_attribute(value: Option<&str>) -> Result<Self, ConfigError> {
        value.map_or_else(|| Ok(Self::default()), Self::from_json)
    }

    /// Reject values that would break the offset math.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("edgeTolerancePx", self.edge_tolerance_px)?;
        check_non_negative("dragMultiplier", self.drag_multiplier)?;
        check_non_negative("fallbackGapPx", self.fallback_gap_px)?;
        if !self.default_step_px.is_finite() || self.default_step_px <= 0.0 {
            return Err(ConfigError::Invalid { field: "defaultStepPx", reason: "must be a positive number" });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::Invalid { field, reason: "must be finite" });
    }
    if value < 0.0 {
        return Err(ConfigError::Invalid { field, reason: "must not be negative" });
    }
    Ok(())
}
