//! Runtime configuration for the widget controllers.
//!
//! # Design
//! - Every field has a default matching the stock markup/CSS contract, so hosts only
//!   override what they need (`{"toast": {"exit_delay_ms": 150}}`).
//! - Validation rejects values that would wedge timers or produce invalid styles.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default storage key for the persisted theme preference.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "qwesui-theme";
/// Default document-level attribute carrying the theme.
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
/// Default toast lifetime in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;
/// Delay between hiding a toast and detaching it (exit transition length).
pub const DEFAULT_TOAST_EXIT_DELAY_MS: u32 = 300;
/// Period of the background sweep over visible toasts.
pub const DEFAULT_TOAST_SWEEP_INTERVAL_MS: u32 = 5_000;
/// Distance between a tooltip and its trigger.
pub const DEFAULT_TOOLTIP_GAP_PX: f64 = 8.0;
/// Placeholder delay standing in for a real form submission.
pub const DEFAULT_FORM_DELAY_MS: u32 = 1_000;
/// Toast shown once the simulated submission completes.
pub const DEFAULT_FORM_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Errors raised while loading or validating [`UiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Payload was not valid JSON for the configuration schema.
    #[error("invalid configuration payload")]
    Parse {
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A field held a value the controllers cannot work with.
    #[error("invalid configuration field")]
    InvalidField {
        /// Section containing the field.
        section: &'static str,
        /// Field name.
        field: &'static str,
        /// Machine-readable reason.
        reason: &'static str,
    },
}

/// Theme persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeSettings {
    /// Key used in the preference store.
    pub storage_key: String,
    /// Attribute set on the document element.
    pub attribute: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            attribute: DEFAULT_THEME_ATTRIBUTE.to_string(),
        }
    }
}

/// Toast timing settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToastSettings {
    /// Lifetime used when the caller does not pass one. `0` disables auto-hide.
    pub default_duration_ms: u32,
    /// Delay between hiding and detaching.
    pub exit_delay_ms: u32,
    /// Period of the background sweep.
    pub sweep_interval_ms: u32,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_TOAST_DURATION_MS,
            exit_delay_ms: DEFAULT_TOAST_EXIT_DELAY_MS,
            sweep_interval_ms: DEFAULT_TOAST_SWEEP_INTERVAL_MS,
        }
    }
}

/// Tooltip layout settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TooltipSettings {
    /// Gap between trigger and tooltip, in pixels.
    pub gap_px: f64,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            gap_px: DEFAULT_TOOLTIP_GAP_PX,
        }
    }
}

/// Form feedback settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormSettings {
    /// Simulated submission delay.
    pub simulated_delay_ms: u32,
    /// Success toast text.
    pub success_message: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_FORM_DELAY_MS,
            success_message: DEFAULT_FORM_SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Complete controller configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Theme persistence.
    pub theme: ThemeSettings,
    /// Toast timing.
    pub toast: ToastSettings,
    /// Tooltip layout.
    pub tooltip: TooltipSettings,
    /// Form feedback.
    pub form: FormSettings,
}

impl UiConfig {
    /// Decode and validate a JSON payload. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(payload).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(invalid("theme", "storage_key", "empty"));
        }
        if self.theme.attribute.trim().is_empty() {
            return Err(invalid("theme", "attribute", "empty"));
        }
        if self.toast.sweep_interval_ms == 0 {
            return Err(invalid("toast", "sweep_interval_ms", "must_be_positive"));
        }
        if !self.tooltip.gap_px.is_finite() || self.tooltip.gap_px < 0.0 {
            return Err(invalid("tooltip", "gap_px", "must_be_finite_non_negative"));
        }
        Ok(())
    }
}

const fn invalid(section: &'static str, field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        section,
        field,
        reason,
    }
}
