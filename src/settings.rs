//! Approximation settings
//!
//! This module loads the knobs of the floating-point constructor from TOML.
//! Defaults are embedded in the crate and parsed once on first use.

use std::fmt;
use std::sync::OnceLock;

/// Error type for settings operations
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// The TOML document could not be parsed or has the wrong shape
    Parse(String),
    /// A setting was present but outside its valid range
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(msg) => write!(f, "Error parsing settings: {}", msg),
            SettingsError::Invalid(msg) => write!(f, "Invalid setting: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

type Result<T> = std::result::Result<T, SettingsError>;

/// Limits for the continued-fraction approximation of `f64` values
#[derive(Debug, Clone, PartialEq)]
pub struct ApproximationSettings {
    /// Accepted error relative to the input value
    pub tolerance: f64,
    /// Maximum number of continued-fraction terms to expand
    pub max_iterations: usize,
}

const FALLBACK: ApproximationSettings = ApproximationSettings {
    tolerance: 1.0e-6,
    max_iterations: 64,
};

static DEFAULT_SETTINGS: OnceLock<ApproximationSettings> = OnceLock::new();

impl Default for ApproximationSettings {
    /// The embedded defaults (`tolerance = 1e-6`, `max_iterations = 64`)
    fn default() -> Self {
        Self::embedded().clone()
    }
}

impl ApproximationSettings {
    /// Shared reference to the embedded defaults
    pub(crate) fn embedded() -> &'static Self {
        DEFAULT_SETTINGS.get_or_init(|| {
            let embedded = include_str!("settings/approximation.toml");
            match FALLBACK.overlay(embedded) {
                Ok(settings) => settings,
                Err(e) => {
                    // Keep going with the compiled-in values
                    log::warn!("Failed to load embedded approximation settings: {}", e);
                    FALLBACK
                }
            }
        })
    }

    /// Parse settings from a TOML document, filling unset keys from the defaults
    ///
    /// The document is expected to carry an `[approximation]` table; a document
    /// without one yields the defaults unchanged.
    ///
    /// # Examples
    /// ```
    /// use rational::ApproximationSettings;
    ///
    /// let settings = ApproximationSettings::from_toml_str("[approximation]\ntolerance = 1e-9").unwrap();
    /// assert_eq!(settings.tolerance, 1e-9);
    /// assert_eq!(settings.max_iterations, 64);
    /// ```
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::embedded().overlay(toml_str)
    }

    fn overlay(&self, toml_str: &str) -> Result<Self> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| SettingsError::Parse("Root is not a table".to_string()))?;

        let mut settings = self.clone();
        let Some(section) = table.get("approximation") else {
            return Ok(settings);
        };
        let section = section
            .as_table()
            .ok_or_else(|| SettingsError::Parse("approximation is not a table".to_string()))?;

        if let Some(value) = section.get("tolerance") {
            // Accept `tolerance = 1` as well as `tolerance = 1.0`
            let tolerance = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| SettingsError::Parse("tolerance is not a number".to_string()))?;
            if !tolerance.is_finite() || tolerance <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "tolerance must be a positive finite number, got {}",
                    tolerance
                )));
            }
            settings.tolerance = tolerance;
        }

        if let Some(value) = section.get("max_iterations") {
            let iterations = value
                .as_integer()
                .ok_or_else(|| SettingsError::Parse("max_iterations is not an integer".to_string()))?;
            settings.max_iterations = usize::try_from(iterations)
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| {
                    SettingsError::Invalid(format!(
                        "max_iterations must be at least 1, got {}",
                        iterations
                    ))
                })?;
        }

        Ok(settings)
    }
}
