//! Status — severity classification of moisture and battery readings.

use serde::{Deserialize, Serialize};

/// Below this soil moisture (%) a plant is critically dry.
pub const MOISTURE_CRITICAL_BELOW: f64 = 20.0;
/// Below this soil moisture (%) a plant needs water.
pub const MOISTURE_WARNING_BELOW: f64 = 40.0;
/// Below this charge (%) a sensor battery is critical.
pub const BATTERY_CRITICAL_BELOW: f64 = 20.0;
/// Below this charge (%) a sensor battery is low.
pub const BATTERY_WARNING_BELOW: f64 = 40.0;

/// Severity shown by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Ok,
    Warning,
    Critical,
    /// The reading exists but is not numeric.
    Unavailable,
    /// The required sensor entity is missing from the host.
    Error,
}

impl Status {
    /// Classify a soil moisture percentage.
    ///
    /// `NaN` maps to [`Unavailable`](Self::Unavailable).
    #[must_use]
    pub fn from_moisture(moisture: f64) -> Self {
        if moisture.is_nan() {
            Self::Unavailable
        } else {
            Self::by_thresholds(moisture, MOISTURE_CRITICAL_BELOW, MOISTURE_WARNING_BELOW)
        }
    }

    /// Classify a battery percentage. An absent battery reads as `Ok`.
    ///
    /// A `NaN` charge fails both comparisons and also reads as `Ok`.
    #[must_use]
    pub fn from_battery(battery: Option<f64>) -> Self {
        battery.map_or(Self::Ok, |level| {
            Self::by_thresholds(level, BATTERY_CRITICAL_BELOW, BATTERY_WARNING_BELOW)
        })
    }

    fn by_thresholds(value: f64, critical_below: f64, warning_below: f64) -> Self {
        if value < critical_below {
            Self::Critical
        } else if value < warning_below {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    /// Lowercase name, also used as the CSS class by the renderer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Unavailable => "unavailable",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
