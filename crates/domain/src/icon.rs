//! Icon keys (Material Design Icons) picked from readings.
//!
//! Both selectors are total: `None` and `NaN` map to an explicit
//! "unknown" icon.

use crate::status::{MOISTURE_CRITICAL_BELOW, MOISTURE_WARNING_BELOW};

pub const MOISTURE_UNKNOWN: &str = "mdi:help-circle-outline";
pub const MOISTURE_CRITICAL: &str = "mdi:water-alert";
pub const MOISTURE_WARNING: &str = "mdi:water-minus";
pub const MOISTURE_OK: &str = "mdi:water-check";

pub const BATTERY_UNKNOWN: &str = "mdi:battery-unknown";
pub const BATTERY_ALERT: &str = "mdi:battery-alert";
pub const BATTERY_FULL: &str = "mdi:battery";

/// `mdi:battery-10` through `mdi:battery-90`, indexed by tens digit - 1.
const BATTERY_LEVELS: [&str; 9] = [
    "mdi:battery-10",
    "mdi:battery-20",
    "mdi:battery-30",
    "mdi:battery-40",
    "mdi:battery-50",
    "mdi:battery-60",
    "mdi:battery-70",
    "mdi:battery-80",
    "mdi:battery-90",
];

pub const IRRIGATING: &str = "mdi:water";
pub const IRRIGATION_IDLE: &str = "mdi:watering-can";
/// Shown in place of a plant photo.
pub const PLANT_PLACEHOLDER: &str = "mdi:flower";

/// Icon for a soil moisture percentage.
#[must_use]
pub fn moisture(moisture: Option<f64>) -> &'static str {
    match moisture {
        None => MOISTURE_UNKNOWN,
        Some(m) if m.is_nan() => MOISTURE_UNKNOWN,
        Some(m) if m < MOISTURE_CRITICAL_BELOW => MOISTURE_CRITICAL,
        Some(m) if m < MOISTURE_WARNING_BELOW => MOISTURE_WARNING,
        Some(_) => MOISTURE_OK,
    }
}

/// Icon for a battery percentage, in 10%-wide bands.
#[must_use]
pub fn battery(battery: Option<f64>) -> &'static str {
    match battery {
        None => BATTERY_UNKNOWN,
        Some(b) if b.is_nan() => BATTERY_UNKNOWN,
        Some(b) if b < 10.0 => BATTERY_ALERT,
        Some(b) if b >= 100.0 => BATTERY_FULL,
        Some(b) => {
            // 10.0 <= b < 100.0, so the tens digit is 1..=9.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let tens = (b / 10.0).floor() as usize;
            BATTERY_LEVELS[tens.clamp(1, 9) - 1]
        }
    }
}

/// Badge for the irrigation switch.
#[must_use]
pub fn irrigation(is_irrigating: bool) -> &'static str {
    if is_irrigating {
        IRRIGATING
    } else {
        IRRIGATION_IDLE
    }
}
