//! Environment configuration loading from .env files
//!
//! Loads override values from .env or environment variables.
//! Used to retune a sensor unit (channel, RZERO, converter scale) without
//! rebuilding or editing its configuration file.

use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

/// Analog channel of the sensor
pub const ENV_CHANNEL: &str = "MQ135_CHANNEL";
/// Reference resistance RZERO in kΩ
pub const ENV_RZERO: &str = "MQ135_RZERO";
/// Converter full-scale value
pub const ENV_ADC_FULL_SCALE: &str = "MQ135_ADC_FULL_SCALE";
/// Load resistor in kΩ
pub const ENV_LOAD_RESISTOR: &str = "MQ135_LOAD_RESISTOR";
/// Supply voltage ratio
pub const ENV_SUPPLY_VOLTAGE: &str = "MQ135_SUPPLY_VOLTAGE";

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

/// Reads and parses an environment override.
///
/// Returns `None` when the variable is unset. A value that does not parse is
/// also `None`, with a warning so a typo in `.env` does not go unnoticed.
pub fn env_override<T: FromStr>(key: &str) -> Option<T> {
    ensure_loaded();
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => {
            tracing::debug!(key, value = raw.trim(), "environment override applied");
            Some(value)
        }
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

/// Channel override (`MQ135_CHANNEL`)
pub fn channel() -> Option<u8> {
    env_override(ENV_CHANNEL)
}

/// RZERO override in kΩ (`MQ135_RZERO`)
pub fn rzero() -> Option<f64> {
    env_override(ENV_RZERO)
}

/// Converter full-scale override (`MQ135_ADC_FULL_SCALE`)
pub fn adc_full_scale() -> Option<i32> {
    env_override(ENV_ADC_FULL_SCALE)
}

/// Load resistor override in kΩ (`MQ135_LOAD_RESISTOR`)
pub fn load_resistor() -> Option<f64> {
    env_override(ENV_LOAD_RESISTOR)
}

/// Supply voltage override (`MQ135_SUPPLY_VOLTAGE`)
pub fn supply_voltage() -> Option<f64> {
    env_override(ENV_SUPPLY_VOLTAGE)
}
