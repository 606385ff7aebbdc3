//! Tunables for the effect, with the defaults the effect was designed around.

use crate::error::ConfigError;
use crate::scale::STEP;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;
/// Base radius is `min(width, height) / RADIUS_FACTOR`.
pub const RADIUS_FACTOR: f32 = 10.0;
pub const DEFAULT_BACKGROUND: &str = "#BDBDBD";
pub const DEFAULT_FOREGROUND: &str = "#3F51B5";

/// Animation speed, tick rate, sizing and colours of the effect.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub step: f32,
    pub tick_interval: Duration,
    pub radius_factor: f32,
    pub background: String,
    pub foreground: String,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            step: STEP,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            radius_factor: RADIUS_FACTOR,
            background: DEFAULT_BACKGROUND.to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
        }
    }
}

impl EffectConfig {
    /// Check every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0 && self.step <= 1.0) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if !(self.radius_factor > 0.0) {
            return Err(ConfigError::InvalidRadiusFactor(self.radius_factor));
        }
        if self.background.trim().is_empty() {
            return Err(ConfigError::EmptyColor("background"));
        }
        if self.foreground.trim().is_empty() {
            return Err(ConfigError::EmptyColor("foreground"));
        }
        Ok(())
    }

    /// Apply string overrides such as `("interval-ms", "30")` and validate
    /// the result. `self` is left untouched on error.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = self.clone();
        for (key, value) in overrides {
            let value = value.trim();
            match key {
                "step" => cfg.step = parse(key, value)?,
                "interval-ms" => cfg.tick_interval = Duration::from_millis(parse(key, value)?),
                "radius-factor" => cfg.radius_factor = parse(key, value)?,
                "background" => cfg.background = value.to_string(),
                "foreground" => cfg.foreground = value.to_string(),
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Parse {
        key: key.to_string(),
        value: value.to_string(),
    })
}
