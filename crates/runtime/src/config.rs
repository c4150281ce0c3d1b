//! Host defaults and registry settings loaded from the environment.
use std::env;
use std::fmt;
use std::str::FromStr;

use options_core::{CloneLimit, StageSize};
use tracing::warn;

/// Initial host values plus the sandbox flag of the simulated editor.
#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    pub turbo_mode: bool,
    pub interpolation: bool,
    pub fencing: bool,
    pub misc_limits: bool,
    pub high_quality_render: bool,
    pub framerate: f64,
    pub max_clones: CloneLimit,
    pub stage_size: StageSize,
    /// Whether the editor runs extensions sandboxed. The runtime options
    /// extension refuses to register in that case.
    pub sandboxed: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            turbo_mode: false,
            interpolation: false,
            fencing: true,
            misc_limits: true,
            high_quality_render: false,
            framerate: Self::DEFAULT_FRAMERATE,
            max_clones: CloneLimit::DEFAULT,
            stage_size: StageSize::DEFAULT,
            sandboxed: false,
        }
    }
}

impl HostConfig {
    pub const DEFAULT_FRAMERATE: f64 = 30.0;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables (unset or unparsable values keep the default):
    /// - `RUNTIME_TURBO_MODE` - Start in turbo mode (default: false)
    /// - `RUNTIME_INTERPOLATION` - Enable interpolation (default: false)
    /// - `RUNTIME_FENCING` - Keep sprites on stage (default: true)
    /// - `RUNTIME_MISC_LIMITS` - Enforce misc limits (default: true)
    /// - `RUNTIME_HIGH_QUALITY_PEN` - High quality pen rendering (default: false)
    /// - `RUNTIME_FRAMERATE` - Frames per second (default: 30)
    /// - `RUNTIME_MAX_CLONES` - Clone limit, number or `Infinity` (default: 300)
    /// - `RUNTIME_STAGE_WIDTH` - Stage width (default: 480)
    /// - `RUNTIME_STAGE_HEIGHT` - Stage height (default: 360)
    /// - `RUNTIME_SANDBOXED` - Simulate a sandboxed editor (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] with a custom variable source.
    ///
    /// Every rejected value is logged at `warn` and the default is kept.
    /// Framerate, stage sides and the clone limit must be non-negative.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(enabled) = read_var::<bool>(&lookup, "RUNTIME_TURBO_MODE") {
            config.turbo_mode = enabled;
        }
        if let Some(enabled) = read_var::<bool>(&lookup, "RUNTIME_INTERPOLATION") {
            config.interpolation = enabled;
        }
        if let Some(enabled) = read_var::<bool>(&lookup, "RUNTIME_FENCING") {
            config.fencing = enabled;
        }
        if let Some(enabled) = read_var::<bool>(&lookup, "RUNTIME_MISC_LIMITS") {
            config.misc_limits = enabled;
        }
        if let Some(enabled) = read_var::<bool>(&lookup, "RUNTIME_HIGH_QUALITY_PEN") {
            config.high_quality_render = enabled;
        }
        if let Some(sandboxed) = read_var::<bool>(&lookup, "RUNTIME_SANDBOXED") {
            config.sandboxed = sandboxed;
        }

        if let Some(fps) = read_amount(&lookup, "RUNTIME_FRAMERATE") {
            config.framerate = fps;
        }
        if let Some(width) = read_amount(&lookup, "RUNTIME_STAGE_WIDTH") {
            config.stage_size.width = width;
        }
        if let Some(height) = read_amount(&lookup, "RUNTIME_STAGE_HEIGHT") {
            config.stage_size.height = height;
        }

        match read_var::<CloneLimit>(&lookup, "RUNTIME_MAX_CLONES") {
            Some(CloneLimit::Limited(limit)) if limit < 0.0 => {
                warn!(key = "RUNTIME_MAX_CLONES", limit, "negative clone limit, keeping default");
            }
            Some(limit) => config.max_clones = limit,
            None => {}
        }

        config
    }
}

/// Parses one variable; unset is `None`, unparsable is `None` plus a warning.
fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, value = %raw, %err, "ignoring environment variable");
            None
        }
    }
}

/// Finite, non-negative number.
fn read_amount(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<f64> {
    let value: f64 = read_var(lookup, key)?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        warn!(key, value, "expected a finite non-negative number, keeping default");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), HostConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("RUNTIME_TURBO_MODE", "true"),
            ("RUNTIME_INTERPOLATION", "true"),
            ("RUNTIME_FENCING", "false"),
            ("RUNTIME_MISC_LIMITS", "false"),
            ("RUNTIME_HIGH_QUALITY_PEN", "true"),
            ("RUNTIME_FRAMERATE", "60"),
            ("RUNTIME_MAX_CLONES", "Infinity"),
            ("RUNTIME_STAGE_WIDTH", "640"),
            ("RUNTIME_STAGE_HEIGHT", " 480 "),
            ("RUNTIME_SANDBOXED", "true"),
        ]);

        assert!(config.turbo_mode);
        assert!(config.interpolation);
        assert!(!config.fencing);
        assert!(!config.misc_limits);
        assert!(config.high_quality_render);
        assert_eq!(config.framerate, 60.0);
        assert_eq!(config.max_clones, CloneLimit::Unbounded);
        assert_eq!(config.stage_size, StageSize::new(640.0, 480.0));
        assert!(config.sandboxed);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = config_from(&[
            ("RUNTIME_TURBO_MODE", "sometimes"),
            ("RUNTIME_FRAMERATE", "fast"),
            ("RUNTIME_MAX_CLONES", "lots"),
            ("RUNTIME_STAGE_WIDTH", "inf"),
        ]);

        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn negative_amounts_keep_defaults() {
        let config = config_from(&[
            ("RUNTIME_FRAMERATE", "-5"),
            ("RUNTIME_STAGE_WIDTH", "-480"),
            ("RUNTIME_STAGE_HEIGHT", "-1"),
            ("RUNTIME_MAX_CLONES", "-10"),
        ]);

        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn zero_is_accepted() {
        let config = config_from(&[("RUNTIME_FRAMERATE", "0"), ("RUNTIME_MAX_CLONES", "0")]);

        assert_eq!(config.framerate, 0.0);
        assert_eq!(config.max_clones, CloneLimit::Limited(0.0));
    }

    #[test]
    fn numeric_booleans_are_rejected() {
        let config = config_from(&[("RUNTIME_TURBO_MODE", "1"), ("RUNTIME_FENCING", "0")]);

        assert!(!config.turbo_mode);
        assert!(config.fencing);
    }
}
