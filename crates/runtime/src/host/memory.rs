use options_core::{RenderHost, RuntimeOptionsPatch, RuntimeOptionsState, StageSize, VmHost};
use tracing::trace;

use crate::config::HostConfig;

/// Self-contained host storing every runtime option in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct InMemoryHost {
    turbo_mode: bool,
    interpolation: bool,
    runtime_options: RuntimeOptionsState,
    framerate: f64,
    stage_size: StageSize,
    high_quality_render: bool,
}

/// Serializable view of an [`InMemoryHost`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HostSnapshot {
    pub turbo_mode: bool,
    pub interpolation: bool,
    pub runtime_options: RuntimeOptionsState,
    #[serde(with = "options_core::serde_number")]
    pub framerate: f64,
    pub stage_size: StageSize,
    pub high_quality_render: bool,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::from_config(&HostConfig::default())
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            turbo_mode: config.turbo_mode,
            interpolation: config.interpolation,
            runtime_options: RuntimeOptionsState {
                fencing: config.fencing,
                misc_limits: config.misc_limits,
                max_clones: config.max_clones,
            },
            framerate: config.framerate,
            stage_size: config.stage_size,
            high_quality_render: config.high_quality_render,
        }
    }

    pub fn snapshot(&self) -> HostSnapshot {
        HostSnapshot {
            turbo_mode: self.turbo_mode,
            interpolation: self.interpolation,
            runtime_options: self.runtime_options,
            framerate: self.framerate,
            stage_size: self.stage_size,
            high_quality_render: self.high_quality_render,
        }
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HostSnapshot> for InMemoryHost {
    fn from(snapshot: HostSnapshot) -> Self {
        Self {
            turbo_mode: snapshot.turbo_mode,
            interpolation: snapshot.interpolation,
            runtime_options: snapshot.runtime_options,
            framerate: snapshot.framerate,
            stage_size: snapshot.stage_size,
            high_quality_render: snapshot.high_quality_render,
        }
    }
}

impl VmHost for InMemoryHost {
    fn turbo_mode(&self) -> bool {
        self.turbo_mode
    }

    fn set_turbo_mode(&mut self, enabled: bool) {
        trace!(enabled, "turbo mode");
        self.turbo_mode = enabled;
    }

    fn interpolation(&self) -> bool {
        self.interpolation
    }

    fn set_interpolation(&mut self, enabled: bool) {
        trace!(enabled, "interpolation");
        self.interpolation = enabled;
    }

    fn runtime_options(&self) -> RuntimeOptionsState {
        self.runtime_options
    }

    fn set_runtime_options(&mut self, patch: RuntimeOptionsPatch) {
        trace!(?patch, "runtime options");
        patch.apply_to(&mut self.runtime_options);
    }

    fn framerate(&self) -> f64 {
        self.framerate
    }

    fn set_framerate(&mut self, fps: f64) {
        trace!(fps, "framerate");
        self.framerate = fps;
    }

    fn stage_size(&self) -> StageSize {
        self.stage_size
    }

    fn set_stage_size(&mut self, width: f64, height: f64) {
        trace!(width, height, "stage size");
        self.stage_size = StageSize::new(width, height);
    }
}

impl RenderHost for InMemoryHost {
    fn high_quality_render(&self) -> bool {
        self.high_quality_render
    }

    fn set_high_quality_render(&mut self, enabled: bool) {
        trace!(enabled, "high quality render");
        self.high_quality_render = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use options_core::CloneLimit;

    #[test]
    fn defaults_match_editor() {
        let host = InMemoryHost::default();

        assert!(!host.turbo_mode());
        assert!(!host.interpolation());
        assert!(host.runtime_options().fencing);
        assert!(host.runtime_options().misc_limits);
        assert_eq!(host.runtime_options().max_clones, CloneLimit::Limited(300.0));
        assert_eq!(host.framerate(), 30.0);
        assert_eq!(host.stage_size(), StageSize::new(480.0, 360.0));
        assert!(!host.high_quality_render());
    }

    #[test]
    fn snapshot_round_trips_through_host() {
        let mut host = InMemoryHost::default();
        host.set_turbo_mode(true);
        host.set_runtime_options(RuntimeOptionsPatch::new().max_clones(CloneLimit::Unbounded));

        let restored = InMemoryHost::from(host.snapshot());

        assert_eq!(restored, host);
    }

    #[test]
    fn snapshot_with_infinities_survives_json() {
        let mut host = InMemoryHost::default();
        host.set_framerate(f64::INFINITY);
        host.set_stage_size(f64::INFINITY, 360.0);
        host.set_runtime_options(
            RuntimeOptionsPatch::new().max_clones(CloneLimit::Limited(f64::NEG_INFINITY)),
        );

        let json = serde_json::to_string(&host.snapshot()).unwrap();
        assert!(!json.contains("null"), "{json}");
        assert!(json.contains(r#""framerate":"Infinity""#), "{json}");
        assert!(json.contains(r#""limited":"-Infinity""#), "{json}");

        let restored: HostSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(InMemoryHost::from(restored), host);
    }

    #[test]
    fn from_config_uses_configured_values() {
        let config = HostConfig {
            framerate: 60.0,
            fencing: false,
            ..HostConfig::default()
        };

        let host = InMemoryHost::from_config(&config);

        assert_eq!(host.framerate(), 60.0);
        assert!(!host.runtime_options().fencing);
    }
}
