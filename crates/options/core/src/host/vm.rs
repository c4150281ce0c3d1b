use crate::limit::CloneLimit;

/// Stage dimensions in stage units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageSize {
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_number"))]
    pub width: f64,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_number"))]
    pub height: f64,
}

impl StageSize {
    pub const DEFAULT: Self = Self::new(480.0, 360.0);

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for StageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Host runtime options block.
///
/// Field names follow the host: `fencing == true` keeps sprites on stage and
/// `misc_limits == true` enforces the host's miscellaneous safety limits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeOptionsState {
    pub fencing: bool,
    pub misc_limits: bool,
    pub max_clones: CloneLimit,
}

impl Default for RuntimeOptionsState {
    fn default() -> Self {
        Self {
            fencing: true,
            misc_limits: true,
            max_clones: CloneLimit::DEFAULT,
        }
    }
}

/// Partial update of [`RuntimeOptionsState`]. Unset fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RuntimeOptionsPatch {
    pub fencing: Option<bool>,
    pub misc_limits: Option<bool>,
    pub max_clones: Option<CloneLimit>,
}

impl RuntimeOptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fencing(mut self, fencing: bool) -> Self {
        self.fencing = Some(fencing);
        self
    }

    pub fn misc_limits(mut self, misc_limits: bool) -> Self {
        self.misc_limits = Some(misc_limits);
        self
    }

    pub fn max_clones(mut self, max_clones: CloneLimit) -> Self {
        self.max_clones = Some(max_clones);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fencing.is_none() && self.misc_limits.is_none() && self.max_clones.is_none()
    }

    /// Writes the set fields into `state`.
    pub fn apply_to(&self, state: &mut RuntimeOptionsState) {
        if let Some(fencing) = self.fencing {
            state.fencing = fencing;
        }
        if let Some(misc_limits) = self.misc_limits {
            state.misc_limits = misc_limits;
        }
        if let Some(max_clones) = self.max_clones {
            state.max_clones = max_clones;
        }
    }
}

/// Virtual machine settings exposed by the host.
pub trait VmHost {
    fn turbo_mode(&self) -> bool;

    fn set_turbo_mode(&mut self, enabled: bool);

    fn interpolation(&self) -> bool;

    fn set_interpolation(&mut self, enabled: bool);

    fn runtime_options(&self) -> RuntimeOptionsState;

    /// Applies a partial update; fields left as `None` keep their value.
    fn set_runtime_options(&mut self, patch: RuntimeOptionsPatch);

    fn framerate(&self) -> f64;

    fn set_framerate(&mut self, fps: f64);

    fn stage_size(&self) -> StageSize;

    /// Resizes the stage. Both sides are always supplied together.
    fn set_stage_size(&mut self, width: f64, height: f64);
}

macro_rules! forward_vm_host {
    ($($ty:ty),*) => {$(
        impl<T: VmHost + ?Sized> VmHost for $ty {
            fn turbo_mode(&self) -> bool {
                (**self).turbo_mode()
            }

            fn set_turbo_mode(&mut self, enabled: bool) {
                (**self).set_turbo_mode(enabled)
            }

            fn interpolation(&self) -> bool {
                (**self).interpolation()
            }

            fn set_interpolation(&mut self, enabled: bool) {
                (**self).set_interpolation(enabled)
            }

            fn runtime_options(&self) -> RuntimeOptionsState {
                (**self).runtime_options()
            }

            fn set_runtime_options(&mut self, patch: RuntimeOptionsPatch) {
                (**self).set_runtime_options(patch)
            }

            fn framerate(&self) -> f64 {
                (**self).framerate()
            }

            fn set_framerate(&mut self, fps: f64) {
                (**self).set_framerate(fps)
            }

            fn stage_size(&self) -> StageSize {
                (**self).stage_size()
            }

            fn set_stage_size(&mut self, width: f64, height: f64) {
                (**self).set_stage_size(width, height)
            }
        }
    )*};
}

forward_vm_host!(&mut T, Box<T>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_set_fields() {
        let mut state = RuntimeOptionsState::default();

        RuntimeOptionsPatch::new().fencing(false).apply_to(&mut state);

        assert!(!state.fencing);
        assert!(state.misc_limits);
        assert_eq!(state.max_clones, CloneLimit::DEFAULT);
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut state = RuntimeOptionsState::default();
        let patch = RuntimeOptionsPatch::new();

        assert!(patch.is_empty());
        patch.apply_to(&mut state);
        assert_eq!(state, RuntimeOptionsState::default());
    }
}
