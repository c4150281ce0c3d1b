use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use options_core::{RenderHost, RuntimeOptionsPatch, RuntimeOptionsState, StageSize, VmHost};

/// Cloneable handle to one host.
///
/// Each trait call takes the lock for exactly that call, which is the
/// external serialization the facade expects from multi-threaded callers.
/// A poisoned lock is recovered: host values are plain data and stay valid.
pub struct SharedHost<H> {
    inner: Arc<Mutex<H>>,
}

impl<H> SharedHost<H> {
    pub fn new(host: H) -> Self {
        Self {
            inner: Arc::new(Mutex::new(host)),
        }
    }

    /// Locks the host for a sequence of reads or writes.
    pub fn lock(&self) -> MutexGuard<'_, H> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with the host locked.
    pub fn with<R>(&self, f: impl FnOnce(&mut H) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<H> Clone for SharedHost<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Default> Default for SharedHost<H> {
    fn default() -> Self {
        Self::new(H::default())
    }
}

impl<H: VmHost> VmHost for SharedHost<H> {
    fn turbo_mode(&self) -> bool {
        self.lock().turbo_mode()
    }

    fn set_turbo_mode(&mut self, enabled: bool) {
        self.lock().set_turbo_mode(enabled)
    }

    fn interpolation(&self) -> bool {
        self.lock().interpolation()
    }

    fn set_interpolation(&mut self, enabled: bool) {
        self.lock().set_interpolation(enabled)
    }

    fn runtime_options(&self) -> RuntimeOptionsState {
        self.lock().runtime_options()
    }

    fn set_runtime_options(&mut self, patch: RuntimeOptionsPatch) {
        self.lock().set_runtime_options(patch)
    }

    fn framerate(&self) -> f64 {
        self.lock().framerate()
    }

    fn set_framerate(&mut self, fps: f64) {
        self.lock().set_framerate(fps)
    }

    fn stage_size(&self) -> StageSize {
        self.lock().stage_size()
    }

    fn set_stage_size(&mut self, width: f64, height: f64) {
        self.lock().set_stage_size(width, height)
    }
}

impl<H: RenderHost> RenderHost for SharedHost<H> {
    fn high_quality_render(&self) -> bool {
        self.lock().high_quality_render()
    }

    fn set_high_quality_render(&mut self, enabled: bool) {
        self.lock().set_high_quality_render(enabled)
    }
}
