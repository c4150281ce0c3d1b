//! Traits describing the host runtime surface the facade reads and writes.
//!
//! The host owns every value. [`VmHost`] covers the virtual machine side
//! (turbo mode, interpolation, runtime options, frame loop, stage size) and
//! [`RenderHost`] covers the renderer. [`Host`] bundles both so the facade
//! can be generic over a single parameter without coupling to a concrete
//! runtime.
mod render;
mod vm;

pub use render::RenderHost;
pub use vm::{RuntimeOptionsPatch, RuntimeOptionsState, StageSize, VmHost};

/// Everything [`crate::RuntimeOptions`] needs from the host.
pub trait Host: VmHost + RenderHost {}

impl<T> Host for T where T: VmHost + RenderHost + ?Sized {}
