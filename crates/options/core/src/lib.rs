//! Typed settings facade over a host runtime's tuning knobs.
//!
//! `options-core` defines the closed set of runtime options (turbo mode,
//! interpolation, fencing, misc limits, high quality pen, framerate, clone
//! limit, stage size), the coercion rules that turn loosely-typed block input
//! into those settings, and the host traits the values are read from and
//! written to. All access flows through [`facade::RuntimeOptions`], which
//! holds nothing but the injected host handle.
pub mod cast;
pub mod facade;
pub mod host;
pub mod limit;
#[cfg(feature = "serde")]
pub mod serde_number;
pub mod setting;
pub mod value;

pub use cast::{format_number, to_boolean, to_number};
pub use facade::RuntimeOptions;
pub use host::{Host, RenderHost, RuntimeOptionsPatch, RuntimeOptionsState, StageSize, VmHost};
pub use limit::{CloneLimit, ParseCloneLimitError};
pub use setting::{
    Dimension, HostField, Normalization, NumberSetting, Scalar, SettingDescriptor, Toggle,
    ValueKind, descriptors,
};
pub use value::ArgValue;
