//! Public runtime API surface.
//!
//! The registry is the single entry point an editor uses: extensions are
//! registered once, then every block call is routed through it by
//! extension id and opcode.

pub mod errors;
pub mod registry;

pub use errors::{RegistryError, Result};
pub use registry::ExtensionRegistry;
