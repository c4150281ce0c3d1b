//! Host implementations shipped with the runtime.
//!
//! [`InMemoryHost`] is a complete host holding the editor's default values,
//! used by the CLI and by tests. [`SharedHost`] lets the registry-owned
//! extension and an outside observer work on the same host.
mod memory;
mod shared;

pub use memory::{HostSnapshot, InMemoryHost};
pub use shared::SharedHost;
