//! Editor-facing runtime for the runtime options extension.
//!
//! This crate wraps the [`options_core::RuntimeOptions`] facade in the shape
//! an editor expects from an extension: metadata with blocks and menus,
//! opcode dispatch over loosely-typed arguments, and a registry the extension
//! is registered with once per process.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the registry and its error type
//! - [`extension`] defines the extension trait, metadata, arguments and output
//! - [`runtime_options`] is the runtime options extension itself
//! - [`host`] provides an in-memory host and a shareable host handle
//! - [`config`] loads host defaults from the environment
pub mod api;
pub mod config;
pub mod extension;
pub mod host;
pub mod runtime_options;

pub use api::{ExtensionRegistry, RegistryError, Result};
pub use config::HostConfig;
pub use extension::{
    ArgumentInfo, ArgumentType, Block, BlockArgs, BlockInfo, BlockOutput, BlockType, Extension,
    ExtensionInfo, Menu, MenuItem,
};
pub use host::{HostSnapshot, InMemoryHost, SharedHost};
pub use runtime_options::{EXTENSION_ID, Opcode, RuntimeOptionsExtension};
