//! Errors surfaced by the extension registry.
//!
//! These cover registration and routing only. Once a call reaches an
//! extension's block it cannot fail; bad arguments are absorbed there.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("extension '{id}' needs to be run unsandboxed")]
    Sandboxed { id: String },

    #[error("extension '{0}' is already registered")]
    DuplicateExtension(String),

    #[error("no extension registered with id '{0}'")]
    UnknownExtension(String),

    #[error("extension '{extension}' has no block '{opcode}'")]
    UnknownOpcode { extension: String, opcode: String },
}
