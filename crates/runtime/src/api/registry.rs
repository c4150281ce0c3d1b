//! Extension registry routing block calls to registered extensions.
//!
//! The [`ExtensionRegistry`] implements the Registry pattern: extensions are
//! stored by id, registered once, and looked up on every block call.
//!
//! # Design
//!
//! - **Sandbox gate**: extensions that need the live host are refused by a
//!   sandboxed registry at registration time, not at call time
//! - **Unique ids**: registering an id twice is an error, the first stays
//! - **Routing errors only**: unknown ids and opcodes are reported; whatever
//!   an extension does with its arguments is its own business

use std::collections::BTreeMap;

use tracing::{debug, info};

use super::{RegistryError, Result};
use crate::extension::{BlockArgs, BlockOutput, Extension, ExtensionInfo};

/// Registry of loaded extensions.
///
/// # Architecture
///
/// ```text
/// ExtensionRegistry
/// ├── sandboxed: bool  (editor mode, fixed at construction)
/// └── extensions: BTreeMap<id, Box<dyn Extension>>
/// ```
pub struct ExtensionRegistry {
    sandboxed: bool,
    extensions: BTreeMap<&'static str, Box<dyn Extension>>,
}

impl ExtensionRegistry {
    /// Create a registry for an editor running extensions sandboxed or not.
    pub fn new(sandboxed: bool) -> Self {
        Self {
            sandboxed,
            extensions: BTreeMap::new(),
        }
    }

    pub fn is_sandboxed(&self) -> bool {
        self.sandboxed
    }

    /// Register an extension.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Sandboxed` if the extension needs the live host and
    ///   this registry is sandboxed
    /// - `RegistryError::DuplicateExtension` if the id is taken
    pub fn register(&mut self, extension: impl Extension + 'static) -> Result<()> {
        self.register_boxed(Box::new(extension))
    }

    /// Register a boxed extension.
    ///
    /// This is useful when you already have a `Box<dyn Extension>`.
    pub fn register_boxed(&mut self, extension: Box<dyn Extension>) -> Result<()> {
        let id = extension.id();

        if self.sandboxed && extension.requires_unsandboxed() {
            return Err(RegistryError::Sandboxed { id: id.to_owned() });
        }
        if self.extensions.contains_key(id) {
            return Err(RegistryError::DuplicateExtension(id.to_owned()));
        }

        let blocks = extension.info().block_infos().count();
        self.extensions.insert(id, extension);
        info!(extension = id, blocks, "extension registered");
        Ok(())
    }

    /// Run a block of a registered extension.
    ///
    /// # Errors
    ///
    /// - `RegistryError::UnknownExtension` if no extension has this id
    /// - `RegistryError::UnknownOpcode` if the extension has no such block
    pub fn call(&mut self, id: &str, opcode: &str, args: &BlockArgs) -> Result<BlockOutput> {
        let extension = self
            .extensions
            .get_mut(id)
            .ok_or_else(|| RegistryError::UnknownExtension(id.to_owned()))?;

        debug!(extension = id, opcode, "block call");
        extension
            .call(opcode, args)
            .ok_or_else(|| RegistryError::UnknownOpcode {
                extension: id.to_owned(),
                opcode: opcode.to_owned(),
            })
    }

    /// Metadata of a registered extension.
    pub fn info(&self, id: &str) -> Option<ExtensionInfo> {
        self.extensions.get(id).map(|extension| extension.info())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.extensions.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.extensions.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new(false)
    }
}
