//! Extension contract between the editor and a block provider.
//!
//! An extension describes itself with [`ExtensionInfo`] (blocks and menus)
//! and answers block calls by opcode. Arguments arrive loosely typed in
//! [`BlockArgs`]; results go back as [`BlockOutput`].
mod args;
mod info;
mod output;

pub use args::BlockArgs;
pub use info::{
    ArgumentInfo, ArgumentType, Block, BlockInfo, BlockType, ExtensionInfo, Menu, MenuItem,
};
pub use output::BlockOutput;

/// A block provider registered with [`crate::ExtensionRegistry`].
pub trait Extension: Send {
    /// Stable identifier, also the `id` field of [`Extension::info`].
    fn id(&self) -> &'static str;

    /// Full metadata: name, colours, blocks and menus.
    fn info(&self) -> ExtensionInfo;

    /// Whether the extension needs direct access to the host runtime and must
    /// refuse to load in a sandboxed editor.
    fn requires_unsandboxed(&self) -> bool {
        false
    }

    /// Runs one block.
    ///
    /// Returns `None` only when the opcode is not one of this extension's
    /// blocks. Bad arguments never fail a known opcode.
    fn call(&mut self, opcode: &str, args: &BlockArgs) -> Option<BlockOutput>;
}
