//! Extension metadata as consumed by the editor toolbox.
use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

/// Top-level description of an extension.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    pub id: String,
    pub name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub blocks: Vec<Block>,
    pub menus: BTreeMap<String, Menu>,
}

impl ExtensionInfo {
    /// Looks up a block definition by opcode.
    pub fn block(&self, opcode: &str) -> Option<&BlockInfo> {
        self.block_infos().find(|block| block.opcode == opcode)
    }

    /// Block definitions in toolbox order, separators skipped.
    pub fn block_infos(&self) -> impl Iterator<Item = &BlockInfo> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Block(info) => Some(info),
            Block::Separator => None,
        })
    }

    pub fn opcodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.block_infos().map(|block| block.opcode.as_str())
    }

    pub fn menu(&self, name: &str) -> Option<&Menu> {
        self.menus.get(name)
    }
}

/// Toolbox entry: a block or a visual separator.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Block(BlockInfo),
    /// Serialized as the editor's `"---"` marker.
    Separator,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Block::Block(info) => info.serialize(serializer),
            Block::Separator => serializer.serialize_str("---"),
        }
    }
}

impl From<BlockInfo> for Block {
    fn from(info: BlockInfo) -> Self {
        Block::Block(info)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, serde::Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Hexagonal reporter returning a boolean.
    Boolean,
    /// Stack block with a side effect and no value.
    Command,
    /// Round reporter returning a value.
    Reporter,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub opcode: String,
    pub text: String,
    pub block_type: BlockType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub arguments: BTreeMap<String, ArgumentInfo>,
}

impl BlockInfo {
    pub fn new(opcode: impl Into<String>, text: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            opcode: opcode.into(),
            text: text.into(),
            block_type,
            arguments: BTreeMap::new(),
        }
    }

    pub fn argument(mut self, name: impl Into<String>, argument: ArgumentInfo) -> Self {
        self.arguments.insert(name.into(), argument);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, serde::Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ArgumentType {
    String,
    Number,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentInfo {
    #[serde(rename = "type")]
    pub arg_type: ArgumentType,
    pub default_value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<String>,
}

impl ArgumentInfo {
    pub fn string(default_value: impl Into<String>) -> Self {
        Self {
            arg_type: ArgumentType::String,
            default_value: default_value.into(),
            menu: None,
        }
    }

    pub fn number(default_value: impl Into<String>) -> Self {
        Self {
            arg_type: ArgumentType::Number,
            default_value: default_value.into(),
            menu: None,
        }
    }

    pub fn with_menu(mut self, menu: impl Into<String>) -> Self {
        self.menu = Some(menu.into());
        self
    }
}

/// Dropdown attached to an argument slot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// Whether a reporter can be dropped into the slot instead of picking an
    /// item, which is why extension code cannot trust menu values.
    pub accept_reporters: bool,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn accepting_reporters(items: impl IntoIterator<Item = MenuItem>) -> Self {
        Self {
            accept_reporters: true,
            items: items.into_iter().collect(),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().map(|item| item.value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct MenuItem {
    pub text: String,
    pub value: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }

    /// Item whose label is also its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            text: value.clone(),
            value,
        }
    }
}
