//! The runtime options extension: blocks that read and tune the host runtime.
//!
//! Every block is a thin call into [`RuntimeOptions`]. Menu slots accept
//! reporters, so a `thing` or `dimension` argument may hold any text; values
//! outside the menu are logged at debug level and resolved to `false`, `0`
//! or a no-op by the facade.
use std::collections::BTreeMap;

use options_core::{Dimension, Host, RuntimeOptions, Toggle};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::extension::{
    ArgumentInfo, Block, BlockArgs, BlockInfo, BlockOutput, BlockType, Extension, ExtensionInfo,
    Menu, MenuItem,
};

pub const EXTENSION_ID: &str = "runtimeoptions";
const EXTENSION_NAME: &str = "Runtime Options";

/// Block opcodes, spelled as the editor sends them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum Opcode {
    GetEnabled,
    SetEnabled,
    GetFramerate,
    SetFramerate,
    GetCloneLimit,
    SetCloneLimit,
    GetDimension,
    SetDimensions,
}

/// Runtime options exposed as editor blocks over an injected host.
pub struct RuntimeOptionsExtension<H> {
    options: RuntimeOptions<H>,
}

impl<H: Host> RuntimeOptionsExtension<H> {
    pub fn new(host: H) -> Self {
        Self {
            options: RuntimeOptions::new(host),
        }
    }

    pub fn options(&self) -> &RuntimeOptions<H> {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut RuntimeOptions<H> {
        &mut self.options
    }

    /// Runs a block by typed opcode. Never fails.
    pub fn dispatch(&mut self, opcode: Opcode, args: &BlockArgs) -> BlockOutput {
        match opcode {
            Opcode::GetEnabled => {
                let thing = args.text("thing");
                if Toggle::from_name(&thing).is_none() {
                    debug!(thing = %thing, "unrecognized toggle, reporting false");
                }
                self.options.get_toggle(&thing).into()
            }
            Opcode::SetEnabled => {
                let thing = args.text("thing");
                if Toggle::from_name(&thing).is_none() {
                    debug!(thing = %thing, "unrecognized toggle, ignoring");
                }
                self.options.set_toggle(&thing, &args.get("enabled"));
                BlockOutput::Empty
            }
            Opcode::GetFramerate => self.options.framerate().into(),
            Opcode::SetFramerate => {
                self.options.set_framerate(&args.get("fps"));
                BlockOutput::Empty
            }
            Opcode::GetCloneLimit => self.options.clone_limit().into(),
            Opcode::SetCloneLimit => {
                self.options.set_clone_limit(&args.get("limit"));
                BlockOutput::Empty
            }
            Opcode::GetDimension => {
                let dimension = args.text("dimension");
                if Dimension::from_name(&dimension).is_none() {
                    debug!(dimension = %dimension, "unrecognized dimension, reporting 0");
                }
                self.options.get_dimension(&dimension).into()
            }
            Opcode::SetDimensions => {
                self.options
                    .set_dimensions(&args.get("width"), &args.get("height"));
                BlockOutput::Empty
            }
        }
    }

    fn blocks() -> Vec<Block> {
        let thing = || ArgumentInfo::string(Toggle::TurboMode.name()).with_menu("thing");

        vec![
            block(Opcode::GetEnabled, "is [thing] enabled?", BlockType::Boolean)
                .argument("thing", thing())
                .into(),
            block(Opcode::SetEnabled, "set [thing] to [enabled]", BlockType::Command)
                .argument("thing", thing())
                .argument("enabled", ArgumentInfo::string("true").with_menu("enabled"))
                .into(),
            Block::Separator,
            block(Opcode::GetFramerate, "get framerate", BlockType::Reporter).into(),
            block(Opcode::SetFramerate, "set framerate to [fps]", BlockType::Command)
                .argument("fps", ArgumentInfo::number("30"))
                .into(),
            Block::Separator,
            block(Opcode::GetCloneLimit, "get clone limit", BlockType::Reporter).into(),
            block(Opcode::SetCloneLimit, "set clone limit [limit]", BlockType::Command)
                .argument("limit", ArgumentInfo::number("300").with_menu("clones"))
                .into(),
            Block::Separator,
            block(Opcode::GetDimension, "get stage [dimension]", BlockType::Reporter)
                .argument(
                    "dimension",
                    ArgumentInfo::string(Dimension::Width.name()).with_menu("dimension"),
                )
                .into(),
            block(
                Opcode::SetDimensions,
                "set stage size width: [width] height: [height]",
                BlockType::Command,
            )
            .argument("width", ArgumentInfo::number("480"))
            .argument("height", ArgumentInfo::number("360"))
            .into(),
        ]
    }

    fn menus() -> BTreeMap<String, Menu> {
        BTreeMap::from([
            (
                "thing".to_owned(),
                Menu::accepting_reporters(
                    Toggle::iter().map(|toggle| MenuItem::plain(toggle.name())),
                ),
            ),
            (
                "enabled".to_owned(),
                Menu::accepting_reporters([
                    MenuItem::new("enabled", "true"),
                    MenuItem::new("disabled", "false"),
                ]),
            ),
            (
                "clones".to_owned(),
                Menu::accepting_reporters([
                    MenuItem::new("default (300)", "300"),
                    MenuItem::plain("Infinity"),
                ]),
            ),
            (
                "dimension".to_owned(),
                Menu::accepting_reporters(
                    Dimension::iter().map(|dimension| MenuItem::plain(dimension.name())),
                ),
            ),
        ])
    }
}

fn block(opcode: Opcode, text: &str, block_type: BlockType) -> BlockInfo {
    BlockInfo::new(<&'static str>::from(opcode), text, block_type)
}

impl<H: Host + Send> Extension for RuntimeOptionsExtension<H> {
    fn id(&self) -> &'static str {
        EXTENSION_ID
    }

    fn info(&self) -> ExtensionInfo {
        ExtensionInfo {
            id: EXTENSION_ID.to_owned(),
            name: EXTENSION_NAME.to_owned(),
            color1: "#3467eb".to_owned(),
            color2: "#4e7bed".to_owned(),
            color3: "#2d53b3".to_owned(),
            blocks: Self::blocks(),
            menus: Self::menus(),
        }
    }

    fn requires_unsandboxed(&self) -> bool {
        true
    }

    fn call(&mut self, opcode: &str, args: &BlockArgs) -> Option<BlockOutput> {
        let opcode: Opcode = opcode.parse().ok()?;
        let output = self.dispatch(opcode, args);
        debug!(%opcode, %output, "runtime options block");
        Some(output)
    }
}
