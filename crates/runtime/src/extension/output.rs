use std::fmt;

use options_core::{CloneLimit, format_number};
use serde::ser::{Serialize, Serializer};

/// Result of a block call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlockOutput {
    Boolean(bool),
    Number(f64),
    /// Command blocks report nothing.
    Empty,
}

impl BlockOutput {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            BlockOutput::Boolean(flag) => Some(flag),
            _ => None,
        }
    }

    pub fn as_number(self) -> Option<f64> {
        match self {
            BlockOutput::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, BlockOutput::Empty)
    }
}

impl From<bool> for BlockOutput {
    fn from(flag: bool) -> Self {
        BlockOutput::Boolean(flag)
    }
}

impl From<f64> for BlockOutput {
    fn from(number: f64) -> Self {
        BlockOutput::Number(number)
    }
}

impl From<CloneLimit> for BlockOutput {
    fn from(limit: CloneLimit) -> Self {
        BlockOutput::Number(limit.as_number())
    }
}

impl fmt::Display for BlockOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockOutput::Boolean(flag) => write!(f, "{flag}"),
            BlockOutput::Number(number) => f.write_str(&format_number(*number)),
            BlockOutput::Empty => Ok(()),
        }
    }
}

/// JSON has no infinity, so non-finite numbers serialize as their display
/// text (`"Infinity"`), matching what the editor shows.
impl Serialize for BlockOutput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BlockOutput::Boolean(flag) => serializer.serialize_bool(*flag),
            BlockOutput::Number(number) if number.is_finite() => serializer.serialize_f64(*number),
            BlockOutput::Number(number) => serializer.serialize_str(&format_number(*number)),
            BlockOutput::Empty => serializer.serialize_unit(),
        }
    }
}
