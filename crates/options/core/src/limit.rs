//! Clone ceiling with an unbounded sentinel.
use core::fmt;
use core::str::FromStr;

use crate::cast::{format_number, to_number};
use crate::value::ArgValue;

/// Maximum number of clones the host allows.
///
/// `Unbounded` is the `Infinity` sentinel. It is kept as its own variant so
/// the numeric cast never collapses it to `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CloneLimit {
    Limited(#[cfg_attr(feature = "serde", serde(with = "crate::serde_number"))] f64),
    Unbounded,
}

impl CloneLimit {
    /// Host default ceiling.
    pub const DEFAULT: Self = Self::Limited(300.0);

    /// Maps positive infinity to [`CloneLimit::Unbounded`]; every other value
    /// is kept as a finite ceiling for the host to interpret.
    pub fn from_number(number: f64) -> Self {
        if number == f64::INFINITY {
            Self::Unbounded
        } else {
            Self::Limited(number)
        }
    }

    /// Applies the permissive numeric cast, keeping the `Infinity` token.
    pub fn from_arg(value: &ArgValue) -> Self {
        Self::from_number(to_number(value))
    }

    /// Numeric view; unbounded reads as `f64::INFINITY`.
    pub fn as_number(self) -> f64 {
        match self {
            Self::Limited(limit) => limit,
            Self::Unbounded => f64::INFINITY,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl Default for CloneLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CloneLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_number(self.as_number()))
    }
}

/// Strict parse failure, used where a bad value should be reported rather
/// than absorbed (configuration files, environment variables).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid clone limit '{0}': expected a number or 'Infinity'")]
pub struct ParseCloneLimitError(pub String);

impl FromStr for CloneLimit {
    type Err = ParseCloneLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "Infinity" {
            return Ok(Self::Unbounded);
        }

        match trimmed.parse::<f64>() {
            Ok(limit) if limit.is_finite() => Ok(Self::Limited(limit)),
            _ => Err(ParseCloneLimitError(s.to_owned())),
        }
    }
}
