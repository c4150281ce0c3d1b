//! Closed set of runtime settings and their host mapping.
//!
//! Every setting the editor can name is a variant here. Names parse with
//! [`strum`] using the exact menu spelling (`"turbo mode"`, `"width"`, ...),
//! and each variant maps to its host accessor through an exhaustive `match`,
//! so a new variant cannot be added without deciding where it lives.
use strum::IntoEnumIterator;

/// Boolean settings exposed as `is [thing] enabled?` / `set [thing] to [enabled]`.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Toggle {
    #[strum(serialize = "turbo mode")]
    #[cfg_attr(feature = "serde", serde(rename = "turbo mode"))]
    TurboMode,
    #[strum(serialize = "interpolation")]
    #[cfg_attr(feature = "serde", serde(rename = "interpolation"))]
    Interpolation,
    /// Negation of the host `fencing` flag.
    #[strum(serialize = "remove fencing")]
    #[cfg_attr(feature = "serde", serde(rename = "remove fencing"))]
    RemoveFencing,
    /// Negation of the host `misc_limits` flag.
    #[strum(serialize = "remove misc limits")]
    #[cfg_attr(feature = "serde", serde(rename = "remove misc limits"))]
    RemoveMiscLimits,
    #[strum(serialize = "high quality pen")]
    #[cfg_attr(feature = "serde", serde(rename = "high quality pen"))]
    HighQualityPen,
}

impl Toggle {
    /// Parses a menu value. Matching is exact; anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn host_field(self) -> HostField {
        match self {
            Toggle::TurboMode => HostField::TurboMode,
            Toggle::Interpolation => HostField::Interpolation,
            Toggle::RemoveFencing => HostField::Fencing,
            Toggle::RemoveMiscLimits => HostField::MiscLimits,
            Toggle::HighQualityPen => HostField::HighQualityRender,
        }
    }

    /// Whether the exposed value is the negation of the host flag.
    ///
    /// The host names these flags for the restriction ("fencing", "misc
    /// limits") while the editor exposes the removal of the restriction.
    pub const fn is_inverted(self) -> bool {
        matches!(self, Toggle::RemoveFencing | Toggle::RemoveMiscLimits)
    }

    pub fn descriptor(self) -> SettingDescriptor {
        SettingDescriptor {
            name: self.name(),
            kind: ValueKind::Boolean,
            field: self.host_field(),
            rule: if self.is_inverted() {
                Normalization::InvertedBoolean
            } else {
                Normalization::Boolean
            },
        }
    }
}

/// One side of the stage.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Numeric settings that can be read.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NumberSetting {
    Framerate,
    #[strum(serialize = "clone limit")]
    #[cfg_attr(feature = "serde", serde(rename = "clone limit"))]
    CloneLimit,
    Width,
    Height,
}

impl NumberSetting {
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub const fn host_field(self) -> HostField {
        match self {
            NumberSetting::Framerate => HostField::Framerate,
            NumberSetting::CloneLimit => HostField::MaxClones,
            NumberSetting::Width => HostField::StageWidth,
            NumberSetting::Height => HostField::StageHeight,
        }
    }

    pub fn descriptor(self) -> SettingDescriptor {
        let (kind, rule) = match self {
            NumberSetting::Framerate => (ValueKind::Integer, Normalization::Number),
            NumberSetting::CloneLimit => (ValueKind::Integer, Normalization::NumberOrUnbounded),
            NumberSetting::Width | NumberSetting::Height => {
                (ValueKind::Dimension, Normalization::Number)
            }
        };

        SettingDescriptor {
            name: self.name(),
            kind,
            field: self.host_field(),
            rule,
        }
    }
}

impl From<Dimension> for NumberSetting {
    fn from(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Width => NumberSetting::Width,
            Dimension::Height => NumberSetting::Height,
        }
    }
}

/// Numeric settings that can be written on their own.
///
/// Stage width and height are absent on purpose: the host resizes the stage
/// with both sides at once, see [`crate::RuntimeOptions::set_dimensions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Scalar {
    Framerate,
    #[strum(serialize = "clone limit")]
    CloneLimit,
}

impl From<Scalar> for NumberSetting {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Framerate => NumberSetting::Framerate,
            Scalar::CloneLimit => NumberSetting::CloneLimit,
        }
    }
}

/// Host value backing a setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum HostField {
    #[strum(serialize = "VmHost::turbo_mode")]
    TurboMode,
    #[strum(serialize = "VmHost::interpolation")]
    Interpolation,
    #[strum(serialize = "VmHost::runtime_options.fencing")]
    Fencing,
    #[strum(serialize = "VmHost::runtime_options.misc_limits")]
    MiscLimits,
    #[strum(serialize = "RenderHost::high_quality_render")]
    HighQualityRender,
    #[strum(serialize = "VmHost::framerate")]
    Framerate,
    #[strum(serialize = "VmHost::runtime_options.max_clones")]
    MaxClones,
    #[strum(serialize = "VmHost::stage_size.width")]
    StageWidth,
    #[strum(serialize = "VmHost::stage_size.height")]
    StageHeight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Boolean,
    Integer,
    Dimension,
}

/// How raw input is turned into the value written to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Normalization {
    /// [`crate::to_boolean`], written as is.
    Boolean,
    /// [`crate::to_boolean`], negated before writing.
    InvertedBoolean,
    /// [`crate::to_number`].
    Number,
    /// [`crate::to_number`] with positive infinity kept as the unbounded sentinel.
    NumberOrUnbounded,
}

/// Static description of one setting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingDescriptor {
    pub name: &'static str,
    pub kind: ValueKind,
    pub field: HostField,
    pub rule: Normalization,
}

/// All nine settings: the five toggles followed by the four numbers.
pub fn descriptors() -> impl Iterator<Item = SettingDescriptor> {
    Toggle::iter()
        .map(Toggle::descriptor)
        .chain(NumberSetting::iter().map(NumberSetting::descriptor))
}
