//! Loosely-typed block argument values.

/// A value as it arrives from a block slot or a reporter dropped into one.
///
/// The editor does not enforce argument types: a "boolean" slot may hold the
/// text `"true"`, a number slot may hold `"Infinity"` or arbitrary text. The
/// facade accepts any [`ArgValue`] and normalizes it through [`crate::cast`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ArgValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Missing argument or explicit null.
    #[default]
    Empty,
}

impl ArgValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn deserializes_untagged_json() {
        let values: Vec<ArgValue> = serde_json::from_str(r#"[true, 30, "turbo mode", null]"#).unwrap();
        assert_eq!(
            values,
            vec![
                ArgValue::Bool(true),
                ArgValue::Number(30.0),
                ArgValue::text("turbo mode"),
                ArgValue::Empty,
            ]
        );
    }
}
