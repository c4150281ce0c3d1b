//! Loosely-typed block arguments keyed by slot name.
use options_core::ArgValue;
use serde_json::{Map, Value};

/// Arguments of one block call, as JSON values keyed by slot name.
///
/// Reading never fails: a missing slot reads as [`ArgValue::Empty`], and
/// arrays or objects (which a reporter can produce) read as their JSON text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BlockArgs(Map<String, Value>);

impl BlockArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> ArgValue {
        self.0.get(name).map_or(ArgValue::Empty, to_arg_value)
    }

    /// Raw text of a slot, for menu lookups. Non-text values use their JSON
    /// rendering, numbers without quotes.
    pub fn text(&self, name: &str) -> String {
        match self.0.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for BlockArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for BlockArgs
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

fn to_arg_value(value: &Value) -> ArgValue {
    match value {
        Value::Null => ArgValue::Empty,
        Value::Bool(flag) => ArgValue::Bool(*flag),
        Value::Number(number) => number.as_f64().map_or(ArgValue::Empty, ArgValue::Number),
        Value::String(text) => ArgValue::Text(text.clone()),
        Value::Array(_) | Value::Object(_) => ArgValue::Text(value.to_string()),
    }
}
