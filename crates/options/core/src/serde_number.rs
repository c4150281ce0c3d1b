//! Serde adapter for `f64` fields that may hold infinities.
//!
//! JSON has no infinity: `serde_json` writes non-finite floats as `null` and
//! refuses to read them back. Finite values stay plain numbers; non-finite
//! values are written as their display text (`"Infinity"`, `"-Infinity"`,
//! `"NaN"`) and read back from it.
//!
//! ```ignore
//! #[serde(with = "options_core::serde_number")]
//! framerate: f64,
//! ```
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;

use crate::cast::format_number;

pub fn serialize<S: Serializer>(number: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if number.is_finite() {
        serializer.serialize_f64(*number)
    } else {
        serializer.serialize_str(&format_number(*number))
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(number) => Ok(number),
        Repr::Text(text) => match text.as_str() {
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a number, \"Infinity\", \"-Infinity\" or \"NaN\"",
            )),
        },
    }
}
