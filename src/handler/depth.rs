//! Depth-limited JSON decoding.
//!
//! The nesting bound is enforced while the input is being decoded: every
//! nested value is deserialized through a seed that carries its depth, and a
//! seed past the bound fails before its subtree is read. Pathological input is
//! rejected without building the deep intermediate structure first and without
//! leaning on the decoder's own recursion guard.

use crate::error::{ErrorCode, ParseError};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use std::cell::Cell;
use std::fmt;

/// Maximum depth of a decoded value, counted from the root at depth 0
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Highest depth bound the decoder can enforce itself.
///
/// serde_json refuses the 128th nested container on its own, which would
/// surface as a syntax error. With a bound of 126 the seed rejects any value at
/// depth 127 before serde_json opens it.
pub const MAX_SUPPORTED_DEPTH: usize = 126;

#[derive(Clone, Copy)]
struct DepthLimited<'a> {
    depth: usize,
    max_depth: usize,
    /// Set when the bound trips, so the caller can tell it apart from syntax errors
    tripped: &'a Cell<bool>,
}

impl DepthLimited<'_> {
    fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }
}

impl<'de> DeserializeSeed<'de> for DepthLimited<'_> {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        if self.depth > self.max_depth {
            self.tripped.set(true);
            return Err(de::Error::custom(format_args!(
                "maximum nesting depth of {} exceeded",
                self.max_depth
            )));
        }
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for DepthLimited<'_> {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any valid JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Null)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element_seed(self.child())? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value_seed(self.child())?;
            object.insert(key, value);
        }
        Ok(Value::Object(object))
    }
}

/// Decode JSON text, failing once any value sits deeper than `max_depth`.
///
/// `max_depth` is clamped to [`MAX_SUPPORTED_DEPTH`].
pub fn decode_json(raw: &str, max_depth: usize) -> Result<Value, ParseError> {
    let max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
    let tripped = Cell::new(false);
    let seed = DepthLimited {
        depth: 0,
        max_depth,
        tripped: &tripped,
    };

    let mut deserializer = serde_json::Deserializer::from_str(raw);
    let decoded = seed.deserialize(&mut deserializer).and_then(|value| {
        deserializer.end()?;
        Ok(value)
    });

    decoded.map_err(|err| {
        if tripped.get() {
            return ParseError::depth_exceeded(max_depth).with_position(err.line(), err.column());
        }
        ParseError::new(format!("JSON decode error: {}", decoder_reason(&err)))
            .with_code(ErrorCode::InvalidJson)
            .with_position(err.line(), err.column())
    })
}

/// Decoder message without the trailing location, which ParseError renders itself
fn decoder_reason(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rsplit_once(" at line ") {
        Some((reason, _)) => reason.to_string(),
        None => text,
    }
}
