//! Typed access to the fields of an encoded node.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as Json};

use super::TYPE_KEY;
use super::pattern::{pattern_from_json, pattern_to_json};
use super::value::{value_from_json, value_to_json};
use crate::color::{Color, Frame, format_hex, parse_hex};
use crate::curve::Curve;
use crate::error::DecodeError;
use crate::interpolation::Interpolation;
use crate::pattern::Pattern;
use crate::value::Value;

/// Reads the fields of one dictionary; absent or null fields take defaults
pub(super) struct Fields<'a> {
    kind: &'static str,
    map: &'a Map<String, Json>,
}

impl<'a> Fields<'a> {
    pub(super) const fn new(kind: &'static str, map: &'a Map<String, Json>) -> Self {
        Self { kind, map }
    }

    fn get(&self, key: &str) -> Option<&'a Json> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn string(&self, key: &'static str) -> Result<Option<&'a str>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Json::String(s)) => Ok(Some(s)),
            Some(other) => Err(DecodeError::field(self.kind, key, format_args!("expected a string, got {other}"))),
        }
    }

    pub(super) fn pattern(&self, key: &'static str) -> Result<Pattern, DecodeError> {
        self.get(key).map_or(Ok(Pattern::Empty), pattern_from_json)
    }

    pub(super) fn patterns(&self, key: &'static str) -> Result<Vec<Pattern>, DecodeError> {
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Json::Array(items)) => items.iter().map(pattern_from_json).collect(),
            Some(other) => Err(DecodeError::field(self.kind, key, format_args!("expected a list, got {other}"))),
        }
    }

    pub(super) fn value(&self, key: &'static str) -> Result<Value, DecodeError> {
        self.get(key).map_or(Ok(Value::default()), value_from_json)
    }

    pub(super) fn curve(&self, key: &'static str) -> Result<Curve, DecodeError> {
        match self.string(key)? {
            None => Ok(Curve::default()),
            Some(name) => Curve::parse_from_str(name).ok_or_else(|| DecodeError::UnknownCurve(name.to_owned())),
        }
    }

    pub(super) fn interpolation(&self, key: &'static str) -> Result<Interpolation, DecodeError> {
        match self.string(key)? {
            None => Ok(Interpolation::default()),
            Some(name) => Interpolation::parse_from_str(name)
                .ok_or_else(|| DecodeError::UnknownInterpolation(name.to_owned())),
        }
    }

    pub(super) fn color(&self, key: &'static str, default: Color) -> Result<Color, DecodeError> {
        self.string(key)?.map_or(Ok(default), parse_hex)
    }

    pub(super) fn frame(&self, key: &'static str) -> Result<Frame, DecodeError> {
        self.string(key)?.map_or(Ok(Frame::new()), str::parse)
    }

    pub(super) fn number_or<T: DeserializeOwned>(&self, key: &'static str, default: T) -> Result<T, DecodeError> {
        match self.get(key) {
            None => Ok(default),
            Some(json) => T::deserialize(json).map_err(|e| DecodeError::field(self.kind, key, e)),
        }
    }

    pub(super) fn number<T: DeserializeOwned + Default>(&self, key: &'static str) -> Result<T, DecodeError> {
        self.number_or(key, T::default())
    }
}

/// Builds the dictionary form of a node
///
/// Keys end up sorted because `serde_json::Map` is ordered by key.
#[derive(Default)]
pub(super) struct Object(Map<String, Json>);

impl Object {
    pub(super) fn new() -> Self {
        Self::default()
    }

    fn set(mut self, key: &str, value: Json) -> Self {
        self.0.insert(key.to_owned(), value);
        self
    }

    pub(super) fn pattern(self, key: &str, pattern: &Pattern) -> Self {
        self.set(key, pattern_to_json(pattern))
    }

    pub(super) fn patterns(self, key: &str, patterns: &[Pattern]) -> Self {
        self.set(key, Json::Array(patterns.iter().map(pattern_to_json).collect()))
    }

    pub(super) fn value(self, key: &str, value: &Value) -> Self {
        self.set(key, value_to_json(value))
    }

    pub(super) fn curve(self, key: &str, curve: Curve) -> Self {
        self.set(key, Json::from(curve.as_str()))
    }

    pub(super) fn interpolation(self, key: &str, interpolation: Interpolation) -> Self {
        self.set(key, Json::from(interpolation.as_str()))
    }

    pub(super) fn color(self, key: &str, color: Color) -> Self {
        self.set(key, Json::String(format_hex(color)))
    }

    pub(super) fn frame(self, key: &str, frame: &Frame) -> Self {
        self.set(key, Json::String(frame.to_string()))
    }

    pub(super) fn number(self, key: &str, number: impl Into<Json>) -> Self {
        self.set(key, number.into())
    }

    /// Stamp the discriminator and return the finished dictionary
    pub(super) fn finish(self, type_name: &str) -> Json {
        Json::Object(self.set(TYPE_KEY, Json::from(type_name)).0)
    }
}
