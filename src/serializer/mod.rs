//! JSON encoding of pattern trees and values.
//!
//! Nodes are dictionaries tagged with a `_type` discriminator. Colors,
//! frames and the rainbow use string shorthands instead, as do most values.
//! An empty dictionary decodes to the no-op pattern or to a zero value.

mod fields;
mod pattern;
mod value;

use image::ImageFormat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

use crate::color::{Color, Frame};
use crate::curve::Curve;
use crate::error::DecodeError;
use crate::mixer::Loop;
use crate::pattern::Pattern;
use crate::value::Value;

/// Key holding the discriminator of a dictionary-encoded node.
pub const TYPE_KEY: &str = "_type";

#[tracing::instrument(level = "trace", skip_all, fields(len = bytes.len()))]
pub fn decode_pattern(bytes: &[u8]) -> Result<Pattern, DecodeError> {
    let json: Json = serde_json::from_slice(bytes)?;
    pattern::pattern_from_json(&json)
}

/// Compact JSON with keys sorted
pub fn encode_pattern(pattern: &Pattern) -> String {
    pattern::pattern_to_json(pattern).to_string()
}

pub fn decode_value(bytes: &[u8]) -> Result<Value, DecodeError> {
    let json: Json = serde_json::from_slice(bytes)?;
    value::value_from_json(&json)
}

pub fn encode_value(value: &Value) -> String {
    value::value_to_json(value).to_string()
}

/// Turn each row of a PNG into a frame, shown in turn for `frame_duration_ms`
///
/// Alpha is ignored.
pub fn load_png(bytes: &[u8], frame_duration_ms: u32) -> Result<Pattern, DecodeError> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgb8();
    let frames = image
        .rows()
        .map(|row| {
            let frame: Frame = row.map(|p| Color { r: p[0], g: p[1], b: p[2] }).collect();
            Pattern::Frame(frame)
        })
        .collect();
    tracing::debug!(width = image.width(), rows = image.height(), "loaded png");
    Ok(Loop::new(frames, frame_duration_ms, 0, Curve::default()).into())
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        pattern::pattern_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        pattern::pattern_from_json(&json).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        value::value_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        value::value_from_json(&json).map_err(serde::de::Error::custom)
    }
}
