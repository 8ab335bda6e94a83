//! Wire form of [`Value`].

use serde_json::{Map, Value as Json};

use super::TYPE_KEY;
use super::fields::{Fields, Object};
use crate::error::DecodeError;
use crate::value::Value;

const VALUE_NAME_OP_ADD: &str = "OpAdd";
const VALUE_NAME_OP_MOD: &str = "OpMod";
const VALUE_NAME_OP_STEP: &str = "OpStep";
const VALUE_NAME_RAND: &str = "Rand";

const RAND_SHORTHAND: &str = "rand";

/// 16.16 fixed point units per percent.
const PERCENT_SCALE: f64 = 655.36;

pub(crate) fn value_from_json(json: &Json) -> Result<Value, DecodeError> {
    match json {
        Json::Null => Ok(Value::default()),
        Json::Number(n) => n
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .map(Value::Const)
            .ok_or_else(|| DecodeError::InvalidValue(n.to_string())),
        Json::String(s) => value_from_shorthand(s),
        Json::Object(map) if map.is_empty() => Ok(Value::default()),
        Json::Object(map) => value_from_dict(map),
        other => Err(DecodeError::InvalidValue(other.to_string())),
    }
}

fn value_from_shorthand(s: &str) -> Result<Value, DecodeError> {
    let invalid = || DecodeError::InvalidValue(s.to_owned());
    if s == RAND_SHORTHAND {
        return Ok(Value::Rand(0));
    }
    if let Some(tick) = s.strip_prefix('%') {
        return tick.parse().map(Value::OpMod).map_err(|_| invalid());
    }
    if let Some(percent) = s.strip_suffix('%') {
        return parse_percent(percent).map(Value::Percent).ok_or_else(invalid);
    }
    if s.starts_with(['+', '-']) {
        return s.parse().map(Value::OpAdd).map_err(|_| invalid());
    }
    Err(invalid())
}

fn value_from_dict(map: &Map<String, Json>) -> Result<Value, DecodeError> {
    let name = match map.get(TYPE_KEY) {
        None => return Err(DecodeError::MissingType),
        Some(Json::String(name)) => name.as_str(),
        Some(other) => {
            return Err(DecodeError::field("Value", "_type", format_args!("expected a string, got {other}")));
        }
    };
    let value = match name {
        VALUE_NAME_OP_ADD => Value::OpAdd(Fields::new(VALUE_NAME_OP_ADD, map).number("AddMS")?),
        VALUE_NAME_OP_MOD => Value::OpMod(Fields::new(VALUE_NAME_OP_MOD, map).number("TickMS")?),
        VALUE_NAME_OP_STEP => Value::OpStep(Fields::new(VALUE_NAME_OP_STEP, map).number("TickMS")?),
        VALUE_NAME_RAND => Value::Rand(Fields::new(VALUE_NAME_RAND, map).number("TickMS")?),
        _ => {
            return Err(DecodeError::UnknownType {
                family: "value",
                name: name.to_owned(),
            });
        }
    };
    Ok(value)
}

pub(crate) fn value_to_json(value: &Value) -> Json {
    match *value {
        Value::Const(c) => Json::from(c),
        Value::Percent(p) => Json::String(format_percent(p)),
        Value::OpAdd(add) => Json::String(format!("{add:+}")),
        Value::OpMod(tick) => Json::String(format!("%{tick}")),
        Value::OpStep(tick) => Object::new().number("TickMS", tick).finish(VALUE_NAME_OP_STEP),
        Value::Rand(0) => Json::from(RAND_SHORTHAND),
        Value::Rand(tick) => Object::new().number("TickMS", tick).finish(VALUE_NAME_RAND),
    }
}

/// Percentage text to 16.16 fixed point, rounded to the nearest unit
fn parse_percent(s: &str) -> Option<i32> {
    let percent: f64 = s.parse().ok()?;
    let fixed = (percent * PERCENT_SCALE).round();
    if !fixed.is_finite() || fixed < f64::from(i32::MIN) || fixed > f64::from(i32::MAX) {
        return None;
    }
    Some(fixed as i32)
}

/// 16.16 fixed point to a percentage with 4 significant digits
fn format_percent(p: i32) -> String {
    let percent = f64::from(p) / PERCENT_SCALE;
    if percent == 0.0 {
        return "0%".to_owned();
    }
    let exponent = libm::floor(libm::log10(percent.abs())) as i32;
    if !(-4..4).contains(&exponent) {
        return format!("{percent:.3e}%");
    }
    let decimals = (3 - exponent) as usize;
    let mut text = format!("{percent:.decimals$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    text.push('%');
    text
}
