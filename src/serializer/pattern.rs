//! Wire form of [`Pattern`].

use serde_json::{Map, Value as Json};

use super::TYPE_KEY;
use super::fields::{Fields, Object};
use crate::color::{WHITE, format_hex, parse_hex};
use crate::error::DecodeError;
use crate::mixer::{
    Add, Chronometer, Crop, Dim, Gradient, Loop, Mixer, PingPong, Rotate, Scale, Split, Subset,
    Transition,
};
use crate::pattern::{
    Aurore, Lightning, NightStars, Pattern, PatternKind, Rainbow, Repeated, WishingStar,
};
use crate::value::MovePerHour;

const RAINBOW_SHORTHAND: &str = "Rainbow";

pub(crate) fn pattern_from_json(json: &Json) -> Result<Pattern, DecodeError> {
    match json {
        Json::Null => Ok(Pattern::Empty),
        Json::String(s) => pattern_from_shorthand(s),
        Json::Object(map) if map.is_empty() => Ok(Pattern::Empty),
        Json::Object(map) => pattern_from_dict(map),
        other => Err(DecodeError::InvalidShorthand(other.to_string())),
    }
}

fn pattern_from_shorthand(s: &str) -> Result<Pattern, DecodeError> {
    if s.starts_with('#') {
        return parse_hex(s).map(Pattern::Color);
    }
    if s.starts_with('L') {
        return s.parse().map(Pattern::Frame);
    }
    if s == RAINBOW_SHORTHAND {
        return Ok(Pattern::Rainbow(Rainbow::new()));
    }
    Err(DecodeError::InvalidShorthand(s.to_owned()))
}

fn pattern_from_dict(map: &Map<String, Json>) -> Result<Pattern, DecodeError> {
    let name = match map.get(TYPE_KEY) {
        None => return Err(DecodeError::MissingType),
        Some(Json::String(name)) => name.as_str(),
        Some(other) => {
            return Err(DecodeError::field("Pattern", "_type", format_args!("expected a string, got {other}")));
        }
    };
    let kind = PatternKind::parse_from_str(name).ok_or_else(|| DecodeError::UnknownType {
        family: "pattern",
        name: name.to_owned(),
    })?;
    let f = Fields::new(kind.as_str(), map);
    let pattern = match kind {
        PatternKind::Repeated => Repeated {
            frame: f.frame("Frame")?,
            move_per_hour: MovePerHour(f.value("MovePerHour")?),
        }
        .into(),
        PatternKind::Aurore => Aurore.into(),
        PatternKind::NightStars => NightStars {
            color: f.color("C", WHITE)?,
        }
        .into(),
        PatternKind::Lightning => Lightning {
            center: f.number("Center")?,
            half_width: f.number("HalfWidth")?,
            intensity: f.number_or("Intensity", u8::MAX)?,
            start_ms: f.number("StartMS")?,
        }
        .into(),
        PatternKind::WishingStar => WishingStar {
            color: f.color("C", WHITE)?,
            duration_ms: f.number("DurationMS")?,
            average_delay_ms: f.number("AverageDelayMS")?,
        }
        .into(),
        PatternKind::Gradient => Gradient::new(f.pattern("Left")?, f.pattern("Right")?, f.curve("Curve")?).into(),
        PatternKind::Split => Split::new(f.pattern("Left")?, f.pattern("Right")?, f.value("Offset")?).into(),
        PatternKind::Transition => Transition::new(
            f.pattern("Before")?,
            f.pattern("After")?,
            f.number("OffsetMS")?,
            f.number("TransitionMS")?,
            f.curve("Curve")?,
        )
        .into(),
        PatternKind::Loop => Loop::new(
            f.patterns("Patterns")?,
            f.number("ShowMS")?,
            f.number("TransitionMS")?,
            f.curve("Curve")?,
        )
        .into(),
        PatternKind::Chronometer => Chronometer::new(f.pattern("Child")?).into(),
        PatternKind::Rotate => Rotate::new(f.pattern("Child")?, f.value("MovePerHour")?).into(),
        PatternKind::PingPong => PingPong::new(f.pattern("Child")?, f.value("MovePerHour")?).into(),
        PatternKind::Crop => Crop::new(f.pattern("Child")?, f.value("Before")?, f.value("After")?).into(),
        PatternKind::Subset => Subset::new(f.pattern("Child")?, f.value("Offset")?, f.value("Length")?).into(),
        PatternKind::Dim => Dim::new(f.pattern("Child")?, f.value("Intensity")?).into(),
        PatternKind::Add => Add::new(f.patterns("Patterns")?).into(),
        PatternKind::Mixer => Mixer::new(f.patterns("Patterns")?, f.number("Weights")?).into(),
        PatternKind::Scale => Scale::new(
            f.pattern("Child")?,
            f.interpolation("Interpolation")?,
            f.value("Length")?,
            f.value("RatioMilli")?,
        )
        .into(),
    };
    Ok(pattern)
}

pub(crate) fn pattern_to_json(pattern: &Pattern) -> Json {
    let Some(kind) = pattern.kind() else {
        return match pattern {
            Pattern::Color(c) => Json::String(format_hex(*c)),
            Pattern::Frame(frame) => Json::String(frame.to_string()),
            Pattern::Rainbow(_) => Json::from(RAINBOW_SHORTHAND),
            _ => Json::Object(Map::new()),
        };
    };
    let object = match pattern {
        Pattern::Repeated(n) => Object::new()
            .frame("Frame", &n.frame)
            .value("MovePerHour", &n.move_per_hour.0),
        Pattern::NightStars(n) => Object::new().color("C", n.color),
        Pattern::Lightning(n) => Object::new()
            .number("Center", n.center)
            .number("HalfWidth", n.half_width)
            .number("Intensity", n.intensity)
            .number("StartMS", n.start_ms),
        Pattern::WishingStar(n) => Object::new()
            .color("C", n.color)
            .number("DurationMS", n.duration_ms)
            .number("AverageDelayMS", n.average_delay_ms),
        Pattern::Gradient(n) => Object::new()
            .pattern("Left", &n.left)
            .pattern("Right", &n.right)
            .curve("Curve", n.curve),
        Pattern::Split(n) => Object::new()
            .pattern("Left", &n.left)
            .pattern("Right", &n.right)
            .value("Offset", &n.offset),
        Pattern::Transition(n) => Object::new()
            .pattern("Before", &n.before)
            .pattern("After", &n.after)
            .number("OffsetMS", n.offset_ms)
            .number("TransitionMS", n.transition_ms)
            .curve("Curve", n.curve),
        Pattern::Loop(n) => Object::new()
            .patterns("Patterns", &n.patterns)
            .number("ShowMS", n.show_ms)
            .number("TransitionMS", n.transition_ms)
            .curve("Curve", n.curve),
        Pattern::Chronometer(n) => Object::new().pattern("Child", &n.child),
        Pattern::Rotate(n) => Object::new()
            .pattern("Child", &n.child)
            .value("MovePerHour", &n.move_per_hour.0),
        Pattern::PingPong(n) => Object::new()
            .pattern("Child", &n.child)
            .value("MovePerHour", &n.move_per_hour.0),
        Pattern::Crop(n) => Object::new()
            .pattern("Child", &n.child)
            .value("Before", &n.before)
            .value("After", &n.after),
        Pattern::Subset(n) => Object::new()
            .pattern("Child", &n.child)
            .value("Offset", &n.offset)
            .value("Length", &n.length),
        Pattern::Dim(n) => Object::new()
            .pattern("Child", &n.child)
            .value("Intensity", &n.intensity),
        Pattern::Add(n) => Object::new().patterns("Patterns", &n.patterns),
        Pattern::Mixer(n) => Object::new()
            .patterns("Patterns", &n.patterns)
            .number("Weights", n.weights.clone()),
        Pattern::Scale(n) => Object::new()
            .pattern("Child", &n.child)
            .interpolation("Interpolation", n.interpolation)
            .value("Length", &n.length)
            .value("RatioMilli", &n.ratio_milli),
        Pattern::Aurore(_)
        | Pattern::Empty
        | Pattern::Color(_)
        | Pattern::Frame(_)
        | Pattern::Rainbow(_) => Object::new(),
    };
    object.finish(kind.as_str())
}
