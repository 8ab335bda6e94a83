//! Error types for decoding and the outer collaborators.

/// A pattern or value description couldn't be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The document isn't well-formed JSON.
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
    /// A dictionary without the `_type` discriminator.
    #[error("missing \"_type\" discriminator")]
    MissingType,
    /// The discriminator names nothing known in this family.
    #[error("unknown {family} type {name:?}")]
    UnknownType { family: &'static str, name: String },
    /// A string that is none of the recognised shorthands.
    #[error("unrecognised shorthand {0:?}")]
    InvalidShorthand(String),
    /// A color or frame payload with a bad length or non-hex digits.
    #[error("invalid hex payload {0:?}")]
    InvalidHex(String),
    /// A scalar that can't be turned into a value.
    #[error("invalid value {0:?}")]
    InvalidValue(String),
    /// A field of the wrong shape.
    #[error("{kind}.{field}: {reason}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        reason: String,
    },
    #[error("unknown curve {0:?}")]
    UnknownCurve(String),
    #[error("unknown interpolation {0:?}")]
    UnknownInterpolation(String),
    /// An image payload that couldn't be read.
    #[error("invalid image: {0}")]
    Image(#[from] image::ImageError),
}

impl DecodeError {
    pub(crate) fn field(kind: &'static str, field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidField {
            kind,
            field,
            reason: reason.to_string(),
        }
    }
}

/// Preview rendering failed.
#[derive(Debug, thiserror::Error)]
pub enum ThumbnailError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("gif encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
