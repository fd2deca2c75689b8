use thiserror::Error;

/// Errors raised while building a shape sequence or reading configuration.
///
/// Nothing on the per-frame path can fail; these only surface at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    #[error("shape sequence is empty")]
    EmptySequence,

    #[error("shape {index} has {found} points, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("particle count must be greater than zero")]
    ZeroParticles,

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, MorphError>;
