use thiserror::Error;

/// Errors surfaced by `create` and the option loaders.
///
/// Nothing inside a frame returns an error: once an instance exists the
/// simulate/draw/composite steps are plain arithmetic and surface calls.
#[derive(Error, Debug)]
pub enum VortexError {
    /// `particleCount` must be at least one.
    #[error("particleCount must be positive, got {0}")]
    InvalidParticleCount(i64),

    /// A numeric option is non-finite or outside its allowed range.
    #[error("option `{name}` is out of range: {value}")]
    InvalidOption { name: &'static str, value: f64 },

    /// Background color is not a hex color string.
    #[error("invalid background color `{0}`")]
    InvalidColor(String),

    /// Options JSON could not be parsed.
    #[error("failed to parse options: {0}")]
    OptionsParse(#[from] serde_json::Error),

    /// The drawing surface lacks a capability the pipeline needs.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The host refused to schedule a frame.
    #[error("frame scheduler failed: {0}")]
    Scheduler(String),
}

pub type VortexResult<T> = Result<T, VortexError>;
