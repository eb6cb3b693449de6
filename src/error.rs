use thiserror::Error;

/// Errors raised when building the inputs of the evaluators or loading their configuration.
/// The evaluators themselves are total and never fail.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("control point buffer holds {0} floats, which is not a whole number of xyz points")]
    RaggedBuffer(usize),
    #[error("control point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("samples per segment must be at least 2, got {0}")]
    TooFewSamples(usize),
    #[error("viewport must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("pick tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed sketch config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("failed to serialize sketch config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
