use thiserror::Error;

/// Rejected effect configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("step must be in (0, 1], got {0}")]
    InvalidStep(f32),
    #[error("tick interval must be non-zero")]
    ZeroInterval,
    #[error("radius factor must be positive, got {0}")]
    InvalidRadiusFactor(f32),
    #[error("color for `{0}` must not be empty")]
    EmptyColor(&'static str),
    #[error("cannot parse `{key}` value `{value}`")]
    Parse { key: String, value: String },
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
}
