use thiserror::Error;

/// Rejected motion configuration.
///
/// Everything at run time degrades to clamped values; only construction of
/// springs, interpolations and timings can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spring {name} must be positive and finite, got {value}")]
    InvalidSpring { name: &'static str, value: f32 },
    #[error("interpolation domain [{start}, {end}] is empty or not finite")]
    InvalidDomain { start: f32, end: f32 },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidRate { name: &'static str, value: f32 },
    #[error("entrance duration must be non-zero")]
    ZeroDuration,
    #[error("max frame delta must be non-zero")]
    ZeroFrameCap,
}
