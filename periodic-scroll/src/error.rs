use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// A configuration value was rejected. No state was changed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("unknown periodicity value {0}")]
    UnknownPeriodicity(u32),
    #[error("unknown periodicity name (expected none, horizontal, vertical or both)")]
    UnknownPeriodicityName,
    #[error("size {width}x{height} must be finite and non-negative")]
    InvalidSize { width: f32, height: f32 },
}
