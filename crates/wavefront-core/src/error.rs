use thiserror::Error;

use crate::axis::AxisId;

/// Errors raised while building grids, resolving axes or loading configs.
/// All of them abort the current run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("Invalid range [{min}, {max}] with {samples} samples: need max > min and at least 2 samples")]
    InvalidRange { min: f64, max: f64, samples: usize },
    #[error("Unknown axis '{0}'")]
    UnknownAxis(String),
    #[error("Axis {0} appears more than once in the grid")]
    DuplicateAxis(AxisId),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, WaveError>;
