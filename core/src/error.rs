use thiserror::Error;

/// Errors produced while analysing orbital occupancies or reading their inputs.
#[derive(Debug, Error)]
pub enum OrbitalError {
    #[error("got {energies} orbital energies but {occupancies} occupancies")]
    LengthMismatch { energies: usize, occupancies: usize },

    #[error("degeneracy tolerance must be non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("atom {index} has {len} coordinates, expected x, y, z")]
    InvalidPosition { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
