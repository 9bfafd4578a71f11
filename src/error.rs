// src/error.rs

use thiserror::Error;

/// Errors raised while building scene entities or configuring a sweep.
///
/// Per-edge degeneracies (parallel or collinear edges) are not errors; the
/// intersection primitive reports them as a plain miss.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RayCastError {
    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid ray: start and direction point coincide at ({x}, {y})")]
    InvalidRay { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, RayCastError>;
