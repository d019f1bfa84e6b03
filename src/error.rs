use thiserror::Error;

/// Precondition violations detected before a sampling run starts.
///
/// Geometric outcomes such as a rejected candidate or a start point outside
/// the bounds are not errors, they show up as a shorter (or empty) output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("Minimum distance must be positive and finite, got {0}")]
    NonPositiveDistance(f64),

    #[error("At least one candidate attempt per active point is required")]
    NoTries,

    #[error("Degenerate bounds ({min_x}, {min_y}) to ({max_x}, {max_y}), max must exceed min on both axes")]
    DegenerateBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("Acceleration grid of {cols} x {rows} cells is too large to allocate")]
    GridTooLarge { cols: f64, rows: f64 },
}

pub type Result<T> = std::result::Result<T, SamplingError>;
