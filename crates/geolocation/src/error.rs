//! Error type for location construction and bounding-box queries.
//!
//! Construction failures and bad query arguments are separate variants.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeoError {
    /// Latitude or longitude (radians) outside `[-π/2, π/2]` / `[-π, π]`.
    #[error("coordinate out of range: lat {lat} rad, lon {lon} rad")]
    OutOfRange { lat: f64, lon: f64 },

    /// Negative or NaN distance or sphere radius passed to a bounding-box
    /// query.
    #[error("invalid argument: distance {distance}, radius {radius} (both must be non-negative)")]
    InvalidArgument { distance: f64, radius: f64 },
}

/// Shorthand result type for this crate.
pub type GeoResult<T> = Result<T, GeoError>;
