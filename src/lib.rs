//! # f3map
//!
//! Viewport fitting for the F3 Nation Map.
//!
//! Given the markers a user is looking at (a tapped cluster, a search result
//! set), this library computes the enclosing bounds, optionally pulls them in
//! to leave a margin, and derives the map center and zoom that frame them.
//! Everything is a pure function of its inputs; the caller owns the current
//! map state and passes it in explicitly.

pub mod core;
pub mod prelude;
pub mod spatial;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::{compute_bounds, scale_bounds, BoundsAccumulator},
    config::{FitConfig, FitProfile},
    geo::{LatLng, LatLngBounds, ScaleFactors},
    viewport::{fit_viewport, fit_viewport_with, CurrentView, FitParams, Viewport},
};

pub use crate::spatial::leaves::{
    bounds_of_leaves, fit_map_to_leaves, map_pos_for_leaves, LeafFitOptions, MarkerLeaf,
};

pub use crate::traits::{MapBoundsSource, ViewportSink};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("invalid {axis} scale factor {value}: must be a finite, non-negative number")]
    InvalidScale { axis: &'static str, value: f64 },

    #[error("cannot compute bounds: no points with valid coordinates")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = MapError;
