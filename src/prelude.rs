//! Prelude module for common f3map types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use f3map::prelude::*;`

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

pub use crate::{MapError, Result};
