//! Zoom and margin defaults used by the F3 map when framing locations.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// Lowest zoom a fit may produce (roughly a continent).
pub const MIN_FIT_ZOOM: f64 = 3.0;

/// Highest zoom a fit may produce (street level).
pub const MAX_FIT_ZOOM: f64 = 20.0;

/// Zoom used when the fit degenerates (zero-span current view).
pub const DEFAULT_ZOOM: f64 = 13.0;

/// Identity scale factor: bounds are fitted as-is.
pub const NO_SCALE: f64 = 1.0;

/// Margin used when zooming into a tapped cluster: the usable part of the
/// visible map is shrunk to this fraction, so the markers never touch the edge.
pub const CLUSTER_SCALE: f64 = 0.8;
