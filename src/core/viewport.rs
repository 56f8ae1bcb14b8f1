use crate::core::config::FitConfig;
use crate::core::constants::DEFAULT_ZOOM;
use crate::core::geo::{LatLng, LatLngBounds};
use crate::Result;
use serde::{Deserialize, Serialize};

/// The visible map window: where it is centered and how far it is zoomed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The zoom level (each step halves the visible span)
    pub zoom: f64,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self { center, zoom }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::default(), DEFAULT_ZOOM)
    }
}

/// What the map currently shows.
///
/// Owned by the caller and handed to each fit; nothing in this crate keeps a
/// copy between calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentView {
    pub bounds: LatLngBounds,
    pub zoom: f64,
}

impl CurrentView {
    pub fn new(bounds: LatLngBounds, zoom: f64) -> Self {
        Self { bounds, zoom }
    }
}

/// Inputs to [`fit_viewport`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitParams {
    /// Box that should end up filling the map
    pub target_bounds: LatLngBounds,
    /// Box the map shows right now
    pub current_bounds: LatLngBounds,
    /// Zoom the map is at right now
    pub current_zoom: f64,
    /// Zoom to fall back to when the fit is degenerate
    pub default_zoom: f64,
}

impl FitParams {
    pub fn new(target_bounds: LatLngBounds, view: &CurrentView, default_zoom: f64) -> Self {
        Self {
            target_bounds,
            current_bounds: view.bounds,
            current_zoom: view.zoom,
            default_zoom,
        }
    }
}

/// Centers on `target_bounds` and picks the zoom at which it fits, clamped
/// to `[3, 20]`.
///
/// Zoom is derived from the current view: a target twice as wide as what is
/// visible now needs one zoom level less. The axis needing the lower zoom
/// wins so the whole box fits. A zero-span current view (or any NaN along
/// the way) yields `default_zoom` instead.
pub fn fit_viewport(params: &FitParams) -> Viewport {
    fit_clamped(params, &FitConfig::default())
}

/// Same as [`fit_viewport`], clamping to the zoom range of `config`.
///
/// Fails with [`MapError::InvalidConfig`](crate::MapError::InvalidConfig)
/// when the config does not validate, e.g. an inverted zoom range.
pub fn fit_viewport_with(params: &FitParams, config: &FitConfig) -> Result<Viewport> {
    config.validate()?;
    Ok(fit_clamped(params, config))
}

fn fit_clamped(params: &FitParams, config: &FitConfig) -> Viewport {
    let target = &params.target_bounds;
    let center = target.center();

    let current_lat_span = params.current_bounds.lat_span().abs();
    let current_lng_span = params.current_bounds.lng_span().abs();

    let lat_zoom = params.current_zoom - (target.lat_span() / current_lat_span).log2();
    let lng_zoom = params.current_zoom - (target.lng_span() / current_lng_span).log2();

    // f64::min drops a NaN operand, so check each axis on its own
    let zoom = if current_lat_span == 0.0
        || current_lng_span == 0.0
        || lat_zoom.is_nan()
        || lng_zoom.is_nan()
    {
        log::warn!(
            "cannot fit bounds against current view (spans {current_lat_span} x {current_lng_span}), \
             using default zoom {}",
            params.default_zoom
        );
        params.default_zoom
    } else {
        config.clamp_zoom(lat_zoom.min(lng_zoom))
    };

    log::debug!(
        "fit viewport: center ({:.5}, {:.5}) zoom {:.2} (lat {:.2}, lng {:.2})",
        center.lat,
        center.lng,
        zoom,
        lat_zoom,
        lng_zoom
    );

    Viewport::new(center, zoom)
}
