use crate::{
    core::{
        bounds::BoundsAccumulator,
        config::FitConfig,
        geo::{LatLng, LatLngBounds, ScaleFactors},
        viewport::{fit_viewport_with, CurrentView, FitParams, Viewport},
    },
    traits::{MapBoundsSource, ViewportSink},
    Result,
};

/// A single marker inside a cluster.
///
/// `position` is `None` for locations saved without coordinates; those are
/// still listed in the cluster but play no part in framing it.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLeaf<T> {
    pub id: String,
    pub position: Option<LatLng>,
    pub data: T,
}

impl<T> MarkerLeaf<T> {
    pub fn new(id: String, position: Option<LatLng>, data: T) -> Self {
        Self { id, position, data }
    }

    pub fn from_lat_lng(id: String, lat_lng: LatLng, data: T) -> Self {
        Self::new(id, Some(lat_lng), data)
    }
}

/// How [`map_pos_for_leaves`] frames a set of leaves
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeafFitOptions {
    pub config: FitConfig,
}

impl LeafFitOptions {
    /// Validates `config` up front; an inverted zoom range or an
    /// out-of-range default zoom is rejected here rather than at fit time.
    pub fn new(config: FitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Overrides the margin scale factors of the config
    pub fn with_scale(mut self, scale: ScaleFactors) -> Self {
        self.config.scale = scale;
        self
    }

    pub fn scale(&self) -> ScaleFactors {
        self.config.scale
    }
}

/// Bounds of every leaf that has a usable position
pub fn bounds_of_leaves<T>(leaves: &[MarkerLeaf<T>]) -> Result<LatLngBounds> {
    let mut acc = BoundsAccumulator::new();
    acc.extend(leaves.iter().filter_map(|leaf| leaf.position));
    if acc.len() < leaves.len() {
        log::debug!(
            "{} of {} leaves have no usable position",
            leaves.len() - acc.len(),
            leaves.len()
        );
    }
    acc.finish()
}

/// Center and zoom that show every leaf.
///
/// The current view's box is first scaled by the option's scale factors, so
/// a factor of 0.8 makes the leaves fill at most 80% of the map on that axis.
pub fn map_pos_for_leaves<T>(
    leaves: &[MarkerLeaf<T>],
    view: &CurrentView,
    options: &LeafFitOptions,
) -> Result<Viewport> {
    let target_bounds = bounds_of_leaves(leaves)?;
    let usable_bounds = view.bounds.scaled(options.scale())?;

    let params = FitParams {
        target_bounds,
        current_bounds: usable_bounds,
        current_zoom: view.zoom,
        default_zoom: options.config.default_zoom,
    };
    fit_viewport_with(&params, &options.config)
}

/// Reads the view from `map`, fits the leaves and moves the map there.
pub fn fit_map_to_leaves<T, M>(
    map: &mut M,
    leaves: &[MarkerLeaf<T>],
    options: &LeafFitOptions,
) -> Result<Viewport>
where
    M: MapBoundsSource + ViewportSink,
{
    let viewport = map_pos_for_leaves(leaves, &map.current_view(), options)?;
    map.apply(&viewport);
    Ok(viewport)
}
