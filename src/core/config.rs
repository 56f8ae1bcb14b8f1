//! Configuration for viewport fitting
//!
//! Callers either pick one of the [`FitProfile`] presets or build a
//! [`FitConfig`] by hand (or from JSON) when the map needs different zoom
//! limits or margins.

use crate::core::constants::{
    CLUSTER_SCALE, DEFAULT_ZOOM, MAX_FIT_ZOOM, MIN_FIT_ZOOM, NO_SCALE,
};
use crate::core::geo::ScaleFactors;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum FitProfile {
    /// Fit the markers edge to edge.
    Standard,
    /// Leave a margin around the markers, used when expanding a cluster.
    Cluster,
    Custom(FitConfig),
}

impl FitProfile {
    /// The config this profile stands for. A `Custom` config is validated
    /// first so an inverted zoom range never reaches a fit.
    pub fn resolve(&self) -> Result<FitConfig> {
        match self {
            Self::Standard => Ok(FitConfig::standard()),
            Self::Cluster => Ok(FitConfig::standard().with_scale(ScaleFactors {
                lng: CLUSTER_SCALE,
                lat: CLUSTER_SCALE,
            })),
            Self::Custom(config) => {
                config.validate()?;
                Ok(config.clone())
            }
        }
    }
}

impl Default for FitProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Lower clamp for fitted zooms
    pub min_zoom: f64,
    /// Upper clamp for fitted zooms
    pub max_zoom: f64,
    /// Returned when the fit cannot be computed
    pub default_zoom: f64,
    /// Fraction of the visible map the markers may occupy
    pub scale: ScaleFactors,
}

impl FitConfig {
    fn standard() -> Self {
        Self {
            min_zoom: MIN_FIT_ZOOM,
            max_zoom: MAX_FIT_ZOOM,
            default_zoom: DEFAULT_ZOOM,
            scale: ScaleFactors {
                lng: NO_SCALE,
                lat: NO_SCALE,
            },
        }
    }

    /// Parses and validates a JSON config. Missing fields take the
    /// [`FitProfile::Standard`] values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: FitConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("min_zoom", self.min_zoom),
            ("max_zoom", self.max_zoom),
            ("default_zoom", self.default_zoom),
        ] {
            if !value.is_finite() {
                return Err(MapError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "min_zoom {} is above max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        // the fallback zoom is returned as-is, so it must already be in range
        if self.default_zoom < self.min_zoom || self.default_zoom > self.max_zoom {
            return Err(MapError::InvalidConfig(format!(
                "default_zoom {} is outside [{}, {}]",
                self.default_zoom, self.min_zoom, self.max_zoom
            )));
        }
        self.scale
            .validate()
            .map_err(|e| MapError::InvalidConfig(e.to_string()))
    }

    /// Clamps a zoom into `[min_zoom, max_zoom]`. Never panics; on an
    /// inverted range `max_zoom` wins, [`FitConfig::validate`] rejects those.
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    pub fn with_default_zoom(mut self, default_zoom: f64) -> Self {
        self.default_zoom = default_zoom;
        self
    }

    pub fn with_scale(mut self, scale: ScaleFactors) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::standard()
    }
}
