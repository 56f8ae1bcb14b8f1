use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both coordinates are real numbers (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<geo_types::Coord<f64>> for LatLng {
    fn from(coord: geo_types::Coord<f64>) -> Self {
        // x is longitude, y is latitude
        Self::new(coord.y, coord.x)
    }
}

impl From<geo_types::Point<f64>> for LatLng {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<LatLng> for geo_types::Coord<f64> {
    fn from(lat_lng: LatLng) -> Self {
        geo_types::coord! { x: lat_lng.lng, y: lat_lng.lat }
    }
}

/// Represents a bounding box of geographical coordinates.
///
/// Longitudes are compared naively, so a box crossing the antimeridian is
/// not representable: `west` is always the smaller longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl LatLngBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Creates bounds from the south-west and north-east corners
    pub fn from_corners(south_west: LatLng, north_east: LatLng) -> Self {
        Self::new(north_east.lat, south_west.lat, north_east.lng, south_west.lng)
    }

    /// Degenerate bounds covering a single point
    pub fn from_point(point: LatLng) -> Self {
        Self::from_corners(point, point)
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.south, self.west)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.north, self.east)
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south = self.south.min(point.lat);
        self.west = self.west.min(point.lng);
        self.north = self.north.max(point.lat);
        self.east = self.east.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Latitude extent in degrees
    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    /// Longitude extent in degrees
    pub fn lng_span(&self) -> f64 {
        self.east - self.west
    }

    /// Shrinks or grows the bounds around their center.
    ///
    /// See [`scale_bounds`](crate::core::bounds::scale_bounds).
    pub fn scaled(&self, factors: ScaleFactors) -> Result<LatLngBounds> {
        crate::core::bounds::scale_bounds(self, factors.lng, factors.lat)
    }
}

impl From<geo_types::Rect<f64>> for LatLngBounds {
    fn from(rect: geo_types::Rect<f64>) -> Self {
        Self::from_corners(rect.min().into(), rect.max().into())
    }
}

impl From<LatLngBounds> for geo_types::Rect<f64> {
    fn from(bounds: LatLngBounds) -> Self {
        geo_types::Rect::new(bounds.south_west(), bounds.north_east())
    }
}

/// Independent longitude/latitude multipliers applied to a box's span.
///
/// 1.0 leaves the axis unchanged, values below 1.0 pull the edges in toward
/// the center and values above 1.0 push them out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub lng: f64,
    pub lat: f64,
}

impl ScaleFactors {
    /// Creates validated scale factors
    pub fn new(lng: f64, lat: f64) -> Result<Self> {
        let factors = Self { lng, lat };
        factors.validate()?;
        Ok(factors)
    }

    /// Same factor on both axes
    pub fn uniform(scale: f64) -> Result<Self> {
        Self::new(scale, scale)
    }

    pub fn identity() -> Self {
        Self { lng: 1.0, lat: 1.0 }
    }

    pub fn is_identity(&self) -> bool {
        self.lng == 1.0 && self.lat == 1.0
    }

    /// Fails with [`MapError::InvalidScale`] on a negative or non-finite factor.
    pub fn validate(&self) -> Result<()> {
        check_scale("longitude", self.lng)?;
        check_scale("latitude", self.lat)
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self::identity()
    }
}

pub(crate) fn check_scale(axis: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MapError::InvalidScale { axis, value })
    }
}
