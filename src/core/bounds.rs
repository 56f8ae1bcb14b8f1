use crate::core::geo::{check_scale, LatLng, LatLngBounds};
use crate::{MapError, Result};
use std::borrow::Borrow;

/// Running min/max of the points seen so far.
///
/// Starts out inverted (north = -inf, south = +inf, ...) so the first valid
/// point defines the box. Points with a non-finite coordinate are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsAccumulator {
    bounds: LatLngBounds,
    count: usize,
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self {
            bounds: LatLngBounds::new(
                f64::NEG_INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::INFINITY,
            ),
            count: 0,
        }
    }

    /// Adds a point; returns false when it was skipped.
    pub fn push(&mut self, point: &LatLng) -> bool {
        if !point.is_finite() {
            log::warn!(
                "skipping point with non-numeric coordinates ({}, {})",
                point.lat,
                point.lng
            );
            return false;
        }
        self.bounds.extend(point);
        self.count += 1;
        true
    }

    /// Number of points that made it into the box
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The enclosing box, or [`MapError::EmptyInput`] if no point was accepted.
    pub fn finish(self) -> Result<LatLngBounds> {
        if self.is_empty() {
            return Err(MapError::EmptyInput);
        }
        Ok(self.bounds)
    }
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Borrow<LatLng>> Extend<P> for BoundsAccumulator {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for point in iter {
            self.push(point.borrow());
        }
    }
}

/// Computes the smallest lat/lng box enclosing every valid point.
///
/// Points whose latitude or longitude is NaN or infinite are skipped. Fails
/// with [`MapError::EmptyInput`] when nothing is left.
pub fn compute_bounds<I, P>(points: I) -> Result<LatLngBounds>
where
    I: IntoIterator<Item = P>,
    P: Borrow<LatLng>,
{
    let mut acc = BoundsAccumulator::new();
    acc.extend(points);
    acc.finish()
}

/// Shrinks (`< 1`) or grows (`> 1`) a box symmetrically around its center.
///
/// A scale of 1 returns the box unchanged, 0 collapses it onto its center.
/// Both factors must be finite and non-negative.
pub fn scale_bounds(
    bounds: &LatLngBounds,
    longitude_scale: f64,
    latitude_scale: f64,
) -> Result<LatLngBounds> {
    check_scale("longitude", longitude_scale)?;
    check_scale("latitude", latitude_scale)?;

    let lng_delta = (bounds.east - bounds.west) * (1.0 - longitude_scale) / 2.0;
    // south - north is negative for a well-formed box, so a scale below 1
    // moves north down and south up
    let lat_delta = (bounds.south - bounds.north) * (1.0 - latitude_scale) / 2.0;

    Ok(LatLngBounds {
        north: bounds.north + lat_delta,
        south: bounds.south - lat_delta,
        east: bounds.east - lng_delta,
        west: bounds.west + lng_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LatLngBounds {
        LatLngBounds::new(33.0, 30.0, -100.0, -101.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_compute_bounds_two_points() {
        let points = [LatLng::new(30.0, -101.0), LatLng::new(33.0, -100.0)];
        assert_eq!(compute_bounds(&points).unwrap(), sample());
    }

    #[test]
    fn test_compute_bounds_single_point_is_degenerate() {
        let bounds = compute_bounds([LatLng::new(35.2, -80.8)]).unwrap();
        assert_eq!(bounds.north, bounds.south);
        assert_eq!(bounds.east, bounds.west);
    }

    #[test]
    fn test_compute_bounds_skips_non_numeric() {
        let points = vec![
            LatLng::new(f64::NAN, -90.0),
            LatLng::new(30.0, -101.0),
            LatLng::new(33.0, f64::INFINITY),
            LatLng::new(33.0, -100.0),
        ];
        assert_eq!(compute_bounds(points).unwrap(), sample());
    }

    #[test]
    fn test_compute_bounds_empty_input() {
        let none: Vec<LatLng> = Vec::new();
        assert!(matches!(compute_bounds(none), Err(MapError::EmptyInput)));

        let all_invalid = [LatLng::new(f64::NAN, f64::NAN)];
        assert!(matches!(
            compute_bounds(&all_invalid),
            Err(MapError::EmptyInput)
        ));
    }

    #[test]
    fn test_compute_bounds_across_antimeridian_is_naive() {
        // two points 2 degrees apart across ±180 come out as a 358 degree wide box
        let bounds = compute_bounds([LatLng::new(-17.0, 179.0), LatLng::new(-18.0, -179.0)]).unwrap();
        assert_eq!(bounds.west, -179.0);
        assert_eq!(bounds.east, 179.0);
        assert_eq!(bounds.lng_span(), 358.0);
        assert_eq!(bounds.center().lng, 0.0);
    }

    #[test]
    fn test_accumulator_counts_accepted_points() {
        let mut acc = BoundsAccumulator::default();
        assert!(acc.is_empty());
        assert!(acc.push(&LatLng::new(1.0, 1.0)));
        assert!(!acc.push(&LatLng::new(f64::NAN, 1.0)));
        assert_eq!(acc.len(), 1);
        assert_eq!(
            acc.finish().unwrap(),
            LatLngBounds::from_point(LatLng::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_scale_bounds_margin() {
        let scaled = scale_bounds(&sample(), 0.8, 0.8).unwrap();
        assert_close(scaled.north, 32.7);
        assert_close(scaled.south, 30.3);
        assert_close(scaled.east, -100.1);
        assert_close(scaled.west, -100.9);
    }

    #[test]
    fn test_scale_bounds_identity_and_collapse() {
        assert_eq!(scale_bounds(&sample(), 1.0, 1.0).unwrap(), sample());

        let collapsed = scale_bounds(&sample(), 0.0, 0.0).unwrap();
        let center = sample().center();
        assert_eq!(collapsed.north, center.lat);
        assert_eq!(collapsed.south, center.lat);
        assert_eq!(collapsed.east, center.lng);
        assert_eq!(collapsed.west, center.lng);
    }

    #[test]
    fn test_scale_bounds_expands_independently() {
        let scaled = scale_bounds(&sample(), 2.0, 1.0).unwrap();
        assert_close(scaled.west, -101.5);
        assert_close(scaled.east, -99.5);
        assert_eq!(scaled.north, 33.0);
        assert_eq!(scaled.south, 30.0);
    }

    #[test]
    fn test_scale_bounds_rejects_negative() {
        assert!(matches!(
            scale_bounds(&sample(), -0.5, 1.0),
            Err(MapError::InvalidScale { axis: "longitude", value }) if value == -0.5
        ));
        assert!(matches!(
            scale_bounds(&sample(), 1.0, -2.0),
            Err(MapError::InvalidScale { axis: "latitude", .. })
        ));
    }
}
