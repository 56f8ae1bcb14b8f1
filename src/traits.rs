//! Seams between the fitting code and whatever map widget hosts it.
//!
//! A mapping SDK only has to report its visible box and zoom, and accept a
//! new center and zoom. Nothing here depends on a concrete SDK type.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::core::viewport::{CurrentView, Viewport};

/// Read side of a map: the box it currently shows and its zoom
pub trait MapBoundsSource {
    fn north(&self) -> f64;
    fn south(&self) -> f64;
    fn east(&self) -> f64;
    fn west(&self) -> f64;
    fn zoom(&self) -> f64;

    fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(self.north(), self.south(), self.east(), self.west())
    }

    /// Snapshot of the current view for a single fit
    fn current_view(&self) -> CurrentView {
        CurrentView::new(self.bounds(), self.zoom())
    }
}

/// Write side of a map: move it to a new center and zoom
pub trait ViewportSink {
    fn set_view(&mut self, center: LatLng, zoom: f64);

    fn apply(&mut self, viewport: &Viewport) {
        self.set_view(viewport.center, viewport.zoom);
    }
}

impl MapBoundsSource for CurrentView {
    fn north(&self) -> f64 {
        self.bounds.north
    }

    fn south(&self) -> f64 {
        self.bounds.south
    }

    fn east(&self) -> f64 {
        self.bounds.east
    }

    fn west(&self) -> f64 {
        self.bounds.west
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }
}

/// Moving a `CurrentView` keeps the visible span consistent with the zoom
/// change: each zoom level in halves both spans around the new center.
impl ViewportSink for CurrentView {
    fn set_view(&mut self, center: LatLng, zoom: f64) {
        let factor = 2_f64.powf(self.zoom - zoom);
        let half_lat = self.bounds.lat_span().abs() * factor / 2.0;
        let half_lng = self.bounds.lng_span().abs() * factor / 2.0;
        self.bounds = LatLngBounds::new(
            center.lat + half_lat,
            center.lat - half_lat,
            center.lng + half_lng,
            center.lng - half_lng,
        );
        self.zoom = zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_view_reports_bounds() {
        let view = CurrentView::new(LatLngBounds::new(40.0, 30.0, -90.0, -110.0), 6.0);
        assert_eq!(view.north(), 40.0);
        assert_eq!(view.west(), -110.0);
        assert_eq!(view.current_view(), view);
    }

    #[test]
    fn test_current_view_set_view_rescales_span() {
        let mut view = CurrentView::new(LatLngBounds::new(40.0, 30.0, -90.0, -110.0), 6.0);
        view.apply(&Viewport::new(LatLng::new(35.0, -100.0), 7.0));

        assert_eq!(view.zoom, 7.0);
        assert_eq!(view.bounds, LatLngBounds::new(37.5, 32.5, -95.0, -105.0));
    }
}
