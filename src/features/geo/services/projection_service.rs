use thiserror::Error;

use crate::core::error::Result;
use crate::features::geo::models::{GeoPoint, MapBounds};
use crate::shared::types::UserLocation;

/// Why a device position could not be obtained. The platform adapter maps
/// its geolocation API's outcomes onto these; each is surfaced to the user
/// distinctly, never silently swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoFailure {
    #[error("Geolocation is not supported on this device")]
    Unsupported,
    #[error("Geolocation permission was denied")]
    PermissionDenied,
    #[error("Geolocation request timed out")]
    Timeout,
    #[error("Device position is unavailable")]
    PositionUnavailable,
}

/// Maps real-world coordinates to map-relative percentages by linear
/// interpolation over the configured bounding box.
pub struct GeoProjector {
    bounds: MapBounds,
}

impl GeoProjector {
    /// Fails fast on a degenerate bounding box.
    pub fn new(bounds: MapBounds) -> Result<Self> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    /// No clamping: a position outside the box projects proportionally
    /// outside [0,100], and the display layer decides whether to clamp.
    pub fn project(&self, lat: f64, lng: f64) -> UserLocation {
        let y_pct = (self.bounds.top_left.lat - lat) / self.bounds.lat_range();
        let x_pct = (lng - self.bounds.top_left.lng) / self.bounds.lng_range();

        UserLocation {
            x: x_pct * 100.0,
            y: y_pct * 100.0,
        }
    }

    /// Projects the outcome of a device position request, passing failures
    /// through untouched.
    pub fn project_fix(
        &self,
        fix: std::result::Result<GeoPoint, GeoFailure>,
    ) -> std::result::Result<UserLocation, GeoFailure> {
        fix.map(|point| self.project(point.lat, point.lng))
    }
}
