use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Real-world rectangular bounding box of the map image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

impl MapBounds {
    pub fn lat_range(&self) -> f64 {
        self.top_left.lat - self.bottom_right.lat
    }

    pub fn lng_range(&self) -> f64 {
        self.bottom_right.lng - self.top_left.lng
    }

    /// A box with zero extent on either axis would divide by zero during
    /// projection. That is a configuration mistake and must surface at
    /// initialization, not as silently wrong coordinates.
    pub fn validate(&self) -> Result<()> {
        if self.lat_range() == 0.0 || self.lng_range() == 0.0 {
            return Err(AppError::Config(format!(
                "Degenerate map bounding box: lat range {}, lng range {}",
                self.lat_range(),
                self.lng_range()
            )));
        }
        Ok(())
    }
}
