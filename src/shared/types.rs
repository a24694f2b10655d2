use serde::{Deserialize, Serialize};

/// Visitor-facing languages of the market directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Vi,
    Cs,
    De,
}

/// Map-relative position of the device, in percent of the map image.
///
/// Ephemeral by design: computed once per geolocation request, handed to the
/// caller, never written to the store. Values may fall outside [0,100] when
/// the device is outside the map's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub x: f64,
    pub y: f64,
}
