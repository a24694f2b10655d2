mod bounds;

pub use bounds::{GeoPoint, MapBounds};
