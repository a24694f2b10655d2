pub mod models;
pub mod services;

pub use models::{GeoPoint, MapBounds};
pub use services::{GeoFailure, GeoProjector};
