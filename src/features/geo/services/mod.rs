mod projection_service;

pub use projection_service::{GeoFailure, GeoProjector};
