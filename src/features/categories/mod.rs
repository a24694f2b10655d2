pub mod models;
pub mod registry;

pub use models::{CategoryConfig, LocationCategory};
pub use registry::CategoryRegistry;
