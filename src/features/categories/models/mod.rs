mod category;

pub use category::{CategoryConfig, LocationCategory};
