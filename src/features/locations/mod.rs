pub mod dtos;
pub mod models;
pub mod services;

pub use dtos::{LocationPatch, NewLocation};
pub use models::{Location, LocationStatus};
pub use services::LocationStore;
