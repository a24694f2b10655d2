pub mod assets;
pub mod auth;
pub mod categories;
pub mod geo;
pub mod locations;
pub mod sync;
