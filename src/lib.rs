//! Location data synchronization engine and geo-coordinate projection layer
//! for a map-based points-of-interest directory of a physical market.
//!
//! The crate owns the parts with real invariants: the in-memory location
//! collection, the remote/cache/seed persistence fallback chain, the
//! lat/lng to map-percentage projection, and the binary asset ingestion
//! path. Map rendering, forms, and menu chrome are external view layers
//! that call into these services.

pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

pub use crate::core::bootstrap::{init_tracing, MapCore};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
pub use crate::features::assets::AssetIngestor;
pub use crate::features::auth::{AccessGate, Session};
pub use crate::features::categories::{CategoryConfig, CategoryRegistry, LocationCategory};
pub use crate::features::geo::{GeoFailure, GeoPoint, GeoProjector, MapBounds};
pub use crate::features::locations::{
    Location, LocationPatch, LocationStatus, LocationStore, NewLocation,
};
pub use crate::features::sync::{PersistenceGateway, SaveReport};
pub use crate::modules::cache::{CacheStore, FileCache, MemoryCache};
pub use crate::modules::remote::{HttpRemoteStore, RemoteStore};
pub use crate::shared::types::{Language, UserLocation};
