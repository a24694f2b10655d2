use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::error::{AppError, Result};
use crate::features::locations::Location;
use crate::modules::cache::CacheStore;
use crate::modules::remote::RemoteStore;
use crate::shared::constants::seed_locations;

/// Outcome of a save. Degraded persistence is informational, never
/// blocking: the caller keeps operating on in-memory state either way.
#[derive(Debug)]
pub struct SaveReport {
    /// Whether the remote write succeeded. `false` means "persisted locally
    /// only" — no retry loop, no queued replay on reconnect.
    pub remote_persisted: bool,
    /// Set when the local cache write failed, most notably
    /// `AppError::StorageExhausted`. The UI should warn that data may not
    /// survive a reload.
    pub cache_error: Option<AppError>,
}

impl SaveReport {
    pub fn fully_persisted(&self) -> bool {
        self.remote_persisted && self.cache_error.is_none()
    }
}

/// Keeps the remote JSON store and the local cache consistent with the
/// in-memory collection, tolerating remote unavailability.
///
/// Reads follow a strict priority chain: remote, then cache, then the seed
/// dataset — sources are never merged. Writes go through the cache first,
/// so the cache is never behind the last state handed to `save`.
pub struct PersistenceGateway {
    remote: Arc<dyn RemoteStore>,
    cache: Arc<dyn CacheStore>,
    default_map_image: String,
    /// Bumped by every save. A load that started before a later save
    /// discards its remote payload instead of regressing visible state.
    revision: AtomicU64,
}

impl PersistenceGateway {
    pub fn new(
        remote: Arc<dyn RemoteStore>,
        cache: Arc<dyn CacheStore>,
        default_map_image: String,
    ) -> Self {
        Self {
            remote,
            cache,
            default_map_image,
            revision: AtomicU64::new(0),
        }
    }

    /// Loads the location collection through the fallback chain. Never a
    /// hard error: every failure degrades to the next source.
    pub async fn load(&self) -> Vec<Location> {
        let started_at = self.revision.load(Ordering::SeqCst);

        match self.remote.fetch_locations().await {
            Ok(remote_set) => {
                if self.revision.load(Ordering::SeqCst) != started_at {
                    warn!("Discarding remote load superseded by a newer save");
                } else {
                    if let Err(e) = self.cache.write_locations(&remote_set).await {
                        warn!("Could not mirror remote locations to cache: {}", e);
                    }
                    debug!("Loaded {} locations from remote store", remote_set.len());
                    return remote_set;
                }
            }
            Err(e) => {
                warn!("Remote store unavailable, falling back to cache: {}", e);
            }
        }

        self.load_local().await
    }

    async fn load_local(&self) -> Vec<Location> {
        match self.cache.read_locations().await {
            Ok(Some(cached)) if !cached.is_empty() => {
                debug!("Loaded {} locations from local cache", cached.len());
                cached
            }
            Ok(_) => {
                info!("Local cache empty, using seed dataset");
                seed_locations()
            }
            Err(e) => {
                warn!("Local cache unreadable ({}), using seed dataset", e);
                seed_locations()
            }
        }
    }

    /// Persists the full collection: cache first (always completed before
    /// returning), then remote. The remote write replaces the whole array —
    /// concurrent sessions overwrite each other, last writer wins. That is
    /// a known limitation of the passive store, not something this gateway
    /// papers over.
    pub async fn save(&self, locations: &[Location]) -> SaveReport {
        self.revision.fetch_add(1, Ordering::SeqCst);

        let cache_error = self.cache.write_locations(locations).await.err();
        if let Some(e) = &cache_error {
            warn!("Local cache write failed: {}", e);
        }

        let remote_persisted = match self.remote.save_locations(locations).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Remote save failed, persisted locally only: {}", e);
                false
            }
        };

        SaveReport {
            remote_persisted,
            cache_error,
        }
    }

    /// Current background-map reference: the cached one if an operator has
    /// saved a custom image, the configured default otherwise.
    pub async fn load_map_image(&self) -> String {
        match self.cache.read_map_image().await {
            Ok(Some(reference)) => reference,
            Ok(None) => self.default_map_image.clone(),
            Err(e) => {
                warn!("Map image slot unreadable ({}), using default", e);
                self.default_map_image.clone()
            }
        }
    }

    /// Stores a new background-map reference. Storage exhaustion surfaces
    /// here so the UI can warn; the reference stays usable in memory.
    pub async fn save_map_image(&self, reference: &str) -> Result<()> {
        self.cache.write_map_image(reference).await
    }
}
