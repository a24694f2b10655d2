mod file_cache;
mod memory_cache;

pub use file_cache::FileCache;
pub use memory_cache::MemoryCache;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::locations::Location;

/// Local durable cache with two named slots: the serialized location
/// collection and the background-map reference. Reads of a missing slot
/// yield `None`; a corrupt slot is an error the gateway treats as absent.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn read_locations(&self) -> Result<Option<Vec<Location>>>;

    /// Must complete (or fail) before the caller proceeds: the gateway's
    /// ordering guarantee is that the cache is never behind the last
    /// in-memory state handed to `save`.
    async fn write_locations(&self, locations: &[Location]) -> Result<()>;

    async fn read_map_image(&self) -> Result<Option<String>>;

    async fn write_map_image(&self, reference: &str) -> Result<()>;
}
