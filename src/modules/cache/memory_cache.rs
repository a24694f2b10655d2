use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::locations::Location;
use crate::modules::cache::CacheStore;

/// In-memory cache for tests and embedders without durable storage.
#[derive(Default)]
pub struct MemoryCache {
    locations: Mutex<Option<Vec<Location>>>,
    map_image: Mutex<Option<String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn read_locations(&self) -> Result<Option<Vec<Location>>> {
        Ok(self.locations.lock().unwrap().clone())
    }

    async fn write_locations(&self, locations: &[Location]) -> Result<()> {
        *self.locations.lock().unwrap() = Some(locations.to_vec());
        Ok(())
    }

    async fn read_map_image(&self) -> Result<Option<String>> {
        Ok(self.map_image.lock().unwrap().clone())
    }

    async fn write_map_image(&self, reference: &str) -> Result<()> {
        *self.map_image.lock().unwrap() = Some(reference.to_string());
        Ok(())
    }
}
