use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::features::locations::Location;
use crate::modules::cache::CacheStore;
use crate::shared::constants::{LOCATIONS_CACHE_SLOT, MAP_IMAGE_CACHE_SLOT};

const ENOSPC: i32 = 28;

/// File-backed cache. Each slot is one JSON file; writes go to a temp file
/// in the same directory and are renamed into place, so a reader never
/// observes a partially written slot.
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>> {
        let path = self.slot_path(slot);
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        let path = self.slot_path(slot);

        let write = || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
            tmp.write_all(raw.as_bytes())?;
            tmp.flush()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        };

        write().map_err(|e| {
            if e.raw_os_error() == Some(ENOSPC) {
                AppError::StorageExhausted(format!("Cache slot '{}' not written: {}", slot, e))
            } else {
                AppError::Io(e)
            }
        })?;

        debug!("Cache slot '{}' written ({} bytes)", slot, raw.len());
        Ok(())
    }
}

#[async_trait]
impl CacheStore for FileCache {
    async fn read_locations(&self) -> Result<Option<Vec<Location>>> {
        self.read_slot(LOCATIONS_CACHE_SLOT)
    }

    async fn write_locations(&self, locations: &[Location]) -> Result<()> {
        self.write_slot(LOCATIONS_CACHE_SLOT, &locations)
    }

    async fn read_map_image(&self) -> Result<Option<String>> {
        self.read_slot(MAP_IMAGE_CACHE_SLOT)
    }

    async fn write_map_image(&self, reference: &str) -> Result<()> {
        self.write_slot(MAP_IMAGE_CACHE_SLOT, &reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::locations::LocationStatus;
    use crate::shared::test_helpers::sample_location;

    #[tokio::test]
    async fn missing_slots_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path()).unwrap();

        assert!(cache.read_locations().await.unwrap().is_none());
        assert!(cache.read_map_image().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn locations_slot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path()).unwrap();
        let locations = vec![sample_location("Phở Tùng", LocationStatus::Approved)];

        cache.write_locations(&locations).await.unwrap();
        let read = cache.read_locations().await.unwrap().unwrap();

        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, locations[0].id);
        assert_eq!(read[0].title, "Phở Tùng");
    }

    #[tokio::test]
    async fn map_image_slot_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path()).unwrap();

        cache.write_map_image("/photos/map-v2.jpg").await.unwrap();
        assert_eq!(
            cache.read_map_image().await.unwrap().as_deref(),
            Some("/photos/map-v2.jpg")
        );
    }

    #[tokio::test]
    async fn corrupt_slot_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path()).unwrap();

        std::fs::write(
            dir.path().join(format!("{}.json", LOCATIONS_CACHE_SLOT)),
            "{not json",
        )
        .unwrap();

        assert!(matches!(
            cache.read_locations().await,
            Err(AppError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn writes_replace_the_previous_slot_content() {
        let dir = tempfile::tempdir().unwrap();
        let cache = FileCache::new(dir.path()).unwrap();

        let first = vec![sample_location("A", LocationStatus::Approved)];
        let second = vec![
            sample_location("B", LocationStatus::Approved),
            sample_location("C", LocationStatus::Pending),
        ];

        cache.write_locations(&first).await.unwrap();
        cache.write_locations(&second).await.unwrap();

        let read = cache.read_locations().await.unwrap().unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[0].title, "B");
    }
}
