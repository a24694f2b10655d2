use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::features::geo::{GeoPoint, MapBounds};
use crate::shared::constants::{
    DEFAULT_ADMIN_SECRET, DEFAULT_MAP_IMAGE_URL, DEFAULT_READ_TIMEOUT_MS,
};

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub map: MapConfig,
    pub cache: CacheConfig,
    pub access: AccessConfig,
}

/// Remote JSON store endpoint configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the passive JSON store (e.g. "https://example.com/api")
    pub base_url: String,
    /// Bound on remote reads; writes are fire-and-forget and unbounded
    pub read_timeout: Duration,
}

/// Map geometry and presentation defaults
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Real-world bounding box of the map image, for geo projection
    pub bounds: MapBounds,
    /// Background image used when no custom one has been saved
    pub default_image_url: String,
}

/// Local durable cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Directory holding the two cache slots (locations, map image)
    pub dir: PathBuf,
}

/// Privilege gate configuration
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Shared secret recognized in the query string. A display/authorization
    /// convenience, not a security boundary: nothing is enforced server-side.
    pub secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            map: MapConfig::from_env()?,
            cache: CacheConfig::from_env()?,
            access: AccessConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, String> {
        let base_url =
            env::var("MAP_API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000/api".to_string());

        let read_timeout_ms = env::var("MAP_READ_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_READ_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|e| format!("Invalid MAP_READ_TIMEOUT_MS: {}", e))?;

        Ok(ApiConfig {
            base_url,
            read_timeout: Duration::from_millis(read_timeout_ms),
        })
    }
}

impl MapConfig {
    // Bounding box of the Sapa market grounds in Prague-Libuš.
    const DEFAULT_TOP_LEFT_LAT: f64 = 50.0285;
    const DEFAULT_TOP_LEFT_LNG: f64 = 14.4563;
    const DEFAULT_BOTTOM_RIGHT_LAT: f64 = 50.0221;
    const DEFAULT_BOTTOM_RIGHT_LNG: f64 = 14.4678;

    pub fn from_env() -> Result<Self, String> {
        let bounds = MapBounds {
            top_left: GeoPoint {
                lat: parse_f64_var("MAP_BOUNDS_TOP_LEFT_LAT", Self::DEFAULT_TOP_LEFT_LAT)?,
                lng: parse_f64_var("MAP_BOUNDS_TOP_LEFT_LNG", Self::DEFAULT_TOP_LEFT_LNG)?,
            },
            bottom_right: GeoPoint {
                lat: parse_f64_var("MAP_BOUNDS_BOTTOM_RIGHT_LAT", Self::DEFAULT_BOTTOM_RIGHT_LAT)?,
                lng: parse_f64_var("MAP_BOUNDS_BOTTOM_RIGHT_LNG", Self::DEFAULT_BOTTOM_RIGHT_LNG)?,
            },
        };

        // A degenerate box would make the projection divide by zero later;
        // fail here, at initialization.
        bounds.validate().map_err(|e| e.to_string())?;

        let default_image_url = env::var("MAP_DEFAULT_IMAGE_URL")
            .unwrap_or_else(|_| DEFAULT_MAP_IMAGE_URL.to_string());

        Ok(MapConfig {
            bounds,
            default_image_url,
        })
    }
}

impl CacheConfig {
    pub fn from_env() -> Result<Self, String> {
        let dir = env::var("MAP_CACHE_DIR").unwrap_or_else(|_| ".sapa-map-cache".to_string());

        Ok(CacheConfig {
            dir: PathBuf::from(dir),
        })
    }
}

impl AccessConfig {
    pub fn from_env() -> Result<Self, String> {
        let secret =
            env::var("MAP_ADMIN_SECRET").unwrap_or_else(|_| DEFAULT_ADMIN_SECRET.to_string());

        Ok(AccessConfig { secret })
    }
}

fn parse_f64_var(name: &str, default: f64) -> Result<f64, String> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map_err(|e| format!("Invalid {}: {}", name, e)),
        Err(_) => Ok(default),
    }
}
