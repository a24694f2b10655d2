use chrono::Utc;
use uuid::Uuid;

use crate::features::categories::LocationCategory;
use crate::features::locations::{Location, LocationStatus};

/// Cache slot holding the serialized location collection
pub const LOCATIONS_CACHE_SLOT: &str = "sapa_map_locations";

/// Cache slot holding the current background-map reference
pub const MAP_IMAGE_CACHE_SLOT: &str = "sapa_map_bg_image";

/// Bound on remote reads, in milliseconds
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 3000;

/// Coordinate used for both axes when an add intent carries no position
pub const DEFAULT_MAP_MIDPOINT: f64 = 50.0;

/// Background image used until an operator uploads a custom one
pub const DEFAULT_MAP_IMAGE_URL: &str = "/assets/sapa-map-default.jpg";

/// Query-string secret recognized by the privilege gate.
/// A convenience flag, not a security boundary.
pub const DEFAULT_ADMIN_SECRET: &str = "sapaadmin";

/// Fixed fallback dataset, used only when both the remote store and the
/// local cache are unavailable. Ids are minted per call; nothing depends on
/// seed identity being stable across sessions.
pub fn seed_locations() -> Vec<Location> {
    [
        (
            "Hlavní vchod",
            "Main gate from Libušská street",
            LocationCategory::Entrance,
            6.0,
            48.0,
        ),
        (
            "Phở Tùng",
            "Beef phở and bún chả, open since 2009",
            LocationCategory::Food,
            38.0,
            52.0,
        ),
        (
            "Textil Hà Nội",
            "Fabrics, clothing and tailoring supplies",
            LocationCategory::Shopping,
            55.0,
            31.0,
        ),
        (
            "Směnárna / Money exchange",
            "Currency exchange and phone credit",
            LocationCategory::Service,
            47.0,
            66.0,
        ),
        (
            "WC",
            "Public restrooms, hall B",
            LocationCategory::Wc,
            72.0,
            58.0,
        ),
    ]
    .into_iter()
    .map(|(title, description, category, x, y)| Location {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        x,
        y,
        image: None,
        rating: Some(5.0),
        open_hours: None,
        phone_number: None,
        status: LocationStatus::Approved,
        created_at: Utc::now(),
    })
    .collect()
}
