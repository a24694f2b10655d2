use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::categories::LocationCategory;

/// Moderation status of a location record.
///
/// A record created by a privileged actor is `Approved` immediately; one
/// created anonymously starts `Pending` and stays there until a privileged
/// approval action transitions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationStatus {
    Pending,
    Approved,
}

impl std::fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationStatus::Pending => write!(f, "PENDING"),
            LocationStatus::Approved => write!(f, "APPROVED"),
        }
    }
}

/// A point of interest on the market map.
///
/// `x`/`y` are percentages of the map image, deliberately unclamped:
/// positions derived from geolocation outside the map's bounding box fall
/// outside [0,100] and the display layer decides what to do with them.
/// Wire format is camelCase to match the remote JSON store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: LocationCategory,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Set to 5.0 at creation, never recomputed by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub status: LocationStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
