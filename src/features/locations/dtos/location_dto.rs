use serde::Deserialize;
use validator::Validate;

use crate::features::categories::LocationCategory;

/// Payload for an add intent.
///
/// Coordinates come from the caller (tap position); when absent the store
/// places the record at the map midpoint. Status and rating are never part
/// of the payload, the store assigns both.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: LocationCategory,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub image: Option<String>,
    pub open_hours: Option<String>,
    pub phone_number: Option<String>,
}

/// Partial update for an edit intent. Every mutable field is enumerated;
/// `id` and `status` are deliberately not representable here — approval has
/// its own operation and ids never change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationPatch {
    #[validate(length(min = 1, message = "title cannot be emptied"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<LocationCategory>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub image: Option<String>,
    pub open_hours: Option<String>,
    pub phone_number: Option<String>,
}
