#[cfg(test)]
use chrono::Utc;
#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::features::categories::LocationCategory;
#[cfg(test)]
use crate::features::locations::{Location, LocationStatus, NewLocation};

#[cfg(test)]
pub fn sample_location(title: &str, status: LocationStatus) -> Location {
    Location {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        category: LocationCategory::Food,
        x: 40.0,
        y: 60.0,
        image: None,
        rating: Some(5.0),
        open_hours: None,
        phone_number: None,
        status,
        created_at: Utc::now(),
    }
}

#[cfg(test)]
pub fn new_location(title: &str, category: LocationCategory) -> NewLocation {
    NewLocation {
        title: title.to_string(),
        description: String::new(),
        category,
        x: None,
        y: None,
        image: None,
        open_hours: None,
        phone_number: None,
    }
}
