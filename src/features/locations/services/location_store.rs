use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::LocationCategory;
use crate::features::locations::dtos::{LocationPatch, NewLocation};
use crate::features::locations::models::{Location, LocationStatus};
use crate::shared::constants::DEFAULT_MAP_MIDPOINT;

/// Authoritative in-memory collection of location records.
///
/// The store is the single owner of the canonical collection; callers only
/// ever receive snapshots, so no caller-held reference is mutated behind
/// anyone's back. Insertion order is preserved for display purposes; at most
/// one record exists per id.
pub struct LocationStore {
    locations: Vec<Location>,
}

impl LocationStore {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Snapshot of the full collection, for persistence.
    pub fn snapshot(&self) -> Vec<Location> {
        self.locations.clone()
    }

    pub fn find(&self, id: Uuid) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Appends a new record. Privileged creations are approved immediately;
    /// anonymous ones start pending. Missing coordinates place the record at
    /// the map midpoint.
    pub fn add(&mut self, data: NewLocation, privileged: bool) -> Result<Location> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let location = Location {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            category: data.category,
            x: data.x.unwrap_or(DEFAULT_MAP_MIDPOINT),
            y: data.y.unwrap_or(DEFAULT_MAP_MIDPOINT),
            image: data.image,
            rating: Some(5.0),
            open_hours: data.open_hours,
            phone_number: data.phone_number,
            status: if privileged {
                LocationStatus::Approved
            } else {
                LocationStatus::Pending
            },
            created_at: Utc::now(),
        };

        tracing::debug!(
            "Added location '{}' ({}) with status {}",
            location.title,
            location.id,
            location.status
        );

        self.locations.push(location.clone());
        Ok(location)
    }

    /// Merges the present fields of `patch` into the matching record.
    /// Never touches `id` or `status`.
    pub fn update(&mut self, id: Uuid, patch: LocationPatch) -> Result<Vec<Location>> {
        patch
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let location = self
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))?;

        if let Some(title) = patch.title {
            location.title = title;
        }
        if let Some(description) = patch.description {
            location.description = description;
        }
        if let Some(category) = patch.category {
            location.category = category;
        }
        if let Some(x) = patch.x {
            location.x = x;
        }
        if let Some(y) = patch.y {
            location.y = y;
        }
        if let Some(image) = patch.image {
            location.image = Some(image);
        }
        if let Some(open_hours) = patch.open_hours {
            location.open_hours = Some(open_hours);
        }
        if let Some(phone_number) = patch.phone_number {
            location.phone_number = Some(phone_number);
        }

        Ok(self.snapshot())
    }

    /// Relocates a record. Privileged callers only; the privilege check runs
    /// before any lookup so an unauthorized move never observes state.
    pub fn move_to(&mut self, id: Uuid, x: f64, y: f64, privileged: bool) -> Result<Vec<Location>> {
        if !privileged {
            return Err(AppError::Unauthorized(
                "Moving a location requires operator access".to_string(),
            ));
        }

        let location = self
            .locations
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))?;

        location.x = x;
        location.y = y;
        Ok(self.snapshot())
    }

    /// Marks a record approved. Ensure-approved semantics: approving an
    /// already-approved record or a missing id changes nothing and is not
    /// an error.
    pub fn approve(&mut self, id: Uuid) -> Vec<Location> {
        if let Some(location) = self.locations.iter_mut().find(|l| l.id == id) {
            location.status = LocationStatus::Approved;
        }
        self.snapshot()
    }

    /// Ensure-absent deletion: removing an id that does not exist is a no-op.
    pub fn remove(&mut self, id: Uuid) -> Vec<Location> {
        self.locations.retain(|l| l.id != id);
        self.snapshot()
    }

    /// Read-time visibility projection: privileged callers see everything,
    /// anonymous callers only approved records.
    pub fn visible_to(&self, privileged: bool) -> Vec<Location> {
        self.locations
            .iter()
            .filter(|l| privileged || l.status == LocationStatus::Approved)
            .cloned()
            .collect()
    }

    /// Case-insensitive title search with optional category filter, over the
    /// caller's visible subset. Backs the search box and the list view.
    pub fn search(
        &self,
        query: &str,
        category: Option<LocationCategory>,
        privileged: bool,
    ) -> Vec<Location> {
        let query = query.to_lowercase();
        self.visible_to(privileged)
            .into_iter()
            .filter(|l| category.map_or(true, |c| l.category == c))
            .filter(|l| query.is_empty() || l.title.to_lowercase().contains(&query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{new_location, sample_location};

    fn store_with(locations: Vec<Location>) -> LocationStore {
        LocationStore::new(locations)
    }

    #[test]
    fn anonymous_add_starts_pending_with_default_rating() {
        let mut store = store_with(vec![]);
        let data = NewLocation {
            x: Some(40.0),
            y: Some(60.0),
            ..new_location("Pho Shop", LocationCategory::Food)
        };

        let created = store.add(data, false).unwrap();

        assert_eq!(created.status, LocationStatus::Pending);
        assert_eq!(created.rating, Some(5.0));
        assert_eq!((created.x, created.y), (40.0, 60.0));
    }

    #[test]
    fn privileged_add_is_approved_immediately() {
        let mut store = store_with(vec![]);
        let created = store
            .add(new_location("Stánek 12", LocationCategory::Shopping), true)
            .unwrap();
        assert_eq!(created.status, LocationStatus::Approved);
    }

    #[test]
    fn add_defaults_to_map_midpoint() {
        let mut store = store_with(vec![]);
        let created = store
            .add(new_location("Bún bò", LocationCategory::Food), false)
            .unwrap();
        assert_eq!((created.x, created.y), (50.0, 50.0));
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut store = store_with(vec![]);
        let a = store
            .add(new_location("A", LocationCategory::Food), false)
            .unwrap();
        let b = store
            .add(new_location("B", LocationCategory::Food), false)
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn add_rejects_empty_title() {
        let mut store = store_with(vec![]);
        let err = store
            .add(new_location("", LocationCategory::Food), false)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn update_merges_fields_and_preserves_id_and_status() {
        let original = sample_location("Phở Tùng", LocationStatus::Pending);
        let mut store = store_with(vec![original.clone()]);

        let patch = LocationPatch {
            description: Some("New description".to_string()),
            open_hours: Some("9-18".to_string()),
            ..LocationPatch::default()
        };
        store.update(original.id, patch).unwrap();

        let updated = store.find(original.id).unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.status, LocationStatus::Pending);
        assert_eq!(updated.title, "Phở Tùng");
        assert_eq!(updated.description, "New description");
        assert_eq!(updated.open_hours.as_deref(), Some("9-18"));
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = store_with(vec![]);
        let err = store
            .update(Uuid::new_v4(), LocationPatch::default())
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn move_requires_privilege_before_lookup() {
        let original = sample_location("WC", LocationStatus::Approved);
        let mut store = store_with(vec![original.clone()]);

        let err = store.move_to(original.id, 10.0, 10.0, false).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
        // Rejected before mutation
        let untouched = store.find(original.id).unwrap();
        assert_eq!((untouched.x, untouched.y), (40.0, 60.0));
    }

    #[test]
    fn move_missing_id_leaves_collection_unchanged() {
        let original = sample_location("WC", LocationStatus::Approved);
        let mut store = store_with(vec![original]);

        let err = store.move_to(Uuid::new_v4(), 1.0, 2.0, true).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn move_updates_only_coordinates() {
        let original = sample_location("Stánek", LocationStatus::Pending);
        let mut store = store_with(vec![original.clone()]);

        store.move_to(original.id, 12.5, 88.0, true).unwrap();

        let moved = store.find(original.id).unwrap();
        assert_eq!((moved.x, moved.y), (12.5, 88.0));
        assert_eq!(moved.status, LocationStatus::Pending);
        assert_eq!(moved.title, original.title);
    }

    #[test]
    fn approve_is_idempotent() {
        let original = sample_location("Phở Tùng", LocationStatus::Pending);
        let mut store = store_with(vec![original.clone()]);

        let once = store.approve(original.id);
        let twice = store.approve(original.id);

        assert_eq!(once.len(), twice.len());
        assert_eq!(
            store.find(original.id).unwrap().status,
            LocationStatus::Approved
        );
    }

    #[test]
    fn approve_missing_id_is_a_silent_no_op() {
        let original = sample_location("Phở Tùng", LocationStatus::Pending);
        let mut store = store_with(vec![original.clone()]);

        let after = store.approve(Uuid::new_v4());

        assert_eq!(after.len(), 1);
        assert_eq!(
            store.find(original.id).unwrap().status,
            LocationStatus::Pending
        );
    }

    #[test]
    fn remove_is_ensure_absent() {
        let original = sample_location("Phở Tùng", LocationStatus::Approved);
        let mut store = store_with(vec![original.clone()]);

        store.remove(original.id);
        assert!(store.find(original.id).is_none());

        // Removing an absent id is a no-op, not an error
        let after = store.remove(original.id);
        assert!(after.is_empty());
    }

    #[test]
    fn add_then_remove_restores_membership() {
        let existing = sample_location("Vchod", LocationStatus::Approved);
        let mut store = store_with(vec![existing.clone()]);

        let created = store
            .add(new_location("Dočasný", LocationCategory::Service), true)
            .unwrap();
        let after = store.remove(created.id);

        let ids: Vec<Uuid> = after.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![existing.id]);
    }

    #[test]
    fn visibility_is_a_read_time_projection() {
        let approved = sample_location("Vchod", LocationStatus::Approved);
        let pending = sample_location("Návrh", LocationStatus::Pending);
        let store = store_with(vec![approved.clone(), pending.clone()]);

        let public = store.visible_to(false);
        let operator = store.visible_to(true);

        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, approved.id);
        assert_eq!(operator.len(), 2);
        // Public view is a subset of the operator view
        assert!(public
            .iter()
            .all(|p| operator.iter().any(|o| o.id == p.id)));
    }

    #[test]
    fn search_filters_by_title_and_category() {
        let mut store = store_with(vec![]);
        store
            .add(new_location("Phở Tùng", LocationCategory::Food), true)
            .unwrap();
        store
            .add(new_location("Textil Hà Nội", LocationCategory::Shopping), true)
            .unwrap();

        let hits = store.search("phở", None, false);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Phở Tùng");

        let hits = store.search("", Some(LocationCategory::Shopping), false);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Textil Hà Nội");
    }

    #[test]
    fn search_respects_visibility() {
        let pending = sample_location("Skrytý stánek", LocationStatus::Pending);
        let store = store_with(vec![pending]);

        assert!(store.search("stánek", None, false).is_empty());
        assert_eq!(store.search("stánek", None, true).len(), 1);
    }

    #[test]
    fn full_moderation_scenario() {
        // Suggest anonymously, approve as operator, delete.
        let mut store = store_with(vec![]);
        let data = NewLocation {
            x: Some(40.0),
            y: Some(60.0),
            ..new_location("Pho Shop", LocationCategory::Food)
        };

        let created = store.add(data, false).unwrap();
        assert_eq!(created.status, LocationStatus::Pending);
        assert_eq!(created.rating, Some(5.0));
        assert!(store.visible_to(false).is_empty());

        store.approve(created.id);
        assert_eq!(
            store.find(created.id).unwrap().status,
            LocationStatus::Approved
        );
        assert_eq!(store.visible_to(false).len(), 1);

        store.remove(created.id);
        assert!(store.visible_to(true).is_empty());
    }
}
