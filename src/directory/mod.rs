//! The location directory: the in-memory catalogue plus current-selection
//! state.
//!
//! The catalogue is fixed at construction and never mutated; the only
//! mutable cell is the selected id, guarded by a mutex because the HTTP
//! host is multi-threaded. [`Directory`] is cheap to clone and every clone
//! shares the same catalogue and selection, so it can be handed to the
//! router as state while tests construct fresh instances of their own.

pub mod geo;

use std::sync::{Arc, Mutex};

use crate::models::{LocationRecord, NearbyLocation};

/// Default radius for [`Directory::nearby`], in kilometers.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

#[derive(Clone)]
pub struct Directory {
    locations: Arc<Vec<LocationRecord>>,
    selected_id: Arc<Mutex<Option<u32>>>,
}

impl Directory {
    /// Build a directory over an already-loaded catalogue, with nothing
    /// selected.
    pub fn new(locations: Vec<LocationRecord>) -> Self {
        Self {
            locations: Arc::new(locations),
            selected_id: Arc::new(Mutex::new(None)),
        }
    }

    /// The full catalogue, in display order.
    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    /// Look up a single record by id.
    pub fn get(&self, id: u32) -> Option<&LocationRecord> {
        self.locations.iter().find(|loc| loc.id == id)
    }

    /// Select the location with the given id.
    ///
    /// An unknown id clears the selection instead of failing; the UI treats
    /// an unmatched id as "nothing to show".
    pub fn select(&self, id: u32) {
        let matched = self.get(id).map(|loc| loc.id);
        if matched.is_none() {
            tracing::debug!("select({id}) matched no location, clearing selection");
        }
        *self.selected_id.lock().expect("selection lock poisoned") = matched;
    }

    /// The currently selected record, if any.
    pub fn current(&self) -> Option<LocationRecord> {
        let selected = *self.selected_id.lock().expect("selection lock poisoned");
        selected.and_then(|id| self.get(id)).cloned()
    }

    /// All other locations within `max_distance_km` of the given location,
    /// nearest first.
    ///
    /// Unknown ids yield an empty list. The boundary is inclusive, ties keep
    /// catalogue order, and records whose coordinates produce a `NaN`
    /// distance are dropped by the threshold comparison.
    pub fn nearby(&self, id: u32, max_distance_km: f64) -> Vec<NearbyLocation> {
        let Some(reference) = self.get(id) else {
            return Vec::new();
        };

        let mut found: Vec<NearbyLocation> = self
            .locations
            .iter()
            .filter(|loc| loc.id != id)
            .map(|loc| NearbyLocation {
                location: loc.clone(),
                distance_km: geo::haversine_km(reference.coordinates, loc.coordinates),
            })
            .filter(|near| near.distance_km <= max_distance_km)
            .collect();

        // NaN distances were filtered above, so total_cmp only reorders
        // finite values; the sort is stable, preserving catalogue order on
        // ties.
        found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        found
    }
}
