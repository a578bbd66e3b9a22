//! The content-loading collaborator: a compiled-in catalogue of tour stops.
//!
//! The records ship inside the binary as JSON (`data/locations.json`) and
//! are parsed once at startup. The directory only requires that records
//! conform to the [`LocationRecord`] shape and that ids are unique; both
//! are enforced here so the core never sees malformed data.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::LocationRecord;

static LOCATIONS_JSON: &str = include_str!("../../data/locations.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse embedded location data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate location id {0} in catalogue")]
    DuplicateId(u32),
}

/// Parse and validate the embedded catalogue.
///
/// Record order in the JSON file is display order and is preserved.
pub fn load() -> Result<Vec<LocationRecord>, CatalogError> {
    let locations: Vec<LocationRecord> = serde_json::from_str(LOCATIONS_JSON)?;

    let mut seen = HashSet::new();
    for location in &locations {
        if !seen.insert(location.id) {
            return Err(CatalogError::DuplicateId(location.id));
        }
    }

    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogue_parses_and_validates() {
        let locations = load().expect("embedded catalogue should be well-formed");
        assert!(!locations.is_empty());
    }

    #[test]
    fn embedded_catalogue_ids_are_unique() {
        let locations = load().unwrap();
        let ids: HashSet<u32> = locations.iter().map(|loc| loc.id).collect();
        assert_eq!(ids.len(), locations.len());
    }
}
