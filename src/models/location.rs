use serde::{Deserialize, Serialize};

/// A stop on the walking tour.
///
/// Records are immutable after the catalogue is loaded; `id` is the sole
/// lookup key and is unique across the catalogue. The `audio_url` and image
/// urls reference external assets and are not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: u32,
    pub name: String,
    /// Short display string, typically the street address.
    pub description: String,
    /// Display-ordered gallery images; may be empty.
    pub images: Vec<LocationImage>,
    pub audio_url: String,
    /// Long-form text of the audio narration.
    pub transcript: String,
    pub coordinates: Coordinates,
}

/// One gallery image with its alt text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationImage {
    pub url: String,
    pub alt_text: String,
}

/// Decimal-degree WGS84 coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A location annotated with its distance from a reference location, used
/// for proximity-query responses.
///
/// The record fields are flattened into the JSON response alongside a
/// `distance_km` field. The underlying catalogue record is copied, never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyLocation {
    #[serde(flatten)]
    pub location: LocationRecord,
    /// Great-circle distance from the reference location, in kilometers.
    pub distance_km: f64,
}
