//! Domain models for the walking tour.
//!
//! Everything here is plain data: the catalogue of [`LocationRecord`]s is
//! loaded once at startup and never mutated afterwards. [`NearbyLocation`]
//! is the only computed shape: a record annotated with its great-circle
//! distance from a reference point.

mod location;

pub use location::*;
