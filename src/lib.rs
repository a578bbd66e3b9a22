//! Audio walking tour of historic downtown Trinidad, Colorado.
//!
//! A static catalogue of tour stops (narration audio, transcripts, photos,
//! coordinates) served over a small HTTP API. The interesting part lives in
//! [`directory`]: selection state and the Haversine-based nearby-locations
//! query. [`catalog`] supplies the compiled-in records and [`api`] exposes
//! the directory to the presentation layer.

pub mod api;
pub mod catalog;
pub mod directory;
pub mod models;
