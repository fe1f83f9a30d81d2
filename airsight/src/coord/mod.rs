//! Geographic coordinate primitives.
//!
//! The engine presents exactly one reference location per session; every
//! drawn marker derives its position from that point. This module provides
//! the validated [`GeoPoint`] type and its range constants.

mod types;

pub use types::{CoordError, GeoPoint, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
