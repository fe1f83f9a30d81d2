//! Data sources and their latest readings.
//!
//! # Components
//!
//! - [`SourceId`] - the closed set of data origins (current, satellite,
//!   ground)
//! - [`Reading`] - the latest value fetched for one source
//! - [`SourceRegistry`] - per-source storage with fetch sequence ordering
//!
//! The registry is owned by the engine daemon; fetch tasks never touch it
//! directly. Results flow in as events carrying a per-source sequence
//! number, and the registry decides acceptance (see
//! [`SourceRegistry::accept`]).

mod reading;
mod registry;

pub use reading::{Reading, SourceId};
pub use registry::SourceRegistry;
