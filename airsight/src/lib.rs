//! AirSight - Multi-source air quality monitoring
//!
//! This library provides the core functionality for presenting air quality
//! readings from several observation sources as a live set of map markers:
//! AQI severity classification, per-source marker presentation, and an async
//! engine that reconciles the drawn markers as readings and view changes
//! arrive.
//!
//! # High-Level API
//!
//! For most use cases, the [`engine`] module provides the runtime facade:
//!
//! ```ignore
//! use airsight::coord::GeoPoint;
//! use airsight::engine::{AirQualityEngine, ViewOptions};
//! use airsight::marker::InMemorySurface;
//!
//! let reference = GeoPoint::new(40.7128, -74.0060)?;
//! let engine = AirQualityEngine::new(
//!     &tokio::runtime::Handle::current(),
//!     InMemorySurface::default(),
//!     ViewOptions::new(reference),
//! );
//!
//! // Feed events; the engine reconciles markers in the background
//! engine.client().map_ready();
//! ```

pub mod aqi;
pub mod config;
pub mod coord;
pub mod engine;
pub mod fetch;
pub mod layer;
pub mod logging;
pub mod marker;
pub mod position;
pub mod source;

/// Version of the AirSight library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
