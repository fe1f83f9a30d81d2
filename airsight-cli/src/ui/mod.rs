//! Terminal UI for AirSight.
//!
//! Provides a real-time dashboard showing the drawn markers, per-source
//! readings, and fetch status.

pub mod dashboard;
pub mod widgets;

pub use dashboard::{Dashboard, DashboardConfig, DashboardEvent};
