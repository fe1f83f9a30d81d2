//! Dashboard widgets for the TUI.
//!
//! - **Primitives**: shared color and formatting helpers
//! - **Panel widgets**: the marker list and per-source summary panels
//!   composed by the dashboard layout

mod map_panel;
pub mod primitives;
mod source_summary;

pub use map_panel::MapPanelWidget;
pub use source_summary::SourceSummaryWidget;
