//! Marker presentation: state construction, surfaces, and lifecycle.
//!
//! A marker's visual state is derived, never stored: severity
//! classification, layer eligibility, and position resolution join each
//! source's latest reading into a desired set, and the lifecycle manager
//! replaces whatever is drawn with that set wholesale.
//!
//! # Components
//!
//! - [`MarkerState`]: complete description of one drawn marker
//! - [`desired_markers`]: computes the set that should be drawn
//! - [`MarkerSurface`]: rendering backend trait
//! - [`InMemorySurface`]: shared surface for tests and terminal rendering
//! - [`MarkerLifecycleManager`]: applies desired sets by full replacement

mod lifecycle;
mod state;
mod surface;

pub use lifecycle::MarkerLifecycleManager;
pub use state::{
    desired_markers, marker_for, MarkerState, AUXILIARY_SCALE, BORDER_COLOR, BORDER_WIDTH,
    PRIMARY_SCALE,
};
pub use surface::{InMemorySurface, MarkerHandle, MarkerSurface};
