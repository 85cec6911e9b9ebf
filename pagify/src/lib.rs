//! A headless paged-grid navigation engine.
//!
//! For viewport wiring (throttled triggers, transitions), see the `pagify-adapter` crate.
//!
//! Pages are laid out in a fixed grid per view (page height/width given in percent of the
//! viewport) and the view moves column by column along one axis. This crate provides the core
//! algorithms: page → column/cell mapping for row- and column-major orderings, page/column/view
//! navigation with a blank-column policy, a lazy-load protocol for streamed content, and a
//! host-clock driven throttle for bursts of navigation triggers.
//!
//! It is UI-agnostic. A host layer is expected to:
//! - own the page content (the engine tracks keys and placement only)
//! - apply the returned target offsets with its own transition primitive
//! - report transition completion back to the engine
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod options;
mod pages;
mod pagify;
mod state;
mod throttle;
mod types;


pub use error::{ConfigError, LoadError};
pub use geometry::GridDimensions;
pub use options::{
    DEFAULT_PAGE_PERCENT, DEFAULT_TRANSITION_DURATION_MS, LayoutConfig, OnPageChangeCallback,
    PageLoader,
};
pub use pages::{Page, PageSet, PageSink};
pub use pagify::Pagify;
pub use state::{EngineState, NavigationState};
pub use throttle::Throttle;
pub use types::{
    Cell, NavigateOptions, PageChange, PageKey, PageOrder, PageRange, PageTurn, Placement,
    TransitionState, TurnDirection, TurnUnit,
};
