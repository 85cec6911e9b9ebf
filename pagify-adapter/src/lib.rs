//! Viewport binding utilities for the `pagify` crate.
//!
//! The `pagify` crate is UI-agnostic and focuses on navigation math and state. This crate
//! provides the small, framework-neutral pieces a host needs around it:
//!
//! - A [`ViewportBinding`] that routes forward/backward/go-to-page triggers through a throttle
//!   into the engine and hands the resulting offsets to a transition primitive
//! - The [`Transition`] seam, with a tween-driven implementation and a callback adapter for
//!   hosts that animate on their own
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod transition;
mod tween;

#[cfg(test)]
mod tests;

pub use binding::{Trigger, ViewportBinding, ViewportFrame};
pub use transition::{CallbackTransition, Transition, TransitionFrame, TweenTransition};
pub use tween::{Easing, Tween};
