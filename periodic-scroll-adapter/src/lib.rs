//! Adapter utilities for the `periodic-scroll` crate.
//!
//! The `periodic-scroll` crate is UI-agnostic and focuses on the tiling math and the offset
//! correction state. This crate provides small, framework-neutral helpers commonly needed by
//! adapters:
//!
//! - An in-memory scroll host (useful for headless frontends, simulations and tests)
//! - A controller that routes drag/resize events and delivers scroll notifications
//! - Tween-based smooth scrolling helpers (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

mod controller;
mod memory_host;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use memory_host::MemoryHost;
pub use tween::{Easing, Tween};
