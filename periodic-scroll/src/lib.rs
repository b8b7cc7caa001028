//! A headless engine for periodic ("infinite") scrolling.
//!
//! For adapter-level utilities (an in-memory host, drag routing, tweens), see the
//! `periodic-scroll-adapter` crate.
//!
//! A bounded scroll surface is made to feel unbounded along zero, one or two axes: the content
//! is laid out in the middle of three tiles, and whenever the offset drifts into a neighbouring
//! tile it is moved back by exactly one period. Because the content repeats with that period,
//! the rewrite is invisible to the user.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide (via [`ScrollHost`]):
//! - viewport size
//! - a content size the engine can set
//! - a scroll offset the engine can read and rewrite
//! - a call to [`PeriodicScrollView::did_scroll`] whenever the offset changes
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod correction;
mod error;
mod geometry;
mod host;
mod mode;
mod options;
mod surface;
mod types;
mod view;


pub use correction::Correction;
pub use error::{ConfigurationError, Error, Result};
pub use geometry::{AxisTiling, PERIODIC_TILE_COUNT, TileGeometry};
pub use host::ScrollHost;
pub use mode::PeriodicityMode;
pub use options::{OnScrollCallback, PeriodicScrollOptions};
pub use surface::ContentSurface;
pub use types::{Axis, Point, Rect, ScrollEvent, Size, Wrap};
pub use view::PeriodicScrollView;
