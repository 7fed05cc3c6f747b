// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View: the viewport core shared by Easel's drawing and pan/zoom canvases.
//!
//! This crate provides a small, headless model of a finite square world shown
//! through a pixel container. It focuses on:
//! - Pan + zoom state and coordinate conversion between screen and world space.
//! - The bounds and clamp policy that keeps the world reachable.
//! - Zooming about an anchor (the pointer, or the container center).
//! - Generating background grid points for the buffered visible region only.
//!
//! It does **not** own shapes, input handling, or rendering. Callers are
//! expected to:
//! - Feed container sizes on mount and resize.
//! - Translate pointer and wheel input into [`Viewport::pan_by`] and
//!   [`Viewport::zoom_about`] calls (see `easel_input`).
//! - Draw with [`Viewport::transform`] and iterate [`Viewport::grid`].
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_view::Viewport;
//! use kurbo::{Point, Rect, Vec2};
//!
//! // An 800x600 container over the default 10000x10000 world.
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Wheel notch over the pointer: zoom in one step, keeping the pointer fixed.
//! let pointer = Point::new(400.0, 300.0);
//! let before = view.screen_to_world(pointer);
//! view.zoom_in(pointer);
//! let after = view.screen_to_world(pointer);
//! assert!((before - after).hypot() < 1e-9);
//!
//! // Panning is clamped so the world never leaves the screen.
//! view.pan_by(Vec2::new(1e6, 0.0));
//! assert_eq!(view.pan().x, 2_500.0);
//! ```
//!
//! ## Grid example
//!
//! The grid covers the visible rectangle grown by the buffer factor and
//! limited to the world, so its size depends on the view, not the world:
//!
//! ```rust
//! use easel_view::Viewport;
//! use kurbo::Rect;
//!
//! let view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let grid = view.grid();
//! let buffered = view.compute_visible_rect();
//! for pt in grid.points().take(3) {
//!     assert!(pt.x >= buffered.x0 - grid.spacing());
//! }
//! assert!(grid.len() < 10_000);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: serialize [`ViewportConfig`], [`ViewState`] and the mode enums.
//! - `tracing`: emit `tracing` events on zoom changes and clamp corrections.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "tracing")]
macro_rules! log_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod clamp;
mod config;
pub mod grid;
mod modes;
mod viewport;

pub use config::{
    ConfigError, DEFAULT_BUFFER_FACTOR, DEFAULT_GRID_SPACING, DEFAULT_MAX_ZOOM,
    DEFAULT_MIN_VISIBLE_PX, DEFAULT_MIN_ZOOM, DEFAULT_WORLD_SIZE, DEFAULT_ZOOM_STEP,
    ViewportConfig,
};
pub use grid::{GridLattice, GridPoints};
pub use modes::{ClampMode, FitMode};
pub use viewport::{ViewState, Viewport, ViewportDebugInfo};
