// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Input: turns pointer, wheel and toolbar input into viewport changes.
//!
//! This crate sits between the platform's event stream and [`easel_view`]:
//!
//! - [`tool`]: the toolbar tools and modifier keys.
//! - [`drag`]: incremental and total offsets of a held pointer.
//! - [`gesture`]: an explicit state machine that decides whether input
//!   navigates (pans or zooms) or goes to the active tool.
//! - [`canvas`]: one canvas's viewport, gesture and cached grid, updated as a
//!   unit.
//!
//! Nothing here is global: every canvas owns its own [`canvas::CanvasView`],
//! so several canvases on one page never share pan or zoom.
//!
//! ## Example
//!
//! ```rust
//! use easel_input::canvas::{CanvasView, Outcome};
//! use easel_input::gesture::{InputEvent, ZoomDirection};
//! use easel_input::tool::{Modifiers, Tool};
//! use kurbo::{Point, Rect};
//!
//! let mut canvas = CanvasView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Toolbar zoom button.
//! assert_eq!(
//!     canvas.handle(InputEvent::ZoomButton(ZoomDirection::In)),
//!     Outcome::ViewChanged,
//! );
//!
//! // A plain drag with the draw tool reaches the tool, in world coordinates.
//! canvas.handle(InputEvent::SelectTool(Tool::Draw));
//! let outcome = canvas.handle(InputEvent::PointerDown {
//!     pos: Point::new(400.0, 300.0),
//!     modifiers: Modifiers::NONE,
//! });
//! assert!(matches!(outcome, Outcome::Tool { world: Some(_), .. }));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `tracing`: emit `tracing` events on gesture transitions and grid rebuilds.
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

pub mod canvas;
pub mod drag;
pub mod gesture;
pub mod tool;
