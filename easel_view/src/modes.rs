// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How pan is constrained relative to the world bounds.
///
/// See [`crate::clamp`] for the exact ranges each mode produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampMode {
    /// Do not apply any clamping; the view may pan freely.
    None,
    /// Clamp only so that some part of the world stays on screen.
    ///
    /// At least [`crate::ViewportConfig::min_visible_px`] pixels of the scaled
    /// world overlap the container on each axis.
    KeepSomeVisible,
    /// Allow panning up to a quarter of the world size past each edge, and
    /// never so far that the world leaves the container.
    ///
    /// This is the range `[-(W * zoom) + container - W / 4, W / 4]` per axis,
    /// intersected with the [`ClampMode::KeepSomeVisible`] range.
    #[default]
    WorldMargin,
}

/// How the world is positioned when it must be placed rather than clamped.
///
/// This mode is consulted by [`crate::Viewport::fit_world`] and by the clamp
/// when no pan satisfies the active [`ClampMode`] (the container is larger
/// than the scaled world plus its margins).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Center the world within the container.
    #[default]
    Center,
    /// Align the world's minimum corner with the container origin.
    AlignMin,
}
