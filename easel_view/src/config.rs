// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport configuration and validation.

use core::fmt;

use kurbo::Rect;

use crate::modes::{ClampMode, FitMode};

/// Side length of the default square world, in world units.
pub const DEFAULT_WORLD_SIZE: f64 = 10_000.0;
/// Default lower zoom limit.
pub const DEFAULT_MIN_ZOOM: f64 = 0.3;
/// Default upper zoom limit.
pub const DEFAULT_MAX_ZOOM: f64 = 1.8;
/// Default zoom increment per wheel notch or button press.
pub const DEFAULT_ZOOM_STEP: f64 = 0.05;
/// Default multiplier applied to the visible rect before grid generation.
pub const DEFAULT_BUFFER_FACTOR: f64 = 1.5;
/// Default background grid spacing, in world units.
pub const DEFAULT_GRID_SPACING: f64 = 20.0;
/// Default minimum on-screen overlap between world and container, in pixels.
pub const DEFAULT_MIN_VISIBLE_PX: f64 = 32.0;

/// Parameters shared by every canvas that embeds a [`crate::Viewport`].
///
/// The defaults describe a 10000×10000 world centered at the origin, zoomable
/// between `0.3` and `1.8` in `0.05` steps, with a dot grid every 20 world
/// units generated over 1.5× the visible area.
///
/// ```rust
/// use easel_view::{ClampMode, ViewportConfig};
///
/// let config = ViewportConfig::default()
///     .with_world_size(2_000.0)
///     .with_zoom_limits(0.5, 4.0)
///     .with_clamp_mode(ClampMode::KeepSomeVisible);
/// assert!(config.validate().is_ok());
///
/// let broken = config.with_zoom_limits(0.0, 4.0);
/// assert!(broken.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportConfig {
    /// Side length of the square world, centered at the origin.
    pub world_size: f64,
    /// Smallest allowed zoom factor. Must be strictly positive.
    pub min_zoom: f64,
    /// Largest allowed zoom factor.
    pub max_zoom: f64,
    /// Additive zoom increment for one step.
    pub zoom_step: f64,
    /// Multiplier applied to the visible rect's size before grid generation.
    pub buffer_factor: f64,
    /// Distance between grid points, in world units.
    pub grid_spacing: f64,
    /// Minimum overlap between the scaled world and the container, in pixels.
    ///
    /// Must be positive, so a clamped world always shares some area with
    /// the container.
    pub min_visible_px: f64,
    /// How pan is constrained.
    pub clamp_mode: ClampMode,
    /// Placement used by fitting and by the clamp fallback.
    pub fit_mode: FitMode,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportConfig {
    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            world_size: DEFAULT_WORLD_SIZE,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            buffer_factor: DEFAULT_BUFFER_FACTOR,
            grid_spacing: DEFAULT_GRID_SPACING,
            min_visible_px: DEFAULT_MIN_VISIBLE_PX,
            clamp_mode: ClampMode::WorldMargin,
            fit_mode: FitMode::Center,
        }
    }

    /// Sets the world side length.
    #[must_use]
    pub const fn with_world_size(mut self, world_size: f64) -> Self {
        self.world_size = world_size;
        self
    }

    /// Sets the zoom limits.
    #[must_use]
    pub const fn with_zoom_limits(mut self, min_zoom: f64, max_zoom: f64) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    /// Sets the zoom step.
    #[must_use]
    pub const fn with_zoom_step(mut self, zoom_step: f64) -> Self {
        self.zoom_step = zoom_step;
        self
    }

    /// Sets the grid buffer factor.
    #[must_use]
    pub const fn with_buffer_factor(mut self, buffer_factor: f64) -> Self {
        self.buffer_factor = buffer_factor;
        self
    }

    /// Sets the grid spacing.
    #[must_use]
    pub const fn with_grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    /// Sets the minimum on-screen overlap kept by the clamp.
    #[must_use]
    pub const fn with_min_visible_px(mut self, min_visible_px: f64) -> Self {
        self.min_visible_px = min_visible_px;
        self
    }

    /// Sets the clamp mode.
    #[must_use]
    pub const fn with_clamp_mode(mut self, clamp_mode: ClampMode) -> Self {
        self.clamp_mode = clamp_mode;
        self
    }

    /// Sets the fit mode.
    #[must_use]
    pub const fn with_fit_mode(mut self, fit_mode: FitMode) -> Self {
        self.fit_mode = fit_mode;
        self
    }

    /// The world rectangle: a square of side [`Self::world_size`] centered at the origin.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        let half = self.world_size * 0.5;
        Rect::new(-half, -half, half, half)
    }

    /// Checks that every parameter is usable.
    ///
    /// Zoom limits must be finite, strictly positive and ordered, which is
    /// what keeps every division by zoom well defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.world_size.is_finite() && self.world_size > 0.0) {
            return Err(ConfigError::WorldSize(self.world_size));
        }
        let zoom_ok = self.min_zoom.is_finite()
            && self.max_zoom.is_finite()
            && self.min_zoom > 0.0
            && self.min_zoom <= self.max_zoom;
        if !zoom_ok {
            return Err(ConfigError::ZoomLimits {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            return Err(ConfigError::ZoomStep(self.zoom_step));
        }
        if !(self.buffer_factor.is_finite() && self.buffer_factor >= 1.0) {
            return Err(ConfigError::BufferFactor(self.buffer_factor));
        }
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(ConfigError::GridSpacing(self.grid_spacing));
        }
        if !(self.min_visible_px.is_finite() && self.min_visible_px > 0.0) {
            return Err(ConfigError::MinVisible(self.min_visible_px));
        }
        Ok(())
    }
}

/// Error returned when a [`ViewportConfig`] cannot be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// World size was not a finite positive number.
    WorldSize(f64),
    /// Zoom limits were non-finite, not strictly positive, or inverted.
    ZoomLimits {
        /// The rejected lower limit.
        min: f64,
        /// The rejected upper limit.
        max: f64,
    },
    /// Zoom step was not a finite positive number.
    ZoomStep(f64),
    /// Buffer factor was below `1.0` or non-finite.
    BufferFactor(f64),
    /// Grid spacing was not a finite positive number.
    GridSpacing(f64),
    /// Minimum visible overlap was not a finite positive number.
    MinVisible(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorldSize(v) => write!(f, "world size must be finite and positive, got {v}"),
            Self::ZoomLimits { min, max } => write!(
                f,
                "zoom limits must satisfy 0 < min <= max, got min={min} max={max}"
            ),
            Self::ZoomStep(v) => write!(f, "zoom step must be finite and positive, got {v}"),
            Self::BufferFactor(v) => {
                write!(f, "buffer factor must be finite and at least 1, got {v}")
            }
            Self::GridSpacing(v) => {
                write!(f, "grid spacing must be finite and positive, got {v}")
            }
            Self::MinVisible(v) => {
                write!(f, "minimum visible overlap must be finite and positive, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
