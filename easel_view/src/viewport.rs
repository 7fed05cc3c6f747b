// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::clamp::{self, PanRange};
use crate::config::{ConfigError, ViewportConfig};
use crate::grid::GridLattice;
use crate::modes::{ClampMode, FitMode};

/// Pan and zoom over a finite square world, shown in a container.
///
/// `Viewport` maps world coordinates into the container with a
/// translate-then-scale transform: `screen = world * zoom + pan + origin`,
/// where `origin` is the container's top-left corner in screen space.
/// Every mutation re-applies the clamp policy from [`crate::clamp`], so the
/// world can never be panned entirely out of view.
///
/// While the container has no area (not yet mounted), clamping is skipped
/// and [`Viewport::compute_visible_rect`] returns an empty rect.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    config: ViewportConfig,
    zoom: f64,
    pan: Vec2,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport over `view_rect` using [`ViewportConfig::default`].
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial pan is zero (world origin maps to the container origin),
    ///   corrected by the clamp if necessary.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::build(view_rect, ViewportConfig::default())
    }

    /// Creates a viewport with a custom configuration.
    ///
    /// The initial zoom is `1.0` clamped into the configured limits.
    pub fn with_config(view_rect: Rect, config: ViewportConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(view_rect, config))
    }

    fn build(view_rect: Rect, config: ViewportConfig) -> Self {
        let mut vp = Self {
            view_rect,
            config,
            zoom: 1.0_f64.clamp(config.min_zoom, config.max_zoom),
            pan: Vec2::ZERO,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.commit();
        vp
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The current zoom is clamped into the new limits and the pan re-clamped.
    /// On error the viewport is left unchanged.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.zoom = self.zoom.clamp(config.min_zoom, config.max_zoom);
        self.commit();
        Ok(())
    }

    /// Returns the container rectangle in screen coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the container rectangle in screen coordinates.
    ///
    /// This does not change zoom, but pan is re-clamped for the new size.
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.commit();
    }

    /// Returns the container size in pixels.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.view_rect.size()
    }

    /// Resizes the container, keeping its origin.
    pub fn set_container_size(&mut self, size: Size) {
        self.set_view_rect(Rect::from_origin_size(self.view_rect.origin(), size));
    }

    /// Returns `true` once the container has a positive area.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.view_rect.width() > 0.0 && self.view_rect.height() > 0.0
    }

    /// The world rectangle from the configuration.
    #[must_use]
    pub fn world_bounds(&self) -> Rect {
        self.config.world_bounds()
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset, relative to the container origin.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the zoom factor, clamped into the configured range.
    ///
    /// This scales about the container origin; use [`Viewport::zoom_about`]
    /// to keep another point fixed.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let clamped = zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        if self.zoom == clamped {
            return;
        }
        self.zoom = clamped;
        self.commit();
    }

    /// Sets the pan offset, then clamps it.
    pub fn set_pan(&mut self, pan: Vec2) {
        if !pan.is_finite() {
            return;
        }
        self.pan = pan;
        self.commit();
    }

    /// Pans by a delta in screen pixels, then clamps.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.pan += delta;
        self.commit();
    }

    /// Changes zoom by `delta` while keeping `anchor` (screen coordinates) fixed.
    ///
    /// The world point under the anchor is computed, the zoom is moved by
    /// `delta` and clamped into the configured limits, and the pan is solved
    /// so that the same world point lands on the anchor again. The result then
    /// goes through the clamp; the anchor stays put unless the clamp has to
    /// intervene.
    pub fn zoom_about(&mut self, anchor: Point, delta: f64) {
        if !delta.is_finite() || !anchor.is_finite() {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom + delta).clamp(self.config.min_zoom, self.config.max_zoom);
        // Exact comparison, so a zoom left a hair above a limit by repeated
        // steps still snaps onto it.
        if new_zoom == old_zoom {
            return;
        }

        let local = anchor - self.view_rect.origin();
        let anchor_world = (local - self.pan) / old_zoom;
        self.zoom = new_zoom;
        self.pan = local - anchor_world * new_zoom;
        log_debug!(
            from = old_zoom,
            to = new_zoom,
            anchor = ?anchor,
            "zoom changed"
        );
        self.commit();
    }

    /// Zooms by `steps` configured increments about `anchor`.
    ///
    /// Positive steps zoom in, negative steps zoom out.
    pub fn step_zoom(&mut self, anchor: Point, steps: i32) {
        self.zoom_about(anchor, f64::from(steps) * self.config.zoom_step);
    }

    /// Zooms in one step about `anchor`, typically the pointer position.
    pub fn zoom_in(&mut self, anchor: Point) {
        self.step_zoom(anchor, 1);
    }

    /// Zooms out one step about `anchor`, typically the pointer position.
    pub fn zoom_out(&mut self, anchor: Point) {
        self.step_zoom(anchor, -1);
    }

    /// Zooms in one step about the container center, as a toolbar button does.
    pub fn zoom_in_center(&mut self) {
        self.zoom_in(self.view_rect.center());
    }

    /// Zooms out one step about the container center.
    pub fn zoom_out_center(&mut self) {
        self.zoom_out(self.view_rect.center());
    }

    /// Returns `true` while zoom is below the upper limit.
    ///
    /// Zoom-in controls should be disabled when this is `false`.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.config.max_zoom
    }

    /// Returns `true` while zoom is above the lower limit.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.config.min_zoom
    }

    /// Returns to zoom `1.0` (clamped into the limits) and zero pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0_f64.clamp(self.config.min_zoom, self.config.max_zoom);
        self.pan = Vec2::ZERO;
        self.commit();
    }

    /// Fits the whole world into the container, preserving aspect ratio.
    ///
    /// The fitted zoom is clamped into the configured limits, so a large world
    /// may still not be entirely visible. Placement follows
    /// [`ViewportConfig::fit_mode`].
    pub fn fit_world(&mut self) {
        let bounds = self.world_bounds();
        let size = self.container_size();
        if size.width <= 0.0 || size.height <= 0.0 {
            return;
        }
        let sx = size.width / bounds.width();
        let sy = size.height / bounds.height();
        let zoom = sx.min(sy).clamp(self.config.min_zoom, self.config.max_zoom);
        self.zoom = zoom;

        self.pan = match self.config.fit_mode {
            FitMode::Center => {
                let container_center = Vec2::new(size.width * 0.5, size.height * 0.5);
                container_center - bounds.center().to_vec2() * zoom
            }
            FitMode::AlignMin => -bounds.origin().to_vec2() * zoom,
        };
        self.commit();
    }

    /// Pans so that `world_pt` appears at the container center.
    pub fn center_on(&mut self, world_pt: Point) {
        let current = self.world_to_screen(world_pt);
        self.pan_by(self.view_rect.center() - current);
    }

    /// Captures pan and zoom for persistence.
    #[must_use]
    pub fn state(&self) -> ViewState {
        ViewState {
            pan_x: self.pan.x,
            pan_y: self.pan.y,
            zoom: self.zoom,
        }
    }

    /// Restores a previously captured [`ViewState`].
    ///
    /// The zoom is clamped into the current limits and the pan re-clamped, so
    /// a state saved under a different configuration or container still
    /// yields a reachable view. Non-finite values are ignored.
    pub fn restore(&mut self, state: ViewState) {
        if !(state.pan_x.is_finite() && state.pan_y.is_finite() && state.zoom.is_finite()) {
            return;
        }
        self.zoom = state.zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.pan = Vec2::new(state.pan_x, state.pan_y);
        self.commit();
    }

    /// The world-to-screen transform for the render layer.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_view
    }

    /// Converts a screen point into world coordinates: `(screen - pan) / zoom`.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world point into screen coordinates: `world * zoom + pan`.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a world rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        self.world_to_view.transform_rect_bbox(rect)
    }

    /// Converts a screen rectangle into world coordinates.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        self.view_to_world.transform_rect_bbox(rect)
    }

    /// Returns the world rectangle strictly visible through the container.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world_rect(self.view_rect)
    }

    /// Returns the buffered visible rectangle used for grid generation.
    ///
    /// The strictly visible rect is grown by `(buffer_factor - 1) / 2` of its
    /// own width and height on each side, then intersected with the world
    /// bounds. Returns [`Rect::ZERO`] while the container is not mounted or
    /// when the view does not overlap the world.
    #[must_use]
    pub fn compute_visible_rect(&self) -> Rect {
        if !self.is_mounted() {
            return Rect::ZERO;
        }
        let visible = self.visible_world_rect();
        let grow = (self.config.buffer_factor - 1.0) * 0.5;
        let buffered = visible
            .inflate(visible.width() * grow, visible.height() * grow)
            .intersect(self.world_bounds());
        if buffered.width() <= 0.0 || buffered.height() <= 0.0 {
            return Rect::ZERO;
        }
        buffered
    }

    /// Builds the background grid for the current view.
    #[must_use]
    pub fn grid(&self) -> GridLattice {
        GridLattice::covering(self.compute_visible_rect(), self.config.grid_spacing)
    }

    /// Returns the allowed pan ranges `(x, y)` at the current zoom.
    #[must_use]
    pub fn pan_limits(&self) -> (PanRange, PanRange) {
        clamp::pan_ranges(self.zoom, self.container_size(), &self.config)
    }

    /// Returns the world-units-per-pixel ratio, `1.0 / zoom`.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.zoom
    }

    /// Suggests a “nice” grid spacing in world units for the current zoom.
    ///
    /// Picks the smallest value on a 1-2-5 ladder that keeps grid points at
    /// least 64 pixels apart, never below `base`. An infinite `base` is
    /// returned as is.
    #[must_use]
    pub fn suggest_grid_spacing(&self, base: f64) -> f64 {
        let desired = (self.world_units_per_pixel() * 64.0).max(base.abs().max(f64::MIN_POSITIVE));
        if !desired.is_finite() {
            return desired;
        }

        let mut decade = 1.0_f64;
        while decade > desired {
            decade /= 10.0;
        }
        while decade * 10.0 <= desired {
            decade *= 10.0;
        }
        [1.0, 2.0, 5.0, 10.0]
            .into_iter()
            .map(|m| m * decade)
            .find(|&step| step >= desired)
            .unwrap_or(decade * 10.0)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        let (pan_range_x, pan_range_y) = self.pan_limits();
        ViewportDebugInfo {
            view_rect: self.view_rect,
            world_bounds: self.world_bounds(),
            visible_world_rect: self.visible_world_rect(),
            buffered_rect: self.compute_visible_rect(),
            zoom: self.zoom,
            pan: self.pan,
            min_zoom: self.config.min_zoom,
            max_zoom: self.config.max_zoom,
            clamp_mode: self.config.clamp_mode,
            fit_mode: self.config.fit_mode,
            pan_range_x,
            pan_range_y,
        }
    }

    fn commit(&mut self) {
        self.clamp_to_bounds();
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        let view_origin = self.view_rect.origin().to_vec2();
        // World → view: scale, then translate by pan and into the view rect.
        self.world_to_view = Affine::translate(view_origin + self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }

    fn clamp_to_bounds(&mut self) {
        if !self.is_mounted() {
            return;
        }
        let clamped = clamp::clamp_pan(self.pan, self.zoom, self.container_size(), &self.config);
        if clamped != self.pan {
            log_trace!(requested = ?self.pan, clamped = ?clamped, zoom = self.zoom, "pan clamped");
            self.pan = clamped;
        }
    }
}

/// Pan and zoom, suitable for persisting alongside document content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    /// Horizontal pan in pixels.
    pub pan_x: f64,
    /// Vertical pan in pixels.
    pub pan_y: f64,
    /// Zoom factor.
    pub zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Container rectangle in screen coordinates.
    pub view_rect: Rect,
    /// World bounds used for clamping.
    pub world_bounds: Rect,
    /// World rectangle strictly visible through the container.
    pub visible_world_rect: Rect,
    /// Buffered visible rectangle used for grid generation.
    pub buffered_rect: Rect,
    /// Current zoom factor.
    pub zoom: f64,
    /// Current pan offset.
    pub pan: Vec2,
    /// Lower zoom limit.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
    /// Active clamp mode.
    pub clamp_mode: ClampMode,
    /// Active fit mode.
    pub fit_mode: FitMode,
    /// Allowed horizontal pan at the current zoom.
    pub pan_range_x: PanRange,
    /// Allowed vertical pan at the current zoom.
    pub pan_range_y: PanRange,
}
