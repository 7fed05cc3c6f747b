// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One canvas's navigation state: viewport, gesture, and the derived grid.

use easel_view::{ConfigError, GridLattice, ViewState, Viewport, ViewportConfig};
use kurbo::{Point, Rect};

use crate::gesture::{Command, Gesture, InputEvent, ToolAction};

/// Result of feeding one event or command into a [`CanvasView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Nothing visible changed, or the container is unmounted and there is
    /// nothing to draw. The cached rect and grid are untouched.
    Unchanged,
    /// Pan, zoom or container size changed; the cached visible rect and grid
    /// have been rebuilt and the canvas should be redrawn.
    ViewChanged,
    /// A drag for the active tool.
    Tool {
        /// The action, in container-relative coordinates.
        action: ToolAction,
        /// The action's position converted to world coordinates.
        world: Option<Point>,
    },
}

/// Owns the navigation state of a single canvas.
///
/// Every view change runs the full cycle: the viewport clamps, then the
/// buffered visible rect is recomputed and the grid regenerated. The cached
/// rect and grid are always rebuilt from the viewport, never edited in place.
/// While the container is unmounted the cycle is skipped and the previous
/// cache is kept.
///
/// ```
/// use easel_input::canvas::{CanvasView, Outcome};
/// use easel_input::gesture::InputEvent;
/// use easel_input::tool::Modifiers;
/// use kurbo::{Point, Rect};
///
/// let mut canvas = CanvasView::new(Rect::new(0.0, 0.0, 800.0, 600.0));
/// let outcome = canvas.handle(InputEvent::Wheel {
///     delta_y: -1.0,
///     pos: Point::new(400.0, 300.0),
///     modifiers: Modifiers::CTRL,
/// });
/// assert_eq!(outcome, Outcome::ViewChanged);
/// assert!((canvas.viewport().zoom() - 1.05).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct CanvasView {
    viewport: Viewport,
    gesture: Gesture,
    visible_rect: Rect,
    grid: GridLattice,
    revision: u64,
}

impl CanvasView {
    /// Creates a canvas over `view_rect` with the default configuration.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::from_viewport(Viewport::new(view_rect))
    }

    /// Creates a canvas with a custom configuration.
    pub fn with_config(view_rect: Rect, config: ViewportConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_viewport(Viewport::with_config(view_rect, config)?))
    }

    fn from_viewport(viewport: Viewport) -> Self {
        let mut canvas = Self {
            viewport,
            gesture: Gesture::new(),
            visible_rect: Rect::ZERO,
            grid: GridLattice::EMPTY,
            revision: 0,
        };
        canvas.refresh();
        canvas
    }

    /// The viewport, for rendering and coordinate conversion.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The gesture state machine.
    #[must_use]
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// The cached buffered visible rect, in world coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        self.visible_rect
    }

    /// The cached background grid.
    #[must_use]
    pub fn grid(&self) -> GridLattice {
        self.grid
    }

    /// Counter bumped each time the cached rect and grid are rebuilt.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Converts a container-relative point to world coordinates.
    ///
    /// Input events carry positions relative to the container's top-left
    /// corner, while the viewport works in the screen space of its
    /// [`view_rect`](Viewport::view_rect); this adds the container origin.
    #[must_use]
    pub fn to_world(&self, pt: Point) -> Point {
        self.viewport.screen_to_world(self.to_screen(pt))
    }

    fn to_screen(&self, pt: Point) -> Point {
        pt + self.viewport.view_rect().origin().to_vec2()
    }

    /// Runs an input event through the gesture state machine and applies the result.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let command = self.gesture.handle(event);
        self.apply(command)
    }

    /// Applies a command directly, bypassing the gesture state machine.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let before = (self.viewport.state(), self.viewport.view_rect());
        match command {
            Command::None => return Outcome::Unchanged,
            Command::Pan(delta) => self.viewport.pan_by(delta),
            Command::ZoomAt { anchor, steps } => {
                self.viewport.step_zoom(self.to_screen(anchor), steps);
            }
            Command::ZoomCenter { steps } => {
                let center = self.viewport.view_rect().center();
                self.viewport.step_zoom(center, steps);
            }
            Command::Resize(size) => self.viewport.set_container_size(size),
            Command::Tool(action) => {
                return Outcome::Tool {
                    action,
                    world: action.pos().map(|pos| self.to_world(pos)),
                };
            }
        }
        if (self.viewport.state(), self.viewport.view_rect()) == before {
            return Outcome::Unchanged;
        }
        self.refresh()
    }

    /// Restores persisted pan and zoom.
    pub fn restore(&mut self, state: ViewState) -> Outcome {
        let before = self.viewport.state();
        self.viewport.restore(state);
        if self.viewport.state() == before {
            return Outcome::Unchanged;
        }
        self.refresh()
    }

    /// Replaces the viewport configuration and rebuilds the cache.
    pub fn set_config(&mut self, config: ViewportConfig) -> Result<(), ConfigError> {
        self.viewport.set_config(config)?;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) -> Outcome {
        if !self.viewport.is_mounted() {
            return Outcome::Unchanged;
        }
        self.visible_rect = self.viewport.compute_visible_rect();
        self.grid = GridLattice::covering(self.visible_rect, self.viewport.config().grid_spacing);
        self.revision += 1;
        log_trace!(
            revision = self.revision,
            points = self.grid.len(),
            "grid regenerated"
        );
        Outcome::ViewChanged
    }
}
