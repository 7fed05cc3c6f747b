// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: decides whether input navigates the view or drives a tool.
//!
//! ## States
//!
//! - [`Phase::Idle`]: nothing held. A drag goes to the active tool (or pans,
//!   with [`Tool::Pan`]); wheel events are ignored.
//! - [`Phase::ZoomPending`]: control held with no drag. Wheel events zoom about
//!   the pointer; a drag pans.
//! - [`Phase::Panning`]: a navigation drag is in progress. Every move emits a
//!   [`Command::Pan`] until the pointer is released.
//! - [`Phase::ToolDrag`]: a drag captured by the active tool. Moves and the
//!   release are forwarded as [`ToolAction`]s.
//!
//! A drag keeps the role it started with: releasing control mid-pan keeps
//! panning until the pointer comes up.
//!
//! ```
//! use easel_input::gesture::{Command, Gesture, InputEvent, Phase};
//! use easel_input::tool::Modifiers;
//! use kurbo::{Point, Vec2};
//!
//! let mut gesture = Gesture::new();
//! let pos = Point::new(100.0, 100.0);
//!
//! gesture.handle(InputEvent::PointerDown { pos, modifiers: Modifiers::CTRL });
//! assert_eq!(gesture.phase(), Phase::Panning);
//!
//! let cmd = gesture.handle(InputEvent::PointerMove {
//!     pos: Point::new(110.0, 95.0),
//!     modifiers: Modifiers::CTRL,
//! });
//! assert_eq!(cmd, Command::Pan(Vec2::new(10.0, -5.0)));
//! ```

use kurbo::{Point, Size, Vec2};

use crate::drag::DragTracker;
use crate::tool::{Modifiers, Tool};

/// Direction of a toolbar zoom button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Zoom in one step.
    In,
    /// Zoom out one step.
    Out,
}

impl ZoomDirection {
    fn steps(self) -> i32 {
        match self {
            Self::In => 1,
            Self::Out => -1,
        }
    }
}

/// A platform input event.
///
/// Positions are relative to the container's top-left corner, like a DOM
/// event's `offsetX`/`offsetY`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed.
    PointerDown {
        /// Pointer position.
        pos: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position.
        pos: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Primary pointer released.
    PointerUp {
        /// Pointer position.
        pos: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// The platform cancelled the pointer sequence.
    PointerCancel,
    /// Wheel or trackpad scroll.
    Wheel {
        /// Vertical scroll amount; negative values scroll up.
        delta_y: f64,
        /// Pointer position, used as the zoom anchor.
        pos: Point,
        /// Modifiers held.
        modifiers: Modifiers,
    },
    /// Modifier keys changed without pointer activity.
    ModifiersChanged(Modifiers),
    /// A tool was picked in the toolbar.
    SelectTool(Tool),
    /// A zoom button was pressed.
    ZoomButton(ZoomDirection),
    /// The container was resized.
    Resize(Size),
}

/// Drag input forwarded to the active tool, in container-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToolAction {
    /// The drag started.
    Begin {
        /// Tool receiving the drag.
        tool: Tool,
        /// Press position.
        pos: Point,
    },
    /// The pointer moved during the drag.
    Update {
        /// Tool receiving the drag.
        tool: Tool,
        /// Current position.
        pos: Point,
        /// Movement since the previous position.
        delta: Vec2,
    },
    /// The drag finished normally.
    End {
        /// Tool receiving the drag.
        tool: Tool,
        /// Release position.
        pos: Point,
    },
    /// The drag was abandoned; the tool should discard any preview.
    Cancel {
        /// Tool receiving the drag.
        tool: Tool,
    },
}

impl ToolAction {
    /// The tool this action targets.
    #[must_use]
    pub fn tool(&self) -> Tool {
        match *self {
            Self::Begin { tool, .. }
            | Self::Update { tool, .. }
            | Self::End { tool, .. }
            | Self::Cancel { tool } => tool,
        }
    }

    /// The pointer position carried by the action, if any.
    #[must_use]
    pub fn pos(&self) -> Option<Point> {
        match *self {
            Self::Begin { pos, .. } | Self::Update { pos, .. } | Self::End { pos, .. } => Some(pos),
            Self::Cancel { .. } => None,
        }
    }
}

/// What the host should do in response to an [`InputEvent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Nothing to do.
    None,
    /// Pan the view by a delta in pixels.
    Pan(Vec2),
    /// Zoom by `steps` increments, keeping `anchor` fixed.
    ZoomAt {
        /// Container-relative anchor, normally the pointer.
        anchor: Point,
        /// Positive to zoom in, negative to zoom out.
        steps: i32,
    },
    /// Zoom by `steps` increments about the container center.
    ZoomCenter {
        /// Positive to zoom in, negative to zoom out.
        steps: i32,
    },
    /// The container has a new size.
    Resize(Size),
    /// Forward a drag to the active tool.
    Tool(ToolAction),
}

/// Observable phase of a [`Gesture`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No drag, no navigation modifier.
    Idle,
    /// Navigation modifier held, no drag yet.
    ZoomPending,
    /// Navigation drag in progress.
    Panning,
    /// Tool drag in progress.
    ToolDrag,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum State {
    Idle,
    ZoomPending,
    Panning(DragTracker),
    ToolDrag(DragTracker),
}

impl State {
    fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::ZoomPending => Phase::ZoomPending,
            Self::Panning(_) => Phase::Panning,
            Self::ToolDrag(_) => Phase::ToolDrag,
        }
    }

    fn resting(modifiers: Modifiers) -> Self {
        if modifiers.navigates() {
            Self::ZoomPending
        } else {
            Self::Idle
        }
    }
}

/// Turns raw input into navigation commands and tool actions.
///
/// One `Gesture` belongs to one canvas; it holds the active tool, the last
/// seen modifiers and the drag in progress, if any.
#[derive(Clone, Debug)]
pub struct Gesture {
    tool: Tool,
    modifiers: Modifiers,
    state: State,
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new()
    }
}

impl Gesture {
    /// Creates an idle gesture with [`Tool::Cursor`] active.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool: Tool::default(),
            modifiers: Modifiers::NONE,
            state: State::Idle,
        }
    }

    /// The active tool.
    #[must_use]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The most recently reported modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// The current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns `true` while a pointer drag of either kind is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Panning(_) | State::ToolDrag(_))
    }

    /// Processes one event and returns the resulting command.
    pub fn handle(&mut self, event: InputEvent) -> Command {
        match event {
            InputEvent::PointerDown { pos, modifiers } => self.pointer_down(pos, modifiers),
            InputEvent::PointerMove { pos, modifiers } => self.pointer_move(pos, modifiers),
            InputEvent::PointerUp { pos, modifiers } => self.pointer_up(pos, modifiers),
            InputEvent::PointerCancel => self.cancel(),
            InputEvent::Wheel {
                delta_y,
                pos,
                modifiers,
            } => self.wheel(delta_y, pos, modifiers),
            InputEvent::ModifiersChanged(modifiers) => {
                self.set_modifiers(modifiers);
                Command::None
            }
            InputEvent::SelectTool(tool) => self.select_tool(tool),
            InputEvent::ZoomButton(direction) => Command::ZoomCenter {
                steps: direction.steps(),
            },
            InputEvent::Resize(size) => Command::Resize(size),
        }
    }

    fn pointer_down(&mut self, pos: Point, modifiers: Modifiers) -> Command {
        self.set_modifiers(modifiers);
        if self.is_dragging() {
            return Command::None;
        }
        if modifiers.navigates() || self.tool.drags_pan() {
            self.transition(State::Panning(DragTracker::new(pos)));
            Command::None
        } else {
            self.transition(State::ToolDrag(DragTracker::new(pos)));
            Command::Tool(ToolAction::Begin {
                tool: self.tool,
                pos,
            })
        }
    }

    fn pointer_move(&mut self, pos: Point, modifiers: Modifiers) -> Command {
        self.set_modifiers(modifiers);
        match &mut self.state {
            State::Panning(drag) => pan_command(drag.advance(pos)),
            State::ToolDrag(drag) => {
                let delta = drag.advance(pos);
                Command::Tool(ToolAction::Update {
                    tool: self.tool,
                    pos,
                    delta,
                })
            }
            State::Idle | State::ZoomPending => Command::None,
        }
    }

    fn pointer_up(&mut self, pos: Point, modifiers: Modifiers) -> Command {
        self.modifiers = modifiers;
        let command = match &mut self.state {
            State::Panning(drag) => pan_command(drag.advance(pos)),
            State::ToolDrag(_) => Command::Tool(ToolAction::End {
                tool: self.tool,
                pos,
            }),
            State::Idle | State::ZoomPending => Command::None,
        };
        self.transition(State::resting(modifiers));
        command
    }

    fn cancel(&mut self) -> Command {
        let command = match self.state {
            State::ToolDrag(_) => Command::Tool(ToolAction::Cancel { tool: self.tool }),
            State::Panning(_) | State::Idle | State::ZoomPending => Command::None,
        };
        self.transition(State::resting(self.modifiers));
        command
    }

    fn wheel(&mut self, delta_y: f64, pos: Point, modifiers: Modifiers) -> Command {
        self.set_modifiers(modifiers);
        if !modifiers.navigates() || delta_y == 0.0 || !delta_y.is_finite() {
            return Command::None;
        }
        let steps = if delta_y < 0.0 { 1 } else { -1 };
        Command::ZoomAt { anchor: pos, steps }
    }

    fn select_tool(&mut self, tool: Tool) -> Command {
        let command = match self.state {
            State::ToolDrag(_) => Command::Tool(ToolAction::Cancel { tool: self.tool }),
            State::Panning(_) | State::Idle | State::ZoomPending => Command::None,
        };
        if matches!(self.state, State::ToolDrag(_)) {
            self.transition(State::resting(self.modifiers));
        }
        log_debug!(from = ?self.tool, to = ?tool, "tool selected");
        self.tool = tool;
        command
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
        match self.state {
            State::Idle | State::ZoomPending => self.transition(State::resting(modifiers)),
            State::Panning(_) | State::ToolDrag(_) => {}
        }
    }

    fn transition(&mut self, next: State) {
        log_debug!(from = ?self.state.phase(), to = ?next.phase(), "gesture transition");
        self.state = next;
    }
}

fn pan_command(delta: Vec2) -> Command {
    if delta == Vec2::ZERO {
        Command::None
    } else {
        Command::Pan(delta)
    }
}
