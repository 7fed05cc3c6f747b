// Copyright 2026 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tools and modifier keys.

/// The tool chosen in the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    /// Select and move shapes (default).
    #[default]
    Cursor,
    /// Freehand drawing and shape creation.
    Draw,
    /// Drag to pan without holding a modifier.
    Pan,
}

impl Tool {
    /// Whether a plain drag with this tool pans the view.
    #[must_use]
    pub fn drags_pan(self) -> bool {
        self == Self::Pan
    }
}

/// Keyboard modifiers held during an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt / Option key.
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
        meta: false,
    };

    /// Only control held.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
        meta: false,
    };

    /// Whether drags and wheel events should navigate the view instead of
    /// reaching the active tool.
    #[must_use]
    pub fn navigates(&self) -> bool {
        self.ctrl
    }
}
