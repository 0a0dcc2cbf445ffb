//! Drag state machine - explicit state for one draggable instance.
//!
//! A single enum replaces scattered "am I dragging" flags and optional
//! origin fields, making impossible states unrepresentable: the drag origin
//! and pointer origin exist exactly when a drag is active.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (pointer down on the owned element)
//! Dragging -> Idle       (pointer up anywhere on the surface)
//! ```
//!
//! There is no terminal state; the machine cycles for the element's entire
//! lifetime.

use crate::session::tracker::PointerTracker;
use crate::types::Point;

/// Per-instance drag state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No active drag; pointer moves are not observed.
    Idle,

    /// A drag is in progress.
    Dragging {
        /// Element position snapshotted at drag-start; read-only during the
        /// drag.
        drag_origin: Point,
        /// Pointer-origin snapshot and displacement math.
        tracker: PointerTracker,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    /// Returns true if no drag is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Element position at drag-start, if dragging.
    pub fn drag_origin(&self) -> Option<Point> {
        match self {
            Self::Dragging { drag_origin, .. } => Some(*drag_origin),
            Self::Idle => None,
        }
    }

    /// Pointer coordinates at drag-start, if dragging.
    pub fn pointer_origin(&self) -> Option<Point> {
        match self {
            Self::Dragging { tracker, .. } => Some(tracker.pointer_origin()),
            Self::Idle => None,
        }
    }

    /// Enter the dragging state, snapshotting both origins.
    pub fn start_drag(&mut self, drag_origin: Point, pointer_origin: Point) {
        *self = Self::Dragging {
            drag_origin,
            tracker: PointerTracker::new(pointer_origin),
        };
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
