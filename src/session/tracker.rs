//! Pointer displacement tracking for an active drag.
//!
//! Centralizes the drag displacement formula so the move handler and tests
//! share one definition.

use crate::types::Point;
use serde::{Deserialize, Serialize};

/// Tracks the pointer-down location and derives net displacement from it.
///
/// Created when a drag starts and discarded when it ends; only the net
/// displacement from the origin matters, never the intermediate path.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerTracker {
    pointer_origin: Point,
}

impl PointerTracker {
    /// Snapshot the pointer location at drag-start.
    #[inline]
    pub fn new(pointer_origin: Point) -> Self {
        Self { pointer_origin }
    }

    /// Pointer coordinates captured at drag-start.
    #[inline]
    pub fn pointer_origin(&self) -> Point {
        self.pointer_origin
    }

    /// Net displacement of `current` from the drag-start pointer location.
    #[inline]
    pub fn displacement(&self, current: Point) -> Point {
        current - self.pointer_origin
    }
}
