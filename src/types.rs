//! Core types for the dragboard event and coordinate model.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: page-space points, element identity, and the pointer events the
//! host delivers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

// ============================================================================
// Coordinates
// ============================================================================

/// A 2D point in pixels.
///
/// Used both for absolute page coordinates carried by pointer events and for
/// element offsets (the left/top positioning an instance writes back to its
/// element). Displacements are plain `Point` values produced by `Sub`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Element identity
// ============================================================================

/// Unique identifier for a draggable element.
///
/// Assigned by the page-wiring layer at setup; the registry indexes sessions
/// by this identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

// ============================================================================
// Pointer events
// ============================================================================

/// The kind of a delivered pointer event.
///
/// `Scroll` is delivered by hosts but has no drag handler; the dispatcher
/// ignores kinds it has no handler for, so adding kinds here never breaks
/// existing listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Scroll,
}

/// A pointer event with absolute page coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Pointer location in page coordinates (pageX/pageY).
    pub page: Point,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, page: Point) -> Self {
        Self { kind, page }
    }

    pub fn down(page: Point) -> Self {
        Self::new(PointerEventKind::Down, page)
    }

    pub fn moved(page: Point) -> Self {
        Self::new(PointerEventKind::Move, page)
    }

    pub fn up(page: Point) -> Self {
        Self::new(PointerEventKind::Up, page)
    }
}
