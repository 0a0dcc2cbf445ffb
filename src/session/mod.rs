//! Drag session orchestration for one draggable instance.
//!
//! A [`DragSession`] owns one element's full
//! pointer-down → pointer-move* → pointer-up lifecycle, including the
//! install and removal of its surface-level move/up subscriptions.
//!
//! ## Modules
//!
//! - `state` - Drag state machine enum and helper methods
//! - `tracker` - Pointer-origin snapshot and displacement math
//! - `pointer_down` - Drag-start transition and listener install
//! - `drag` - Pointer-move handling (the hot path)
//! - `pointer_up` - Drag-end transition and listener removal

mod drag;
mod pointer_down;
mod pointer_up;
mod state;
mod tracker;

pub use state::DragState;
pub use tracker::PointerTracker;

use crate::dispatch::{DispatchStrategy, HandlerSet};
use crate::surface::Element;
use crate::types::{Point, PointerEventKind};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// One draggable instance: element, authoritative position, drag state and
/// the handler references its dispatch strategy built at construction.
///
/// The session is the only writer of `position` and of the element's offset,
/// and `position` changes only while the state is `Dragging`.
pub struct DragSession {
    element: Rc<Element>,
    position: Point,
    state: DragState,
    handlers: HandlerSet,
}

impl DragSession {
    /// Create a session for `element` and subscribe its pointer-down
    /// listener on the element itself.
    ///
    /// Handler objects hold only weak session references, so the returned
    /// `Rc` (typically kept by the registry) is the sole owner. Move/up
    /// listeners are not installed here; they come and go with each drag.
    pub fn attach(element: &Rc<Element>, strategy: DispatchStrategy) -> Rc<RefCell<DragSession>> {
        let session = Rc::new_cyclic(|weak: &Weak<RefCell<DragSession>>| {
            RefCell::new(DragSession {
                element: element.clone(),
                position: element.offset(),
                state: DragState::Idle,
                handlers: strategy.bind(weak.clone()),
            })
        });
        let down = session.borrow().handlers.down.clone();
        element.add_listener(PointerEventKind::Down, down);
        session
    }

    /// The element this session owns.
    pub fn element(&self) -> &Rc<Element> {
        &self.element
    }

    /// Current top-left offset, the authoritative render state.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }
}
