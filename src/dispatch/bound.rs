//! Pre-bound dispatch - one handler object per event kind, each binding the
//! owning instance to a specific session method.
//!
//! The binding happens exactly once, at construction. Because event targets
//! remove listeners by reference identity, rebuilding a handler per call
//! would make removal fail silently; reusing the stored references is what
//! makes unsubscription work.

use super::{HandlerFn, HandlerSet, SessionHandle};
use crate::session::DragSession;
use crate::surface::{EventSink, Surface};
use crate::types::PointerEvent;
use std::rc::Rc;

/// A session method bound to its owning instance.
struct BoundHandler {
    session: SessionHandle,
    handler: HandlerFn,
}

impl EventSink for BoundHandler {
    fn on_event(&self, surface: &Surface, event: &PointerEvent) {
        let Some(session) = self.session.upgrade() else {
            return;
        };
        (self.handler)(&mut session.borrow_mut(), surface, event);
    }
}

pub(super) fn bind(session: SessionHandle) -> HandlerSet {
    HandlerSet {
        down: Rc::new(BoundHandler {
            session: session.clone(),
            handler: DragSession::on_pointer_down,
        }),
        pointer_move: Rc::new(BoundHandler {
            session: session.clone(),
            handler: DragSession::on_pointer_move,
        }),
        pointer_up: Rc::new(BoundHandler {
            session,
            handler: DragSession::on_pointer_up,
        }),
    }
}
