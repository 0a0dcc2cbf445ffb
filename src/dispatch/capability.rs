//! Capability-object dispatch - the instance itself (via one listener
//! object) is what gets subscribed, for every event kind it cares about.

use super::{handler_for, HandlerSet, SessionHandle};
use crate::surface::{EventSink, Surface};
use crate::types::PointerEvent;
use std::rc::Rc;

/// The single listener object for one instance.
///
/// Resolution maps the delivered kind through the fixed handler table and
/// invokes the entry if present; kinds without an entry are ignored rather
/// than treated as errors.
struct CapabilityListener {
    session: SessionHandle,
}

impl EventSink for CapabilityListener {
    fn on_event(&self, surface: &Surface, event: &PointerEvent) {
        let Some(session) = self.session.upgrade() else {
            return;
        };
        if let Some(handler) = handler_for(event.kind) {
            handler(&mut session.borrow_mut(), surface, event);
        }
    }
}

pub(super) fn bind(session: SessionHandle) -> HandlerSet {
    // One object, three subscriptions: down on the element, move/up on the
    // surface, all sharing the same reference.
    let listener: Rc<dyn EventSink> = Rc::new(CapabilityListener { session });
    HandlerSet {
        down: listener.clone(),
        pointer_move: listener.clone(),
        pointer_up: listener,
    }
}
