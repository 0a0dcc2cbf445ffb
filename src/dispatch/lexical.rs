//! Lexical-capture dispatch - handlers are closures over the instance,
//! defined at construction.
//!
//! No explicit binding step, but the handler bodies live inside the
//! closures rather than in a shared, inspectable table.

use super::{HandlerSet, SessionHandle};
use crate::surface::{EventSink, Surface};
use crate::types::PointerEvent;
use std::rc::Rc;

struct LexicalHandler<F>(F);

impl<F> EventSink for LexicalHandler<F>
where
    F: Fn(&Surface, &PointerEvent),
{
    fn on_event(&self, surface: &Surface, event: &PointerEvent) {
        (self.0)(surface, event);
    }
}

pub(super) fn bind(session: SessionHandle) -> HandlerSet {
    let down = {
        let session = session.clone();
        Rc::new(LexicalHandler(move |surface: &Surface, event: &PointerEvent| {
            if let Some(s) = session.upgrade() {
                s.borrow_mut().on_pointer_down(surface, event);
            }
        })) as Rc<dyn EventSink>
    };
    let pointer_move = {
        let session = session.clone();
        Rc::new(LexicalHandler(move |surface: &Surface, event: &PointerEvent| {
            if let Some(s) = session.upgrade() {
                s.borrow_mut().on_pointer_move(surface, event);
            }
        })) as Rc<dyn EventSink>
    };
    let pointer_up = Rc::new(LexicalHandler(move |surface: &Surface, event: &PointerEvent| {
        if let Some(s) = session.upgrade() {
            s.borrow_mut().on_pointer_up(surface, event);
        }
    })) as Rc<dyn EventSink>;

    HandlerSet { down, pointer_move, pointer_up }
}
