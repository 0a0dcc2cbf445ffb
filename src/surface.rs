//! The host event model: surface-level and element-level event targets.
//!
//! Drag sessions observe two targets. Pointer-down arrives on the owned
//! [`Element`]; move and up arrive on the page-wide [`Surface`], because the
//! pointer may leave the element's bounds mid-drag. Both targets share the
//! same listener semantics:
//!
//! - adding an already-subscribed (kind, listener) pair is deduplicated
//! - removing a listener that is not subscribed is a silent no-op
//! - removal matches by listener reference identity, so callers must keep
//!   and reuse the reference they subscribed with
//! - dispatch iterates a snapshot of the listener list, so a handler may
//!   unsubscribe itself (or others) while an event is being delivered

use crate::types::{ElementId, Point, PointerEvent, PointerEventKind};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A subscriber on an event target.
///
/// Implementations carry their own (weak) reference to the owning drag
/// session; the surface never resolves "self" for them.
pub trait EventSink {
    fn on_event(&self, surface: &Surface, event: &PointerEvent);
}

/// Shared listener-list implementation for [`Surface`] and [`Element`].
#[derive(Default)]
struct ListenerSet {
    entries: RefCell<Vec<(PointerEventKind, Rc<dyn EventSink>)>>,
}

impl ListenerSet {
    fn add(&self, kind: PointerEventKind, sink: Rc<dyn EventSink>) {
        let mut entries = self.entries.borrow_mut();
        let present = entries
            .iter()
            .any(|(k, s)| *k == kind && Rc::ptr_eq(s, &sink));
        if !present {
            entries.push((kind, sink));
        }
    }

    fn remove(&self, kind: PointerEventKind, sink: &Rc<dyn EventSink>) {
        self.entries
            .borrow_mut()
            .retain(|(k, s)| *k != kind || !Rc::ptr_eq(s, sink));
    }

    fn count(&self, kind: PointerEventKind) -> usize {
        self.entries.borrow().iter().filter(|(k, _)| *k == kind).count()
    }

    /// Snapshot the listeners for `kind` so delivery survives mutation.
    fn matching(&self, kind: PointerEventKind) -> Vec<Rc<dyn EventSink>> {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, s)| s.clone())
            .collect()
    }
}

/// The page-wide event source shared by all instances.
///
/// Each session adds its move/up listeners here at drag-start and removes
/// them at drag-end; subscriptions are per-instance, so no instance can
/// block or consume input meant for another.
#[derive(Default)]
pub struct Surface {
    listeners: ListenerSet,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, kind: PointerEventKind, sink: Rc<dyn EventSink>) {
        self.listeners.add(kind, sink);
    }

    pub fn remove_listener(&self, kind: PointerEventKind, sink: &Rc<dyn EventSink>) {
        self.listeners.remove(kind, sink);
    }

    /// Number of live subscriptions for `kind`.
    pub fn listener_count(&self, kind: PointerEventKind) -> usize {
        self.listeners.count(kind)
    }

    /// Deliver an event to every listener subscribed for its kind.
    pub fn dispatch(&self, event: PointerEvent) {
        for sink in self.listeners.matching(event.kind) {
            sink.on_event(self, &event);
        }
    }
}

/// A draggable visual element: pointer-down target and render sink.
///
/// The owning session has exclusive control of the offset; nothing else in
/// the crate writes it.
pub struct Element {
    id: ElementId,
    offset: Cell<Point>,
    listeners: ListenerSet,
}

impl Element {
    pub fn new(id: ElementId) -> Rc<Self> {
        Rc::new(Self {
            id,
            offset: Cell::new(Point::ZERO),
            listeners: ListenerSet::default(),
        })
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Current left/top offset in pixels.
    pub fn offset(&self) -> Point {
        self.offset.get()
    }

    /// Apply an absolute left/top offset, the render side effect of a drag.
    pub fn apply_offset(&self, offset: Point) {
        self.offset.set(offset);
    }

    pub fn add_listener(&self, kind: PointerEventKind, sink: Rc<dyn EventSink>) {
        self.listeners.add(kind, sink);
    }

    pub fn remove_listener(&self, kind: PointerEventKind, sink: &Rc<dyn EventSink>) {
        self.listeners.remove(kind, sink);
    }

    /// Deliver an element-targeted event (the page layer's hit-test result).
    ///
    /// The surface is passed through so handlers can install their
    /// surface-level subscriptions, mirroring how a pointer-down handler
    /// reaches the ambient window.
    pub fn dispatch(&self, surface: &Surface, event: PointerEvent) {
        for sink in self.listeners.matching(event.kind) {
            sink.on_event(surface, &event);
        }
    }
}
