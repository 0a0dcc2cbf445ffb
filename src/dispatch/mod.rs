//! Event dispatch strategies - routing delivered events to the owning
//! instance.
//!
//! The host event system delivers events to whatever listener reference was
//! subscribed; it never resolves "self". Each strategy here is a different
//! way of carrying the owning [`DragSession`] into the handler, and all of
//! them produce identical observable position behavior:
//!
//! - `capability` - one listener object per instance, resolving through the
//!   fixed kind → handler table
//! - `bound` - one handler object per event kind, bound to the instance
//!   once at construction
//! - `lexical` - closures capturing the instance at construction
//!
//! The ambient receiver rebinding some hosts offer is deliberately absent:
//! every handler carries an explicit (weak) owner reference.

mod bound;
mod capability;
mod lexical;

use crate::session::DragSession;
use crate::surface::{EventSink, Surface};
use crate::types::PointerEventKind;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Weak handle to the session a handler acts on.
///
/// Weak, because the handler objects live inside listener lists reachable
/// from the session's own element; the registry stays the sole owner.
pub(crate) type SessionHandle = Weak<RefCell<DragSession>>;

/// A drag-session handler method.
pub type HandlerFn = fn(&mut DragSession, &Surface, &crate::types::PointerEvent);

/// The fixed event-kind → handler table.
///
/// Every supported kind maps to exactly one handler; kinds with no entry are
/// silently ignored by dispatch, which keeps the table forward-compatible
/// with event kinds the drag core does not handle.
pub fn handler_for(kind: PointerEventKind) -> Option<HandlerFn> {
    match kind {
        PointerEventKind::Down => Some(DragSession::on_pointer_down),
        PointerEventKind::Move => Some(DragSession::on_pointer_move),
        PointerEventKind::Up => Some(DragSession::on_pointer_up),
        PointerEventKind::Scroll => None,
    }
}

/// The per-instance handler references a strategy builds at construction.
///
/// One reference per handler per instance, created exactly once. Event
/// targets match listeners by reference identity, so subscribe and
/// unsubscribe must reuse these same references; a freshly built reference
/// would be silently ignored on removal.
pub struct HandlerSet {
    pub(crate) down: Rc<dyn EventSink>,
    pub(crate) pointer_move: Rc<dyn EventSink>,
    pub(crate) pointer_up: Rc<dyn EventSink>,
}

/// How delivered events reach the owning instance's behavior.
///
/// Interchangeable: tests run unmodified against every variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchStrategy {
    /// The instance's single listener object is subscribed for every kind;
    /// resolution goes through [`handler_for`].
    CapabilityObject,
    /// One handler object per event kind, pairing the instance with a
    /// method, bound once at construction.
    PreBound,
    /// Handlers are closures over the instance, defined at construction.
    LexicalCapture,
}

impl DispatchStrategy {
    /// All strategies, for suites that assert behavioral equivalence.
    pub const ALL: [DispatchStrategy; 3] = [
        Self::CapabilityObject,
        Self::PreBound,
        Self::LexicalCapture,
    ];

    pub(crate) fn bind(self, session: SessionHandle) -> HandlerSet {
        match self {
            Self::CapabilityObject => capability::bind(session),
            Self::PreBound => bound::bind(session),
            Self::LexicalCapture => lexical::bind(session),
        }
    }
}
