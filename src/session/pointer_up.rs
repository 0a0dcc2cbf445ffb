//! Pointer-up handling - drag-end transition and listener removal.

use crate::session::DragSession;
use crate::surface::Surface;
use crate::types::{PointerEvent, PointerEventKind};
use tracing::debug;

impl DragSession {
    /// Dragging → Idle.
    ///
    /// Removes this instance's move/up listeners from the surface and resets
    /// the state. Removal is idempotent: removing a listener that is not
    /// subscribed is a no-op, so an up delivered while idle does nothing.
    pub fn on_pointer_up(&mut self, surface: &Surface, _event: &PointerEvent) {
        surface.remove_listener(PointerEventKind::Move, &self.handlers.pointer_move);
        surface.remove_listener(PointerEventKind::Up, &self.handlers.pointer_up);

        if self.state.is_dragging() {
            debug!(element = %self.element.id(), position = %self.position, "drag ended");
        }
        self.state.reset();
    }
}
