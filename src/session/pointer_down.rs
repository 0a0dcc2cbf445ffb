//! Pointer-down handling - drag-start transition and listener install.

use crate::profile_scope;
use crate::session::DragSession;
use crate::surface::Surface;
use crate::types::{PointerEvent, PointerEventKind};
use tracing::debug;

impl DragSession {
    /// Idle → Dragging.
    ///
    /// Snapshots the drag origin (current position) and pointer origin, then
    /// installs this instance's move/up listeners on the surface — not the
    /// element, since the pointer may leave the element's bounds mid-drag.
    /// The surface deduplicates, so a down delivered while already dragging
    /// re-snapshots the origins without doubling the subscription pair.
    pub fn on_pointer_down(&mut self, surface: &Surface, event: &PointerEvent) {
        profile_scope!("on_pointer_down");

        self.state.start_drag(self.position, event.page);

        surface.add_listener(PointerEventKind::Move, self.handlers.pointer_move.clone());
        surface.add_listener(PointerEventKind::Up, self.handlers.pointer_up.clone());

        debug!(
            element = %self.element.id(),
            drag_origin = %self.position,
            pointer_origin = %event.page,
            "drag started"
        );
    }
}
