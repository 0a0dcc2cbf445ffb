//! Pointer-move handling - position updates during an active drag.
//!
//! ## Performance Notes
//!
//! Move events fire very frequently during a drag (potentially 60+ times per
//! second), so this path stays O(1): one subtraction, one addition, one
//! offset write. Every delivered move produces exactly one position update
//! and one render write; there is no batching or coalescing.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::profile_scope;
use crate::session::{DragSession, DragState};
use crate::surface::Surface;
use crate::types::PointerEvent;
use tracing::trace;

impl DragSession {
    /// Dragging → Dragging.
    ///
    /// `position := drag_origin + (pointer - pointer_origin)`, applied to
    /// the element synchronously. Only the net displacement from the
    /// pointer origin matters; intermediate moves do not accumulate.
    pub fn on_pointer_move(&mut self, _surface: &Surface, event: &PointerEvent) {
        profile_scope!("on_pointer_move");

        // Early exit for non-drag states. Listeners only exist while
        // dragging, but a guard keeps a stray delivery harmless.
        let DragState::Dragging { drag_origin, tracker } = self.state else {
            return;
        };

        self.position = drag_origin + tracker.displacement(event.page);
        self.element.apply_offset(self.position);

        trace!(element = %self.element.id(), position = %self.position, "drag move");
    }
}
