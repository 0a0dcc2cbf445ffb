//! dragboard - drag-session coordination for independently draggable 2D
//! elements.
//!
//! Each draggable element gets its own [`session::DragSession`], a two-state
//! machine (Idle/Dragging) that snapshots its origins on pointer-down,
//! tracks net pointer displacement on pointer-move, and tears its
//! surface-level subscriptions down on pointer-up. A single page-wide
//! [`surface::Surface`] carries the move/up stream for all instances;
//! because every session installs and removes its own listeners, an
//! arbitrary number of instances coexist without observing each other.
//!
//! ## Modules
//!
//! - `types` - Points, element identity, pointer events
//! - `surface` - The host event model: surface and element targets
//! - `session` - The drag state machine and per-phase handlers
//! - `dispatch` - Interchangeable strategies for routing events to owners
//! - `registry` - Setup-time element → session association
//! - `error` - Setup error types
//! - `perf` - Hot-path timing instrumentation (feature `profiling`)

pub mod dispatch;
pub mod error;
pub mod perf;
pub mod registry;
pub mod session;
pub mod surface;
pub mod types;

pub use dispatch::DispatchStrategy;
pub use error::{RegistryError, RegistryResult};
pub use registry::InstanceRegistry;
pub use session::{DragSession, DragState, PointerTracker};
pub use surface::{Element, EventSink, Surface};
pub use types::{ElementId, Point, PointerEvent, PointerEventKind};
