//! Instance registry - setup-time association of elements to drag sessions.
//!
//! The setup layer hands over the set of elements its selection mechanism
//! yielded; the registry constructs exactly one session per element and
//! keeps them for runtime lookup. It does not mediate events: once built,
//! each session manages its own subscriptions directly.

use crate::dispatch::DispatchStrategy;
use crate::error::{RegistryError, RegistryResult};
use crate::session::DragSession;
use crate::surface::Element;
use crate::types::ElementId;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Owns every draggable instance on the page, indexed by element identity.
pub struct InstanceRegistry {
    sessions: HashMap<ElementId, Rc<RefCell<DragSession>>>,
}

impl std::fmt::Debug for InstanceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceRegistry")
            .field("instances", &self.sessions.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl InstanceRegistry {
    /// Construct one independent session per element.
    ///
    /// No two sessions share subscriptions, position state or drag-origin
    /// state. An element appearing twice is a setup bug and is rejected.
    pub fn setup(
        elements: &[Rc<Element>],
        strategy: DispatchStrategy,
    ) -> RegistryResult<InstanceRegistry> {
        let mut sessions = HashMap::with_capacity(elements.len());
        for element in elements {
            if sessions.contains_key(&element.id()) {
                return Err(RegistryError::AlreadyRegistered(element.id()));
            }
            sessions.insert(element.id(), DragSession::attach(element, strategy));
        }
        debug!(instances = sessions.len(), ?strategy, "registry set up");
        Ok(InstanceRegistry { sessions })
    }

    /// Look up the session owning `id`.
    pub fn session(&self, id: ElementId) -> Option<&Rc<RefCell<DragSession>>> {
        self.sessions.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
