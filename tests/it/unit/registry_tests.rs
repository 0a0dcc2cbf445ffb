//! Unit tests for the instance registry.

use crate::helpers::init_tracing;
use dragboard::{DispatchStrategy, Element, ElementId, InstanceRegistry, RegistryError};

#[test]
fn test_setup_creates_one_session_per_element() {
    init_tracing();
    let elements = vec![
        Element::new(ElementId(1)),
        Element::new(ElementId(2)),
        Element::new(ElementId(3)),
    ];
    let registry =
        InstanceRegistry::setup(&elements, DispatchStrategy::CapabilityObject).unwrap();

    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
    for element in &elements {
        assert!(registry.session(element.id()).is_some());
    }
}

#[test]
fn test_setup_with_no_elements_is_valid() {
    let registry = InstanceRegistry::setup(&[], DispatchStrategy::PreBound).unwrap();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_duplicate_element_is_rejected() {
    let element = Element::new(ElementId(7));
    let err = InstanceRegistry::setup(
        &[element.clone(), element],
        DispatchStrategy::LexicalCapture,
    )
    .unwrap_err();

    assert!(matches!(err, RegistryError::AlreadyRegistered(ElementId(7))));
    assert_eq!(err.to_string(), "element#7 is already registered as draggable");
}

#[test]
fn test_unknown_element_lookup_is_none() {
    let elements = vec![Element::new(ElementId(1))];
    let registry =
        InstanceRegistry::setup(&elements, DispatchStrategy::CapabilityObject).unwrap();
    assert!(registry.session(ElementId(99)).is_none());
}

#[test]
fn test_sessions_start_idle_at_element_offset() {
    let element = Element::new(ElementId(4));
    element.apply_offset(dragboard::Point::new(30.0, 40.0));
    let registry =
        InstanceRegistry::setup(&[element.clone()], DispatchStrategy::PreBound).unwrap();

    let session = registry.session(ElementId(4)).unwrap().borrow();
    assert!(!session.is_dragging());
    assert_eq!(session.position(), dragboard::Point::new(30.0, 40.0));
    assert_eq!(session.state().drag_origin(), None);
    assert_eq!(session.state().pointer_origin(), None);
}
