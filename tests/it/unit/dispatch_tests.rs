//! Unit tests for the dispatch strategies and the event→handler table.

use crate::helpers::{assert_position, pt, TestPageBuilder};
use dragboard::dispatch::handler_for;
use dragboard::{DispatchStrategy, PointerEvent, PointerEventKind};

#[test]
fn test_handler_table_covers_every_supported_kind() {
    // Every supported kind has exactly one handler; unsupported kinds have
    // none and are ignored by dispatch.
    assert!(handler_for(PointerEventKind::Down).is_some());
    assert!(handler_for(PointerEventKind::Move).is_some());
    assert!(handler_for(PointerEventKind::Up).is_some());
    assert!(handler_for(PointerEventKind::Scroll).is_none());
}

#[test]
fn test_unhandled_kind_is_silently_ignored_mid_drag() {
    for strategy in DispatchStrategy::ALL {
        let page = TestPageBuilder::new()
            .with_elements(1)
            .with_strategy(strategy)
            .build();

        page.press(0, pt(100.0, 100.0));
        page.drag_to(pt(110.0, 100.0));
        page.surface
            .dispatch(PointerEvent::new(PointerEventKind::Scroll, pt(999.0, 999.0)));

        // The scroll neither moves the element nor disturbs the drag.
        assert_position(&page, 0, pt(10.0, 0.0));
        assert!(page.session(0).borrow().is_dragging(), "{strategy:?}");
    }
}

#[test]
fn test_strategies_are_behaviorally_equivalent() {
    // The same event sequence must yield identical positions under every
    // strategy.
    let mut outcomes = Vec::new();
    for strategy in DispatchStrategy::ALL {
        let page = TestPageBuilder::new()
            .with_element_at(5.0, 5.0)
            .with_strategy(strategy)
            .build();

        page.press(0, pt(100.0, 100.0));
        page.drag_to(pt(120.0, 90.0));
        page.drag_to(pt(80.0, 140.0));
        page.release(pt(80.0, 140.0));
        page.drag_to(pt(0.0, 0.0));

        outcomes.push(page.position(0));
    }

    assert_eq!(outcomes[0], pt(-15.0, 45.0));
    assert!(
        outcomes.iter().all(|p| *p == outcomes[0]),
        "strategies diverged: {outcomes:?}"
    );
}

#[test]
fn test_prebound_references_unsubscribe_cleanly() {
    // The pre-bound strategy only works if the exact handler references
    // built at construction are reused for removal; a leftover listener
    // after release would mean a fresh reference was used instead.
    let page = TestPageBuilder::new()
        .with_elements(1)
        .with_strategy(DispatchStrategy::PreBound)
        .build();

    page.press(0, pt(0.0, 0.0));
    assert_eq!(page.surface.listener_count(PointerEventKind::Move), 1);
    assert_eq!(page.surface.listener_count(PointerEventKind::Up), 1);

    page.release(pt(0.0, 0.0));
    assert_eq!(page.surface.listener_count(PointerEventKind::Move), 0);
    assert_eq!(page.surface.listener_count(PointerEventKind::Up), 0);
}

#[test]
fn test_capability_object_is_single_listener_for_all_kinds() {
    // One listener object serves down, move and up; repeated drags keep
    // the surface clean because the same reference cycles in and out.
    let page = TestPageBuilder::new()
        .with_elements(1)
        .with_strategy(DispatchStrategy::CapabilityObject)
        .build();

    for _ in 0..3 {
        page.press(0, pt(10.0, 10.0));
        assert_eq!(page.surface.listener_count(PointerEventKind::Move), 1);
        page.drag_to(pt(20.0, 20.0));
        page.release(pt(20.0, 20.0));
        assert_eq!(page.surface.listener_count(PointerEventKind::Move), 0);
        assert_eq!(page.surface.listener_count(PointerEventKind::Up), 0);
    }
    assert_position(&page, 0, pt(30.0, 30.0));
}

#[test]
fn test_lexical_capture_drags_like_the_others() {
    let page = TestPageBuilder::new()
        .with_elements(1)
        .with_strategy(DispatchStrategy::LexicalCapture)
        .build();

    page.press(0, pt(100.0, 100.0));
    page.drag_to(pt(130.0, 115.0));
    assert_position(&page, 0, pt(30.0, 15.0));
    page.release(pt(130.0, 115.0));
    assert!(!page.session(0).borrow().is_dragging());
}
