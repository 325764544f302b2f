use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::foundation::error::FolioError;

fn recorder(events: &ViewportEvents) -> (Rc<RefCell<Vec<f64>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let out = Rc::clone(&seen);
    let sub = events
        .subscribe("test", move |s: &ViewportState| {
            out.borrow_mut().push(s.scroll_y);
            Ok(())
        })
        .unwrap();
    (seen, sub)
}

#[test]
fn subscribe_delivers_current_state_first() {
    let events = ViewportEvents::new(Viewport::default());
    events.scroll_to(40.0);
    let (seen, _sub) = recorder(&events);
    assert_eq!(*seen.borrow(), [40.0]);
}

#[test]
fn scroll_offsets_clamp_at_zero() {
    let events = ViewportEvents::new(Viewport::default());
    let (seen, _sub) = recorder(&events);
    events.scroll_to(-10.0);
    events.scroll_to(f64::NAN);
    events.scroll_to(25.0);
    assert_eq!(*seen.borrow(), [0.0, 0.0, 0.0, 25.0]);
}

#[test]
fn dropping_the_guard_stops_delivery() {
    let events = ViewportEvents::new(Viewport::default());
    let (seen, sub) = recorder(&events);
    assert_eq!(events.listener_count(), 1);
    drop(sub);
    assert_eq!(events.listener_count(), 0);
    assert_eq!(events.scroll_to(10.0), 0);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn failing_first_call_aborts_subscription() {
    let events = ViewportEvents::new(Viewport::default());
    let r = events.subscribe("bad", |_: &ViewportState| Err(FolioError::evaluation("nope")));
    assert!(r.is_err());
    assert_eq!(events.listener_count(), 0);
}

#[test]
fn resize_and_refresh_redispatch() {
    let events = ViewportEvents::new(Viewport::default());
    let (_seen, _sub) = recorder(&events);
    assert_eq!(events.resize(Viewport::new(390.0, 844.0).unwrap()), 1);
    assert_eq!(events.state().viewport.height, 844.0);
    assert_eq!(events.refresh(), 1);
}
