use super::*;

fn vp() -> Viewport {
    Viewport::new(1280.0, 800.0).unwrap()
}

#[test]
fn root_margin_shorthand() {
    let m: RootMargin = "-100px".parse().unwrap();
    assert_eq!(m, RootMargin::uniform(-100.0));

    let m: RootMargin = "10px -50px".parse().unwrap();
    assert_eq!((m.top, m.right, m.bottom, m.left), (10.0, -50.0, 10.0, -50.0));

    let m: RootMargin = "1 2 3".parse().unwrap();
    assert_eq!((m.top, m.right, m.bottom, m.left), (1.0, 2.0, 3.0, 2.0));

    assert!("".parse::<RootMargin>().is_err());
    assert!("1px 2px 3px 4px 5px".parse::<RootMargin>().is_err());
    assert!("abc".parse::<RootMargin>().is_err());
}

#[test]
fn negative_margin_delays_intersection() {
    // Element starts 50px below the fold.
    let el = ElementBox::new(850.0, 200.0);
    assert!(!intersects(el, vp(), 0.0, RootMargin::default()));
    assert!(intersects(el, vp(), 100.0, RootMargin::default()));
    // With -100px the bottom edge of the root sits at 700 + scroll.
    assert!(!intersects(el, vp(), 100.0, RootMargin::uniform(-100.0)));
    assert!(intersects(el, vp(), 151.0, RootMargin::uniform(-100.0)));
}

#[test]
fn collapsed_root_never_intersects() {
    let el = ElementBox::new(0.0, 10_000.0);
    assert!(!intersects(el, vp(), 0.0, RootMargin::uniform(-500.0)));
}

#[test]
fn once_latches_after_scrolling_out() {
    let el = ElementBox::new(1000.0, 100.0);
    let mut latch = InView::new(InViewOptions::once_with_margin(-100.0));
    assert!(!latch.observe(Some(el), vp(), 0.0));
    assert!(latch.observe(Some(el), vp(), 600.0));
    // Scrolled far past: element is above the viewport now.
    assert!(latch.observe(Some(el), vp(), 5000.0));
    assert!(latch.observe(None, vp(), 0.0));
}

#[test]
fn without_once_signal_follows_intersection() {
    let el = ElementBox::new(1000.0, 100.0);
    let mut obs = InView::new(InViewOptions::default());
    assert!(obs.observe(Some(el), vp(), 600.0));
    assert!(!obs.observe(Some(el), vp(), 5000.0));
}

#[test]
fn missing_element_is_permanently_false() {
    let mut obs = InView::new(InViewOptions::once_with_margin(0.0));
    for scroll in [0.0, 500.0, 5000.0] {
        assert!(!obs.observe(None, vp(), scroll));
    }
}

#[test]
fn mounted_signal_tracks_events() {
    let events = ViewportEvents::new(vp());
    let node = NodeRef::attached(ElementBox::new(1000.0, 100.0));
    let signal =
        InViewSignal::mount(&events, "card", node, InViewOptions::once_with_margin(-50.0)).unwrap();
    assert!(!signal.get());
    events.scroll_to(400.0);
    assert!(signal.get());
    events.scroll_to(0.0);
    assert!(signal.get());
    drop(signal);
    assert_eq!(events.listener_count(), 0);
}
