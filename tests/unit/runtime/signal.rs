use super::*;

#[test]
fn motion_value_clones_share_state() {
    let a = MotionValue::new(1.0);
    let b = a.clone();
    b.set(4.0);
    assert_eq!(a.get(), 4.0);
}

#[test]
fn derived_reads_through_mapping() {
    let progress = MotionValue::new(0.0);
    let y = Derived::new(
        progress.clone(),
        Interpolate::linear([0.0, 1.0], [0.0, 200.0]).unwrap(),
    );
    assert_eq!(y.get(), 0.0);
    progress.set(0.5);
    assert_eq!(y.get(), 100.0);
    progress.set(1.0);
    assert_eq!(y.get(), 200.0);
}

#[test]
fn node_ref_attach_detach() {
    let node = NodeRef::new();
    assert!(node.get().is_none());
    node.attach(ElementBox::new(10.0, 20.0));
    assert_eq!(node.get().map(|b| b.top), Some(10.0));
    let alias = node.clone();
    alias.detach();
    assert!(node.get().is_none());
}
