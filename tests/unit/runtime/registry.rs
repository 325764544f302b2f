use super::*;
use crate::foundation::error::FolioError;
use std::cell::Cell;

#[test]
fn dropping_subscription_unregisters() {
    let set: CallbackSet<u32> = CallbackSet::new();
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    let sub = set.insert(
        "count",
        move |_: &u32| {
            h.set(h.get() + 1);
            Ok(())
        },
    );
    assert_eq!(set.dispatch(&1), 1);
    drop(sub);
    assert_eq!(set.len(), 0);
    assert_eq!(set.dispatch(&2), 0);
    assert_eq!(hits.get(), 1);
}

#[test]
fn failing_callback_is_disabled_and_others_keep_running() {
    let set: CallbackSet<u32> = CallbackSet::new();
    let hits = Rc::new(Cell::new(0));
    let h = Rc::clone(&hits);
    let _bad = set.insert("bad", |_: &u32| Err(FolioError::evaluation("boom")));
    let _good = set.insert(
        "good",
        move |_: &u32| {
            h.set(h.get() + 1);
            Ok(())
        },
    );

    assert_eq!(set.dispatch(&0), 2);
    assert_eq!(set.disabled_len(), 1);
    assert_eq!(set.dispatch(&0), 1);
    assert_eq!(hits.get(), 2);
}

#[test]
fn subscription_outliving_owner_is_harmless() {
    let set: CallbackSet<u32> = CallbackSet::new();
    let sub = set.insert("orphan", |_: &u32| Ok(()));
    drop(set);
    drop(sub);
}

#[test]
fn drop_during_dispatch_applies_afterwards() {
    let set: CallbackSet<u32> = CallbackSet::new();
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let v = Rc::clone(&victim);
    let _killer = set.insert(
        "killer",
        move |_: &u32| {
            v.borrow_mut().take();
            Ok(())
        },
    );
    *victim.borrow_mut() = Some(set.insert("victim", |_: &u32| Ok(())));

    assert_eq!(set.len(), 2);
    set.dispatch(&0);
    assert_eq!(set.len(), 1);
}
