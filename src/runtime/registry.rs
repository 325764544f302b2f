use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::foundation::error::FolioResult;

/// Boxed listener invoked with a borrowed event payload.
pub type Callback<A> = Box<dyn FnMut(&A) -> FolioResult<()>>;

struct Entry<A> {
    id: u64,
    label: String,
    callback: Callback<A>,
    enabled: bool,
}

struct Slots<A> {
    next_id: u64,
    entries: Vec<Entry<A>>,
    dispatching: bool,
    removed_while_dispatching: Vec<u64>,
}

trait Unregister {
    fn unregister(&self, id: u64);
}

impl<A> Unregister for RefCell<Slots<A>> {
    fn unregister(&self, id: u64) {
        let mut slots = self.borrow_mut();
        if slots.dispatching {
            slots.removed_while_dispatching.push(id);
        } else {
            slots.entries.retain(|e| e.id != id);
        }
    }
}

/// Scoped registration guard. Dropping it removes the callback from its owner.
///
/// Guards do not keep the owner alive; dropping a guard after its owner is gone is a no-op.
#[must_use = "dropping a Subscription immediately unregisters its callback"]
pub struct Subscription {
    id: u64,
    owner: Weak<dyn Unregister>,
}

impl Subscription {
    /// Registration id, unique within its owner.
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.unregister(self.id);
        }
    }
}

/// Single-threaded callback registry shared by the frame loop and viewport events.
///
/// A callback that returns an error is disabled in place and never invoked again; other
/// callbacks keep running. Callbacks may register or drop subscriptions while a dispatch is in
/// progress; those changes apply once the dispatch finishes.
pub(crate) struct CallbackSet<A> {
    slots: Rc<RefCell<Slots<A>>>,
}

impl<A> Clone for CallbackSet<A> {
    fn clone(&self) -> Self {
        Self {
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<A: 'static> CallbackSet<A> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                next_id: 0,
                entries: Vec::new(),
                dispatching: false,
                removed_while_dispatching: Vec::new(),
            })),
        }
    }

    pub(crate) fn insert<F>(&self, label: impl Into<String>, callback: F) -> Subscription
    where
        F: FnMut(&A) -> FolioResult<()> + 'static,
    {
        let mut slots = self.slots.borrow_mut();
        let id = slots.next_id;
        slots.next_id += 1;
        slots.entries.push(Entry {
            id,
            label: label.into(),
            callback: Box::new(callback),
            enabled: true,
        });
        drop(slots);
        let owner: Rc<dyn Unregister> = self.slots.clone();
        Subscription {
            id,
            owner: Rc::downgrade(&owner),
        }
    }

    /// Invoke every enabled callback with `arg`; returns how many ran.
    pub(crate) fn dispatch(&self, arg: &A) -> usize {
        let mut running = {
            let mut slots = self.slots.borrow_mut();
            slots.dispatching = true;
            std::mem::take(&mut slots.entries)
        };

        let mut ran = 0;
        for entry in running.iter_mut().filter(|e| e.enabled) {
            ran += 1;
            if let Err(err) = (entry.callback)(arg) {
                tracing::warn!(
                    callback = %entry.label,
                    error = %err,
                    "callback failed; disabling it"
                );
                entry.enabled = false;
            }
        }

        let mut slots = self.slots.borrow_mut();
        slots.dispatching = false;
        running.append(&mut slots.entries);
        let removed = std::mem::take(&mut slots.removed_while_dispatching);
        running.retain(|e| !removed.contains(&e.id));
        slots.entries = running;
        ran
    }

    /// Number of registered callbacks, enabled or not.
    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().entries.len()
    }

    /// Number of callbacks disabled after a failure.
    pub(crate) fn disabled_len(&self) -> usize {
        self.slots
            .borrow()
            .entries
            .iter()
            .filter(|e| !e.enabled)
            .count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/registry.rs"]
mod tests;
