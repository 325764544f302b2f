use std::cell::Cell;
use std::rc::Rc;

use crate::animation::interpolate::Interpolate;
use crate::foundation::core::ElementBox;

/// Read side of a scalar animation signal.
pub trait Signal {
    /// Current value.
    fn get(&self) -> f64;
}

/// Shared, single-threaded scalar cell written by one producer and read by any number of views.
#[derive(Clone, Debug, Default)]
pub struct MotionValue(Rc<Cell<f64>>);

impl MotionValue {
    /// Create a value holding `v`.
    pub fn new(v: f64) -> Self {
        Self(Rc::new(Cell::new(v)))
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// Overwrite the value.
    pub fn set(&self, v: f64) {
        self.0.set(v);
    }
}

impl Signal for MotionValue {
    fn get(&self) -> f64 {
        MotionValue::get(self)
    }
}

/// Pull-based derived signal: `map(source)` evaluated on every read.
#[derive(Clone, Debug)]
pub struct Derived<S> {
    source: S,
    map: Interpolate,
}

impl<S: Signal> Derived<S> {
    /// Derive a signal from `source` through `map`.
    pub fn new(source: S, map: Interpolate) -> Self {
        Self { source, map }
    }

    /// The mapping applied to the source.
    pub fn mapping(&self) -> &Interpolate {
        &self.map
    }
}

impl<S: Signal> Signal for Derived<S> {
    fn get(&self) -> f64 {
        self.map.map(self.source.get())
    }
}

/// Handle to a rendered element's layout box; `None` while unmounted.
#[derive(Clone, Debug, Default)]
pub struct NodeRef(Rc<Cell<Option<ElementBox>>>);

impl NodeRef {
    /// Create an unmounted reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reference attached to `layout`.
    pub fn attached(layout: ElementBox) -> Self {
        Self(Rc::new(Cell::new(Some(layout))))
    }

    /// Current layout box, if mounted.
    pub fn get(&self) -> Option<ElementBox> {
        self.0.get()
    }

    /// Attach (or re-layout) the element.
    pub fn attach(&self, layout: ElementBox) {
        self.0.set(Some(layout));
    }

    /// Mark the element as unmounted.
    pub fn detach(&self) {
        self.0.set(None);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/signal.rs"]
mod tests;
