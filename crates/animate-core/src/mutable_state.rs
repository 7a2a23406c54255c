//! Observable single-writer state cells.
//!
//! A [`MutableState`] owns a value and a table of listeners. Every write
//! notifies the listeners with the new value and asks the runtime for a
//! frame, which is how toggles reach the animation layer and the renderer.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::hash::{new_map, FastHashMap};
use crate::runtime::RuntimeHandle;

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct MutableStateInner<T: Clone + 'static> {
    value: RefCell<T>,
    listeners: RefCell<FastHashMap<u64, Listener<T>>>,
    next_listener_id: Cell<u64>,
    runtime: RuntimeHandle,
}

impl<T: Clone + 'static> MutableStateInner<T> {
    fn new(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            value: RefCell::new(value),
            listeners: RefCell::new(new_map()),
            next_listener_id: Cell::new(1),
            runtime,
        }
    }

    fn notify(&self) {
        let listeners: Vec<Listener<T>> = self.listeners.borrow().values().cloned().collect();
        if listeners.is_empty() {
            return;
        }
        let value = self.value.borrow().clone();
        for listener in listeners {
            match listener.try_borrow_mut() {
                Ok(mut listener) => (&mut *listener)(&value),
                Err(_) => log::debug!("skipping re-entrant state listener"),
            }
        }
    }

    fn subscribe(self: &Rc<Self>, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        let listener: Listener<T> = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().insert(id, listener);
        let weak: Weak<Self> = Rc::downgrade(self);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.listeners.borrow_mut().remove(&id);
                }
            })),
        }
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T: Clone + 'static> {
    inner: Rc<MutableStateInner<T>>,
}

/// Observable value cell owned by exactly one writer.
pub struct MutableState<T: Clone + 'static> {
    inner: Rc<MutableStateInner<T>>,
}

impl<T: Clone + 'static> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Eq for State<T> {}

impl<T: Clone + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> PartialEq for MutableState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Eq for MutableState<T> {}

impl<T: Clone + 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(MutableStateInner::new(value, runtime)),
        }
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Mutates the value in place, then notifies listeners.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.inner.value.borrow_mut();
            f(&mut value)
        };
        self.after_write();
        result
    }

    /// Stores `value` and returns the previous one.
    pub fn replace(&self, value: T) -> T {
        let previous = self.inner.value.replace(value);
        self.after_write();
        previous
    }

    pub fn set_value(&self, value: T) {
        self.replace(value);
    }

    pub fn set(&self, value: T) {
        self.replace(value);
    }

    pub fn value(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn get(&self) -> T {
        self.value()
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        self.inner.subscribe(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn after_write(&self) {
        self.inner.runtime.schedule();
        self.inner.notify();
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    pub fn value(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn get(&self) -> T {
        self.value()
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        self.inner.subscribe(listener)
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &*self.inner.value.borrow())
            .finish()
    }
}

/// Keeps a listener attached; dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.unsubscribe.is_some())
            .finish()
    }
}
