//! An observable holder of a single value.

use std::fmt;

use crate::{
    path::{Path, PathError},
    resolve,
    value::Value,
};

/// Callback invoked with the new value after every change.
pub type Listener = Box<dyn FnMut(&Value)>;

/// Identifies a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Holds the current value and notifies listeners when it changes.
///
/// Mutations go through the path resolver, so every new value shares its
/// untouched subtrees with the previous one. Listeners run synchronously,
/// in registration order, after the value has been replaced.
#[derive(Default)]
pub struct Store {
    data: Value,
    listeners: Vec<(ListenerHandle, Listener)>,
    next_handle: u64,
}

impl Store {
    pub fn new(data: Value) -> Self {
        Store {
            data,
            listeners: Vec::new(),
            next_handle: 0,
        }
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn get(&self, path: &Path) -> Option<&Value> {
        resolve::get(&self.data, path)
    }

    pub fn get_or<'a>(&'a self, path: &Path, default: &'a Value) -> &'a Value {
        resolve::get_or(&self.data, path, default)
    }

    /// Sets the value at `path`. On error the store is left unchanged and
    /// no listener runs.
    pub fn set(&mut self, path: &Path, value: Value) -> Result<(), PathError> {
        self.data = resolve::set(&self.data, path, value)?;
        self.notify();
        Ok(())
    }

    /// Removes the value at `path`. Listeners are notified even when
    /// nothing was removed.
    pub fn remove(&mut self, path: &Path) {
        self.data = resolve::remove(&self.data, path);
        self.notify();
    }

    pub fn register(&mut self, listener: impl FnMut(&Value) + 'static) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.push((handle, Box::new(listener)));
        handle
    }

    /// Returns `false` if `handle` was not registered.
    pub fn unregister(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != handle);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        log::trace!("notifying {} listener(s)", self.listeners.len());
        for (_, listener) in &mut self.listeners {
            listener(&self.data);
        }
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("data", &self.data)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use assert2::{check, let_assert};

    use super::*;
    use crate::{path, value};

    fn recorder(store: &mut Store) -> (ListenerHandle, Rc<RefCell<Vec<Value>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let handle = store.register(move |data| sink.borrow_mut().push(data.clone()));
        (handle, seen)
    }

    #[test]
    fn set_and_remove_notify_with_the_new_value() {
        let mut store = Store::new(value!(123));
        let (_, seen) = recorder(&mut store);

        check!(store.data() == &value!(123));
        check!(store.get(&path![]) == Some(&value!(123)));

        let_assert!(Ok(()) = store.set(&path!["a", "b", "c"], value!(123)));
        check!(store.data() == &value!({"a": {"b": {"c": 123}}}));
        check!(store.get(&path!["a", "b", "c"]) == Some(&value!(123)));
        check!(seen.borrow_mut().pop() == Some(value!({"a": {"b": {"c": 123}}})));

        store.remove(&path!["a", "b", "c"]);
        check!(store.data() == &value!({"a": {"b": {}}}));
        check!(store.get(&path!["a", "b", "c"]) == None);
        check!(seen.borrow_mut().pop() == Some(value!({"a": {"b": {}}})));

        check!(seen.borrow().is_empty());
    }

    #[test]
    fn get_or_falls_back_to_default() {
        let store = Store::new(value!({"a": 1}));
        let fallback = value!("none");

        check!(store.get_or(&path!["b"], &fallback) == &fallback);
        check!(store.get_or(&path!["a"], &fallback) == &value!(1));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut store = Store::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let order = Rc::clone(&order);
            store.register(move |_| order.borrow_mut().push(id));
        }

        let_assert!(Ok(()) = store.set(&path!["x"], value!(1)));

        check!(*order.borrow() == vec![0, 1, 2]);
    }

    #[test]
    fn unregistered_listener_is_not_called() {
        let mut store = Store::new(Value::Null);
        let (handle, seen) = recorder(&mut store);

        check!(store.unregister(handle));
        check!(!store.unregister(handle));

        let_assert!(Ok(()) = store.set(&path![0], value!(true)));
        check!(seen.borrow().is_empty());
        check!(store.data() == &value!([true]));
    }

    #[test]
    fn new_value_shares_untouched_subtrees() {
        let mut store = Store::new(value!({"keep": [1, 2], "edit": 0}));
        let_assert!(Some(before) = store.get(&path!["keep"]).cloned());

        let_assert!(Ok(()) = store.set(&path!["edit"], value!(1)));

        let_assert!(Some(after) = store.get(&path!["keep"]));
        check!(before.ptr_eq(after));
    }

    #[test]
    fn remove_of_missing_path_still_notifies() {
        let mut store = Store::new(value!({"a": [1]}));
        let (_, seen) = recorder(&mut store);
        let before = store.data().clone();

        store.remove(&path!["a", 5]);

        check!(store.data().ptr_eq(&before));
        let seen = seen.borrow();
        check!(seen.len() == 1);
        check!(seen[0].ptr_eq(store.data()));
    }

    #[test]
    fn failed_set_keeps_value_and_skips_listeners() {
        let mut store = Store::new(value!([1]));
        let (_, seen) = recorder(&mut store);
        let before = store.data().clone();

        let_assert!(Err(PathError::PaddingTooLarge { .. }) = store.set(&path![i64::MAX], value!(2)));

        check!(store.data().ptr_eq(&before));
        check!(seen.borrow().is_empty());
    }
}
