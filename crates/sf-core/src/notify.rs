//! Consumer notification, kept apart from measurement.
//!
//! The browser bridge dispatches a DOM event on the surface. Native hosts
//! (and tests) can use [`CallbackRegistry`] instead, or chain both with a
//! tuple.

use crate::size::ViewportSize;

/// Tells whoever consumes the surface that its size was just written.
///
/// Called after both dimensions are set, so a listener invoked
/// synchronously from `notify` already sees the new size.
pub trait ResizeNotifier<S> {
    fn notify(&mut self, surface: &S, size: ViewportSize);
}

impl<S, A, B> ResizeNotifier<S> for (A, B)
where
    A: ResizeNotifier<S>,
    B: ResizeNotifier<S>,
{
    fn notify(&mut self, surface: &S, size: ViewportSize) {
        self.0.notify(surface, size);
        self.1.notify(surface, size);
    }
}

/// Handle returned by [`CallbackRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(u64);

type ResizeCallback = Box<dyn FnMut(ViewportSize)>;

/// Ordered set of resize callbacks.
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<(CallbackId, ResizeCallback)>,
    next_id: u64,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. Callbacks run in registration order.
    pub fn subscribe(&mut self, callback: impl FnMut(ViewportSize) + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cb_id, _)| *cb_id != id);
        self.callbacks.len() != before
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<S> ResizeNotifier<S> for CallbackRegistry {
    fn notify(&mut self, _surface: &S, size: ViewportSize) {
        for (_, callback) in &mut self.callbacks {
            callback(size);
        }
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_run_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            registry.subscribe(move |size| seen.borrow_mut().push((tag, size)));
        }

        registry.notify(&(), ViewportSize::new(10, 20));

        assert_eq!(
            *seen.borrow(),
            vec![
                ("a", ViewportSize::new(10, 20)),
                ("b", ViewportSize::new(10, 20))
            ]
        );
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut registry = CallbackRegistry::new();
        let id = {
            let hits = Rc::clone(&hits);
            registry.subscribe(move |_| *hits.borrow_mut() += 1)
        };

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.notify(&(), ViewportSize::new(800, 600));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn tuple_notifies_both_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut first = CallbackRegistry::new();
        let mut second = CallbackRegistry::new();
        {
            let seen = Rc::clone(&seen);
            first.subscribe(move |_| seen.borrow_mut().push(1));
        }
        {
            let seen = Rc::clone(&seen);
            second.subscribe(move |_| seen.borrow_mut().push(2));
        }

        let mut both = (first, second);
        both.notify(&(), ViewportSize::new(1, 1));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }
}
