use std::rc::{Rc, Weak};

/// A trait to take a [Callback] or other custom callback type and
/// produce a [Listener], a weak reference to that callback.
pub trait AsListener<T> {
    /// Produce a [Listener], a weak reference to this callback.
    fn as_listener(&self) -> Listener<T>;
}

/// A weak reference to a callback function (usually [Callback]) which
/// is notified of values emitted by a
/// [StateContainer](crate::StateContainer), a
/// [Selector](crate::Selector) or an
/// [ActionChannel](crate::ActionChannel).
///
/// Once every [Callback] sharing the closure has been dropped the
/// listener is dead, and will be removed by its source the next time
/// that source emits.
pub struct Listener<T>(Weak<dyn Fn(T)>);

impl<T> Listener<T> {
    /// Attempt to upgrade the weak reference in this listener to a
    /// [Callback], otherwise if unable to, returns `None`.
    pub fn as_callback(&self) -> Option<Callback<T>> {
        self.0.upgrade().map(Callback)
    }

    /// Returns `true` if the callback behind this listener has been
    /// dropped.
    pub fn is_dead(&self) -> bool {
        self.0.strong_count() == 0
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Listener(self.0.clone())
    }
}

impl<T> AsListener<T> for Listener<T> {
    fn as_listener(&self) -> Listener<T> {
        self.clone()
    }
}

/// A wrapper for a callback which is notified of values emitted by a
/// source it subscribed to. Dropping the last clone of a callback
/// unsubscribes it from every source.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Callback(self.0.clone())
    }
}

impl<T> AsListener<T> for &Callback<T> {
    fn as_listener(&self) -> Listener<T> {
        Listener(Rc::downgrade(&self.0))
    }
}

impl<T> Callback<T> {
    pub fn new<C: Fn(T) + 'static>(closure: C) -> Self {
        Callback(Rc::new(closure))
    }

    pub fn emit(&self, value: T) {
        (self.0)(value)
    }
}

impl<C, T> From<C> for Callback<T>
where
    C: Fn(T) + 'static,
{
    fn from(closure: C) -> Self {
        Callback(Rc::new(closure))
    }
}

#[cfg(test)]
mod tests {
    use super::{AsListener, Callback};
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn listener_dies_with_callback() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let received_copy = received.clone();
        let callback: Callback<i32> = Callback::new(move |value| {
            received_copy.borrow_mut().push(value);
        });

        let listener = (&callback).as_listener();
        listener.as_callback().unwrap().emit(1);
        assert!(!listener.is_dead());

        drop(callback);
        assert!(listener.is_dead());
        assert!(listener.as_callback().is_none());
        assert_eq!(vec![1], *received.borrow());
    }

    #[test]
    fn cloned_callback_keeps_listener_alive() {
        let callback: Callback<()> = Callback::from(|_: ()| {});
        let listener = (&callback).as_listener();
        let clone = callback.clone();

        drop(callback);
        assert!(!listener.is_dead());
        drop(clone);
        assert!(listener.is_dead());
    }
}
