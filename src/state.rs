use crate::{AsListener, Listener};
use std::{
    cell::RefCell,
    collections::VecDeque,
    fmt::{self, Debug},
    rc::Rc,
};

/// Something notified by a [StateContainer] each time its value is
/// replaced.
pub(crate) trait Observer<S> {
    /// Receive the current state snapshot.
    fn notify(&self, state: &Rc<S>);
    /// Returns `false` once this observer should be removed from the
    /// container.
    fn is_alive(&self) -> bool;
}

/// Forwards whole state snapshots to a [Listener].
struct SnapshotObserver<S> {
    listener: Listener<Rc<S>>,
}

impl<S> Observer<S> for SnapshotObserver<S> {
    fn notify(&self, state: &Rc<S>) {
        if let Some(callback) = self.listener.as_callback() {
            callback.emit(state.clone());
        }
    }

    fn is_alive(&self) -> bool {
        !self.listener.is_dead()
    }
}

/// The single owner of the current state value.
///
/// New observers immediately receive the current value when they
/// subscribe (replay-latest), and then every subsequent replacement,
/// in the order the replacements were requested. Replacement is
/// total: the new value is never merged with the previous one, and
/// the previous value is released as soon as no snapshot ([Rc]) still
/// refers to it.
///
/// Replacing the value with [StateContainer::next()] from within an
/// observer is allowed; the replacement is queued and applied once
/// every observer has seen the value currently being delivered.
pub struct StateContainer<S> {
    /// Held for the duration of a notification round, to prevent
    /// re-entrant notification.
    notify_lock: RefCell<()>,
    /// Replacements waiting for the current notification round to
    /// complete.
    pending: RefCell<VecDeque<S>>,
    state: RefCell<Rc<S>>,
    observers: RefCell<Vec<Rc<dyn Observer<S>>>>,
}

impl<S: 'static> StateContainer<S> {
    pub fn new(initial_state: S) -> Self {
        Self {
            notify_lock: RefCell::new(()),
            pending: RefCell::new(VecDeque::new()),
            state: RefCell::new(Rc::new(initial_state)),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// A snapshot of the current value.
    pub fn value(&self) -> Rc<S> {
        self.state.borrow().clone()
    }

    /// Replace the current value with `state`, and synchronously
    /// notify every live observer before returning.
    pub fn next(&self, state: S) {
        self.pending.borrow_mut().push_back(state);

        // If the lock fails to acquire, a notification round is
        // already in progress further up the stack, and it will pick
        // up the queued replacement.
        if let Ok(_lock) = self.notify_lock.try_borrow_mut() {
            loop {
                let next_state = self.pending.borrow_mut().pop_front();

                match next_state {
                    Some(state) => {
                        let state = Rc::new(state);
                        *self.state.borrow_mut() = state.clone();
                        self.notify_observers(&state);
                    }
                    None => break,
                }
            }
        }
    }

    /// Subscribe a [Listener] to the value held in this container.
    /// The listener is called straight away with the current value.
    ///
    /// The listener is a weak reference; when the strong reference
    /// associated with it (usually [Callback](crate::Callback)) is
    /// dropped, it stops receiving values and is removed from this
    /// container upon the next replacement.
    pub fn subscribe<L: AsListener<Rc<S>>>(&self, listener: L) {
        self.subscribe_observer(Rc::new(SnapshotObserver {
            listener: listener.as_listener(),
        }));
    }

    /// The number of observers which have not yet been dropped.
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|observer| observer.is_alive())
            .count()
    }

    pub(crate) fn subscribe_observer(&self, observer: Rc<dyn Observer<S>>) {
        self.observers.borrow_mut().push(observer.clone());
        observer.notify(&self.value());
    }

    fn notify_observers(&self, state: &Rc<S>) {
        // Observers may subscribe while being notified, so iterate
        // over the observers present at the start of the round.
        let observers: Vec<Rc<dyn Observer<S>>> = self.observers.borrow().clone();
        log::trace!("state replaced, notifying {} observers", observers.len());

        for observer in &observers {
            observer.notify(state);
        }

        self.observers
            .borrow_mut()
            .retain(|observer| observer.is_alive());
    }
}

impl<S: Debug> Debug for StateContainer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateContainer")
            .field("state", &self.state.borrow())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}
