use crate::{state::Observer, AsListener, Listener, StateContainer};
use std::{
    cell::RefCell,
    fmt::{self, Debug},
    rc::Rc,
};

type Projection<S, T> = Rc<dyn Fn(&S) -> T>;

/// Forwards the projected slice of each state snapshot to a
/// [Listener].
struct ProjectionObserver<S, T> {
    listener: Listener<T>,
    project: Projection<S, T>,
}

impl<S, T> Observer<S> for ProjectionObserver<S, T> {
    fn notify(&self, state: &Rc<S>) {
        if let Some(callback) = self.listener.as_callback() {
            callback.emit((self.project)(state.as_ref()));
        }
    }

    fn is_alive(&self) -> bool {
        !self.listener.is_dead()
    }
}

/// Like [ProjectionObserver], but skips values equal to the last one
/// it forwarded.
struct DistinctObserver<S, T> {
    listener: Listener<T>,
    project: Projection<S, T>,
    last: RefCell<Option<T>>,
}

impl<S, T: PartialEq + Clone> Observer<S> for DistinctObserver<S, T> {
    fn notify(&self, state: &Rc<S>) {
        let callback = match self.listener.as_callback() {
            Some(callback) => callback,
            None => return,
        };

        let value = (self.project)(state.as_ref());
        if self.last.borrow().as_ref() == Some(&value) {
            return;
        }

        *self.last.borrow_mut() = Some(value.clone());
        callback.emit(value);
    }

    fn is_alive(&self) -> bool {
        !self.listener.is_dead()
    }
}

/// A read-only projection of the state held in a [StateContainer].
///
/// Subscribers receive the projection of the current state as soon as
/// they subscribe, and then one value per state replacement, whether
/// or not the projected slice changed (see
/// [Selector::subscribe_distinct()] for the deduplicating variant). A
/// selector never completes.
pub struct Selector<S, T> {
    source: Rc<StateContainer<S>>,
    project: Projection<S, T>,
}

impl<S: 'static, T: 'static> Selector<S, T> {
    pub fn new<F: Fn(&S) -> T + 'static>(source: Rc<StateContainer<S>>, project: F) -> Self {
        Self {
            source,
            project: Rc::new(project),
        }
    }

    /// The projection of the current state.
    pub fn get(&self) -> T {
        (self.project)(&*self.source.value())
    }

    /// Subscribe a [Listener] to the projected values.
    ///
    /// The listener is a weak reference; when the strong reference
    /// associated with it (usually [Callback](crate::Callback)) is
    /// dropped, it stops receiving values.
    pub fn subscribe<L: AsListener<T>>(&self, listener: L) {
        self.source.subscribe_observer(Rc::new(ProjectionObserver {
            listener: listener.as_listener(),
            project: self.project.clone(),
        }));
    }

    /// Derive a further selector, projecting the values of this one
    /// through `f`.
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(&self, f: F) -> Selector<S, U> {
        let project = self.project.clone();
        Selector {
            source: self.source.clone(),
            project: Rc::new(move |state: &S| f((*project)(state))),
        }
    }
}

impl<S: 'static, T: PartialEq + Clone + 'static> Selector<S, T> {
    /// Subscribe a [Listener] which is only called when the projected
    /// value differs from the last value it received.
    pub fn subscribe_distinct<L: AsListener<T>>(&self, listener: L) {
        self.source.subscribe_observer(Rc::new(DistinctObserver {
            listener: listener.as_listener(),
            project: self.project.clone(),
            last: RefCell::new(None),
        }));
    }
}

impl<S, T> Clone for Selector<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            project: self.project.clone(),
        }
    }
}

impl<S, T> Debug for Selector<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Selector(function @ {:p})", Rc::as_ptr(&self.project))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Callback, Selector, StateContainer};
    use std::{cell::RefCell, rc::Rc};

    #[derive(Debug, Clone, PartialEq)]
    struct TestState {
        name: &'static str,
        count: u32,
    }

    fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, Callback<T>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let received_copy = received.clone();
        let callback = Callback::new(move |value: T| {
            received_copy.borrow_mut().push(value);
        });
        (received, callback)
    }

    fn container() -> Rc<StateContainer<TestState>> {
        Rc::new(StateContainer::new(TestState {
            name: "a",
            count: 0,
        }))
    }

    #[test]
    fn emits_on_every_replacement() {
        let state = container();
        let names = Selector::new(state.clone(), |state: &TestState| state.name);
        let (received, callback) = recorder();
        names.subscribe(&callback);

        state.next(TestState {
            name: "a",
            count: 1,
        });
        state.next(TestState {
            name: "b",
            count: 1,
        });

        assert_eq!(vec!["a", "a", "b"], *received.borrow());
        assert_eq!("b", names.get());
    }

    #[test]
    fn distinct_skips_repeated_values() {
        let state = container();
        let names = Selector::new(state.clone(), |state: &TestState| state.name);
        let (received, callback) = recorder();
        names.subscribe_distinct(&callback);

        state.next(TestState {
            name: "a",
            count: 1,
        });
        state.next(TestState {
            name: "b",
            count: 2,
        });
        state.next(TestState {
            name: "b",
            count: 3,
        });

        assert_eq!(vec!["a", "b"], *received.borrow());
    }

    #[test]
    fn map_composes_projections() {
        let state = container();
        let doubled = Selector::new(state.clone(), |state: &TestState| state.count).map(|c| c * 2);
        let (received, callback) = recorder();
        doubled.subscribe(&callback);

        state.next(TestState {
            name: "a",
            count: 21,
        });
        assert_eq!(vec![0, 42], *received.borrow());
    }

    #[test]
    fn late_subscriber_gets_current_projection() {
        let state = container();
        let counts = Selector::new(state.clone(), |state: &TestState| state.count);
        state.next(TestState {
            name: "a",
            count: 7,
        });

        let (received, callback) = recorder();
        counts.subscribe(&callback);
        assert_eq!(vec![7], *received.borrow());
    }
}
