use crate::{
    Action, ActionChannel, AsListener, Callback, ReducerTable, Selector, StateContainer,
    StoreConfig,
};
use std::{fmt::Debug, ops::Deref, rc::Rc};

/// A wrapper for an [Rc] reference to a [Store].
///
/// This wrapper exists to provide a standard interface for components
/// (such as a facade) which require a long living reference to the
/// store in order to dispatch actions or select state.
pub struct StoreRef<State, A: Action>(Rc<Store<State, A>>);

impl<State, A> StoreRef<State, A>
where
    State: Debug + 'static,
    A: Action + Debug + 'static,
{
    pub fn new(reducers: ReducerTable<State, A>, initial_state: State) -> Self {
        Self(Rc::new(Store::new(reducers, initial_state)))
    }

    pub fn with_config(
        config: StoreConfig,
        reducers: ReducerTable<State, A>,
        initial_state: State,
    ) -> Self {
        Self(Rc::new(Store::with_config(config, reducers, initial_state)))
    }
}

impl<State, A: Action> Clone for StoreRef<State, A> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<State, A: Action> Deref for StoreRef<State, A> {
    type Target = Store<State, A>;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl<State, A: Action> PartialEq for StoreRef<State, A> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// This struct is designed to operate as a central source of truth
/// for some part of your application's state.
///
/// The current state of this store ([Store::state()]) can only be
/// modified by dispatching an `Action` via [Store::dispatch()]. The
/// action is published on the store's [ActionChannel], where the
/// store's own reducing listener (always the first subscriber) looks
/// up the [Reducer](crate::Reducer) registered for the action's kind
/// in the [ReducerTable] provided at construction, and replaces the
/// state in the store's [StateContainer] with the result. Actions
/// without a reducer are dropped.
///
/// The state is read through [Store::select()], which produces a
/// [Selector] over the state, or as whole snapshots via
/// [Store::subscribe()]. The previous state is never mutated, and
/// remains valid for any element of your application still holding a
/// snapshot of it.
///
/// Everything happens synchronously within [Store::dispatch()]: by
/// the time it returns, every subscriber has been notified. A
/// dispatch made from within a subscriber is queued and runs once
/// the current one has completed.
pub struct Store<State, A: Action> {
    config: StoreConfig,
    state: Rc<StateContainer<State>>,
    actions: ActionChannel<A>,
    /// Keeps the reducing listener subscribed to `actions` alive for
    /// as long as the store.
    _reducer: Callback<Rc<A>>,
}

impl<State, A> Store<State, A>
where
    State: Debug + 'static,
    A: Action + Debug + 'static,
{
    /// Create a new [Store], using the specified `reducers` to handle
    /// `Action`s, and with the `initial_state`.
    pub fn new(reducers: ReducerTable<State, A>, initial_state: State) -> Self {
        Self::with_config(StoreConfig::default(), reducers, initial_state)
    }

    pub fn with_config(
        config: StoreConfig,
        reducers: ReducerTable<State, A>,
        initial_state: State,
    ) -> Self {
        let state = Rc::new(StateContainer::new(initial_state));
        let actions = ActionChannel::new();
        let reducer = reducing_callback(&config, state.clone(), reducers);
        actions.subscribe(&reducer);

        log::debug!("[{}] store created", config.get_name());

        Self {
            config,
            state,
            actions,
            _reducer: reducer,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Get the current `State` stored in this store.
    ///
    /// Modifications to this state need to be performed by
    /// dispatching an `Action` to the store using
    /// [dispatch()](Store::dispatch()).
    pub fn state(&self) -> Rc<State> {
        self.state.value()
    }

    /// Dispatch an `Action` to be passed to the reducer registered for
    /// its kind, in order to replace the `State` in this store.
    pub fn dispatch<Act: Into<A>>(&self, action: Act) {
        self.actions.next(action.into());
    }

    /// The channel on which this store's actions are published.
    /// Subscribers added here observe every action after it has been
    /// reduced.
    pub fn actions(&self) -> &ActionChannel<A> {
        &self.actions
    }

    /// Subscribe a [Listener](crate::Listener) to snapshots of the
    /// state in this store. The listener receives the current state
    /// straight away.
    pub fn subscribe<L: AsListener<Rc<State>>>(&self, listener: L) {
        self.state.subscribe(listener);
    }

    /// Create a [Selector] projecting the state in this store with
    /// `project`.
    pub fn select<T, F>(&self, project: F) -> Selector<State, T>
    where
        T: 'static,
        F: Fn(&State) -> T + 'static,
    {
        Selector::new(self.state.clone(), project)
    }
}

/// The listener which reduces each action published on a store's
/// channel into its state container.
fn reducing_callback<State, A>(
    config: &StoreConfig,
    state: Rc<StateContainer<State>>,
    reducers: ReducerTable<State, A>,
) -> Callback<Rc<A>>
where
    State: Debug + 'static,
    A: Action + Debug + 'static,
{
    let name = config.get_name().to_owned();
    let level = config.get_log_level().level();
    let log_state = config.logs_state();

    Callback::new(move |action: Rc<A>| {
        let prev_state = state.value();

        match reducers.reduce(&prev_state, &action) {
            Some(next_state) => {
                if log_state {
                    log::log!(level, "[{}] prev state: {:?}", name, prev_state);
                }
                log::log!(level, "[{}] action: {:?}", name, action);
                if log_state {
                    log::log!(level, "[{}] next state: {:?}", name, next_state);
                }

                // Release our snapshot before observers see the
                // replacement.
                drop(prev_state);
                state.next(next_state);
            }
            None => {
                log::trace!("[{}] no reducer for action {:?}, dropped", name, action);
            }
        }
    })
}
