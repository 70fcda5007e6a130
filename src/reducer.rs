use crate::{Action, StoreError};
use std::{
    collections::HashMap,
    fmt::{self, Debug},
};

/// Using the [reduce()](Reducer::reduce()) method, implementors of
/// this trait take an `Action` submitted to a store via
/// [Store::dispatch()](crate::Store::dispatch()) and the current
/// `State` in the store, and produce the complete next `State`.
///
/// Reducers are pure: the previous state is never mutated, and the
/// only effect of a reducer is the state it returns. This trait is
/// implemented for every `Fn(&State, &Action) -> State`, so plain
/// functions can be registered in a [ReducerTable] directly.
pub trait Reducer<State, Action> {
    /// Take an `Action` and the `prev_state`, producing the state
    /// which replaces it.
    fn reduce(&self, prev_state: &State, action: &Action) -> State;
}

impl<State, Action, F> Reducer<State, Action> for F
where
    F: Fn(&State, &Action) -> State,
{
    fn reduce(&self, prev_state: &State, action: &Action) -> State {
        (self)(prev_state, action)
    }
}

/// Routes each action to the one [Reducer] registered for its
/// [kind](Action::kind()).
pub struct ReducerTable<State, A: Action> {
    reducers: HashMap<A::Kind, Box<dyn Reducer<State, A>>>,
}

impl<State, A: Action> ReducerTable<State, A> {
    pub fn new() -> Self {
        Self {
            reducers: HashMap::new(),
        }
    }

    /// Register the `reducer` responsible for actions of the given
    /// `kind`. Fails with [StoreError::DuplicateReducer] if `kind`
    /// already has a reducer.
    pub fn register<R: Reducer<State, A> + 'static>(
        &mut self,
        kind: A::Kind,
        reducer: R,
    ) -> Result<(), StoreError> {
        if self.reducers.contains_key(&kind) {
            return Err(StoreError::DuplicateReducer {
                kind: format!("{:?}", kind),
            });
        }

        self.reducers.insert(kind, Box::new(reducer));
        Ok(())
    }

    /// Builder form of [ReducerTable::register()].
    pub fn with<R: Reducer<State, A> + 'static>(
        mut self,
        kind: A::Kind,
        reducer: R,
    ) -> Result<Self, StoreError> {
        self.register(kind, reducer)?;
        Ok(self)
    }

    /// Whether a reducer is registered for `kind`.
    pub fn handles(&self, kind: A::Kind) -> bool {
        self.reducers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }

    /// Run the reducer registered for the kind of `action`. Returns
    /// `None` if there is none, in which case the action is meant to
    /// be dropped and the state left as it is.
    pub fn reduce(&self, prev_state: &State, action: &A) -> Option<State> {
        self.reducers
            .get(&action.kind())
            .map(|reducer| reducer.reduce(prev_state, action))
    }
}

impl<State, A: Action> Default for ReducerTable<State, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, A: Action> Debug for ReducerTable<State, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.reducers.keys()).finish()
    }
}
