use std::{fmt::Debug, hash::Hash};

/// An `Action` describes an intended change to the state held by a
/// [Store](crate::Store). Each variant of an action type carries its
/// own strongly typed payload, and is identified by a payload-free
/// [Action::Kind], which is used to route the action to the single
/// [Reducer](crate::Reducer) registered for it in a
/// [ReducerTable](crate::ReducerTable), or to filter actions in an
/// [ActionChannel](crate::ActionChannel) subscription.
pub trait Action {
    /// The payload-free discriminant of this action type.
    type Kind: Copy + Eq + Hash + Debug;

    /// The kind of this action.
    fn kind(&self) -> Self::Kind;
}
