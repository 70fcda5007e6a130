//! A small unidirectional data flow store.
//!
//! State lives in a [StateContainer], which can only be replaced by
//! dispatching an [Action] through a [Store]. Each action travels
//! along the store's [ActionChannel] to the [Reducer] registered for
//! its kind in a [ReducerTable], and the state it produces is pushed
//! to [Selector]s and other subscribers before the dispatch returns.
//!
//! The [people] module builds a concrete store on top of this, and
//! hides it behind a [PeopleFacade](people::PeopleFacade).

mod action;
mod channel;
pub mod config;
mod error;
mod listener;
pub mod people;
mod reducer;
mod selector;
mod state;
mod store;

pub use action::Action;
pub use channel::ActionChannel;
pub use config::{LogLevel, StoreConfig};
pub use error::StoreError;
pub use listener::*;
pub use reducer::*;
pub use selector::Selector;
pub use state::StateContainer;
pub use store::{Store, StoreRef};
