//! Projections of the people store state, for use with
//! [Store::select()](crate::Store::select()).

use super::{Person, PersonStore};

pub fn select_people(state: &PersonStore) -> Vec<Person> {
    state.people.clone()
}

pub fn select_number(state: &PersonStore) -> usize {
    state.number
}
