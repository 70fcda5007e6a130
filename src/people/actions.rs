//! The actions understood by the people store, and the creators which
//! build them.
//!
//! Creators only construct actions; publishing them is up to the
//! caller, usually through [PeopleFacade](crate::people::PeopleFacade).

use super::Person;
use crate::Action;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "name", content = "props"))]
pub enum PersonAction {
    /// Replace every person in the store.
    UpdateAllPeople(Vec<Person>),
    /// Remove every person from the store.
    RemoveAllPeople,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonActionKind {
    UpdateAllPeople,
    RemoveAllPeople,
}

impl PersonActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            PersonActionKind::UpdateAllPeople => "UpdateAllPeople",
            PersonActionKind::RemoveAllPeople => "RemoveAllPeople",
        }
    }
}

impl Display for PersonActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Action for PersonAction {
    type Kind = PersonActionKind;

    fn kind(&self) -> PersonActionKind {
        match self {
            PersonAction::UpdateAllPeople(_) => PersonActionKind::UpdateAllPeople,
            PersonAction::RemoveAllPeople => PersonActionKind::RemoveAllPeople,
        }
    }
}

impl Display for PersonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonAction::UpdateAllPeople(people) => {
                write!(f, "{} ({} people)", self.kind(), people.len())
            }
            PersonAction::RemoveAllPeople => write!(f, "{}", self.kind()),
        }
    }
}

/// Build the action replacing every person in the store with
/// `people`. Any list is accepted, including an empty one.
pub fn update_all_people(people: Vec<Person>) -> PersonAction {
    PersonAction::UpdateAllPeople(people)
}

/// Build the action removing every person from the store.
pub fn remove_all_people() -> PersonAction {
    PersonAction::RemoveAllPeople
}
